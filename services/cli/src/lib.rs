mod cli;
mod commands;
mod demo;
mod infra;
mod render;

use unisphere::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
