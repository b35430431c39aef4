use crate::commands::{run_classify, run_recommend, ClassifyArgs, RecommendArgs};
use crate::demo::{run_demo, DemoArgs};
use clap::{Parser, Subcommand, ValueEnum};
use unisphere::config::AppConfig;
use unisphere::error::AppError;
use unisphere::telemetry;

#[derive(Parser, Debug)]
#[command(
    name = "Unisphere",
    about = "Match students to Punjab university programs by academic percentage",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Recommend programs from a university directory export
    Recommend(RecommendArgs),
    /// Print the faculty each program name classifies into
    Classify(ClassifyArgs),
    /// Run recommendations against a built-in sample directory
    Demo(DemoArgs),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    match cli.command {
        Command::Recommend(args) => run_recommend(args, &config),
        Command::Classify(args) => run_classify(args),
        Command::Demo(args) => run_demo(args, &config),
    }
}
