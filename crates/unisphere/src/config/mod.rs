use std::env;
use std::fmt;
use std::path::PathBuf;

use crate::matching::recommendation::{EligibilityPolicy, PERCENTAGE_CEILING};

/// Distinguishes runtime behavior for different stages of deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub matching: MatchingConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let minimum_percentage = match env::var("UNISPHERE_MIN_PERCENTAGE") {
            Ok(raw) => parse_minimum_percentage(&raw)?,
            Err(_) => 0.0,
        };

        let directory_path = env::var("UNISPHERE_DIRECTORY")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            matching: MatchingConfig {
                minimum_percentage,
                directory_path,
            },
            telemetry: TelemetryConfig {
                log_level,
                ansi: environment == AppEnvironment::Development,
            },
        })
    }
}

fn parse_minimum_percentage(raw: &str) -> Result<f64, ConfigError> {
    let value = raw
        .trim()
        .parse::<f64>()
        .map_err(|_| ConfigError::InvalidMinimumPercentage(raw.to_string()))?;

    if value.is_finite() && (0.0..=PERCENTAGE_CEILING).contains(&value) {
        Ok(value)
    } else {
        Err(ConfigError::InvalidMinimumPercentage(raw.to_string()))
    }
}

/// Eligibility settings and the default directory source.
#[derive(Debug, Clone)]
pub struct MatchingConfig {
    pub minimum_percentage: f64,
    pub directory_path: Option<PathBuf>,
}

impl MatchingConfig {
    pub fn policy(&self) -> EligibilityPolicy {
        EligibilityPolicy::new(self.minimum_percentage)
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
    pub ansi: bool,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidMinimumPercentage(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidMinimumPercentage(raw) => write!(
                f,
                "UNISPHERE_MIN_PERCENTAGE must be a number between 0 and 100 (found '{}')",
                raw
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
