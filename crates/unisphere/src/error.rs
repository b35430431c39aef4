use crate::catalog::DirectoryImportError;
use crate::config::ConfigError;
use crate::matching::recommendation::RecommendationServiceError;
use crate::telemetry::TelemetryError;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Import(DirectoryImportError),
    Recommendation(RecommendationServiceError),
    Usage(String),
}

impl AppError {
    /// Whether the requester can fix the problem (400-class), e.g. by completing their
    /// profile, as opposed to an operational failure.
    pub fn is_user_error(&self) -> bool {
        match self {
            AppError::Recommendation(err) => err.is_user_error(),
            AppError::Usage(_) => true,
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Import(_) => false,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Import(err) => write!(f, "directory import error: {}", err),
            AppError::Recommendation(err) => write!(f, "recommendation error: {}", err),
            AppError::Usage(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Import(err) => Some(err),
            AppError::Recommendation(err) => Some(err),
            AppError::Usage(_) => None,
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<DirectoryImportError> for AppError {
    fn from(value: DirectoryImportError) -> Self {
        Self::Import(value)
    }
}

impl From<RecommendationServiceError> for AppError {
    fn from(value: RecommendationServiceError) -> Self {
        Self::Recommendation(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::recommendation::{ProfileIssue, RecommendationError};

    #[test]
    fn invalid_profile_is_a_user_error() {
        let err = AppError::from(RecommendationServiceError::from(
            RecommendationError::InvalidProfile(ProfileIssue::MissingPercentage),
        ));
        assert!(err.is_user_error());
        assert!(err.to_string().contains("complete the profile first"));
    }

    #[test]
    fn import_failures_are_operational() {
        let err = AppError::from(DirectoryImportError::UnsupportedFormat("xlsx".to_string()));
        assert!(!err.is_user_error());
    }
}
