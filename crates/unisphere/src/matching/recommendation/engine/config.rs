use serde::{Deserialize, Serialize};

use super::super::domain::PERCENTAGE_CEILING;
use super::{ProfileIssue, RecommendationError};

/// Stricter floor used by flows that only admit students who passed intermediate.
pub const PASSING_PERCENTAGE: f64 = 33.0;

/// Policy dial for which student percentages are accepted as a baseline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "PolicyDocument")]
pub struct EligibilityPolicy {
    minimum_percentage: f64,
}

/// Wire shape of a policy; always routed through [`EligibilityPolicy::new`].
#[derive(Deserialize)]
struct PolicyDocument {
    #[serde(default)]
    minimum_percentage: f64,
}

impl From<PolicyDocument> for EligibilityPolicy {
    fn from(document: PolicyDocument) -> Self {
        Self::new(document.minimum_percentage)
    }
}

impl EligibilityPolicy {
    /// Floors outside `0..=100` (or non-finite) fall back to zero.
    pub fn new(minimum_percentage: f64) -> Self {
        let sanitized = if minimum_percentage.is_finite()
            && (0.0..=PERCENTAGE_CEILING).contains(&minimum_percentage)
        {
            minimum_percentage
        } else {
            0.0
        };

        Self {
            minimum_percentage: sanitized,
        }
    }

    pub fn passing_only() -> Self {
        Self::new(PASSING_PERCENTAGE)
    }

    pub fn minimum_percentage(&self) -> f64 {
        self.minimum_percentage
    }

    pub(crate) fn validate(&self, percentage: Option<f64>) -> Result<f64, RecommendationError> {
        let value = percentage
            .ok_or(RecommendationError::InvalidProfile(ProfileIssue::MissingPercentage))?;

        if !value.is_finite() {
            return Err(RecommendationError::InvalidProfile(
                ProfileIssue::NonFinitePercentage,
            ));
        }

        if value < self.minimum_percentage || value > PERCENTAGE_CEILING {
            return Err(RecommendationError::InvalidProfile(
                ProfileIssue::PercentageOutOfRange {
                    value,
                    minimum: self.minimum_percentage,
                    maximum: PERCENTAGE_CEILING,
                },
            ));
        }

        Ok(value)
    }
}

impl Default for EligibilityPolicy {
    fn default() -> Self {
        Self::new(0.0)
    }
}
