use serde::Serialize;

use super::super::domain::{format_percentage, Program};

/// Outcome of comparing one program's criteria with a student's percentage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Eligibility {
    Eligible,
    /// The program's published minimum is not a usable number.
    CriteriaUnavailable,
    BelowMinimum { required: f64, actual: f64 },
    AboveMaximum { maximum: f64, actual: f64 },
}

impl Eligibility {
    pub fn is_eligible(&self) -> bool {
        matches!(self, Eligibility::Eligible)
    }

    /// Human-readable explanation, present only for ineligible outcomes.
    pub fn reason(&self) -> Option<String> {
        match self {
            Eligibility::Eligible => None,
            Eligibility::CriteriaUnavailable => Some("Admission criteria unavailable".to_string()),
            Eligibility::BelowMinimum { required, actual } => Some(format!(
                "Required: {}% (you have only {}%)",
                format_percentage(*required),
                format_percentage(*actual)
            )),
            Eligibility::AboveMaximum { maximum, actual } => Some(format!(
                "Maximum: {}% (you have {}%)",
                format_percentage(*maximum),
                format_percentage(*actual)
            )),
        }
    }
}

/// Lower bound is inclusive; an unbounded maximum never disqualifies. A non-finite
/// minimum, possible only for programs that bypassed ingest, never qualifies.
pub fn assess(program: &Program, percentage: f64) -> Eligibility {
    let required = program.minimum();
    if !required.is_finite() {
        return Eligibility::CriteriaUnavailable;
    }

    if percentage < required {
        return Eligibility::BelowMinimum {
            required,
            actual: percentage,
        };
    }

    if let Some(maximum) = program.maximum() {
        if percentage > maximum {
            return Eligibility::AboveMaximum {
                maximum,
                actual: percentage,
            };
        }
    }

    Eligibility::Eligible
}
