use serde::{Deserialize, Serialize};

use super::domain::{Program, PERCENTAGE_CEILING};
use crate::matching::faculty::classify;

/// Program as submitted by a university administrator, before classification.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgramDraft {
    pub name: String,
    #[serde(default)]
    pub min_percentage: Option<f64>,
    #[serde(default)]
    pub max_percentage: Option<f64>,
    #[serde(default)]
    pub fee: Option<String>,
    #[serde(default)]
    pub seats: Option<u32>,
    #[serde(default)]
    pub duration: Option<String>,
}

/// Validation errors raised while ingesting a program.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IngestError {
    #[error("program name is required")]
    MissingName,
    #[error("{field} must be between 0 and 100 (found {value})")]
    CriteriaOutOfRange { field: &'static str, value: f64 },
    #[error("min_percentage {min} exceeds max_percentage {max}")]
    InvertedCriteria { min: f64, max: f64 },
}

/// Write path for programs: validates criteria and caches the faculty classification.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProgramIngest;

impl ProgramIngest {
    pub fn program_from_draft(&self, draft: ProgramDraft) -> Result<Program, IngestError> {
        let name = collapse_whitespace(&draft.name);
        if name.is_empty() {
            return Err(IngestError::MissingName);
        }

        if let Some(min) = draft.min_percentage {
            ensure_in_range("min_percentage", min)?;
        }
        if let Some(max) = draft.max_percentage {
            ensure_in_range("max_percentage", max)?;
        }
        if let (Some(min), Some(max)) = (draft.min_percentage, draft.max_percentage) {
            if min > max {
                return Err(IngestError::InvertedCriteria { min, max });
            }
        }

        let faculty = classify(&name);

        Ok(Program {
            name,
            min_percentage: draft.min_percentage,
            max_percentage: draft.max_percentage,
            fee: non_blank(draft.fee),
            seats: draft.seats,
            duration: non_blank(draft.duration),
            faculty: Some(faculty),
        })
    }
}

fn ensure_in_range(field: &'static str, value: f64) -> Result<(), IngestError> {
    if value.is_finite() && (0.0..=PERCENTAGE_CEILING).contains(&value) {
        Ok(())
    } else {
        Err(IngestError::CriteriaOutOfRange { field, value })
    }
}

fn collapse_whitespace(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|inner| inner.trim().to_string())
        .filter(|inner| !inner.is_empty())
}
