use std::fmt;

use serde::{Deserialize, Serialize};

use crate::matching::faculty::{classify, Faculty};

/// Minimum percentage assumed when a program publishes no eligibility criteria.
pub const DEFAULT_MIN_PERCENTAGE: f64 = 0.0;
/// Upper bound of the percentage scale; a maximum at or above this is unbounded.
pub const PERCENTAGE_CEILING: f64 = 100.0;

/// Identifier wrapper for universities in the directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UniversityId(pub String);

impl fmt::Display for UniversityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier wrapper for authenticated students.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StudentId(pub String);

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Academic snapshot of the requesting student, owned by the profile provider.
///
/// `percentage` stays optional so an incomplete profile reaches the engine and is
/// rejected there instead of being defaulted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudentProfile {
    #[serde(default)]
    pub percentage: Option<f64>,
    #[serde(default)]
    pub field_of_interest: Option<String>,
}

impl StudentProfile {
    pub fn with_percentage(percentage: f64) -> Self {
        Self {
            percentage: Some(percentage),
            field_of_interest: None,
        }
    }

    pub fn interested_in(mut self, field: impl Into<String>) -> Self {
        self.field_of_interest = Some(field.into());
        self
    }
}

/// Approved university as supplied by the directory, programs embedded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UniversityRecord {
    pub id: UniversityId,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub programs: Vec<Program>,
}

/// Degree program offered by a university.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
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
    /// Cached classification written at ingestion time.
    #[serde(default)]
    pub faculty: Option<Faculty>,
}

impl Program {
    pub fn new(name: impl Into<String>, min_percentage: f64) -> Self {
        Self {
            name: name.into(),
            min_percentage: Some(min_percentage),
            max_percentage: None,
            fee: None,
            seats: None,
            duration: None,
            faculty: None,
        }
    }

    /// Required minimum, defaulting to [`DEFAULT_MIN_PERCENTAGE`] when unpublished.
    pub fn minimum(&self) -> f64 {
        self.min_percentage.unwrap_or(DEFAULT_MIN_PERCENTAGE)
    }

    /// Effective maximum. `None` when absent or at the ceiling; `Some(0.0)` is a real bound.
    pub fn maximum(&self) -> Option<f64> {
        self.max_percentage.filter(|max| *max < PERCENTAGE_CEILING)
    }

    /// Stored faculty, or a fresh classification for records that predate ingestion.
    pub fn faculty(&self) -> Faculty {
        self.faculty.unwrap_or_else(|| classify(&self.name))
    }
}

/// Render a percentage without a trailing `.0` for whole numbers.
pub(crate) fn format_percentage(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        let rendered = format!("{value:.2}");
        rendered
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}
