//! Faculty classification for free-text program names.
//!
//! Program names such as "BS Computer Science" or "Doctor of Pharmacy" are mapped onto a
//! fixed set of faculties by walking an ordered keyword rule table. The first rule with a
//! matching keyword wins, so the table order encodes precedence between overlapping
//! vocabularies (allied health is consulted before the generic sciences bucket).

mod rules;

pub use rules::{rules, FacultyRule, Keyword, MatchKind};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Broad academic department a program belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Faculty {
    ComputingAndInformationTechnology,
    EngineeringAndArchitecture,
    HumanitiesAndSocialSciences,
    Law,
    ManagementAndAdministrativeSciences,
    PharmacyAndAlliedHealthSciences,
    Sciences,
    TextileAndFashionDesigning,
    Other,
}

impl Faculty {
    pub const ALL: [Faculty; 9] = [
        Faculty::ComputingAndInformationTechnology,
        Faculty::EngineeringAndArchitecture,
        Faculty::HumanitiesAndSocialSciences,
        Faculty::Law,
        Faculty::ManagementAndAdministrativeSciences,
        Faculty::PharmacyAndAlliedHealthSciences,
        Faculty::Sciences,
        Faculty::TextileAndFashionDesigning,
        Faculty::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Faculty::ComputingAndInformationTechnology => "Computing & Information Technology",
            Faculty::EngineeringAndArchitecture => "Engineering & Architecture",
            Faculty::HumanitiesAndSocialSciences => "Humanities & Social Sciences",
            Faculty::Law => "Law",
            Faculty::ManagementAndAdministrativeSciences => {
                "Management & Administrative Sciences"
            }
            Faculty::PharmacyAndAlliedHealthSciences => "Pharmacy & Allied Health Sciences",
            Faculty::Sciences => "Sciences",
            Faculty::TextileAndFashionDesigning => "Textile & Fashion Designing",
            Faculty::Other => "Other",
        }
    }

    fn key(self) -> &'static str {
        match self {
            Faculty::ComputingAndInformationTechnology => "computing_and_information_technology",
            Faculty::EngineeringAndArchitecture => "engineering_and_architecture",
            Faculty::HumanitiesAndSocialSciences => "humanities_and_social_sciences",
            Faculty::Law => "law",
            Faculty::ManagementAndAdministrativeSciences => {
                "management_and_administrative_sciences"
            }
            Faculty::PharmacyAndAlliedHealthSciences => "pharmacy_and_allied_health_sciences",
            Faculty::Sciences => "sciences",
            Faculty::TextileAndFashionDesigning => "textile_and_fashion_designing",
            Faculty::Other => "other",
        }
    }

    /// Parse a display label ("Faculty of Sciences", "Law") or a snake_case key.
    pub fn from_label(value: &str) -> Option<Self> {
        let normalized = normalize_key(value);
        let key = normalized
            .strip_prefix("faculty_of_")
            .unwrap_or(normalized.as_str());
        Faculty::ALL.into_iter().find(|faculty| faculty.key() == key)
    }

    /// Resolve a student's free-text field of interest into a faculty.
    ///
    /// Labels are tried first; anything else is classified like a program name. An
    /// interest that only lands in the fallback bucket yields `None` so callers do not
    /// narrow results down to unclassifiable programs by accident.
    pub fn from_interest(value: &str) -> Option<Self> {
        if value.trim().is_empty() {
            return None;
        }

        match Faculty::from_label(value).unwrap_or_else(|| classify(value)) {
            Faculty::Other => None,
            faculty => Some(faculty),
        }
    }
}

impl fmt::Display for Faculty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a program name into its faculty. Never fails: names that match no rule,
/// including the empty string, fall back to [`Faculty::Other`].
pub fn classify(program_name: &str) -> Faculty {
    let lowered = program_name.to_lowercase();
    rules()
        .iter()
        .find(|rule| rule.matches(&lowered))
        .map(|rule| rule.faculty)
        .unwrap_or(Faculty::Other)
}

fn normalize_key(value: &str) -> String {
    let replaced = value.trim().to_lowercase().replace('&', " and ");
    replaced
        .split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("_")
}
