mod config;
mod grouping;
mod policy;

pub use config::{EligibilityPolicy, PASSING_PERCENTAGE};
pub use policy::{assess, Eligibility};

use super::domain::{Program, StudentProfile, UniversityRecord};
use super::views::{AnnotatedProgram, GroupedUniversity, RecommendationResult};
use crate::matching::faculty::Faculty;
use grouping::order_groups;

/// Pre-filters applied to programs before eligibility is computed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecommendationFilter {
    pub program_name: Option<String>,
    pub faculty: Option<Faculty>,
}

impl RecommendationFilter {
    pub fn by_program_name(name: impl Into<String>) -> Self {
        Self {
            program_name: Some(name.into()),
            faculty: None,
        }
    }

    pub fn by_faculty(faculty: Faculty) -> Self {
        Self {
            program_name: None,
            faculty: Some(faculty),
        }
    }

    pub fn with_faculty(mut self, faculty: Faculty) -> Self {
        self.faculty = Some(faculty);
        self
    }

    pub fn admits(&self, program: &Program) -> bool {
        if let Some(needle) = self.program_name.as_deref().map(str::trim) {
            if !needle.is_empty() && !program.name.to_lowercase().contains(&needle.to_lowercase()) {
                return false;
            }
        }

        match self.faculty {
            Some(faculty) => program.faculty() == faculty,
            None => true,
        }
    }
}

/// Stateless matcher that partitions university programs by eligibility.
#[derive(Debug, Clone, Default)]
pub struct RecommendationEngine {
    policy: EligibilityPolicy,
}

impl RecommendationEngine {
    pub fn new(policy: EligibilityPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &EligibilityPolicy {
        &self.policy
    }

    /// Annotate every admitted program and split universities into eligible and
    /// not-eligible groupings. A university with both kinds of program appears in both
    /// lists, each carrying only the relevant subset.
    pub fn recommend(
        &self,
        student: &StudentProfile,
        universities: &[UniversityRecord],
        filter: &RecommendationFilter,
    ) -> Result<RecommendationResult, RecommendationError> {
        let percentage = self.policy.validate(student.percentage)?;

        let mut eligible = Vec::new();
        let mut not_eligible = Vec::new();

        for university in universities {
            let (passing, failing): (Vec<AnnotatedProgram>, Vec<AnnotatedProgram>) = university
                .programs
                .iter()
                .filter(|program| filter.admits(program))
                .map(|program| AnnotatedProgram::annotate(program, assess(program, percentage)))
                .partition(|program| program.is_eligible);

            if !passing.is_empty() {
                eligible.push(GroupedUniversity::from_record(university, passing));
            }
            if !failing.is_empty() {
                not_eligible.push(GroupedUniversity::from_record(university, failing));
            }
        }

        order_groups(&mut eligible);
        order_groups(&mut not_eligible);

        Ok(RecommendationResult {
            student_percentage: percentage,
            field_of_interest: student.field_of_interest.clone(),
            eligible,
            not_eligible,
        })
    }
}

/// Why a student profile cannot serve as a recommendation baseline.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProfileIssue {
    #[error("academic percentage is missing; complete the profile first")]
    MissingPercentage,
    #[error("academic percentage is not a finite number")]
    NonFinitePercentage,
    #[error("academic percentage {value} is outside the accepted range {minimum}-{maximum}")]
    PercentageOutOfRange {
        value: f64,
        minimum: f64,
        maximum: f64,
    },
}

/// Error raised by the recommendation engine.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RecommendationError {
    #[error("invalid student profile: {0}")]
    InvalidProfile(ProfileIssue),
}
