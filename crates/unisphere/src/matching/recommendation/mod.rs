//! Percentage-based program recommendations.
//!
//! The engine is a pure function of a student snapshot and a directory snapshot. The
//! service wraps it with the external collaborators (directory, profile provider) and is
//! the only layer that logs.

pub mod domain;
mod engine;
pub mod ingest;
pub mod repository;
pub mod service;
pub mod views;

#[cfg(test)]
mod tests;

pub use domain::{
    Program, StudentId, StudentProfile, UniversityId, UniversityRecord, DEFAULT_MIN_PERCENTAGE,
    PERCENTAGE_CEILING,
};
pub use engine::{
    assess, Eligibility, EligibilityPolicy, ProfileIssue, RecommendationEngine,
    RecommendationError, RecommendationFilter, PASSING_PERCENTAGE,
};
pub use ingest::{IngestError, ProgramDraft, ProgramIngest};
pub use repository::{DirectoryError, ProfileProvider, ProviderError, UniversityDirectory};
pub use service::{RecommendationRequest, RecommendationService, RecommendationServiceError};
pub use views::{
    AnnotatedProgram, FacultyCount, GroupedUniversity, RecommendationResult, RecommendationSummary,
};
