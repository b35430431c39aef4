use super::domain::{Program, StudentId, StudentProfile, UniversityId, UniversityRecord};

/// Directory of approved universities so the service can be exercised in isolation.
///
/// Implementations return only approved records; the engine does not filter by
/// approval state.
pub trait UniversityDirectory: Send + Sync {
    fn approved(&self) -> Result<Vec<UniversityRecord>, DirectoryError>;
    /// Insert the program, replacing one with the same (case-insensitive) name.
    fn upsert_program(
        &self,
        university: &UniversityId,
        program: Program,
    ) -> Result<(), DirectoryError>;
}

/// Source of authenticated student profiles.
pub trait ProfileProvider: Send + Sync {
    fn profile(&self, student: &StudentId) -> Result<Option<StudentProfile>, ProviderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("university {0} not found")]
    NotFound(UniversityId),
    #[error("university directory unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("profile provider unavailable: {0}")]
    Unavailable(String),
}
