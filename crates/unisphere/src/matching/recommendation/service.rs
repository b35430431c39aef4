use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::domain::{Program, StudentId, StudentProfile, UniversityId};
use super::engine::{
    EligibilityPolicy, RecommendationEngine, RecommendationError, RecommendationFilter,
};
use super::ingest::{IngestError, ProgramDraft, ProgramIngest};
use super::repository::{DirectoryError, ProfileProvider, ProviderError, UniversityDirectory};
use super::views::RecommendationResult;
use crate::matching::faculty::Faculty;

/// Caller-supplied options for a recommendation request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationRequest {
    /// Case-insensitive substring a program name must contain.
    #[serde(default)]
    pub program_name: Option<String>,
    /// Restrict to one faculty. Takes precedence over `use_interest`.
    #[serde(default)]
    pub faculty: Option<Faculty>,
    /// Derive a faculty filter from the profile's field of interest.
    #[serde(default)]
    pub use_interest: bool,
}

impl RecommendationRequest {
    fn filter_for(&self, profile: &StudentProfile) -> RecommendationFilter {
        let faculty = self.faculty.or_else(|| {
            if self.use_interest {
                profile
                    .field_of_interest
                    .as_deref()
                    .and_then(Faculty::from_interest)
            } else {
                None
            }
        });

        RecommendationFilter {
            program_name: self.program_name.clone(),
            faculty,
        }
    }
}

/// Service composing the university directory, profile provider, and matching engine.
pub struct RecommendationService<D, P> {
    directory: Arc<D>,
    profiles: Arc<P>,
    engine: Arc<RecommendationEngine>,
    ingest: ProgramIngest,
}

impl<D, P> RecommendationService<D, P>
where
    D: UniversityDirectory + 'static,
    P: ProfileProvider + 'static,
{
    pub fn new(directory: Arc<D>, profiles: Arc<P>, policy: EligibilityPolicy) -> Self {
        Self {
            directory,
            profiles,
            engine: Arc::new(RecommendationEngine::new(policy)),
            ingest: ProgramIngest,
        }
    }

    pub fn engine(&self) -> &RecommendationEngine {
        &self.engine
    }

    /// Recommend programs for a student known to the profile provider.
    pub fn recommend_for(
        &self,
        student: &StudentId,
        request: &RecommendationRequest,
    ) -> Result<RecommendationResult, RecommendationServiceError> {
        let profile = self
            .profiles
            .profile(student)?
            .ok_or_else(|| RecommendationServiceError::UnknownStudent(student.clone()))?;

        let result = self.recommend_with_profile(&profile, request)?;
        info!(%student, "recommendations served");
        Ok(result)
    }

    /// Recommend programs against an inline profile snapshot.
    pub fn recommend_with_profile(
        &self,
        profile: &StudentProfile,
        request: &RecommendationRequest,
    ) -> Result<RecommendationResult, RecommendationServiceError> {
        let filter = request.filter_for(profile);
        debug!(
            program_name = ?filter.program_name,
            faculty = ?filter.faculty,
            "recommendation filter resolved"
        );

        let universities = self.directory.approved()?;
        let result = self
            .engine
            .recommend(profile, &universities, &filter)
            .map_err(|err| {
                warn!(error = %err, "recommendation rejected");
                err
            })?;

        let summary = result.summary();
        info!(
            universities = universities.len(),
            eligible_programs = summary.eligible_programs,
            not_eligible_programs = summary.not_eligible_programs,
            "recommendations computed"
        );

        Ok(result)
    }

    /// Validate, classify, and store a program under an existing university.
    pub fn ingest_program(
        &self,
        university: &UniversityId,
        draft: ProgramDraft,
    ) -> Result<Program, RecommendationServiceError> {
        let program = self.ingest.program_from_draft(draft)?;
        self.directory.upsert_program(university, program.clone())?;
        info!(
            %university,
            program = %program.name,
            faculty = %program.faculty(),
            "program ingested"
        );
        Ok(program)
    }
}

/// Error raised by the recommendation service.
#[derive(Debug, thiserror::Error)]
pub enum RecommendationServiceError {
    #[error(transparent)]
    Recommendation(#[from] RecommendationError),
    #[error(transparent)]
    Ingest(#[from] IngestError),
    #[error(transparent)]
    Directory(#[from] DirectoryError),
    #[error(transparent)]
    Provider(#[from] ProviderError),
    #[error("no profile found for student {0}; complete the profile first")]
    UnknownStudent(StudentId),
}

impl RecommendationServiceError {
    /// Errors the requester can fix (400-class) as opposed to collaborator failures.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            RecommendationServiceError::Recommendation(_)
                | RecommendationServiceError::Ingest(_)
                | RecommendationServiceError::UnknownStudent(_)
                | RecommendationServiceError::Directory(DirectoryError::NotFound(_))
        )
    }
}
