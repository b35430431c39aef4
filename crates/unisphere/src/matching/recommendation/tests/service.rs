use std::sync::Arc;

use super::common::*;
use crate::matching::faculty::Faculty;
use crate::matching::recommendation::{
    DirectoryError, EligibilityPolicy, ProgramDraft, RecommendationRequest,
    RecommendationService, RecommendationServiceError, StudentId, StudentProfile, UniversityId,
};

#[test]
fn recommends_for_known_student() {
    let profiles = MemoryProfiles::with_profile("stu-1", student(70.0));
    let (service, _) = build_service(punjab_directory(), profiles);

    let result = service
        .recommend_for(
            &StudentId("stu-1".to_string()),
            &RecommendationRequest::default(),
        )
        .expect("recommendations computed");

    assert_eq!(result.student_percentage, 70.0);
    assert!(!result.eligible.is_empty());
    assert!(!result.not_eligible.is_empty());
}

#[test]
fn unknown_student_is_a_user_error() {
    let (service, _) = build_service(punjab_directory(), MemoryProfiles::default());

    let err = service
        .recommend_for(
            &StudentId("ghost".to_string()),
            &RecommendationRequest::default(),
        )
        .expect_err("missing profile rejected");

    assert!(matches!(err, RecommendationServiceError::UnknownStudent(_)));
    assert!(err.is_user_error());
}

#[test]
fn incomplete_profile_is_rejected_not_defaulted() {
    let profiles = MemoryProfiles::with_profile("stu-2", StudentProfile::default());
    let (service, _) = build_service(punjab_directory(), profiles);

    let err = service
        .recommend_for(
            &StudentId("stu-2".to_string()),
            &RecommendationRequest::default(),
        )
        .expect_err("incomplete profile rejected");

    assert!(matches!(err, RecommendationServiceError::Recommendation(_)));
    assert!(err.is_user_error());
}

#[test]
fn interest_filter_applies_only_when_requested() {
    let profile = student(90.0).interested_in("Engineering");
    let (service, _) = build_service(punjab_directory(), MemoryProfiles::default());

    let unfiltered = service
        .recommend_with_profile(&profile, &RecommendationRequest::default())
        .expect("recommendations computed");
    assert!(unfiltered.summary().eligible_programs > 1);

    let filtered = service
        .recommend_with_profile(
            &profile,
            &RecommendationRequest {
                use_interest: true,
                ..RecommendationRequest::default()
            },
        )
        .expect("recommendations computed");
    let names: Vec<&str> = filtered
        .eligible_programs()
        .map(|program| program.name.as_str())
        .collect();
    assert_eq!(names, vec!["BS Civil Engineering"]);
}

#[test]
fn explicit_faculty_overrides_interest() {
    let profile = student(90.0).interested_in("Engineering");
    let (service, _) = build_service(punjab_directory(), MemoryProfiles::default());

    let result = service
        .recommend_with_profile(
            &profile,
            &RecommendationRequest {
                faculty: Some(Faculty::HumanitiesAndSocialSciences),
                use_interest: true,
                ..RecommendationRequest::default()
            },
        )
        .expect("recommendations computed");

    let names: Vec<&str> = result
        .eligible_programs()
        .map(|program| program.name.as_str())
        .collect();
    assert_eq!(names, vec!["BS English"]);
}

#[test]
fn directory_failures_propagate() {
    let service = RecommendationService::new(
        Arc::new(UnavailableDirectory),
        Arc::new(MemoryProfiles::default()),
        EligibilityPolicy::default(),
    );

    let err = service
        .recommend_with_profile(&student(70.0), &RecommendationRequest::default())
        .expect_err("directory offline");

    assert!(matches!(
        err,
        RecommendationServiceError::Directory(DirectoryError::Unavailable(_))
    ));
    assert!(!err.is_user_error());
}

#[test]
fn ingested_programs_are_classified_and_stored() {
    let (service, directory) = build_service(punjab_directory(), MemoryProfiles::default());
    let university = UniversityId("uni-gcu".to_string());

    let program = service
        .ingest_program(
            &university,
            ProgramDraft {
                name: "BS Psychology".to_string(),
                min_percentage: Some(55.0),
                ..ProgramDraft::default()
            },
        )
        .expect("program ingested");
    assert_eq!(program.faculty, Some(Faculty::HumanitiesAndSocialSciences));

    service
        .ingest_program(
            &university,
            ProgramDraft {
                name: "bs psychology".to_string(),
                min_percentage: Some(65.0),
                ..ProgramDraft::default()
            },
        )
        .expect("program updated");

    let stored = directory
        .snapshot()
        .into_iter()
        .find(|record| record.id == university)
        .expect("university present");
    let psychology: Vec<_> = stored
        .programs
        .iter()
        .filter(|program| program.name.eq_ignore_ascii_case("BS Psychology"))
        .collect();
    assert_eq!(psychology.len(), 1);
    assert_eq!(psychology[0].min_percentage, Some(65.0));
}

#[test]
fn ingest_into_unknown_university_fails() {
    let (service, _) = build_service(punjab_directory(), MemoryProfiles::default());

    let err = service
        .ingest_program(
            &UniversityId("uni-missing".to_string()),
            ProgramDraft {
                name: "BS Urdu".to_string(),
                ..ProgramDraft::default()
            },
        )
        .expect_err("unknown university");

    assert!(matches!(
        err,
        RecommendationServiceError::Directory(DirectoryError::NotFound(_))
    ));
}

#[test]
fn service_engine_carries_configured_policy() {
    let service = RecommendationService::new(
        Arc::new(MemoryDirectory::with_records(punjab_directory())),
        Arc::new(MemoryProfiles::default()),
        EligibilityPolicy::passing_only(),
    );

    assert_eq!(service.engine().policy().minimum_percentage(), 33.0);
    let err = service
        .recommend_with_profile(&student(20.0), &RecommendationRequest::default())
        .expect_err("below passing floor");
    assert!(err.is_user_error());
}
