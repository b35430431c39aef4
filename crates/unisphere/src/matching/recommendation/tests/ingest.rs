use crate::matching::faculty::Faculty;
use crate::matching::recommendation::{IngestError, ProgramDraft, ProgramIngest};

fn draft(name: &str, min: Option<f64>, max: Option<f64>) -> ProgramDraft {
    ProgramDraft {
        name: name.to_string(),
        min_percentage: min,
        max_percentage: max,
        fee: Some(" 95,000 PKR / semester ".to_string()),
        seats: Some(60),
        duration: Some(String::new()),
    }
}

#[test]
fn ingestion_caches_faculty_and_tidies_fields() {
    let program = ProgramIngest
        .program_from_draft(draft("  BS   Computer Science ", Some(60.0), None))
        .expect("valid draft");

    assert_eq!(program.name, "BS Computer Science");
    assert_eq!(
        program.faculty,
        Some(Faculty::ComputingAndInformationTechnology)
    );
    assert_eq!(program.fee.as_deref(), Some("95,000 PKR / semester"));
    assert_eq!(program.duration, None);
    assert_eq!(program.seats, Some(60));
}

#[test]
fn ingestion_requires_a_name() {
    let err = ProgramIngest
        .program_from_draft(draft("   ", Some(50.0), None))
        .expect_err("blank name rejected");
    assert_eq!(err, IngestError::MissingName);
}

#[test]
fn ingestion_rejects_out_of_range_criteria() {
    let err = ProgramIngest
        .program_from_draft(draft("BS Physics", Some(120.0), None))
        .expect_err("criteria above 100 rejected");
    assert_eq!(
        err,
        IngestError::CriteriaOutOfRange {
            field: "min_percentage",
            value: 120.0
        }
    );

    assert!(ProgramIngest
        .program_from_draft(draft("BS Physics", None, Some(-1.0)))
        .is_err());
}

#[test]
fn ingestion_rejects_inverted_bounds() {
    let err = ProgramIngest
        .program_from_draft(draft("BS Physics", Some(80.0), Some(60.0)))
        .expect_err("min above max rejected");
    assert_eq!(err, IngestError::InvertedCriteria { min: 80.0, max: 60.0 });
}

#[test]
fn ingestion_keeps_absent_criteria_absent() {
    let program = ProgramIngest
        .program_from_draft(draft("BS Biochemistry", None, None))
        .expect("valid draft");

    assert_eq!(program.min_percentage, None);
    assert_eq!(program.max_percentage, None);
    assert_eq!(program.minimum(), 0.0);
    assert_eq!(program.faculty, Some(Faculty::Sciences));
}
