use crate::cli::OutputFormat;
use crate::commands::print_result;
use crate::infra::{InMemoryProfileProvider, InMemoryUniversityDirectory};
use clap::Args;
use std::sync::Arc;
use tracing::info;
use unisphere::config::AppConfig;
use unisphere::error::AppError;
use unisphere::matching::recommendation::{
    Program, ProgramDraft, RecommendationRequest, RecommendationService,
    RecommendationServiceError, StudentId, StudentProfile, UniversityId, UniversityRecord,
};

const DEMO_STUDENT: &str = "demo-student";

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Percentage for the sample student
    #[arg(long, default_value_t = 72.0, allow_hyphen_values = true)]
    pub(crate) percentage: f64,
    /// Field of interest for the sample student
    #[arg(long, default_value = "Computer Science")]
    pub(crate) interest: String,
    /// Restrict results to the faculty implied by the interest
    #[arg(long)]
    pub(crate) use_interest: bool,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) format: OutputFormat,
}

pub(crate) fn run_demo(args: DemoArgs, config: &AppConfig) -> Result<(), AppError> {
    let directory = Arc::new(InMemoryUniversityDirectory::new(sample_directory()));
    let profiles = Arc::new(InMemoryProfileProvider::default());
    let student = StudentId(DEMO_STUDENT.to_string());
    profiles
        .register(
            student.clone(),
            StudentProfile::with_percentage(args.percentage).interested_in(args.interest),
        )
        .map_err(RecommendationServiceError::from)?;

    let service = RecommendationService::new(directory, profiles, config.matching.policy());

    // Admin-side intake runs through the same validation as imports.
    let added = service.ingest_program(
        &UniversityId("uni-pu".to_string()),
        ProgramDraft {
            name: "BS  Artificial   Intelligence".to_string(),
            min_percentage: Some(78.0),
            fee: Some("95,000 per semester".to_string()),
            seats: Some(60),
            duration: Some("4 years".to_string()),
            ..ProgramDraft::default()
        },
    )?;
    info!(program = %added.name, faculty = %added.faculty(), "demo program added");

    let request = RecommendationRequest {
        use_interest: args.use_interest,
        ..RecommendationRequest::default()
    };
    let result = service.recommend_for(&student, &request)?;
    print_result(&result, args.format, true)
}

fn sample_directory() -> Vec<UniversityRecord> {
    vec![
        UniversityRecord {
            id: UniversityId("uni-pu".to_string()),
            name: "University of the Punjab".to_string(),
            address: Some("Quaid-e-Azam Campus, Lahore".to_string()),
            rating: 4.5,
            website: Some("https://pu.edu.pk".to_string()),
            programs: vec![
                Program::new("BS Computer Science", 75.0),
                Program::new("BS Botany", 50.0),
                Program::new("Doctor of Pharmacy", 85.0),
                Program::new("LLB (Hons)", 70.0),
            ],
        },
        UniversityRecord {
            id: UniversityId("uni-gcu".to_string()),
            name: "Government College University".to_string(),
            address: Some("Katchery Road, Lahore".to_string()),
            rating: 4.3,
            website: Some("https://gcu.edu.pk".to_string()),
            programs: vec![
                Program::new("BS Physics", 60.0),
                Program::new("BS English Literature", 45.0),
                Program::new("BBA", 55.0),
            ],
        },
        UniversityRecord {
            id: UniversityId("uni-uet".to_string()),
            name: "UET Lahore".to_string(),
            address: Some("G.T. Road, Lahore".to_string()),
            rating: 4.7,
            website: Some("https://uet.edu.pk".to_string()),
            programs: vec![
                Program::new("BSc Civil Engineering", 80.0),
                Program::new("B.Arch Architecture", 70.0),
            ],
        },
        UniversityRecord {
            id: UniversityId("uni-ntu".to_string()),
            name: "National Textile University".to_string(),
            address: Some("Sheikhupura Road, Faisalabad".to_string()),
            rating: 4.2,
            website: None,
            programs: vec![
                Program::new("BS Textile Design", 50.0),
                Program::new("BS Fashion Design", 55.0),
            ],
        },
    ]
}
