use crate::cli::OutputFormat;
use crate::infra::{parse_faculty, InMemoryProfileProvider, InMemoryUniversityDirectory};
use crate::render::render_text;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use unisphere::catalog::DirectoryImporter;
use unisphere::config::AppConfig;
use unisphere::error::AppError;
use unisphere::matching::recommendation::{
    RecommendationRequest, RecommendationResult, RecommendationService, StudentProfile,
};
use unisphere::matching::{classify, Faculty};

#[derive(Args, Debug)]
pub(crate) struct RecommendArgs {
    /// Directory export (.json or .csv). Defaults to UNISPHERE_DIRECTORY.
    #[arg(long)]
    pub(crate) directory: Option<PathBuf>,
    /// The student's academic percentage (0-100)
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) percentage: Option<f64>,
    /// Free-text field of interest, e.g. "Computer Science"
    #[arg(long)]
    pub(crate) interest: Option<String>,
    /// Only programs whose name contains this text
    #[arg(long)]
    pub(crate) program: Option<String>,
    /// Only programs in this faculty
    #[arg(long, value_parser = parse_faculty)]
    pub(crate) faculty: Option<Faculty>,
    /// Restrict to the faculty implied by --interest
    #[arg(long)]
    pub(crate) use_interest: bool,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) format: OutputFormat,
    /// Append eligible counts per faculty
    #[arg(long)]
    pub(crate) summary: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ClassifyArgs {
    /// Program names to classify
    #[arg(required = true)]
    pub(crate) names: Vec<String>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) format: OutputFormat,
}

pub(crate) fn run_recommend(args: RecommendArgs, config: &AppConfig) -> Result<(), AppError> {
    let RecommendArgs {
        directory,
        percentage,
        interest,
        program,
        faculty,
        use_interest,
        format,
        summary,
    } = args;

    let path = directory
        .or_else(|| config.matching.directory_path.clone())
        .ok_or_else(|| {
            AppError::Usage(
                "no university directory given: pass --directory or set UNISPHERE_DIRECTORY"
                    .to_string(),
            )
        })?;

    let records = DirectoryImporter::from_path(&path)?;
    info!(
        path = %path.display(),
        universities = records.len(),
        "directory loaded"
    );

    let service = RecommendationService::new(
        Arc::new(InMemoryUniversityDirectory::new(records)),
        Arc::new(InMemoryProfileProvider::default()),
        config.matching.policy(),
    );

    let profile = StudentProfile {
        percentage,
        field_of_interest: interest,
    };
    let request = RecommendationRequest {
        program_name: program,
        faculty,
        use_interest,
    };

    let result = service.recommend_with_profile(&profile, &request)?;
    print_result(&result, format, summary)
}

pub(crate) fn print_result(
    result: &RecommendationResult,
    format: OutputFormat,
    include_summary: bool,
) -> Result<(), AppError> {
    match format {
        OutputFormat::Text => print!("{}", render_text(result, include_summary)),
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct Payload<'a> {
                #[serde(flatten)]
                result: &'a RecommendationResult,
                #[serde(skip_serializing_if = "Option::is_none")]
                summary: Option<unisphere::matching::recommendation::RecommendationSummary>,
            }

            let payload = Payload {
                result,
                summary: include_summary.then(|| result.summary()),
            };
            println!("{}", to_json(&payload)?);
        }
    }
    Ok(())
}

#[derive(Debug, Serialize)]
struct Classification<'a> {
    name: &'a str,
    faculty: Faculty,
    faculty_label: &'static str,
}

pub(crate) fn run_classify(args: ClassifyArgs) -> Result<(), AppError> {
    let classifications: Vec<Classification<'_>> = args
        .names
        .iter()
        .map(|name| {
            let faculty = classify(name);
            Classification {
                name,
                faculty,
                faculty_label: faculty.label(),
            }
        })
        .collect();

    match args.format {
        OutputFormat::Text => {
            for entry in &classifications {
                println!("{} -> {}", entry.name, entry.faculty_label);
            }
        }
        OutputFormat::Json => println!("{}", to_json(&classifications)?),
    }
    Ok(())
}

fn to_json<T: Serialize>(value: &T) -> Result<String, AppError> {
    serde_json::to_string_pretty(value)
        .map_err(|err| AppError::Io(std::io::Error::new(std::io::ErrorKind::Other, err)))
}
