//! Loading the approved-university directory from exported files.
//!
//! Two formats are accepted: a JSON array of universities with embedded programs, and a
//! flattened CSV export with one row per program. Every program passes through
//! [`ProgramIngest`] so imported records carry their cached faculty.

mod parser;

use serde::Deserialize;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use crate::matching::recommendation::{
    IngestError, Program, ProgramDraft, ProgramIngest, UniversityId, UniversityRecord,
};

#[derive(Debug)]
pub enum DirectoryImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    Json(serde_json::Error),
    Program {
        university: UniversityId,
        program: String,
        source: IngestError,
    },
    UnsupportedFormat(String),
}

impl std::fmt::Display for DirectoryImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DirectoryImportError::Io(err) => write!(f, "failed to read directory export: {}", err),
            DirectoryImportError::Csv(err) => write!(f, "invalid directory CSV data: {}", err),
            DirectoryImportError::Json(err) => write!(f, "invalid directory JSON data: {}", err),
            DirectoryImportError::Program {
                university,
                program,
                source,
            } => write!(
                f,
                "program '{}' of university {} rejected: {}",
                program, university, source
            ),
            DirectoryImportError::UnsupportedFormat(extension) => write!(
                f,
                "unsupported directory format '{}' (expected .json or .csv)",
                extension
            ),
        }
    }
}

impl std::error::Error for DirectoryImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DirectoryImportError::Io(err) => Some(err),
            DirectoryImportError::Csv(err) => Some(err),
            DirectoryImportError::Json(err) => Some(err),
            DirectoryImportError::Program { source, .. } => Some(source),
            DirectoryImportError::UnsupportedFormat(_) => None,
        }
    }
}

impl From<std::io::Error> for DirectoryImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for DirectoryImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

impl From<serde_json::Error> for DirectoryImportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

#[derive(Debug, Deserialize)]
struct UniversityDocument {
    id: UniversityId,
    name: String,
    #[serde(default)]
    address: Option<String>,
    #[serde(default)]
    rating: f32,
    #[serde(default)]
    website: Option<String>,
    #[serde(default)]
    programs: Vec<ProgramDraft>,
}

pub struct DirectoryImporter;

impl DirectoryImporter {
    /// Pick the format from the file extension.
    pub fn from_path<P: AsRef<Path>>(
        path: P,
    ) -> Result<Vec<UniversityRecord>, DirectoryImportError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "json" => Self::from_json_reader(std::fs::File::open(path)?),
            "csv" => Self::from_csv_reader(std::fs::File::open(path)?),
            _ => Err(DirectoryImportError::UnsupportedFormat(extension)),
        }
    }

    pub fn from_json_reader<R: Read>(
        reader: R,
    ) -> Result<Vec<UniversityRecord>, DirectoryImportError> {
        let documents: Vec<UniversityDocument> = serde_json::from_reader(reader)?;
        let ingest = ProgramIngest;

        documents
            .into_iter()
            .map(|document| -> Result<UniversityRecord, DirectoryImportError> {
                let id = document.id;
                let programs = document
                    .programs
                    .into_iter()
                    .map(|draft| ingest_program(&ingest, &id, draft))
                    .collect::<Result<Vec<_>, _>>()?;

                Ok(UniversityRecord {
                    id,
                    name: document.name,
                    address: document.address,
                    rating: document.rating,
                    website: document.website,
                    programs,
                })
            })
            .collect()
    }

    /// Rows are grouped by `University ID` in first-seen order; university details come
    /// from the first row of each group.
    pub fn from_csv_reader<R: Read>(
        reader: R,
    ) -> Result<Vec<UniversityRecord>, DirectoryImportError> {
        let ingest = ProgramIngest;
        let mut records: Vec<UniversityRecord> = Vec::new();
        let mut positions: HashMap<UniversityId, usize> = HashMap::new();

        for row in parser::parse_rows(reader)? {
            let id = UniversityId(row.university_id);
            let program = ingest_program(&ingest, &id, row.program)?;

            let index = match positions.get(&id) {
                Some(index) => *index,
                None => {
                    records.push(UniversityRecord {
                        id: id.clone(),
                        name: row.university_name,
                        address: row.address,
                        rating: row.rating.unwrap_or_default(),
                        website: row.website,
                        programs: Vec::new(),
                    });
                    positions.insert(id, records.len() - 1);
                    records.len() - 1
                }
            };

            records[index].programs.push(program);
        }

        Ok(records)
    }
}

fn ingest_program(
    ingest: &ProgramIngest,
    university: &UniversityId,
    draft: ProgramDraft,
) -> Result<Program, DirectoryImportError> {
    let name = draft.name.clone();
    ingest
        .program_from_draft(draft)
        .map_err(|source| DirectoryImportError::Program {
            university: university.clone(),
            program: name,
            source,
        })
}
