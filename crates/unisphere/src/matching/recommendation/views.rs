use serde::Serialize;

use super::domain::{Program, UniversityId, UniversityRecord};
use super::engine::Eligibility;
use crate::matching::faculty::Faculty;

/// Program annotated with the eligibility verdict for one student.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnotatedProgram {
    pub name: String,
    pub faculty: Faculty,
    pub faculty_label: &'static str,
    pub min_percentage: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_percentage: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seats: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    pub is_eligible: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl AnnotatedProgram {
    pub(crate) fn annotate(program: &Program, eligibility: Eligibility) -> Self {
        let faculty = program.faculty();
        Self {
            name: program.name.clone(),
            faculty,
            faculty_label: faculty.label(),
            min_percentage: program.minimum(),
            max_percentage: program.maximum(),
            fee: program.fee.clone(),
            seats: program.seats,
            duration: program.duration.clone(),
            is_eligible: eligibility.is_eligible(),
            reason: eligibility.reason(),
        }
    }
}

/// Programs of a single university, regrouped under the parent record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupedUniversity {
    pub university_id: UniversityId,
    pub university_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub rating: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    pub programs: Vec<AnnotatedProgram>,
}

impl GroupedUniversity {
    pub(crate) fn from_record(record: &UniversityRecord, programs: Vec<AnnotatedProgram>) -> Self {
        Self {
            university_id: record.id.clone(),
            university_name: record.name.clone(),
            address: record.address.clone(),
            rating: record.rating,
            website: record.website.clone(),
            programs,
        }
    }

    pub fn highest_requirement(&self) -> f64 {
        self.programs
            .iter()
            .map(|program| program.min_percentage)
            .fold(0.0, f64::max)
    }
}

/// Transient output of a recommendation pass. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationResult {
    pub student_percentage: f64,
    pub field_of_interest: Option<String>,
    pub eligible: Vec<GroupedUniversity>,
    pub not_eligible: Vec<GroupedUniversity>,
}

impl RecommendationResult {
    pub fn is_empty(&self) -> bool {
        self.eligible.is_empty() && self.not_eligible.is_empty()
    }

    pub fn eligible_programs(&self) -> impl Iterator<Item = &AnnotatedProgram> {
        self.eligible.iter().flat_map(|group| group.programs.iter())
    }

    pub fn not_eligible_programs(&self) -> impl Iterator<Item = &AnnotatedProgram> {
        self.not_eligible
            .iter()
            .flat_map(|group| group.programs.iter())
    }

    pub fn summary(&self) -> RecommendationSummary {
        let faculty_breakdown = Faculty::ALL
            .into_iter()
            .filter_map(|faculty| {
                let eligible_programs = self
                    .eligible_programs()
                    .filter(|program| program.faculty == faculty)
                    .count();
                (eligible_programs > 0).then(|| FacultyCount {
                    faculty,
                    faculty_label: faculty.label(),
                    eligible_programs,
                })
            })
            .collect();

        RecommendationSummary {
            eligible_universities: self.eligible.len(),
            not_eligible_universities: self.not_eligible.len(),
            eligible_programs: self.eligible_programs().count(),
            not_eligible_programs: self.not_eligible_programs().count(),
            faculty_breakdown,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacultyCount {
    pub faculty: Faculty,
    pub faculty_label: &'static str,
    pub eligible_programs: usize,
}

/// Headline counts for a recommendation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecommendationSummary {
    pub eligible_universities: usize,
    pub not_eligible_universities: usize,
    pub eligible_programs: usize,
    pub not_eligible_programs: usize,
    pub faculty_breakdown: Vec<FacultyCount>,
}
