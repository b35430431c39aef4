use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::matching::recommendation::domain::{
    Program, StudentId, StudentProfile, UniversityId, UniversityRecord,
};
use crate::matching::recommendation::repository::{
    DirectoryError, ProfileProvider, ProviderError, UniversityDirectory,
};
use crate::matching::recommendation::{EligibilityPolicy, RecommendationService};

pub(super) fn program(name: &str, min_percentage: f64) -> Program {
    Program::new(name, min_percentage)
}

pub(super) fn university(id: &str, name: &str, programs: Vec<Program>) -> UniversityRecord {
    UniversityRecord {
        id: UniversityId(id.to_string()),
        name: name.to_string(),
        address: Some("Lahore, Punjab".to_string()),
        rating: 4.2,
        website: None,
        programs,
    }
}

pub(super) fn punjab_directory() -> Vec<UniversityRecord> {
    vec![
        university(
            "uni-pu",
            "University of the Punjab",
            vec![
                program("BS Computer Science", 75.0),
                program("BS Botany", 50.0),
                program("Doctor of Pharmacy", 85.0),
            ],
        ),
        university(
            "uni-gcu",
            "Government College University",
            vec![program("BS Physics", 60.0), program("BS English", 45.0)],
        ),
        university(
            "uni-uet",
            "University of Engineering and Technology",
            vec![program("BS Civil Engineering", 80.0)],
        ),
    ]
}

pub(super) fn student(percentage: f64) -> StudentProfile {
    StudentProfile::with_percentage(percentage)
}

#[derive(Default, Clone)]
pub(super) struct MemoryDirectory {
    records: Arc<Mutex<Vec<UniversityRecord>>>,
}

impl MemoryDirectory {
    pub(super) fn with_records(records: Vec<UniversityRecord>) -> Self {
        Self {
            records: Arc::new(Mutex::new(records)),
        }
    }

    pub(super) fn snapshot(&self) -> Vec<UniversityRecord> {
        self.records.lock().expect("lock").clone()
    }
}

impl UniversityDirectory for MemoryDirectory {
    fn approved(&self) -> Result<Vec<UniversityRecord>, DirectoryError> {
        Ok(self.records.lock().expect("lock").clone())
    }

    fn upsert_program(
        &self,
        university: &UniversityId,
        program: Program,
    ) -> Result<(), DirectoryError> {
        let mut guard = self.records.lock().expect("lock");
        let record = guard
            .iter_mut()
            .find(|record| &record.id == university)
            .ok_or_else(|| DirectoryError::NotFound(university.clone()))?;

        match record
            .programs
            .iter_mut()
            .find(|existing| existing.name.eq_ignore_ascii_case(&program.name))
        {
            Some(existing) => *existing = program,
            None => record.programs.push(program),
        }
        Ok(())
    }
}

pub(super) struct UnavailableDirectory;

impl UniversityDirectory for UnavailableDirectory {
    fn approved(&self) -> Result<Vec<UniversityRecord>, DirectoryError> {
        Err(DirectoryError::Unavailable("document store offline".to_string()))
    }

    fn upsert_program(
        &self,
        _university: &UniversityId,
        _program: Program,
    ) -> Result<(), DirectoryError> {
        Err(DirectoryError::Unavailable("document store offline".to_string()))
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryProfiles {
    profiles: Arc<Mutex<HashMap<StudentId, StudentProfile>>>,
}

impl MemoryProfiles {
    pub(super) fn with_profile(id: &str, profile: StudentProfile) -> Self {
        let profiles = Self::default();
        profiles
            .profiles
            .lock()
            .expect("lock")
            .insert(StudentId(id.to_string()), profile);
        profiles
    }
}

impl ProfileProvider for MemoryProfiles {
    fn profile(&self, student: &StudentId) -> Result<Option<StudentProfile>, ProviderError> {
        Ok(self.profiles.lock().expect("lock").get(student).cloned())
    }
}

pub(super) fn build_service(
    records: Vec<UniversityRecord>,
    profiles: MemoryProfiles,
) -> (
    RecommendationService<MemoryDirectory, MemoryProfiles>,
    MemoryDirectory,
) {
    let directory = MemoryDirectory::with_records(records);
    let service = RecommendationService::new(
        Arc::new(directory.clone()),
        Arc::new(profiles),
        EligibilityPolicy::default(),
    );
    (service, directory)
}
