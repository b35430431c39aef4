use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use unisphere::matching::recommendation::{
    DirectoryError, Program, ProfileProvider, ProviderError, StudentId, StudentProfile,
    UniversityDirectory, UniversityId, UniversityRecord,
};
use unisphere::matching::Faculty;

#[derive(Default, Clone)]
pub(crate) struct InMemoryUniversityDirectory {
    records: Arc<Mutex<Vec<UniversityRecord>>>,
}

impl InMemoryUniversityDirectory {
    pub(crate) fn new(records: Vec<UniversityRecord>) -> Self {
        Self {
            records: Arc::new(Mutex::new(records)),
        }
    }
}

impl UniversityDirectory for InMemoryUniversityDirectory {
    fn approved(&self) -> Result<Vec<UniversityRecord>, DirectoryError> {
        let guard = self
            .records
            .lock()
            .map_err(|_| DirectoryError::Unavailable("directory mutex poisoned".to_string()))?;
        Ok(guard.clone())
    }

    fn upsert_program(
        &self,
        university: &UniversityId,
        program: Program,
    ) -> Result<(), DirectoryError> {
        let mut guard = self
            .records
            .lock()
            .map_err(|_| DirectoryError::Unavailable("directory mutex poisoned".to_string()))?;
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

#[derive(Default, Clone)]
pub(crate) struct InMemoryProfileProvider {
    profiles: Arc<Mutex<HashMap<StudentId, StudentProfile>>>,
}

impl InMemoryProfileProvider {
    pub(crate) fn register(
        &self,
        student: StudentId,
        profile: StudentProfile,
    ) -> Result<(), ProviderError> {
        let mut guard = self
            .profiles
            .lock()
            .map_err(|_| ProviderError::Unavailable("profile mutex poisoned".to_string()))?;
        guard.insert(student, profile);
        Ok(())
    }
}

impl ProfileProvider for InMemoryProfileProvider {
    fn profile(&self, student: &StudentId) -> Result<Option<StudentProfile>, ProviderError> {
        let guard = self
            .profiles
            .lock()
            .map_err(|_| ProviderError::Unavailable("profile mutex poisoned".to_string()))?;
        Ok(guard.get(student).cloned())
    }
}

pub(crate) fn parse_faculty(raw: &str) -> Result<Faculty, String> {
    Faculty::from_label(raw).ok_or_else(|| {
        let known = Faculty::ALL
            .iter()
            .map(|faculty| faculty.label())
            .collect::<Vec<_>>()
            .join(", ");
        format!("unknown faculty '{raw}' (expected one of: {known})")
    })
}
