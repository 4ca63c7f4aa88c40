use anyhow::Result;
use chrono::Utc;
use std::path::PathBuf;

use super::storage::{load_profile, save_profile};
use super::types::{NewQuizRecord, NewSavedCollege, ProfileHistory, QuizRecord, SavedCollege};

/// Persistence for quiz history and saved colleges.
///
/// The scorer never writes here itself; callers append a result explicitly.
pub trait ProfileStore {
    /// Prepend a timestamped record with a fresh id and return it
    fn append(&mut self, record: NewQuizRecord) -> Result<QuizRecord>;

    /// All records, newest first
    fn list(&self) -> Result<Vec<QuizRecord>>;

    /// Remove a record. Returns true if it existed.
    fn remove(&mut self, id: &str) -> Result<bool>;

    /// Save a college for a career; saving it twice keeps one entry
    fn save_college(&mut self, college: NewSavedCollege) -> Result<SavedCollege>;

    /// Returns true if the college was saved for that career
    fn unsave_college(&mut self, name: &str, career: &str) -> Result<bool>;

    fn is_college_saved(&self, name: &str, career: &str) -> Result<bool>;

    /// Saved colleges, newest first
    fn saved_colleges(&self) -> Result<Vec<SavedCollege>>;
}

/// Profile kept in a JSON file. Every call re-reads the file, so
/// changes made by another process are picked up (last writer wins).
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl ProfileStore for JsonFileStore {
    fn append(&mut self, record: NewQuizRecord) -> Result<QuizRecord> {
        let mut history = load_profile(&self.path)?;
        let saved = history.prepend(record, Utc::now());
        save_profile(&self.path, &history)?;
        Ok(saved)
    }

    fn list(&self) -> Result<Vec<QuizRecord>> {
        Ok(load_profile(&self.path)?.quiz_results)
    }

    fn remove(&mut self, id: &str) -> Result<bool> {
        let mut history = load_profile(&self.path)?;
        let removed = history.remove(id);
        if removed {
            save_profile(&self.path, &history)?;
        }
        Ok(removed)
    }

    fn save_college(&mut self, college: NewSavedCollege) -> Result<SavedCollege> {
        let mut history = load_profile(&self.path)?;
        if let Some(existing) = history.saved_college(&college.name, &college.career) {
            return Ok(existing.clone());
        }
        let saved = history.save_college(college, Utc::now());
        save_profile(&self.path, &history)?;
        Ok(saved)
    }

    fn unsave_college(&mut self, name: &str, career: &str) -> Result<bool> {
        let mut history = load_profile(&self.path)?;
        let removed = history.unsave_college(name, career);
        if removed {
            save_profile(&self.path, &history)?;
        }
        Ok(removed)
    }

    fn is_college_saved(&self, name: &str, career: &str) -> Result<bool> {
        Ok(load_profile(&self.path)?.is_college_saved(name, career))
    }

    fn saved_colleges(&self) -> Result<Vec<SavedCollege>> {
        Ok(load_profile(&self.path)?.saved_colleges)
    }
}

/// In-process store, used by tests and `--no-save` style callers.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    history: ProfileHistory,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProfileStore for MemoryStore {
    fn append(&mut self, record: NewQuizRecord) -> Result<QuizRecord> {
        Ok(self.history.prepend(record, Utc::now()))
    }

    fn list(&self) -> Result<Vec<QuizRecord>> {
        Ok(self.history.quiz_results.clone())
    }

    fn remove(&mut self, id: &str) -> Result<bool> {
        Ok(self.history.remove(id))
    }

    fn save_college(&mut self, college: NewSavedCollege) -> Result<SavedCollege> {
        Ok(self.history.save_college(college, Utc::now()))
    }

    fn unsave_college(&mut self, name: &str, career: &str) -> Result<bool> {
        Ok(self.history.unsave_college(name, career))
    }

    fn is_college_saved(&self, name: &str, career: &str) -> Result<bool> {
        Ok(self.history.is_college_saved(name, career))
    }

    fn saved_colleges(&self) -> Result<Vec<SavedCollege>> {
        Ok(self.history.saved_colleges.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colleges::builtin_guide;
    use crate::scoring::{score_answers, AnswerSequence, QuestionBank};

    fn scored(codes: &str) -> (AnswerSequence, crate::scoring::QuizResult) {
        let bank = QuestionBank::reference();
        let answers = AnswerSequence::parse(codes, bank.len()).unwrap();
        let result = score_answers(&answers, &bank);
        (answers, result)
    }

    fn check_round_trip(store: &mut dyn ProfileStore) {
        let (answers, result) = scored("aaeaaeebcf");
        let saved = store
            .append(NewQuizRecord::from_result(&result, &answers))
            .unwrap();

        let listed = store.list().unwrap();
        assert_eq!(listed.len(), 1);
        let record = &listed[0];
        assert_eq!(record.id, saved.id);
        assert_eq!(record.cluster, result.cluster_name());
        assert_eq!(record.cluster_description, result.cluster_description());
        assert_eq!(
            record.careers,
            result
                .careers()
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
        );
        assert_eq!(record.answers, answers.to_codes());
    }

    #[test]
    fn test_memory_store_round_trip() {
        check_round_trip(&mut MemoryStore::new());
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        check_round_trip(&mut JsonFileStore::new(dir.path().join("profile.json")));
    }

    #[test]
    fn test_file_store_remove() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("profile.json"));
        let (answers, result) = scored("dddddddddd");

        let first = store
            .append(NewQuizRecord::from_result(&result, &answers))
            .unwrap();
        let second = store
            .append(NewQuizRecord::from_result(&result, &answers))
            .unwrap();
        assert_ne!(first.id, second.id);

        assert!(store.remove(&first.id).unwrap());
        assert!(!store.remove(&first.id).unwrap());

        let remaining = store.list().unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, second.id);
    }

    #[test]
    fn test_file_store_newest_first() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("profile.json"));

        let (a_answers, a_result) = scored("aaaaaaaaaa");
        let (f_answers, f_result) = scored("ffffffffff");
        store
            .append(NewQuizRecord::from_result(&a_result, &a_answers))
            .unwrap();
        store
            .append(NewQuizRecord::from_result(&f_result, &f_answers))
            .unwrap();

        let listed = store.list().unwrap();
        assert_eq!(listed[0].cluster, "Skilled Trades & Technical Work");
        assert_eq!(listed[1].cluster, "Technology & Engineering");
    }

    fn check_saved_colleges(store: &mut dyn ProfileStore) {
        let guide = builtin_guide("lawyer").unwrap();
        let college = &guide.colleges[0];

        assert!(!store.is_college_saved(&college.name, "lawyer").unwrap());
        let saved = store
            .save_college(NewSavedCollege::from_college(college, "lawyer"))
            .unwrap();
        assert_eq!(saved.name, "Government Law College");
        assert_eq!(saved.kind, "Government");
        assert_eq!(saved.fees, "₹3,000/year");

        let again = store
            .save_college(NewSavedCollege::from_college(college, "lawyer"))
            .unwrap();
        assert_eq!(again.id, saved.id);
        assert_eq!(store.saved_colleges().unwrap().len(), 1);
        assert!(store.is_college_saved("government law college", "lawyer").unwrap());

        assert!(store.unsave_college(&college.name, "lawyer").unwrap());
        assert!(!store.unsave_college(&college.name, "lawyer").unwrap());
        assert!(store.saved_colleges().unwrap().is_empty());
    }

    #[test]
    fn test_memory_store_saved_colleges() {
        check_saved_colleges(&mut MemoryStore::new());
    }

    #[test]
    fn test_file_store_saved_colleges() {
        let dir = tempfile::tempdir().unwrap();
        check_saved_colleges(&mut JsonFileStore::new(dir.path().join("profile.json")));
    }

    #[test]
    fn test_saved_colleges_survive_quiz_changes() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("profile.json"));
        let guide = builtin_guide("teacher").unwrap();
        store
            .save_college(NewSavedCollege::from_college(&guide.colleges[0], "teacher"))
            .unwrap();

        let (answers, result) = scored("dddddddddd");
        let record = store
            .append(NewQuizRecord::from_result(&result, &answers))
            .unwrap();
        store.remove(&record.id).unwrap();

        let saved = store.saved_colleges().unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].career, "teacher");
    }
}
