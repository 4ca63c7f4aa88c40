use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::colleges::College;
use crate::scoring::{AnswerSequence, QuizResult};

pub const PROFILE_VERSION: u32 = 1;

/// Saved profile: quiz history and saved colleges, newest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileHistory {
    pub version: u32,
    #[serde(default)]
    pub quiz_results: Vec<QuizRecord>,
    #[serde(default)]
    pub saved_colleges: Vec<SavedCollege>,
}

/// One completed quiz as stored in the profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizRecord {
    pub id: String,
    pub date: DateTime<Utc>,
    pub cluster: String,
    pub cluster_description: String,
    pub careers: Vec<String>,
    pub answers: Vec<String>,
}

/// What a caller hands to the store. Id and date are assigned on append.
#[derive(Debug, Clone, PartialEq)]
pub struct NewQuizRecord {
    pub cluster: String,
    pub cluster_description: String,
    pub careers: Vec<String>,
    pub answers: Vec<String>,
}

impl NewQuizRecord {
    pub fn from_result(result: &QuizResult, answers: &AnswerSequence) -> Self {
        Self {
            cluster: result.cluster_name(),
            cluster_description: result.cluster_description().to_string(),
            careers: result.careers().into_iter().map(str::to_string).collect(),
            answers: answers.to_codes(),
        }
    }
}

/// A college bookmarked for one career.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedCollege {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub fees: String,
    /// Career slug the college was saved under
    pub career: String,
    pub saved_date: DateTime<Utc>,
}

impl SavedCollege {
    /// Same college and career. Names compare case-insensitively.
    pub fn matches(&self, name: &str, career: &str) -> bool {
        self.name.eq_ignore_ascii_case(name.trim()) && self.career == career
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewSavedCollege {
    pub name: String,
    pub location: String,
    pub kind: String,
    pub fees: String,
    pub career: String,
}

impl NewSavedCollege {
    pub fn from_college(college: &College, career_slug: &str) -> Self {
        Self {
            name: college.name.clone(),
            location: college.location.clone().unwrap_or_default(),
            kind: college.kind.label().to_string(),
            fees: college.annual_fees.clone().unwrap_or_default(),
            career: career_slug.to_string(),
        }
    }
}

impl Default for ProfileHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileHistory {
    /// Create an empty history with the current version
    pub fn new() -> Self {
        Self {
            version: PROFILE_VERSION,
            quiz_results: Vec::new(),
            saved_colleges: Vec::new(),
        }
    }

    /// Epoch-millisecond id for `now`, bumped past any id already taken
    fn next_id(&self, now: DateTime<Utc>) -> String {
        let mut id_value = now.timestamp_millis();
        loop {
            let id = id_value.to_string();
            let taken = self.find(&id).is_some() || self.saved_colleges.iter().any(|c| c.id == id);
            if !taken {
                return id;
            }
            id_value += 1;
        }
    }

    /// Prepend a record stamped with `now`.
    ///
    /// Ids are epoch milliseconds; when two records land in the same
    /// millisecond the id is bumped until it is unique.
    pub fn prepend(&mut self, record: NewQuizRecord, now: DateTime<Utc>) -> QuizRecord {
        let saved = QuizRecord {
            id: self.next_id(now),
            date: now,
            cluster: record.cluster,
            cluster_description: record.cluster_description,
            careers: record.careers,
            answers: record.answers,
        };
        self.quiz_results.insert(0, saved.clone());
        saved
    }

    /// Remove a record by id.
    /// Returns true if the record existed, false otherwise
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.quiz_results.len();
        self.quiz_results.retain(|r| r.id != id);
        self.quiz_results.len() != before
    }

    pub fn find(&self, id: &str) -> Option<&QuizRecord> {
        self.quiz_results.iter().find(|r| r.id == id)
    }

    pub fn records(&self) -> &[QuizRecord] {
        &self.quiz_results
    }

    /// Save a college, newest first. Saving the same college for the same
    /// career again returns the existing entry unchanged.
    pub fn save_college(&mut self, college: NewSavedCollege, now: DateTime<Utc>) -> SavedCollege {
        if let Some(existing) = self.saved_college(&college.name, &college.career) {
            return existing.clone();
        }

        let saved = SavedCollege {
            id: self.next_id(now),
            name: college.name,
            location: college.location,
            kind: college.kind,
            fees: college.fees,
            career: college.career,
            saved_date: now,
        };
        self.saved_colleges.insert(0, saved.clone());
        saved
    }

    /// Returns true if the college was saved for that career
    pub fn unsave_college(&mut self, name: &str, career: &str) -> bool {
        let before = self.saved_colleges.len();
        self.saved_colleges.retain(|c| !c.matches(name, career));
        self.saved_colleges.len() != before
    }

    pub fn saved_college(&self, name: &str, career: &str) -> Option<&SavedCollege> {
        self.saved_colleges.iter().find(|c| c.matches(name, career))
    }

    pub fn is_college_saved(&self, name: &str, career: &str) -> bool {
        self.saved_college(name, career).is_some()
    }

    pub fn saved_colleges(&self) -> &[SavedCollege] {
        &self.saved_colleges
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn new_record(cluster: &str) -> NewQuizRecord {
        NewQuizRecord {
            cluster: cluster.to_string(),
            cluster_description: "desc".to_string(),
            careers: vec!["Teacher".to_string()],
            answers: vec!["d".to_string(); 10],
        }
    }

    fn at(millis: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(millis).unwrap()
    }

    #[test]
    fn test_new_history_empty() {
        let history = ProfileHistory::new();
        assert_eq!(history.version, 1);
        assert!(history.records().is_empty());
    }

    #[test]
    fn test_prepend_puts_newest_first() {
        let mut history = ProfileHistory::new();
        history.prepend(new_record("first"), at(1_000));
        history.prepend(new_record("second"), at(2_000));

        assert_eq!(history.records()[0].cluster, "second");
        assert_eq!(history.records()[1].cluster, "first");
        assert_eq!(history.records()[0].id, "2000");
    }

    #[test]
    fn test_ids_unique_within_same_millisecond() {
        let mut history = ProfileHistory::new();
        let a = history.prepend(new_record("a"), at(5_000));
        let b = history.prepend(new_record("b"), at(5_000));
        let c = history.prepend(new_record("c"), at(5_000));

        assert_eq!(a.id, "5000");
        assert_eq!(b.id, "5001");
        assert_eq!(c.id, "5002");
    }

    #[test]
    fn test_remove() {
        let mut history = ProfileHistory::new();
        let saved = history.prepend(new_record("a"), at(1));
        assert!(history.remove(&saved.id));
        assert!(history.records().is_empty());
    }

    #[test]
    fn test_remove_missing() {
        let mut history = ProfileHistory::new();
        assert!(!history.remove("42"));
    }

    fn new_college(name: &str, career: &str) -> NewSavedCollege {
        NewSavedCollege {
            name: name.to_string(),
            location: "Bangalore".to_string(),
            kind: "Government".to_string(),
            fees: "₹8,000/year".to_string(),
            career: career.to_string(),
        }
    }

    #[test]
    fn test_save_college_is_idempotent() {
        let mut history = ProfileHistory::new();
        let first = history.save_college(new_college("UVCE", "civil-engineer"), at(1_000));
        let again = history.save_college(new_college("uvce", "civil-engineer"), at(2_000));

        assert_eq!(first, again);
        assert_eq!(history.saved_colleges().len(), 1);
        assert_eq!(history.saved_colleges()[0].saved_date, at(1_000));
    }

    #[test]
    fn test_same_college_for_another_career_is_separate() {
        let mut history = ProfileHistory::new();
        history.save_college(new_college("UVCE", "civil-engineer"), at(1_000));
        history.save_college(new_college("UVCE", "software-developer"), at(2_000));

        assert_eq!(history.saved_colleges().len(), 2);
        assert_eq!(history.saved_colleges()[0].career, "software-developer");
        assert!(history.is_college_saved("UVCE", "civil-engineer"));
        assert!(!history.is_college_saved("UVCE", "lawyer"));
    }

    #[test]
    fn test_unsave_college() {
        let mut history = ProfileHistory::new();
        history.save_college(new_college("UVCE", "civil-engineer"), at(1_000));

        assert!(!history.unsave_college("UVCE", "lawyer"));
        assert!(history.unsave_college(" UVCE ", "civil-engineer"));
        assert!(!history.is_college_saved("UVCE", "civil-engineer"));
        assert!(!history.unsave_college("UVCE", "civil-engineer"));
    }

    #[test]
    fn test_college_and_quiz_ids_do_not_collide() {
        let mut history = ProfileHistory::new();
        let college = history.save_college(new_college("UVCE", "civil-engineer"), at(7_000));
        let quiz = history.prepend(new_record("a"), at(7_000));
        assert_eq!(college.id, "7000");
        assert_eq!(quiz.id, "7001");
    }

    #[test]
    fn test_json_uses_camel_case() {
        let mut history = ProfileHistory::new();
        history.prepend(new_record("Social & Education"), at(1_700_000_000_000));
        let json = serde_json::to_value(&history).unwrap();

        assert!(json.get("quizResults").is_some());
        assert_eq!(json["quizResults"][0]["clusterDescription"], "desc");
        assert_eq!(json["quizResults"][0]["id"], "1700000000000");
    }

    #[test]
    fn test_saved_college_json_keys() {
        let mut history = ProfileHistory::new();
        history.save_college(new_college("UVCE", "civil-engineer"), at(1_700_000_000_000));
        let json = serde_json::to_value(&history).unwrap();

        let saved = &json["savedColleges"][0];
        assert_eq!(saved["type"], "Government");
        assert_eq!(saved["career"], "civil-engineer");
        assert!(saved.get("savedDate").is_some());
    }
}
