use serde::{Deserialize, Serialize};

use super::questions::{QuestionBank, DEFAULT_WEIGHTED_POSITIONS};

/// Quiz configuration.
///
/// Example YAML:
/// ```yaml
/// quiz:
///   weighted_questions: [3, 10]
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct QuizConfig {
    /// 1-based question positions whose answers count 1.5x (default: 3 and 10)
    #[serde(default)]
    pub weighted_questions: Option<Vec<usize>>,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            weighted_questions: Some(DEFAULT_WEIGHTED_POSITIONS.to_vec()),
        }
    }
}

impl QuizConfig {
    /// Weighted positions, falling back to the reference ones
    pub fn weighted_positions(&self) -> Vec<usize> {
        self.weighted_questions
            .clone()
            .unwrap_or_else(|| DEFAULT_WEIGHTED_POSITIONS.to_vec())
    }

    /// Reference question bank with this config's weighting
    pub fn question_bank(&self) -> QuestionBank {
        QuestionBank::reference_with_weighted(&self.weighted_positions())
    }
}
