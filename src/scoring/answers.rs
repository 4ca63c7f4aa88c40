use serde::Serialize;
use thiserror::Error;

use super::category::Category;

/// Rejected quiz input. Always names what was wrong and where.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnswerError {
    #[error("expected {expected} answers, got {actual}")]
    WrongLength { expected: usize, actual: usize },

    #[error("answer {position} is '{value}', expected one of a, b, c, d, e, f")]
    InvalidCode {
        /// 0-based index into the sequence
        index: usize,
        /// 1-based question number, for messages
        position: usize,
        value: String,
    },
}

/// One category code per question, in question order.
///
/// Construction validates length and codes; once built the sequence is immutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AnswerSequence(Vec<Category>);

impl AnswerSequence {
    /// Build from already-typed categories, checking the length.
    pub fn new(answers: Vec<Category>, expected_len: usize) -> Result<Self, AnswerError> {
        if answers.len() != expected_len {
            return Err(AnswerError::WrongLength {
                expected: expected_len,
                actual: answers.len(),
            });
        }
        Ok(Self(answers))
    }

    /// Build from raw codes such as `["a", "c", ...]`.
    ///
    /// The first invalid code is reported before the length is checked, so a
    /// short sequence with a bad entry reports the bad entry.
    pub fn from_codes<S: AsRef<str>>(codes: &[S], expected_len: usize) -> Result<Self, AnswerError> {
        let answers = codes
            .iter()
            .enumerate()
            .map(|(index, raw)| {
                let raw = raw.as_ref();
                Category::from_code(raw).ok_or_else(|| AnswerError::InvalidCode {
                    index,
                    position: index + 1,
                    value: raw.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(answers, expected_len)
    }

    /// Parse command-line input: comma separated codes ("a, b, c"), space
    /// separated codes ("a b c") or a run of single letters ("abc").
    ///
    /// Every comma delimits an entry, so a blank between commas is reported
    /// as an invalid code rather than skipped.
    pub fn parse(input: &str, expected_len: usize) -> Result<Self, AnswerError> {
        let trimmed = input.trim();
        let codes: Vec<&str> = if trimmed.contains(',') {
            trimmed.split(',').map(str::trim).collect()
        } else if trimmed.contains(char::is_whitespace) {
            trimmed.split_whitespace().collect()
        } else {
            trimmed
                .char_indices()
                .map(|(i, c)| &trimmed[i..i + c.len_utf8()])
                .collect()
        };
        Self::from_codes(&codes, expected_len)
    }

    pub fn as_slice(&self) -> &[Category] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Category> {
        self.0.get(index).copied()
    }

    /// Lowercase codes, as stored in the profile history
    pub fn to_codes(&self) -> Vec<String> {
        self.0.iter().map(|c| c.code().to_string()).collect()
    }
}
