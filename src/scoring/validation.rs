use std::collections::HashSet;

use super::category::Category;
use super::clusters::{all_clusters, MIXED_CLUSTER};
use super::combinations::{all_combinations, combination_key};
use super::config::QuizConfig;
use super::questions::QuestionBank;

/// Validate quiz configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_quiz_config(config: &QuizConfig, question_count: usize) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Some(ref positions) = config.weighted_questions {
        let mut seen = HashSet::new();
        for (i, position) in positions.iter().enumerate() {
            if *position == 0 || *position > question_count {
                errors.push(format!(
                    "quiz.weighted_questions[{}]: {} is outside 1..={}",
                    i, position, question_count
                ));
            }
            if !seen.insert(*position) {
                errors.push(format!(
                    "quiz.weighted_questions[{}]: {} is listed twice",
                    i, position
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate the question bank: non-empty, positions in order, and exactly
/// one option per category in every question.
pub fn validate_question_bank(bank: &QuestionBank) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if bank.is_empty() {
        errors.push("questions: the question bank is empty".to_string());
    }

    for (i, question) in bank.questions().iter().enumerate() {
        if question.position != i + 1 {
            errors.push(format!(
                "questions[{}].position: expected {}, found {}",
                i,
                i + 1,
                question.position
            ));
        }
        if question.prompt.trim().is_empty() {
            errors.push(format!("questions[{}].prompt: must not be empty", i));
        }
        if question.options.len() != Category::ALL.len() {
            errors.push(format!(
                "questions[{}].options: expected {} options, found {}",
                i,
                Category::ALL.len(),
                question.options.len()
            ));
        }
        for category in Category::ALL {
            let count = question
                .options
                .iter()
                .filter(|o| o.category == category)
                .count();
            if count != 1 {
                errors.push(format!(
                    "questions[{}].options: category '{}' appears {} times",
                    i, category, count
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate the cluster and combination tables.
pub fn validate_reference_tables() -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    let clusters = all_clusters()
        .map(|(category, cluster)| (category.to_string(), cluster))
        .chain(std::iter::once(("mixed".to_string(), &MIXED_CLUSTER)));

    for (label, cluster) in clusters {
        if cluster.name.trim().is_empty() {
            errors.push(format!("clusters.{}.name: must not be empty", label));
        }
        if cluster.careers.is_empty() {
            errors.push(format!("clusters.{}.careers: must not be empty", label));
        }
    }

    let mut seen = HashSet::new();
    for record in all_combinations() {
        let (first, second) = record.pair;
        let key = combination_key(first, second);
        if first == second {
            errors.push(format!("combinations.{}: pairs a category with itself", key));
        }
        if !seen.insert((first.min(second), first.max(second))) {
            errors.push(format!("combinations.{}: defined more than once", key));
        }
        if record.careers.is_empty() {
            errors.push(format!("combinations.{}: has no careers", key));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{Question, QuizOption};

    fn question(position: usize, categories: &[Category]) -> Question {
        Question {
            position,
            prompt: "Pick one",
            options: categories
                .iter()
                .map(|c| QuizOption {
                    category: *c,
                    text: "option",
                })
                .collect(),
            weighted: false,
        }
    }

    #[test]
    fn test_reference_bank_is_valid() {
        assert!(validate_question_bank(&QuestionBank::reference()).is_ok());
    }

    #[test]
    fn test_reference_tables_are_valid() {
        assert!(validate_reference_tables().is_ok());
    }

    #[test]
    fn test_empty_bank_is_a_config_error() {
        let errors = validate_question_bank(&QuestionBank::new(vec![])).unwrap_err();
        assert!(errors[0].contains("empty"));
    }

    #[test]
    fn test_duplicate_category_in_question() {
        let bank = QuestionBank::new(vec![question(
            1,
            &[
                Category::A,
                Category::A,
                Category::C,
                Category::D,
                Category::E,
                Category::F,
            ],
        )]);
        let errors = validate_question_bank(&bank).unwrap_err();
        assert!(errors.iter().any(|e| e.contains("category 'a' appears 2 times")));
        assert!(errors.iter().any(|e| e.contains("category 'b' appears 0 times")));
    }

    #[test]
    fn test_missing_option_and_bad_position() {
        let bank = QuestionBank::new(vec![question(2, &Category::ALL[..5])]);
        let errors = validate_question_bank(&bank).unwrap_err();
        assert!(errors.iter().any(|e| e.contains("questions[0].position")));
        assert!(errors.iter().any(|e| e.contains("expected 6 options, found 5")));
    }

    #[test]
    fn test_default_quiz_config_is_valid() {
        assert!(validate_quiz_config(&QuizConfig::default(), 10).is_ok());
    }

    #[test]
    fn test_weighted_position_out_of_range() {
        let config = QuizConfig {
            weighted_questions: Some(vec![0, 11]),
        };
        let errors = validate_quiz_config(&config, 10).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("quiz.weighted_questions[0]"));
    }

    #[test]
    fn test_duplicate_weighted_position() {
        let config = QuizConfig {
            weighted_questions: Some(vec![3, 3]),
        };
        let errors = validate_quiz_config(&config, 10).unwrap_err();
        assert!(errors[0].contains("listed twice"));
    }
}
