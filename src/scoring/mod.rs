pub mod answers;
pub mod category;
pub mod clusters;
pub mod combinations;
pub mod config;
pub mod engine;
pub mod questions;
pub mod validation;

pub use answers::{AnswerError, AnswerSequence};
pub use category::Category;
pub use clusters::{all_clusters, split_career, CareerCluster, MIXED_CLUSTER};
pub use combinations::{blended_careers, combination_key};
pub use config::QuizConfig;
pub use engine::{classify, score_answers, tally, QuizOutcome, QuizResult, ScoreVector};
pub use questions::{Question, QuestionBank, QuizOption, NORMAL_WEIGHT, WEIGHTED_WEIGHT};
pub use validation::{validate_question_bank, validate_quiz_config, validate_reference_tables};
