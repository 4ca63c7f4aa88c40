pub mod colleges;
pub mod formatter;

pub use colleges::{format_college_guide, format_college_guide_json, format_exam, format_saved_colleges};
pub use formatter::{
    format_age, format_career_detail, format_career_list, format_history, format_quiz_json,
    format_quiz_result, score_bar, should_use_colors, truncate_title, QuizReport,
};
