use super::schema::Config;
use crate::scoring::validate_quiz_config;

/// Validate the loaded configuration against a question bank of `question_count` questions.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &Config, question_count: usize) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Some(ref quiz) = config.quiz {
        if let Err(quiz_errors) = validate_quiz_config(quiz, question_count) {
            errors.extend(quiz_errors);
        }
    }

    if let Some(ref directory) = config.directory {
        check_url("directory.url", &directory.url, &mut errors);
        if directory.api_key_env().trim().is_empty() {
            errors.push("directory.api_key_env: must not be empty".to_string());
        }
        match directory.timeout() {
            Ok(d) if d.is_zero() => {
                errors.push("directory.timeout: must be greater than zero".to_string());
            }
            Ok(_) => {}
            Err(e) => errors.push(format!(
                "directory.timeout: invalid duration '{}': {}",
                directory.timeout.as_deref().unwrap_or_default(),
                e
            )),
        }
    }

    if let Some(ref site_url) = config.site_url {
        check_url("site_url", site_url, &mut errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_url(field: &str, value: &str, errors: &mut Vec<String>) {
    let value = value.trim();
    if value.is_empty() {
        errors.push(format!("{}: must not be empty", field));
    } else if reqwest::Url::parse(value).is_err() {
        errors.push(format!("{}: '{}' is not a valid URL", field, value));
    }
}
