use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::scoring::QuizConfig;

pub const DEFAULT_API_KEY_ENV: &str = "DISHA_DIRECTORY_KEY";
pub const DEFAULT_DIRECTORY_TIMEOUT: &str = "10s";
pub const DEFAULT_SITE_URL: &str = "https://disha.app";

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quiz: Option<QuizConfig>,
    /// Hosted career directory. Without it, career lookups use the built-in tables.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<DirectoryConfig>,
    /// Base URL for career pages opened in the browser
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_url: Option<String>,
    /// Where quiz history is kept (defaults to ~/.config/disha/profile.json)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_path: Option<PathBuf>,
    #[serde(default)]
    pub theme: ThemeChoice,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct DirectoryConfig {
    /// Project URL, e.g. https://project.supabase.co
    pub url: String,
    /// Environment variable holding the API key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key_env: Option<String>,
    /// Request timeout in humantime format (e.g. "10s", "1m")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    #[default]
    Auto,
    Dark,
    Light,
}

impl Config {
    pub fn quiz(&self) -> QuizConfig {
        self.quiz.clone().unwrap_or_default()
    }

    pub fn site_url(&self) -> &str {
        self.site_url
            .as_deref()
            .unwrap_or(DEFAULT_SITE_URL)
            .trim_end_matches('/')
    }
}

impl DirectoryConfig {
    pub fn api_key_env(&self) -> &str {
        self.api_key_env.as_deref().unwrap_or(DEFAULT_API_KEY_ENV)
    }

    /// Read the API key from the configured environment variable
    pub fn api_key(&self) -> Option<String> {
        std::env::var(self.api_key_env())
            .ok()
            .filter(|k| !k.trim().is_empty())
    }

    pub fn timeout(&self) -> Result<Duration, humantime::DurationError> {
        humantime::parse_duration(self.timeout.as_deref().unwrap_or(DEFAULT_DIRECTORY_TIMEOUT))
    }
}
