pub mod builtin;
pub mod hosted;
pub mod types;

pub use builtin::{browse_builtin, builtin_careers, lookup_builtin, BuiltinCareer};
pub use hosted::HostedDirectory;
pub use types::{generate_slug, CareerDetail, DetailSource, RelatedCareer};

use thiserror::Error;

use crate::config::Config;

#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("no career matches '{0}'")]
    NotFound(String),
    /// The hosted directory could not be reached and nothing built-in matched
    #[error("nothing built-in matches '{query}' and the career directory is unavailable: {reason}")]
    Unavailable { query: String, reason: String },
    #[error("no college list for '{0}'")]
    NoColleges(String),
    #[error("no entrance exam matches '{0}'")]
    ExamNotFound(String),
}

impl DirectoryError {
    /// Only an unreachable directory is a network failure; every other
    /// variant means the query matched nothing.
    pub fn is_network(&self) -> bool {
        matches!(self, DirectoryError::Unavailable { .. })
    }
}

/// Career lookups: the hosted directory when configured, the built-in
/// tables otherwise or whenever the hosted lookup comes back empty.
#[derive(Debug, Clone, Default)]
pub struct CareerDirectory {
    hosted: Option<HostedDirectory>,
}

impl CareerDirectory {
    /// Built-in tables only
    pub fn builtin() -> Self {
        Self { hosted: None }
    }

    pub fn with_hosted(hosted: HostedDirectory) -> Self {
        Self {
            hosted: Some(hosted),
        }
    }

    /// Build from config. A configured directory without an API key in the
    /// environment falls back to the built-in tables with a warning.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let Some(ref directory) = config.directory else {
            return Ok(Self::builtin());
        };
        match directory.api_key() {
            Some(key) => Ok(Self::with_hosted(HostedDirectory::new(directory, key)?)),
            None => {
                tracing::warn!(
                    "{} is not set; using built-in career data",
                    directory.api_key_env()
                );
                Ok(Self::builtin())
            }
        }
    }

    pub fn is_hosted(&self) -> bool {
        self.hosted.is_some()
    }

    pub fn hosted(&self) -> Option<&HostedDirectory> {
        self.hosted.as_ref()
    }

    /// Look up a career by name or slug.
    pub async fn lookup(&self, query: &str) -> Result<CareerDetail, DirectoryError> {
        let slug = generate_slug(query);
        if slug.is_empty() {
            return Err(DirectoryError::NotFound(query.to_string()));
        }

        let mut hosted_failure = None;
        if let Some(ref hosted) = self.hosted {
            match hosted.fetch_career(&slug).await {
                Ok(Some(detail)) => return Ok(detail),
                Ok(None) => {
                    tracing::info!(slug = %slug, "career not in hosted directory, using built-in data");
                }
                Err(e) => {
                    tracing::warn!(
                        "Career directory unavailable, using built-in data: {:#}",
                        e
                    );
                    hosted_failure = Some(format!("{:#}", e));
                }
            }
        }

        match (lookup_builtin(&slug), hosted_failure) {
            (Some(detail), _) => Ok(detail),
            (None, Some(reason)) => Err(DirectoryError::Unavailable {
                query: query.to_string(),
                reason,
            }),
            (None, None) => Err(DirectoryError::NotFound(query.to_string())),
        }
    }
}

/// Public page for a career, e.g. https://disha.app/career/nurse
pub fn career_page_url(site_url: &str, slug: &str) -> String {
    format!("{}/career/{}", site_url.trim_end_matches('/'), slug)
}
