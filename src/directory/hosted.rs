use anyhow::{Context, Result};
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fmt;
use std::time::Duration;
use thiserror::Error;
use tokio_retry::{strategy::ExponentialBackoff, RetryIf};

use crate::config::DirectoryConfig;

use super::builtin::MAX_RELATED;
use super::types::{generate_slug, CareerDetail, DetailSource, RelatedCareer};

/// Row ids are integers in some deployments and UUID strings in others.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RowId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowId::Number(n) => write!(f, "{}", n),
            RowId::Text(s) => write!(f, "{}", s),
        }
    }
}

/// One failed request against the hosted directory
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RequestError {
    #[error("Directory rejected the API key (HTTP {0})")]
    Unauthorized(u16),
    #[error("Directory returned HTTP {0}")]
    Status(u16),
    #[error("Directory timed out")]
    Timeout,
    #[error("Directory request failed: {0}")]
    Transport(String),
}

impl RequestError {
    /// Network trouble, throttling and server errors are retried.
    /// A rejected key or a bad query fails on the first attempt.
    pub fn is_transient(&self) -> bool {
        match self {
            RequestError::Unauthorized(_) => false,
            RequestError::Status(code) => *code == 429 || *code >= 500,
            RequestError::Timeout | RequestError::Transport(_) => true,
        }
    }
}

/// Classify a response status
pub fn check_status(status: StatusCode) -> Result<(), RequestError> {
    match status.as_u16() {
        code @ (401 | 403) => Err(RequestError::Unauthorized(code)),
        _ if status.is_success() => Ok(()),
        code => Err(RequestError::Status(code)),
    }
}

/// Three retries, 100ms, 200ms and 400ms apart
fn retry_delays() -> impl Iterator<Item = Duration> {
    ExponentialBackoff::from_millis(2)
        .factor(50)
        .max_delay(Duration::from_secs(5))
        .take(3)
}

/// PostgREST `in` filter value, e.g. `in.(3,7)`
pub fn in_filter(ids: &[RowId]) -> String {
    let joined = ids
        .iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",");
    format!("in.({})", joined)
}

/// One row of the `career_path` table.
#[derive(Debug, Clone, Deserialize)]
pub struct CareerRow {
    pub id: RowId,
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub highlights: Option<String>,
    #[serde(default)]
    pub career_cluster_id: Option<RowId>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub salary_starting: Option<String>,
    #[serde(default)]
    pub salary_experienced: Option<String>,
    #[serde(default)]
    pub salary_senior: Option<String>,
    #[serde(default)]
    pub industry_demand: Option<String>,
    #[serde(default)]
    pub recommended_stream: Option<String>,
    #[serde(default)]
    pub education_pathway: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RelatedRow {
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct ClusterRow {
    name: String,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl CareerRow {
    pub fn into_detail(self, cluster: Option<String>, related: Vec<RelatedRow>) -> CareerDetail {
        let slug = non_blank(self.slug).unwrap_or_else(|| generate_slug(&self.name));
        let related = related
            .into_iter()
            .map(|r| RelatedCareer {
                slug: non_blank(r.slug).unwrap_or_else(|| generate_slug(&r.name)),
                name: r.name,
            })
            .collect();

        CareerDetail {
            name: self.name,
            slug,
            cluster,
            description: non_blank(self.description),
            overview: non_blank(self.overview),
            highlights: non_blank(self.highlights),
            salary_starting: non_blank(self.salary_starting),
            salary_experienced: non_blank(self.salary_experienced),
            salary_senior: non_blank(self.salary_senior),
            industry_demand: non_blank(self.industry_demand),
            recommended_stream: non_blank(self.recommended_stream),
            education_pathway: self.education_pathway.unwrap_or_default(),
            related,
            source: DetailSource::Hosted,
        }
    }
}

/// Client for a PostgREST-style career directory (e.g. a Supabase project).
#[derive(Debug, Clone)]
pub struct HostedDirectory {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HostedDirectory {
    pub fn new(config: &DirectoryConfig, api_key: String) -> Result<Self> {
        let timeout = config
            .timeout()
            .context("Invalid directory timeout")?;
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("disha/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.url.trim().trim_end_matches('/').to_string(),
            api_key,
        })
    }

    pub(crate) fn table_url(&self, table: &str, filters: &[(&str, String)]) -> Result<Url> {
        let mut url = Url::parse(&format!("{}/rest/v1/{}", self.base_url, table))
            .with_context(|| format!("Invalid directory URL: {}", self.base_url))?;
        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in filters {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    pub fn career_url(&self, slug: &str) -> Result<Url> {
        self.table_url(
            "career_path",
            &[("slug", format!("eq.{}", slug)), ("select", "*".to_string())],
        )
    }

    pub fn related_url(&self, cluster_id: &RowId, exclude_id: &RowId) -> Result<Url> {
        self.table_url(
            "career_path",
            &[
                ("select", "id,name,slug".to_string()),
                ("career_cluster_id", format!("eq.{}", cluster_id)),
                ("id", format!("neq.{}", exclude_id)),
                ("limit", MAX_RELATED.to_string()),
            ],
        )
    }

    fn cluster_url(&self, cluster_id: &RowId) -> Result<Url> {
        self.table_url(
            "career_cluster",
            &[
                ("id", format!("eq.{}", cluster_id)),
                ("select", "name".to_string()),
            ],
        )
    }

    /// GET a table query and decode the row array, retrying transient failures
    pub(crate) async fn get_rows<T: DeserializeOwned>(&self, url: Url) -> Result<Vec<T>> {
        let response = RetryIf::spawn(
            retry_delays(),
            || async {
                let response = self
                    .client
                    .get(url.clone())
                    .header("apikey", &self.api_key)
                    .header("Authorization", format!("Bearer {}", self.api_key))
                    .header("Accept", "application/json")
                    .send()
                    .await
                    .map_err(|e| {
                        if e.is_timeout() {
                            RequestError::Timeout
                        } else {
                            RequestError::Transport(e.to_string())
                        }
                    })?;

                check_status(response.status())?;
                Ok::<_, RequestError>(response)
            },
            |e: &RequestError| {
                if e.is_transient() {
                    tracing::debug!(error = %e, "retrying directory request");
                }
                e.is_transient()
            },
        )
        .await?;

        response
            .json::<Vec<T>>()
            .await
            .context("Failed to parse directory response")
    }

    /// Career id and name for a slug, without the related lookups
    pub(crate) async fn fetch_career_row(&self, slug: &str) -> Result<Option<CareerRow>> {
        let rows: Vec<CareerRow> = self.get_rows(self.career_url(slug)?).await?;
        Ok(rows.into_iter().next())
    }

    /// Fetch a career by slug. `Ok(None)` means the directory answered but
    /// has no such career.
    pub async fn fetch_career(&self, slug: &str) -> Result<Option<CareerDetail>> {
        tracing::debug!(slug, "fetching career from hosted directory");

        let Some(row) = self.fetch_career_row(slug).await? else {
            return Ok(None);
        };

        let (cluster, related) = match row.career_cluster_id.clone() {
            Some(cluster_id) => futures::join!(
                self.fetch_cluster_name(&cluster_id),
                self.fetch_related(&cluster_id, &row.id)
            ),
            None => (None, Vec::new()),
        };

        tracing::debug!(
            slug,
            related = related.len(),
            "hosted career found"
        );
        Ok(Some(row.into_detail(cluster, related)))
    }

    /// Related careers are optional: failures are logged and yield an empty list
    async fn fetch_related(&self, cluster_id: &RowId, exclude_id: &RowId) -> Vec<RelatedRow> {
        let result = match self.related_url(cluster_id, exclude_id) {
            Ok(url) => self.get_rows::<RelatedRow>(url).await,
            Err(e) => Err(e),
        };
        match result {
            Ok(mut rows) => {
                rows.truncate(MAX_RELATED);
                rows
            }
            Err(e) => {
                tracing::debug!(error = %e, "related careers unavailable");
                Vec::new()
            }
        }
    }

    async fn fetch_cluster_name(&self, cluster_id: &RowId) -> Option<String> {
        let result = match self.cluster_url(cluster_id) {
            Ok(url) => self.get_rows::<ClusterRow>(url).await,
            Err(e) => Err(e),
        };
        match result {
            Ok(rows) => rows.into_iter().next().map(|r| r.name),
            Err(e) => {
                tracing::debug!(error = %e, "career cluster name unavailable");
                None
            }
        }
    }
}
