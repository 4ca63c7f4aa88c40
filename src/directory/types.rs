use serde::Serialize;

use crate::scoring::split_career;

/// Where a career's details came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DetailSource {
    Hosted,
    Builtin,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelatedCareer {
    pub name: String,
    pub slug: String,
}

impl RelatedCareer {
    pub fn from_name(name: &str) -> Self {
        Self {
            name: name.to_string(),
            slug: generate_slug(name),
        }
    }
}

/// Everything known about one career.
///
/// Built-in entries only carry a name, a short description and a cluster;
/// the hosted directory fills in the rest when available.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CareerDetail {
    pub name: String,
    pub slug: String,
    pub cluster: Option<String>,
    pub description: Option<String>,
    pub overview: Option<String>,
    pub highlights: Option<String>,
    pub salary_starting: Option<String>,
    pub salary_experienced: Option<String>,
    pub salary_senior: Option<String>,
    pub industry_demand: Option<String>,
    pub recommended_stream: Option<String>,
    pub education_pathway: Vec<String>,
    pub related: Vec<RelatedCareer>,
    pub source: DetailSource,
}

impl CareerDetail {
    pub fn has_salary(&self) -> bool {
        self.salary_starting.is_some()
            || self.salary_experienced.is_some()
            || self.salary_senior.is_some()
    }
}

/// URL-safe identifier for a career name.
///
/// Lowercases, turns every run of characters other than ASCII letters and
/// digits into a single `-`, then trims leading and trailing dashes.
/// Entries written as "Title – description" are slugged on the title alone.
pub fn generate_slug(name: &str) -> String {
    let (title, _) = split_career(name);
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;

    for c in title.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else {
            pending_dash = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_simple() {
        assert_eq!(generate_slug("Software Developer"), "software-developer");
        assert_eq!(generate_slug("IAS Officer"), "ias-officer");
    }

    #[test]
    fn test_slug_collapses_punctuation() {
        assert_eq!(generate_slug("UI/UX Designer"), "ui-ux-designer");
        assert_eq!(generate_slug("  Film & Video -- Creator!! "), "film-video-creator");
    }

    #[test]
    fn test_slug_uses_title_only() {
        assert_eq!(
            generate_slug("Nurse – cares for patients in hospitals and clinics"),
            "nurse"
        );
    }

    #[test]
    fn test_slug_of_slug_is_unchanged() {
        assert_eq!(generate_slug("data-analyst"), "data-analyst");
    }

    #[test]
    fn test_slug_non_ascii_becomes_separator() {
        assert_eq!(generate_slug("Café Owner"), "caf-owner");
        assert_eq!(generate_slug("***"), "");
    }
}
