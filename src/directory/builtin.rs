use crate::scoring::{all_clusters, split_career, CareerCluster, Category, MIXED_CLUSTER};

use super::types::{generate_slug, CareerDetail, DetailSource, RelatedCareer};

/// Related careers listed for a built-in entry
pub const MAX_RELATED: usize = 5;

/// A career from the built-in cluster tables.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuiltinCareer {
    pub entry: &'static str,
    /// None for the multi-talented profile
    pub category: Option<Category>,
    pub cluster: &'static CareerCluster,
}

impl BuiltinCareer {
    pub fn title(&self) -> &'static str {
        split_career(self.entry).0
    }

    pub fn description(&self) -> Option<&'static str> {
        split_career(self.entry).1
    }

    pub fn slug(&self) -> String {
        generate_slug(self.entry)
    }

    fn into_detail(self) -> CareerDetail {
        let own_slug = self.slug();
        let related = self
            .cluster
            .careers
            .iter()
            .map(|entry| RelatedCareer::from_name(split_career(entry).0))
            .filter(|r| r.slug != own_slug)
            .take(MAX_RELATED)
            .collect();

        CareerDetail {
            name: self.title().to_string(),
            slug: own_slug,
            cluster: Some(self.cluster.name.to_string()),
            description: self.description().map(str::to_string),
            overview: None,
            highlights: None,
            salary_starting: None,
            salary_experienced: None,
            salary_senior: None,
            industry_demand: None,
            recommended_stream: None,
            education_pathway: Vec::new(),
            related,
            source: DetailSource::Builtin,
        }
    }
}

/// Every built-in career: the six clusters in category order, then the
/// multi-talented profile.
pub fn builtin_careers() -> impl Iterator<Item = BuiltinCareer> {
    let clustered = all_clusters().flat_map(|(category, cluster)| {
        cluster.careers.iter().map(move |entry| BuiltinCareer {
            entry: *entry,
            category: Some(category),
            cluster,
        })
    });
    let mixed = MIXED_CLUSTER.careers.iter().map(|entry| BuiltinCareer {
        entry: *entry,
        category: None,
        cluster: &MIXED_CLUSTER,
    });
    clustered.chain(mixed)
}

/// Resolve a career name or slug from the built-in tables.
/// The first entry with a matching slug wins.
pub fn lookup_builtin(query: &str) -> Option<CareerDetail> {
    let slug = generate_slug(query);
    if slug.is_empty() {
        return None;
    }
    builtin_careers()
        .find(|career| career.slug() == slug)
        .map(BuiltinCareer::into_detail)
}

/// Filter the built-in careers by cluster and/or a case-insensitive search
/// term matched against title and description.
///
/// A cluster filter leaves out the multi-talented profile.
pub fn browse_builtin(category: Option<Category>, search: Option<&str>) -> Vec<BuiltinCareer> {
    let needle = search
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty());

    builtin_careers()
        .filter(|career| category.is_none() || career.category == category)
        .filter(|career| match needle {
            Some(ref n) => career.entry.to_lowercase().contains(n.as_str()),
            None => true,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_name_and_slug() {
        let by_name = lookup_builtin("Software Developer").unwrap();
        let by_slug = lookup_builtin("software-developer").unwrap();
        assert_eq!(by_name, by_slug);
        assert_eq!(by_name.cluster.as_deref(), Some("Technology & Engineering"));
        assert_eq!(by_name.source, DetailSource::Builtin);
        assert!(by_name.description.is_some());
    }

    #[test]
    fn test_related_excludes_self_and_is_capped() {
        let detail = lookup_builtin("nurse").unwrap();
        assert!(detail.related.len() <= MAX_RELATED);
        assert!(!detail.related.is_empty());
        assert!(detail.related.iter().all(|r| r.slug != "nurse"));
    }

    #[test]
    fn test_lookup_mixed_profile_career() {
        let detail = lookup_builtin("Product Manager").unwrap();
        assert_eq!(detail.cluster.as_deref(), Some("Multi-Talented Explorer"));
    }

    #[test]
    fn test_lookup_unknown() {
        assert!(lookup_builtin("Astronaut Poet").is_none());
        assert!(lookup_builtin("--").is_none());
    }

    #[test]
    fn test_browse_by_cluster() {
        let careers = browse_builtin(Some(Category::B), None);
        assert!(!careers.is_empty());
        assert!(careers.iter().all(|c| c.category == Some(Category::B)));
        assert_eq!(careers.len(), Category::B.cluster().careers.len());
    }

    #[test]
    fn test_browse_by_search_is_case_insensitive() {
        let careers = browse_builtin(None, Some("ENGINEER"));
        assert!(careers.iter().any(|c| c.title() == "Civil Engineer"));
        assert!(careers
            .iter()
            .all(|c| c.entry.to_lowercase().contains("engineer")));
    }

    #[test]
    fn test_browse_everything() {
        let total: usize = all_clusters().map(|(_, c)| c.careers.len()).sum::<usize>()
            + MIXED_CLUSTER.careers.len();
        assert_eq!(browse_builtin(None, None).len(), total);
        assert_eq!(browse_builtin(None, Some("   ")).len(), total);
    }
}
