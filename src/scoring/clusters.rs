use serde::Serialize;

use super::category::Category;

/// Reference description of a career cluster.
#[derive(Debug, PartialEq, Serialize)]
pub struct CareerCluster {
    pub name: &'static str,
    pub description: &'static str,
    /// One sentence describing how people in this cluster like to work
    pub style: &'static str,
    /// Representative careers, most typical first. Entries may carry a short
    /// explanation after an en dash: "Title – description".
    pub careers: &'static [&'static str],
}

/// Separator between a career title and its explanation
pub const CAREER_SEPARATOR: &str = " – ";

/// Split "Title – description" into its parts. Plain titles have no description.
pub fn split_career(entry: &str) -> (&str, Option<&str>) {
    match entry.split_once(CAREER_SEPARATOR) {
        Some((title, description)) => (title.trim(), Some(description.trim())),
        None => (entry.trim(), None),
    }
}

static CLUSTERS: [CareerCluster; 6] = [
    CareerCluster {
        name: "Technology & Engineering",
        description: "Building the future with technology",
        style: "You enjoy solving complex problems, working with technology, and creating innovative solutions",
        careers: &[
            "Software Developer – builds apps, websites, and the systems behind them",
            "Data Analyst – finds patterns in numbers to help people decide",
            "Civil Engineer – designs roads, bridges, and buildings",
            "IT Support Specialist – keeps computers and networks running",
            "Computer Hardware Technician – assembles and repairs devices",
        ],
    },
    CareerCluster {
        name: "Health & Science",
        description: "Caring for people and discovering new knowledge",
        style: "You enjoy helping others stay healthy, conducting research, and understanding how the world works",
        careers: &[
            "Nurse – cares for patients in hospitals and clinics",
            "Lab Technician – runs the tests that doctors rely on",
            "Pharmacist – prepares medicines and explains how to use them",
            "Paramedic – gives emergency care on the way to hospital",
            "Agriculture Scientist – helps farms grow more with less",
            "Environmental Specialist – protects water, soil, and forests",
        ],
    },
    CareerCluster {
        name: "Business & Finance",
        description: "Managing resources and building enterprises",
        style: "You enjoy working with money, planning business strategies, and creating economic opportunities",
        careers: &[
            "Accountant – keeps the books and files taxes for businesses",
            "Banking Professional – manages loans, savings, and customer accounts",
            "Sales Executive – finds customers and closes deals",
            "Entrepreneur – starts and runs a business of your own",
            "Store Manager – runs the daily work of a shop or outlet",
        ],
    },
    CareerCluster {
        name: "Social & Education",
        description: "Guiding others and building communities",
        style: "You enjoy teaching, helping people, and making your community a better place",
        careers: &[
            "Teacher – helps students learn and grow",
            "Social Worker – supports families through hard times",
            "Lawyer – defends people's rights in and out of court",
            "Government Officer – runs public services and schemes",
            "Community Leader – organizes people around local causes",
        ],
    },
    CareerCluster {
        name: "Creative & Media",
        description: "Expressing ideas and inspiring others",
        style: "You enjoy creating beautiful things, telling stories, and expressing your imagination",
        careers: &[
            "Graphic Designer – creates posters, logos, and layouts",
            "Animator – brings characters and stories to life",
            "Journalist – reports news and tells real stories",
            "Musician – composes and performs music",
            "Film/Video Creator – shoots and edits videos and films",
            "Writer – writes books, scripts, and articles",
        ],
    },
    CareerCluster {
        name: "Skilled Trades & Technical Work",
        description: "Building and fixing with your hands",
        style: "You enjoy working with tools, creating practical solutions, and building things that people need",
        careers: &[
            "Electrician – wires homes and repairs electrical systems",
            "Mechanic – services and repairs vehicles and engines",
            "Plumber – installs and fixes water and gas lines",
            "Carpenter – builds furniture and wooden structures",
            "Welder – joins metal parts for buildings and machines",
            "Chef – cooks and runs professional kitchens",
        ],
    },
];

/// Outcome shown when three or more categories are nearly tied.
pub static MIXED_CLUSTER: CareerCluster = CareerCluster {
    name: "Multi-Talented Explorer",
    description: "Your interests span several career areas",
    style: "You enjoy many kinds of work and could thrive in roles that mix different skills",
    careers: &[
        "Product Manager – connects technology, business, and people",
        "Educational Technologist – builds tools that help people learn",
        "Social Entrepreneur – runs a business that solves a community problem",
        "Content Strategist – plans stories and media for organizations",
        "Design Engineer – makes products that work well and look good",
    ],
};

impl Category {
    /// Reference cluster for this category
    pub fn cluster(self) -> &'static CareerCluster {
        &CLUSTERS[self.index()]
    }
}

/// All clusters in category order
pub fn all_clusters() -> impl Iterator<Item = (Category, &'static CareerCluster)> {
    Category::ALL.into_iter().map(|c| (c, c.cluster()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_has_a_cluster() {
        for (category, cluster) in all_clusters() {
            assert!(!cluster.name.is_empty(), "{} has no name", category);
            assert!(!cluster.careers.is_empty(), "{} has no careers", category);
        }
    }

    #[test]
    fn test_technology_cluster_is_a() {
        assert_eq!(Category::A.cluster().name, "Technology & Engineering");
        assert_eq!(Category::F.cluster().name, "Skilled Trades & Technical Work");
    }

    #[test]
    fn test_split_career_with_description() {
        let (title, description) = split_career("Nurse – cares for patients");
        assert_eq!(title, "Nurse");
        assert_eq!(description, Some("cares for patients"));
    }

    #[test]
    fn test_split_career_plain_title() {
        let (title, description) = split_career("Chef");
        assert_eq!(title, "Chef");
        assert!(description.is_none());
    }

    #[test]
    fn test_hyphenated_title_is_not_split() {
        // Only the spaced en dash separates title from description
        let (title, description) = split_career("Film/Video Creator");
        assert_eq!(title, "Film/Video Creator");
        assert!(description.is_none());
    }
}
