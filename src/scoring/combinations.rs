use super::category::Category;

/// Blended careers for a pair of categories.
///
/// Each unordered pair is stored once; lookups try both orders.
#[derive(Debug)]
pub struct CombinationRecord {
    pub pair: (Category, Category),
    pub careers: &'static [&'static str],
}

static COMBINATIONS: [CombinationRecord; 15] = [
    CombinationRecord {
        pair: (Category::A, Category::B),
        careers: &[
            "Biomedical Engineer – designs medical devices and equipment",
            "Health Informatics Specialist – manages hospital data systems",
            "Bioinformatics Analyst – uses software to study genes and diseases",
        ],
    },
    CombinationRecord {
        pair: (Category::A, Category::C),
        careers: &[
            "FinTech Developer – builds payment and banking apps",
            "Business Analyst – turns business needs into software plans",
            "E-commerce Manager – runs online stores",
        ],
    },
    CombinationRecord {
        pair: (Category::A, Category::D),
        careers: &[
            "Educational Technologist – builds digital learning tools",
            "Computer Science Teacher – teaches coding in schools",
            "E-Governance Officer – brings government services online",
        ],
    },
    CombinationRecord {
        pair: (Category::A, Category::E),
        careers: &[
            "UI/UX Designer – designs how apps look and feel",
            "Game Developer – builds video games",
            "Animation Technologist – creates digital effects and 3D art",
        ],
    },
    CombinationRecord {
        pair: (Category::A, Category::F),
        careers: &[
            "Robotics Technician – builds and maintains robots",
            "CNC Machine Programmer – programs automated machines",
            "Electronics Repair Specialist – fixes phones and circuit boards",
        ],
    },
    CombinationRecord {
        pair: (Category::B, Category::C),
        careers: &[
            "Hospital Administrator – runs the business side of healthcare",
            "Pharmaceutical Sales Representative – connects medicines with doctors",
            "Agribusiness Manager – runs farms and food businesses",
        ],
    },
    CombinationRecord {
        pair: (Category::B, Category::D),
        careers: &[
            "Public Health Worker – runs health programs in communities",
            "Counselling Psychologist – supports people's mental health",
            "Health Educator – teaches healthy habits",
        ],
    },
    CombinationRecord {
        pair: (Category::B, Category::E),
        careers: &[
            "Medical Illustrator – draws anatomy for books and courses",
            "Science Communicator – explains science through media",
            "Art Therapist – uses art to help people heal",
        ],
    },
    CombinationRecord {
        pair: (Category::B, Category::F),
        careers: &[
            "Medical Equipment Technician – maintains hospital machines",
            "Food Processing Technician – keeps food production safe",
            "Agricultural Machinery Operator – runs modern farm equipment",
        ],
    },
    CombinationRecord {
        pair: (Category::C, Category::D),
        careers: &[
            "Human Resources Manager – hires and supports employees",
            "Microfinance Officer – helps small businesses get loans",
            "NGO Program Manager – plans and funds community projects",
        ],
    },
    CombinationRecord {
        pair: (Category::C, Category::E),
        careers: &[
            "Marketing Manager – plans campaigns that sell ideas",
            "Brand Designer – shapes how a company looks",
            "Event Planner – organizes weddings, shows, and festivals",
        ],
    },
    CombinationRecord {
        pair: (Category::C, Category::F),
        careers: &[
            "Workshop Owner – runs a repair or fabrication business",
            "Supply Chain Coordinator – moves goods from factory to shop",
            "Construction Contractor – manages building projects",
        ],
    },
    CombinationRecord {
        pair: (Category::D, Category::E),
        careers: &[
            "Drama Teacher – teaches acting and performance",
            "Documentary Filmmaker – tells real stories on film",
            "Children's Book Author – writes and illustrates for young readers",
        ],
    },
    CombinationRecord {
        pair: (Category::D, Category::F),
        careers: &[
            "Vocational Trainer – teaches trades at ITIs and training centres",
            "Disaster Relief Coordinator – organizes rescue and rebuilding",
            "Rural Development Officer – improves village infrastructure",
        ],
    },
    CombinationRecord {
        pair: (Category::E, Category::F),
        careers: &[
            "Interior Designer – plans and furnishes spaces",
            "Furniture Designer – designs and crafts furniture",
            "Fashion Technologist – designs and produces clothing",
        ],
    },
];

/// Key shown to users for a pairing, e.g. "A+E"
pub fn combination_key(primary: Category, secondary: Category) -> String {
    format!("{}+{}", primary.label(), secondary.label())
}

/// Blended careers for a primary/secondary pair, in either order.
pub fn blended_careers(primary: Category, secondary: Category) -> Option<&'static [&'static str]> {
    COMBINATIONS
        .iter()
        .find(|record| {
            record.pair == (primary, secondary) || record.pair == (secondary, primary)
        })
        .map(|record| record.careers)
}

/// All stored records, for startup validation
pub fn all_combinations() -> &'static [CombinationRecord] {
    &COMBINATIONS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_symmetric() {
        assert_eq!(
            blended_careers(Category::A, Category::E),
            blended_careers(Category::E, Category::A)
        );
        assert!(blended_careers(Category::A, Category::E).is_some());
    }

    #[test]
    fn test_every_distinct_pair_has_a_record() {
        for a in Category::ALL {
            for b in Category::ALL {
                if a != b {
                    let careers = blended_careers(a, b);
                    assert!(
                        careers.is_some_and(|c| !c.is_empty()),
                        "missing blend for {}",
                        combination_key(a, b)
                    );
                }
            }
        }
    }

    #[test]
    fn test_same_category_has_no_blend() {
        assert!(blended_careers(Category::C, Category::C).is_none());
    }

    #[test]
    fn test_combination_key() {
        assert_eq!(combination_key(Category::E, Category::A), "E+A");
    }
}
