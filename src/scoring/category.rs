use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the six career-interest dimensions a quiz answer can point to.
///
/// Declaration order matters: it is the tie-break order used when two
/// categories end up with exactly the same score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    A,
    B,
    C,
    D,
    E,
    F,
}

impl Category {
    /// All categories in declaration (tie-break) order
    pub const ALL: [Category; 6] = [
        Category::A,
        Category::B,
        Category::C,
        Category::D,
        Category::E,
        Category::F,
    ];

    /// Parse a single lowercase code ("a".."f"). Anything else is rejected,
    /// including uppercase letters and surrounding whitespace.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "a" => Some(Category::A),
            "b" => Some(Category::B),
            "c" => Some(Category::C),
            "d" => Some(Category::D),
            "e" => Some(Category::E),
            "f" => Some(Category::F),
            _ => None,
        }
    }

    pub fn code(self) -> char {
        match self {
            Category::A => 'a',
            Category::B => 'b',
            Category::C => 'c',
            Category::D => 'd',
            Category::E => 'e',
            Category::F => 'f',
        }
    }

    /// Uppercase letter used in combination keys and option labels ("A".."F")
    pub fn label(self) -> char {
        self.code().to_ascii_uppercase()
    }

    /// Position in declaration order (0..6)
    pub fn index(self) -> usize {
        self as usize
    }

    /// Short interest name shown next to score bars
    pub fn short_name(self) -> &'static str {
        match self {
            Category::A => "Tech",
            Category::B => "Health",
            Category::C => "Business",
            Category::D => "Social",
            Category::E => "Creative",
            Category::F => "Trades",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_accepts_lowercase_only() {
        assert_eq!(Category::from_code("a"), Some(Category::A));
        assert_eq!(Category::from_code("f"), Some(Category::F));
        assert_eq!(Category::from_code("A"), None);
        assert_eq!(Category::from_code("g"), None);
        assert_eq!(Category::from_code(" a"), None);
        assert_eq!(Category::from_code(""), None);
    }

    #[test]
    fn test_declaration_order() {
        for (i, category) in Category::ALL.iter().enumerate() {
            assert_eq!(category.index(), i);
        }
        assert!(Category::A < Category::F);
    }

    #[test]
    fn test_serde_uses_lowercase_codes() {
        let json = serde_json::to_string(&vec![Category::A, Category::E]).unwrap();
        assert_eq!(json, r#"["a","e"]"#);
        let parsed: Vec<Category> = serde_json::from_str(r#"["d","f"]"#).unwrap();
        assert_eq!(parsed, vec![Category::D, Category::F]);
    }

    #[test]
    fn test_label_is_uppercase() {
        assert_eq!(Category::C.label(), 'C');
        assert_eq!(Category::C.to_string(), "c");
    }
}
