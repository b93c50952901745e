//! Category types for organizing stores, products and deals.

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A merchandise category.
///
/// The marketplace uses a fixed set of categories; strings outside the
/// set are preserved as [`Category::Other`] so that exact-match filtering
/// over them simply yields zero results instead of erroring.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    Groceries,
    Bakery,
    Electronics,
    Fashion,
    Home,
    Health,
    PersonalCare,
    Stationery,
    Cafe,
    Pharmacy,
    Sports,
    Books,
    Toys,
    Beauty,
    /// A category string outside the known set.
    Other(String),
}

impl Category {
    /// The display name, which is also the wire format.
    pub fn as_str(&self) -> &str {
        match self {
            Category::Groceries => "Groceries",
            Category::Bakery => "Bakery",
            Category::Electronics => "Electronics",
            Category::Fashion => "Fashion",
            Category::Home => "Home",
            Category::Health => "Health",
            Category::PersonalCare => "Personal Care",
            Category::Stationery => "Stationery",
            Category::Cafe => "Caf\u{e9}",
            Category::Pharmacy => "Pharmacy",
            Category::Sports => "Sports",
            Category::Books => "Books",
            Category::Toys => "Toys",
            Category::Beauty => "Beauty",
            Category::Other(name) => name,
        }
    }

    /// Parse a category name. Unknown names are preserved verbatim.
    pub fn parse(name: &str) -> Self {
        match name {
            "Groceries" => Category::Groceries,
            "Bakery" => Category::Bakery,
            "Electronics" => Category::Electronics,
            "Fashion" => Category::Fashion,
            "Home" => Category::Home,
            "Health" => Category::Health,
            "Personal Care" => Category::PersonalCare,
            "Stationery" => Category::Stationery,
            "Caf\u{e9}" => Category::Cafe,
            "Pharmacy" => Category::Pharmacy,
            "Sports" => Category::Sports,
            "Books" => Category::Books,
            "Toys" => Category::Toys,
            "Beauty" => Category::Beauty,
            other => Category::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for Category {
    fn from(s: &str) -> Self {
        Category::parse(s)
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Category::parse(&name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known() {
        assert_eq!(Category::parse("Groceries"), Category::Groceries);
        assert_eq!(Category::parse("Personal Care"), Category::PersonalCare);
        assert_eq!(Category::parse("Caf\u{e9}"), Category::Cafe);
    }

    #[test]
    fn test_parse_unknown_preserved() {
        let cat = Category::parse("Antiques");
        assert_eq!(cat, Category::Other("Antiques".to_string()));
        assert_eq!(cat.as_str(), "Antiques");
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        // Filtering is exact-match; "groceries" is a different (unknown) value.
        assert_ne!(Category::parse("groceries"), Category::Groceries);
    }

    #[test]
    fn test_wire_format() {
        let json = serde_json::to_string(&Category::Pharmacy).unwrap();
        assert_eq!(json, "\"Pharmacy\"");

        let parsed: Category = serde_json::from_str("\"Bakery\"").unwrap();
        assert_eq!(parsed, Category::Bakery);
    }
}
