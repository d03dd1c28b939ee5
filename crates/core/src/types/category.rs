//! Product categories and grid filters.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when parsing a [`Category`] or [`CategoryFilter`] from
/// a raw filter token.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown category: {0}")]
pub struct CategoryParseError(pub String);

/// A product category.
///
/// The catalog is closed, so the categories are a closed enum rather than
/// free-form strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Travel,
    Play,
    Care,
}

impl Category {
    /// The lowercase token used by filter controls and serialized data.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Travel => "travel",
            Self::Play => "play",
            Self::Care => "care",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "travel" => Ok(Self::Travel),
            "play" => Ok(Self::Play),
            "care" => Ok(Self::Care),
            other => Err(CategoryParseError(other.to_owned())),
        }
    }
}

/// A product-grid filter: either the `all` sentinel or one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CategoryFilter {
    /// Matches every product.
    #[default]
    All,
    /// Matches products in exactly one category.
    #[serde(untagged)]
    Only(Category),
}

impl CategoryFilter {
    /// Whether a product in `category` passes this filter.
    #[must_use]
    pub fn matches(&self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(only) => *only == category,
        }
    }

    /// The lowercase token used by filter controls.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(category) => category.as_str(),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for CategoryFilter {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(Self::All);
        }
        s.parse().map(Self::Only)
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        Self::Only(category)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_all_matches_everything() {
        assert!(CategoryFilter::All.matches(Category::Travel));
        assert!(CategoryFilter::All.matches(Category::Play));
        assert!(CategoryFilter::All.matches(Category::Care));
    }

    #[test]
    fn test_only_matches_its_category() {
        let filter = CategoryFilter::Only(Category::Play);
        assert!(filter.matches(Category::Play));
        assert!(!filter.matches(Category::Travel));
    }

    #[test]
    fn test_from_str() {
        let filter: CategoryFilter = "all".parse().unwrap();
        assert_eq!(filter, CategoryFilter::All);

        let filter: CategoryFilter = "care".parse().unwrap();
        assert_eq!(filter, CategoryFilter::Only(Category::Care));

        assert!("toys".parse::<CategoryFilter>().is_err());
    }

    #[test]
    fn test_serde_tokens() {
        let json = serde_json::to_string(&Category::Travel).unwrap();
        assert_eq!(json, "\"travel\"");

        let filter: CategoryFilter = serde_json::from_str("\"play\"").unwrap();
        assert_eq!(filter, CategoryFilter::Only(Category::Play));

        let all: CategoryFilter = serde_json::from_str("\"all\"").unwrap();
        assert_eq!(all, CategoryFilter::All);
    }
}
