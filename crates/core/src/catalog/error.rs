//! # Catalog Errors
//!
//! Everything that can go wrong while turning a static definition into a
//! [`Catalog`](super::Catalog). Queries against a built index never fail, so
//! this type only shows up at construction time.

use std::fmt;
use thiserror::Error;

/// Where an item sits inside the hierarchy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemLocation {
    pub category: String,
    pub sub_category: Option<String>,
}

impl ItemLocation {
    pub fn new(category: &str, sub_category: Option<&str>) -> Self {
        Self {
            category: category.to_string(),
            sub_category: sub_category.map(str::to_string),
        }
    }
}

impl fmt::Display for ItemLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.sub_category {
            Some(sub) => write!(f, "category '{}' / subcategory '{}'", self.category, sub),
            None => write!(f, "category '{}'", self.category),
        }
    }
}

/// Construction-time validation failure for a catalog definition.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The embedded JSON did not match the expected shape.
    #[error("catalog definition could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("category name must not be blank")]
    BlankCategoryName,

    #[error("duplicate category '{0}'")]
    DuplicateCategory(String),

    /// The name collides with the synthetic "All" tab.
    #[error("category name '{0}' is reserved")]
    ReservedCategoryName(String),

    #[error("category '{category}' has a subcategory with a blank name")]
    BlankSubCategoryName { category: String },

    #[error("category '{category}' declares subcategory '{sub_category}' more than once")]
    DuplicateSubCategory {
        category: String,
        sub_category: String,
    },

    #[error("{location} contains an item with a blank title")]
    BlankTitle { location: ItemLocation },

    #[error("item '{title}' in {location} has a blank url")]
    BlankUrl {
        location: ItemLocation,
        title: String,
    },

    #[error("{location} lists '{title}' more than once")]
    DuplicateTitle {
        location: ItemLocation,
        title: String,
    },
}
