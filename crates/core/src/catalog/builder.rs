//! # Catalog Builder
//!
//! Assembles categories in order and validates the whole hierarchy once.
//! A malformed definition is a startup failure; nothing half-built is ever
//! handed to the query side.

use std::collections::HashSet;

use super::error::{CatalogError, ItemLocation};
use super::index::ALL_CATEGORIES;
use super::model::{Catalog, Category, Item};

/// Collects categories in the order they should be browsed.
///
/// ```rust,ignore
/// use almanac_core::catalog::{CatalogBuilder, Category, Item};
///
/// let catalog = CatalogBuilder::new()
///     .category(Category::new("Astronomy", "telescope")
///         .with_items([Item::new("Sirius", "/astronomy/sirius")]))
///     .build()?;
/// ```
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    categories: Vec<Category>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a category. Order of calls is browse order.
    pub fn category(mut self, category: Category) -> Self {
        self.categories.push(category);
        self
    }

    /// Validate and freeze the catalog.
    pub fn build(self) -> Result<Catalog, CatalogError> {
        if let Err(err) = validate(&self.categories) {
            tracing::error!(error = %err, "Rejected catalog definition");
            return Err(err);
        }
        Ok(Catalog::from_validated(self.categories))
    }
}

fn validate(categories: &[Category]) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();

    for category in categories {
        let name = category.name.as_str();
        if name.trim().is_empty() {
            return Err(CatalogError::BlankCategoryName);
        }
        if name.eq_ignore_ascii_case(ALL_CATEGORIES) {
            return Err(CatalogError::ReservedCategoryName(name.to_string()));
        }
        if !seen.insert(name) {
            return Err(CatalogError::DuplicateCategory(name.to_string()));
        }

        validate_items(&category.items, &ItemLocation::new(name, None))?;

        let mut seen_sub = HashSet::new();
        for sub in &category.sub_categories {
            if sub.name.trim().is_empty() {
                return Err(CatalogError::BlankSubCategoryName {
                    category: name.to_string(),
                });
            }
            if !seen_sub.insert(sub.name.as_str()) {
                return Err(CatalogError::DuplicateSubCategory {
                    category: name.to_string(),
                    sub_category: sub.name.clone(),
                });
            }
            validate_items(&sub.items, &ItemLocation::new(name, Some(&sub.name)))?;
        }
    }

    Ok(())
}

// Titles only need to be unique within one category+subcategory bucket.
fn validate_items(items: &[Item], location: &ItemLocation) -> Result<(), CatalogError> {
    let mut titles = HashSet::new();

    for item in items {
        if item.title.trim().is_empty() {
            return Err(CatalogError::BlankTitle {
                location: location.clone(),
            });
        }
        if item.url.trim().is_empty() {
            return Err(CatalogError::BlankUrl {
                location: location.clone(),
                title: item.title.clone(),
            });
        }
        if !titles.insert(item.title.as_str()) {
            return Err(CatalogError::DuplicateTitle {
                location: location.clone(),
                title: item.title.clone(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sirius() -> Item {
        Item::new("Sirius", "/astronomy/sirius")
    }

    #[test]
    fn test_build_accepts_empty_category() {
        let catalog = CatalogBuilder::new()
            .category(Category::new("Chemistry", "flask"))
            .build()
            .unwrap();
        assert_eq!(catalog.categories().len(), 1);
        assert_eq!(catalog.item_count(), 0);
    }

    #[test]
    fn test_build_rejects_duplicate_category() {
        let result = CatalogBuilder::new()
            .category(Category::new("Astronomy", "star"))
            .category(Category::new("Astronomy", "moon"))
            .build();
        assert!(matches!(result, Err(CatalogError::DuplicateCategory(_))));
    }

    #[test]
    fn test_build_rejects_blank_and_reserved_names() {
        let blank = CatalogBuilder::new()
            .category(Category::new("  ", "star"))
            .build();
        assert!(matches!(blank, Err(CatalogError::BlankCategoryName)));

        let reserved = CatalogBuilder::new()
            .category(Category::new("all", "star"))
            .build();
        assert!(matches!(
            reserved,
            Err(CatalogError::ReservedCategoryName(_))
        ));
    }

    #[test]
    fn test_build_rejects_bad_sub_categories() {
        let blank = CatalogBuilder::new()
            .category(Category::new("Biology", "leaf").with_sub_category("", [sirius()]))
            .build();
        assert!(matches!(
            blank,
            Err(CatalogError::BlankSubCategoryName { .. })
        ));

        let repeated = CatalogBuilder::new()
            .category(
                Category::new("Biology", "leaf")
                    .with_sub_category("Animals", Vec::new())
                    .with_sub_category("Animals", Vec::new()),
            )
            .build();
        assert!(matches!(
            repeated,
            Err(CatalogError::DuplicateSubCategory { .. })
        ));
    }

    #[test]
    fn test_build_rejects_bad_items() {
        let blank_title = CatalogBuilder::new()
            .category(Category::new("Astronomy", "star").with_items([Item::new(" ", "/x")]))
            .build();
        assert!(matches!(blank_title, Err(CatalogError::BlankTitle { .. })));

        let blank_url = CatalogBuilder::new()
            .category(Category::new("Astronomy", "star").with_items([Item::new("Sirius", "")]))
            .build();
        assert!(matches!(blank_url, Err(CatalogError::BlankUrl { .. })));

        let repeated = CatalogBuilder::new()
            .category(Category::new("Astronomy", "star").with_items([sirius(), sirius()]))
            .build();
        assert!(matches!(repeated, Err(CatalogError::DuplicateTitle { .. })));
    }

    #[test]
    fn test_titles_may_repeat_across_buckets() {
        let catalog = CatalogBuilder::new()
            .category(
                Category::new("Astronomy", "star")
                    .with_items([sirius()])
                    .with_sub_category("Stars", [sirius()]),
            )
            .category(Category::new("Cosmology", "galaxy").with_items([sirius()]))
            .build();
        assert!(catalog.is_ok());
    }
}
