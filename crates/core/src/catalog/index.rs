//! # Catalog Index
//!
//! Flattened, queryable view of a [`Catalog`]. The index is built once and
//! never mutated, so a single instance can be shared across any number of
//! readers without locking.
//!
//! Canonical order: categories in definition order; inside a category the
//! direct items first, then each subcategory's items in subcategory order.

use serde::Serialize;

use super::model::{Catalog, Item};

/// Sentinel category name meaning "the whole index".
pub const ALL_CATEGORIES: &str = "All";

/// An item annotated with the category (and subcategory) that owns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlattenedEntry {
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_category: Option<String>,
    #[serde(flatten)]
    pub item: Item,
}

impl FlattenedEntry {
    pub fn title(&self) -> &str {
        &self.item.title
    }

    pub fn url(&self) -> &str {
        &self.item.url
    }
}

/// Flatten a catalog into canonical order.
///
/// Traversal cannot fail; empty categories and subcategories contribute no
/// entries.
pub fn build_index(catalog: &Catalog) -> Vec<FlattenedEntry> {
    let mut entries = Vec::with_capacity(catalog.item_count());

    for category in catalog.categories() {
        for item in &category.items {
            entries.push(FlattenedEntry {
                category: category.name.clone(),
                sub_category: None,
                item: item.clone(),
            });
        }
        for sub in &category.sub_categories {
            for item in &sub.items {
                entries.push(FlattenedEntry {
                    category: category.name.clone(),
                    sub_category: Some(sub.name.clone()),
                    item: item.clone(),
                });
            }
        }
    }

    entries
}

/// Lowercases for title matching.
///
/// This is Unicode lowercasing, not full case folding: "STRASSE" does not
/// match "Straße".
fn lowercase(text: &str) -> String {
    text.to_lowercase()
}

/// The catalog plus its flattened index.
#[derive(Debug, Clone)]
pub struct CatalogIndex {
    catalog: Catalog,
    entries: Vec<FlattenedEntry>,
    /// Lowercased titles, parallel to `entries`
    lowercase_titles: Vec<String>,
}

impl CatalogIndex {
    pub fn new(catalog: Catalog) -> Self {
        let entries = build_index(&catalog);
        let lowercase_titles = entries.iter().map(|e| lowercase(e.title())).collect();

        tracing::info!(
            categories = catalog.categories().len(),
            entries = entries.len(),
            "Catalog index built"
        );

        Self {
            catalog,
            entries,
            lowercase_titles,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The full index in canonical order (the "All" view).
    pub fn entries(&self) -> &[FlattenedEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Tab names: the synthetic "All" followed by categories in definition
    /// order.
    pub fn category_names(&self) -> Vec<&str> {
        std::iter::once(ALL_CATEGORIES)
            .chain(self.catalog.categories().iter().map(|c| c.name.as_str()))
            .collect()
    }

    /// Entries owned by `name`, or everything for "All".
    ///
    /// Unknown names produce an empty result rather than an error.
    pub fn query_by_category(&self, name: &str) -> Vec<&FlattenedEntry> {
        if name == ALL_CATEGORIES {
            return self.entries.iter().collect();
        }
        self.entries.iter().filter(|e| e.category == name).collect()
    }

    /// Entries whose title contains `term`, ignoring case.
    ///
    /// Always searches the full index. An empty term matches nothing;
    /// falling back to a category view is left to [`Self::get_entries`].
    pub fn search(&self, term: &str) -> Vec<&FlattenedEntry> {
        let needle = lowercase(term);
        if needle.is_empty() {
            return Vec::new();
        }
        self.entries
            .iter()
            .zip(&self.lowercase_titles)
            .filter(|(_, title)| title.contains(&needle))
            .map(|(entry, _)| entry)
            .collect()
    }

    /// Category tab and search box combined.
    ///
    /// A non-empty search term overrides the category and searches
    /// everything; otherwise the category filter applies.
    pub fn get_entries(&self, category: &str, search: Option<&str>) -> Vec<&FlattenedEntry> {
        let results = match search {
            Some(term) if !term.is_empty() => self.search(term),
            _ => self.query_by_category(category),
        };
        tracing::debug!(
            category,
            search = search.unwrap_or_default(),
            results = results.len(),
            "Catalog query"
        );
        results
    }

    /// First entry (in canonical order) whose url equals `url` exactly.
    pub fn item_by_url(&self, url: &str) -> Option<&FlattenedEntry> {
        self.entries.iter().find(|e| e.url() == url)
    }
}
