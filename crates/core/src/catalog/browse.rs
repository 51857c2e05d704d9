//! # Browse View
//!
//! The home page's tab strip and search box, expressed as plain request and
//! response values so the presentation layer stays stateless.

use serde::{Deserialize, Serialize};

use super::index::{CatalogIndex, FlattenedEntry, ALL_CATEGORIES};

/// Selected tab plus search box contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BrowseRequest {
    /// Selected tab; `None` means "All"
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub search: Option<String>,
}

impl BrowseRequest {
    pub fn category(name: impl Into<String>) -> Self {
        Self {
            category: Some(name.into()),
            search: None,
        }
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    fn active_category(&self) -> &str {
        self.category.as_deref().unwrap_or(ALL_CATEGORIES)
    }

    fn search_term(&self) -> Option<&str> {
        self.search.as_deref().filter(|term| !term.is_empty())
    }
}

/// What the home page renders for a [`BrowseRequest`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowseView<'a> {
    /// Tab to highlight. Stays on the selected tab even while a search is
    /// overriding it.
    pub active_category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// True when the results came from a search across every category
    pub global_search: bool,
    pub entries: Vec<&'a FlattenedEntry>,
    /// Empty-state text, present only when `entries` is empty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// One tab in the tab strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySummary<'a> {
    pub name: &'a str,
    /// `None` for the synthetic "All" tab
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<&'a str>,
    pub count: usize,
}

impl CatalogIndex {
    /// Resolve a tab/search combination into the rendered result list.
    pub fn browse(&self, request: &BrowseRequest) -> BrowseView<'_> {
        let active_category = request.active_category();
        let search = request.search_term();
        let entries = self.get_entries(active_category, search);

        let message = match (entries.is_empty(), search) {
            (false, _) => None,
            (true, Some(term)) => Some(format!("No results for '{}'", term)),
            (true, None) => Some("No items found".to_string()),
        };

        BrowseView {
            active_category: active_category.to_string(),
            search: search.map(str::to_string),
            global_search: search.is_some(),
            entries,
            message,
        }
    }

    /// Tab strip contents: "All" first, then each category with its icon
    /// and entry count.
    pub fn summaries(&self) -> Vec<CategorySummary<'_>> {
        let all = CategorySummary {
            name: ALL_CATEGORIES,
            icon: None,
            count: self.len(),
        };

        std::iter::once(all)
            .chain(self.catalog().categories().iter().map(|c| CategorySummary {
                name: c.name.as_str(),
                icon: Some(c.icon.as_str()),
                count: c.item_count(),
            }))
            .collect()
    }
}
