//! # Catalog Model
//!
//! Types for the static topic hierarchy: catalog → category → optional
//! subcategory → item. The on-disk shape is a nested object literal keyed by
//! name, e.g.
//!
//! ```json
//! {
//!   "Astronomy": {
//!     "icon": "telescope",
//!     "items": [{ "title": "Sirius", "url": "/astronomy/sirius" }],
//!     "subCategories": { "Planets": [{ "title": "Saturn", "url": "/astronomy/saturn" }] }
//!   }
//! }
//! ```
//!
//! Key order in the definition is significant: it is the browse order.

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;

use super::builder::CatalogBuilder;
use super::error::CatalogError;

/// A single topic page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Item {
    /// Display title, also the only field search matches against
    pub title: String,
    /// Link to the detail page. Opaque; never checked for existence.
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Free-form display date ("March 2024"), never parsed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publish_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Item {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            description: None,
            author: None,
            publish_date: None,
            image: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_publish_date(mut self, publish_date: impl Into<String>) -> Self {
        self.publish_date = Some(publish_date.into());
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}

/// Named group of items nested inside a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubCategory {
    pub name: String,
    pub items: Vec<Item>,
}

/// A top-level tab.
///
/// Content may live directly in `items`, in `sub_categories`, or both. An
/// empty category is allowed and simply contributes nothing to the index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    /// Symbolic glyph reference, passed through untouched
    pub icon: String,
    pub items: Vec<Item>,
    pub sub_categories: Vec<SubCategory>,
}

impl Category {
    pub fn new(name: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            icon: icon.into(),
            items: Vec::new(),
            sub_categories: Vec::new(),
        }
    }

    pub fn with_items(mut self, items: impl IntoIterator<Item = Item>) -> Self {
        self.items.extend(items);
        self
    }

    pub fn with_sub_category(
        mut self,
        name: impl Into<String>,
        items: impl IntoIterator<Item = Item>,
    ) -> Self {
        self.sub_categories.push(SubCategory {
            name: name.into(),
            items: items.into_iter().collect(),
        });
        self
    }

    /// Direct items plus every subcategory's items.
    pub fn item_count(&self) -> usize {
        self.items.len()
            + self
                .sub_categories
                .iter()
                .map(|sub| sub.items.len())
                .sum::<usize>()
    }
}

/// The validated, immutable category hierarchy.
///
/// Only obtainable through [`CatalogBuilder::build`] or
/// [`Catalog::from_json`], both of which validate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    pub(crate) fn from_validated(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// Decode and validate a nested JSON definition.
    pub fn from_json(source: &str) -> Result<Self, CatalogError> {
        let definition: Keyed<CategoryDefinition> = serde_json::from_str(source)?;

        definition
            .0
            .into_iter()
            .fold(CatalogBuilder::new(), |builder, (name, def)| {
                builder.category(def.into_category(name))
            })
            .build()
    }

    /// Categories in definition order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    pub fn item_count(&self) -> usize {
        self.categories.iter().map(Category::item_count).sum()
    }
}

// ============================================================================
// Definition decoding
// ============================================================================

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct CategoryDefinition {
    icon: String,
    #[serde(default)]
    items: Vec<Item>,
    #[serde(default)]
    sub_categories: Option<Keyed<Vec<Item>>>,
}

impl CategoryDefinition {
    fn into_category(self, name: String) -> Category {
        let sub_categories = self
            .sub_categories
            .map(|keyed| keyed.0)
            .unwrap_or_default()
            .into_iter()
            .map(|(name, items)| SubCategory { name, items })
            .collect();

        Category {
            name,
            icon: self.icon,
            items: self.items,
            sub_categories,
        }
    }
}

/// A JSON object read as an ordered list of `(key, value)` pairs.
///
/// Keeps definition order and keeps repeated keys so the builder can report
/// them instead of silently keeping the last one.
struct Keyed<V>(Vec<(String, V)>);

impl<'de, V: Deserialize<'de>> Deserialize<'de> for Keyed<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct KeyedVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for KeyedVisitor<V> {
            type Value = Keyed<V>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object keyed by name")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, value)) = map.next_entry::<String, V>()? {
                    entries.push((key, value));
                }
                Ok(Keyed(entries))
            }
        }

        deserializer.deserialize_map(KeyedVisitor(PhantomData))
    }
}
