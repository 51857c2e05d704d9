//! # Almanac Core
//!
//! Catalog engine behind the Almanac "science and scripture" site: the
//! category → subcategory → topic hierarchy, its flattened index, and the
//! browse/search queries the home page issues.
//!
//! ## Architecture
//!
//! - `catalog/model` - Item, Category and Catalog types plus definition decoding
//! - `catalog/builder` - Ordered construction and startup validation
//! - `catalog/index` - Flattened index, category filter and title search
//! - `catalog/browse` - Tab/search composition and tab summaries
//! - `catalog/builtin` - The embedded site catalog
//!
//! ## Usage
//!
//! ```rust,ignore
//! use almanac_core::catalog::{BrowseRequest, CatalogIndex};
//!
//! let index = CatalogIndex::builtin()?;
//! let view = index.browse(&BrowseRequest::category("Astronomy").with_search("moon"));
//! ```

pub mod catalog;

pub use catalog::{
    BrowseRequest, BrowseView, Catalog, CatalogBuilder, CatalogError, CatalogIndex, Category,
    FlattenedEntry, Item, ALL_CATEGORIES,
};
