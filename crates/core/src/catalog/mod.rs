//! Topic catalog: the static category hierarchy and the flattened index the
//! home page browses and searches.

pub mod browse;
pub mod builder;
pub mod builtin;
pub mod error;
pub mod index;
pub mod model;

pub use browse::{BrowseRequest, BrowseView, CategorySummary};
pub use builder::CatalogBuilder;
pub use builtin::builtin_catalog;
pub use error::{CatalogError, ItemLocation};
pub use index::{build_index, CatalogIndex, FlattenedEntry, ALL_CATEGORIES};
pub use model::{Catalog, Category, Item, SubCategory};
