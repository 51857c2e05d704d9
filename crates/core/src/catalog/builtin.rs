//! # Built-in Catalog
//!
//! The site's own topic catalog, compiled into the binary from
//! `data/catalog.json`. Decoded and validated on first use, then shared for
//! the life of the process.

use std::sync::OnceLock;

use super::error::CatalogError;
use super::index::CatalogIndex;
use super::model::Catalog;

const CATALOG_JSON: &str = include_str!("../../data/catalog.json");

static BUILTIN_INDEX: OnceLock<CatalogIndex> = OnceLock::new();

/// Decode the embedded definition into a fresh, validated catalog.
pub fn builtin_catalog() -> Result<Catalog, CatalogError> {
    Catalog::from_json(CATALOG_JSON)
}

impl CatalogIndex {
    /// Process-wide index over the embedded catalog.
    ///
    /// The first call pays for decoding and validation; later calls return
    /// the same instance.
    pub fn builtin() -> Result<&'static CatalogIndex, CatalogError> {
        if let Some(index) = BUILTIN_INDEX.get() {
            return Ok(index);
        }
        let index = CatalogIndex::new(builtin_catalog()?);
        Ok(BUILTIN_INDEX.get_or_init(|| index))
    }
}
