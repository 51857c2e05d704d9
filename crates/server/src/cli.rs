//! # Command Line Views
//!
//! Plain-text and JSON renderings of catalog queries for the `categories`,
//! `browse` and `show` subcommands.

use anyhow::{bail, Result};
use std::fmt::Write as _;

use almanac_core::catalog::{BrowseRequest, BrowseView, CatalogIndex, FlattenedEntry};

pub fn render_categories(index: &CatalogIndex) -> String {
    let mut out = String::new();
    for summary in index.summaries() {
        let _ = match summary.icon {
            Some(icon) => writeln!(out, "{:<16} {:>4}  [{}]", summary.name, summary.count, icon),
            None => writeln!(out, "{:<16} {:>4}", summary.name, summary.count),
        };
    }
    out
}

fn owner(entry: &FlattenedEntry) -> String {
    match &entry.sub_category {
        Some(sub) => format!("{} / {}", entry.category, sub),
        None => entry.category.clone(),
    }
}

pub fn render_browse(view: &BrowseView<'_>) -> String {
    let mut out = String::new();
    let _ = match &view.search {
        Some(term) => writeln!(
            out,
            "Search '{}' across all categories (tab: {})",
            term, view.active_category
        ),
        None => writeln!(out, "Category: {}", view.active_category),
    };

    if let Some(message) = &view.message {
        let _ = writeln!(out, "{}", message);
        return out;
    }

    for entry in &view.entries {
        let _ = writeln!(out, "  {:<48} {:<28} {}", entry.title(), owner(entry), entry.url());
    }
    let _ = writeln!(out, "{} item(s)", view.entries.len());
    out
}

pub fn render_entry(entry: &FlattenedEntry) -> String {
    let item = &entry.item;
    let mut out = String::new();
    let _ = writeln!(out, "{}", item.title);
    let _ = writeln!(out, "  category: {}", owner(entry));
    let _ = writeln!(out, "  url:      {}", item.url);
    let optional = [
        ("author", &item.author),
        ("date", &item.publish_date),
        ("image", &item.image),
    ];
    for (label, value) in optional {
        if let Some(value) = value {
            let _ = writeln!(out, "  {:<9} {}", format!("{}:", label), value);
        }
    }
    if let Some(description) = &item.description {
        let _ = writeln!(out, "\n  {}", description);
    }
    out
}

pub fn browse(index: &CatalogIndex, request: &BrowseRequest, json: bool) -> Result<String> {
    let view = index.browse(request);
    if json {
        return Ok(serde_json::to_string_pretty(&view)?);
    }
    Ok(render_browse(&view))
}

pub fn show(index: &CatalogIndex, url: &str, json: bool) -> Result<String> {
    let Some(entry) = index.item_by_url(url) else {
        bail!("No topic found at '{}'", url);
    };
    if json {
        return Ok(serde_json::to_string_pretty(entry)?);
    }
    Ok(render_entry(entry))
}

#[cfg(test)]
mod tests {
    use super::*;
    use almanac_core::catalog::{CatalogBuilder, Category, Item};

    fn sample() -> CatalogIndex {
        let catalog = CatalogBuilder::new()
            .category(Category::new("Astronomy", "telescope").with_items([
                Item::new("Sirius", "/astronomy/sirius").with_author("Editorial"),
                Item::new("Moonlight", "/astronomy/moonlight"),
            ]))
            .category(
                Category::new("Biology", "leaf")
                    .with_sub_category("Animals", [Item::new("Honey", "/biology/honey")]),
            )
            .build()
            .unwrap();
        CatalogIndex::new(catalog)
    }

    #[test]
    fn test_render_categories() {
        let out = render_categories(&sample());
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("All"));
        assert!(lines[1].contains("[telescope]"));
    }

    #[test]
    fn test_browse_text_and_empty_state() {
        let index = sample();
        let out = browse(&index, &BrowseRequest::category("Biology"), false).unwrap();
        assert!(out.contains("Biology / Animals"));
        assert!(out.contains("1 item(s)"));

        let out = browse(
            &index,
            &BrowseRequest::category("Biology").with_search("zzz"),
            false,
        )
        .unwrap();
        assert!(out.contains("No results for 'zzz'"));
        assert!(out.contains("(tab: Biology)"));
    }

    #[test]
    fn test_browse_json() {
        let index = sample();
        let out = browse(&index, &BrowseRequest::default().with_search("moon"), true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["entries"][0]["url"], "/astronomy/moonlight");
    }

    #[test]
    fn test_show() {
        let index = sample();
        let out = show(&index, "/astronomy/sirius", false).unwrap();
        assert!(out.starts_with("Sirius"));
        assert!(out.contains("author:   Editorial"));

        assert!(show(&index, "/astronomy/vega", false).is_err());
    }
}
