//! Structured data extraction.
//!
//! This module extracts machine-readable metadata from HTML documents:
//! - JSON-LD (`<script type="application/ld+json">`), including types nested
//!   inside `@graph` arrays
//! - Microdata (`itemtype` attributes)
//!
//! A JSON-LD block that fails to parse marks the document's structured data
//! as partially invalid but never stops processing of the remaining blocks.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use scraper::{Html, Selector};

const JSON_LD_SELECTOR_STR: &str = r#"script[type="application/ld+json"]"#;
const ITEMTYPE_SELECTOR_STR: &str = "[itemtype]";

static JSON_LD_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| crate::parse::parse_selector_unsafe(JSON_LD_SELECTOR_STR, "JSON_LD_SELECTOR"));

static ITEMTYPE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    crate::parse::parse_selector_unsafe(ITEMTYPE_SELECTOR_STR, "ITEMTYPE_SELECTOR")
});

/// Raw structured-data facts for one document.
#[derive(Debug, Clone, Default)]
pub struct StructuredDataFacts {
    /// Deduplicated schema types, sorted for deterministic output.
    pub types: Vec<String>,
    /// Number of JSON-LD script blocks seen.
    pub json_ld_blocks: usize,
    /// False when at least one JSON-LD block failed to parse.
    pub json_ld_valid: bool,
    /// Number of elements carrying an `itemtype` attribute.
    pub microdata_items: usize,
}

/// Extracts JSON-LD and microdata facts from a parsed document.
pub fn extract_structured_data(document: &Html) -> StructuredDataFacts {
    let mut types = BTreeSet::new();
    let mut json_ld_blocks = 0usize;
    let mut all_valid = true;

    for element in document.select(&JSON_LD_SELECTOR) {
        json_ld_blocks += 1;
        let raw = element.text().collect::<String>();
        match serde_json::from_str::<serde_json::Value>(raw.trim()) {
            Ok(value) => collect_types(&value, &mut types),
            Err(error) => {
                log::debug!("Skipping malformed JSON-LD block: {error}");
                all_valid = false;
            }
        }
    }

    let mut microdata_items = 0usize;
    for element in document.select(&ITEMTYPE_SELECTOR) {
        microdata_items += 1;
        if let Some(itemtype) = element.value().attr("itemtype") {
            // itemtype values are schema URLs; the type is the last segment.
            if let Some(type_name) = itemtype.trim_end_matches('/').rsplit('/').next() {
                if !type_name.is_empty() {
                    types.insert(type_name.to_string());
                }
            }
        }
    }

    StructuredDataFacts {
        types: types.into_iter().collect(),
        json_ld_blocks,
        json_ld_valid: all_valid,
        microdata_items,
    }
}

/// Collects `@type` values from a JSON-LD value, recursing into top-level
/// arrays and `@graph` arrays.
fn collect_types(value: &serde_json::Value, types: &mut BTreeSet<String>) {
    match value {
        serde_json::Value::Array(items) => {
            for item in items {
                collect_types(item, types);
            }
        }
        serde_json::Value::Object(object) => {
            match object.get("@type") {
                Some(serde_json::Value::String(type_name)) => {
                    types.insert(type_name.clone());
                }
                Some(serde_json::Value::Array(type_names)) => {
                    for type_name in type_names {
                        if let Some(type_str) = type_name.as_str() {
                            types.insert(type_str.to_string());
                        }
                    }
                }
                _ => {}
            }
            if let Some(graph) = object.get("@graph") {
                collect_types(graph, types);
            }
        }
        _ => {}
    }
}
