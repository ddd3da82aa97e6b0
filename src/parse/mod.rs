//! HTML parsing and signal extraction.
//!
//! The fetched document is parsed once into a `scraper::Html` and shared
//! read-only by all extractors. Every extractor is a pure function over the
//! parsed document (plus the raw HTML where substring detection is needed)
//! and never mutates shared state.

mod analytics;
mod headings;
mod html;
mod images;
mod keywords;
mod links;
mod social;
mod structured;

// Re-export public API
pub use analytics::detect_tracking;
pub use headings::extract_headings;
pub use html::{
    extract_canonical, extract_meta_description, extract_meta_robots, extract_title, has_viewport,
};
pub use images::{extract_image_stats, ImageStats};
pub use keywords::{derive_keywords, phrase_occurrences, strip_tags, tokenize};
pub use links::{audit_links, LinkFacts};
pub use social::{extract_social_facts, SocialFacts, SocialMediaLink};
pub use structured::{extract_structured_data, StructuredDataFacts};

use scraper::Selector;

/// Parses a CSS selector that must succeed (for compile-time constants).
///
/// # Panics
///
/// Panics if the selector cannot be parsed, which indicates a programming
/// error in a static selector string.
pub(crate) fn parse_selector_unsafe(selector_str: &str, context: &str) -> Selector {
    Selector::parse(selector_str).unwrap_or_else(|e| {
        panic!(
            "Failed to parse CSS selector '{}' in {}: {}. This is a programming error.",
            selector_str, context, e
        )
    })
}

/// Compiles a regex pattern that must succeed (for compile-time constants).
///
/// # Panics
///
/// Panics if the pattern cannot be compiled.
pub(crate) fn compile_regex_unsafe(pattern: &str, context: &str) -> regex::Regex {
    regex::Regex::new(pattern).unwrap_or_else(|e| {
        panic!(
            "Failed to compile regex pattern '{}' in {}: {}. This is a programming error.",
            pattern, context, e
        )
    })
}
