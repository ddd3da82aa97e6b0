//! Basic HTML extraction utilities.
//!
//! This module provides functions to extract basic HTML elements:
//! - Page title
//! - Meta description
//! - Meta robots directives
//! - Canonical link
//! - Viewport meta tag presence

use scraper::{Html, Selector};
use std::sync::LazyLock;

const TITLE_SELECTOR_STR: &str = "title";
const META_DESCRIPTION_SELECTOR_STR: &str = "meta[name='description']";
const META_ROBOTS_SELECTOR_STR: &str = "meta[name='robots']";
const CANONICAL_SELECTOR_STR: &str = "link[rel='canonical']";
const VIEWPORT_SELECTOR_STR: &str = "meta[name='viewport']";

static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| crate::parse::parse_selector_unsafe(TITLE_SELECTOR_STR, "TITLE_SELECTOR"));

static META_DESCRIPTION_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    crate::parse::parse_selector_unsafe(META_DESCRIPTION_SELECTOR_STR, "META_DESCRIPTION_SELECTOR")
});

static META_ROBOTS_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    crate::parse::parse_selector_unsafe(META_ROBOTS_SELECTOR_STR, "META_ROBOTS_SELECTOR")
});

static CANONICAL_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    crate::parse::parse_selector_unsafe(CANONICAL_SELECTOR_STR, "CANONICAL_SELECTOR")
});

static VIEWPORT_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    crate::parse::parse_selector_unsafe(VIEWPORT_SELECTOR_STR, "VIEWPORT_SELECTOR")
});

/// Extracts the page title from an HTML document.
///
/// Returns the text of the first `<title>` element, trimmed of whitespace, or
/// an empty string when the element is missing or empty.
pub fn extract_title(document: &Html) -> String {
    match document.select(&TITLE_SELECTOR).next() {
        Some(element) => element.text().collect::<String>().trim().to_string(),
        None => String::new(),
    }
}

/// Extracts the meta description from an HTML document.
///
/// Returns the `content` of `<meta name="description">`, trimmed, or `None`
/// when the tag is absent.
pub fn extract_meta_description(document: &Html) -> Option<String> {
    document
        .select(&META_DESCRIPTION_SELECTOR)
        .next()
        .and_then(|element| element.value().attr("content"))
        .map(|content| content.trim().to_string())
}

/// Extracts the `<meta name="robots">` content, when present.
pub fn extract_meta_robots(document: &Html) -> Option<String> {
    document
        .select(&META_ROBOTS_SELECTOR)
        .next()
        .and_then(|element| element.value().attr("content"))
        .map(|content| content.trim().to_string())
}

/// Extracts the canonical link href, when present.
pub fn extract_canonical(document: &Html) -> Option<String> {
    document
        .select(&CANONICAL_SELECTOR)
        .next()
        .and_then(|element| element.value().attr("href"))
        .map(|href| href.trim().to_string())
}

/// Checks whether the document declares a viewport meta tag.
pub fn has_viewport(document: &Html) -> bool {
    document.select(&VIEWPORT_SELECTOR).next().is_some()
}
