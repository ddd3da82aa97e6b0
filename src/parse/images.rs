//! Image alt-coverage extraction.

use scraper::{Html, Selector};
use std::sync::LazyLock;

static IMG_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| crate::parse::parse_selector_unsafe("img", "IMG_SELECTOR"));

/// Raw image facts: total count and how many lack an `alt` attribute.
///
/// An empty `alt=""` counts as present (it is the correct markup for
/// decorative images); only a missing attribute counts against the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImageStats {
    pub total: usize,
    pub without_alt: usize,
}

/// Counts images and images without an `alt` attribute.
pub fn extract_image_stats(document: &Html) -> ImageStats {
    let mut stats = ImageStats::default();
    for element in document.select(&IMG_SELECTOR) {
        stats.total += 1;
        if element.value().attr("alt").is_none() {
            stats.without_alt += 1;
        }
    }
    stats
}
