//! Heading outline extraction.

use scraper::{Html, Selector};
use std::sync::LazyLock;

use crate::config::MAX_HEADING_TEXTS;
use crate::report::HeadingLevelSignal;

static HEADING_SELECTORS: LazyLock<[Selector; 6]> = LazyLock::new(|| {
    ["h1", "h2", "h3", "h4", "h5", "h6"]
        .map(|tag| crate::parse::parse_selector_unsafe(tag, "HEADING_SELECTORS"))
});

/// Extracts the H1-H6 outline: per-level counts plus the first few heading
/// texts for the report reader.
pub fn extract_headings(document: &Html) -> [HeadingLevelSignal; 6] {
    HEADING_SELECTORS.each_ref().map(|selector| {
        let mut count = 0usize;
        let mut texts = Vec::new();
        for element in document.select(selector) {
            count += 1;
            if texts.len() < MAX_HEADING_TEXTS {
                let text = element.text().collect::<String>().trim().to_string();
                if !text.is_empty() {
                    texts.push(text);
                }
            }
        }
        HeadingLevelSignal { count, texts }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_headings_counts_levels() {
        let document = Html::parse_document(
            "<body><h1>One</h1><h2>A</h2><h2>B</h2><h3>deep</h3></body>",
        );
        let outline = extract_headings(&document);
        assert_eq!(outline[0].count, 1);
        assert_eq!(outline[1].count, 2);
        assert_eq!(outline[2].count, 1);
        assert_eq!(outline[3].count, 0);
        assert_eq!(outline[0].texts, vec!["One"]);
        assert_eq!(outline[1].texts, vec!["A", "B"]);
    }

    #[test]
    fn test_extract_headings_caps_retained_texts() {
        let body: String = (0..10).map(|i| format!("<h2>T{i}</h2>")).collect();
        let document = Html::parse_document(&format!("<body>{body}</body>"));
        let outline = extract_headings(&document);
        assert_eq!(outline[1].count, 10);
        assert_eq!(outline[1].texts.len(), MAX_HEADING_TEXTS);
    }

    #[test]
    fn test_extract_headings_handles_nested_markup() {
        let document = Html::parse_document("<h1>Hello <em>world</em></h1>");
        let outline = extract_headings(&document);
        assert_eq!(outline[0].texts, vec!["Hello world"]);
    }
}
