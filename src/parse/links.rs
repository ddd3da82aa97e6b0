//! Anchor classification and link-quality auditing.
//!
//! Every `<a href>` is classified as internal or external by comparing its
//! hostname against the page's own hostname. Malformed hrefs count as broken
//! and are reported as issues rather than silently dropped.

use scraper::{Html, Selector};
use std::sync::LazyLock;
use url::Url;

use crate::config::GENERIC_ANCHOR_TEXTS;

const ANCHOR_SELECTOR_STR: &str = "a[href]";

static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| crate::parse::parse_selector_unsafe(ANCHOR_SELECTOR_STR, "ANCHOR_SELECTOR"));

/// Schemes and pseudo-hrefs that are not page navigation and are skipped
/// entirely.
const SKIPPED_HREF_PREFIXES: &[&str] = &["javascript:", "mailto:", "tel:"];

/// Raw anchor audit facts for one document.
#[derive(Debug, Clone, Default)]
pub struct LinkFacts {
    /// Anchors considered (after skip rules).
    pub total: usize,
    pub internal: usize,
    pub external: usize,
    pub nofollow: usize,
    /// Anchors whose href did not resolve to a URL.
    pub broken: usize,
    /// Anchors with generic or too-short link text.
    pub low_quality_anchors: usize,
    /// Human-readable descriptions of every flagged anchor.
    pub issues: Vec<String>,
}

impl LinkFacts {
    /// Total number of flagged problems, used for proportional scoring.
    pub fn issue_count(&self) -> usize {
        self.broken + self.low_quality_anchors
    }
}

/// Classifies every anchor in the document against the page's own URL.
///
/// Skips empty hrefs, fragment-only hrefs, and the `javascript:`/`mailto:`/
/// `tel:` pseudo-schemes. Relative hrefs resolve against the page URL and are
/// therefore internal; hrefs that resolve to nothing are recorded as broken.
pub fn audit_links(document: &Html, page_url: &Url) -> LinkFacts {
    let mut facts = LinkFacts::default();
    let page_host = page_url.host_str().unwrap_or_default();

    for element in document.select(&ANCHOR_SELECTOR) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };
        let href = href.trim();
        if href.is_empty()
            || href.starts_with('#')
            || SKIPPED_HREF_PREFIXES
                .iter()
                .any(|prefix| href.to_lowercase().starts_with(prefix))
        {
            continue;
        }

        facts.total += 1;

        let text = element.text().collect::<String>().trim().to_string();
        let text_lower = text.to_lowercase();
        if text.chars().count() < 2 || GENERIC_ANCHOR_TEXTS.contains(&text_lower.as_str()) {
            facts.low_quality_anchors += 1;
            facts
                .issues
                .push(format!("Link to '{href}' has undescriptive text '{text}'"));
        }

        if element
            .value()
            .attr("rel")
            .is_some_and(|rel| rel.to_lowercase().contains("nofollow"))
        {
            facts.nofollow += 1;
        }

        match Url::parse(href).or_else(|_| page_url.join(href)) {
            Ok(resolved) => {
                if resolved.host_str().unwrap_or_default() == page_host {
                    facts.internal += 1;
                } else {
                    facts.external += 1;
                }
            }
            Err(_) => {
                facts.broken += 1;
                facts.issues.push(format!("Broken link href '{href}'"));
            }
        }
    }

    facts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_url() -> Url {
        Url::parse("https://example.com/articles/intro").unwrap()
    }

    fn audit(html: &str) -> LinkFacts {
        let document = Html::parse_document(html);
        audit_links(&document, &page_url())
    }

    #[test]
    fn test_audit_links_classifies_internal_and_external() {
        let facts = audit(
            r#"<body>
                <a href="/about">About us</a>
                <a href="https://example.com/contact">Contact page</a>
                <a href="https://other.org/">Partner site</a>
            </body>"#,
        );
        assert_eq!(facts.total, 3);
        assert_eq!(facts.internal, 2);
        assert_eq!(facts.external, 1);
        assert_eq!(facts.broken, 0);
    }

    #[test]
    fn test_audit_links_skips_non_navigation_hrefs() {
        let facts = audit(
            r##"<body>
                <a href="">empty target</a>
                <a href="#section">jump mark</a>
                <a href="javascript:void(0)">script call</a>
                <a href="mailto:hi@example.com">mail link</a>
                <a href="tel:+15551234">phone link</a>
            </body>"##,
        );
        assert_eq!(facts.total, 0);
    }

    #[test]
    fn test_audit_links_flags_generic_anchor_text() {
        let facts = audit(r#"<a href="/more">click here</a>"#);
        assert_eq!(facts.low_quality_anchors, 1);
        assert_eq!(facts.issue_count(), 1);
        assert!(facts.issues[0].contains("click here"));
    }

    #[test]
    fn test_audit_links_flags_short_anchor_text() {
        let facts = audit(r#"<a href="/x">x</a>"#);
        assert_eq!(facts.low_quality_anchors, 1);
    }

    #[test]
    fn test_audit_links_counts_broken_hrefs_as_issues() {
        let facts = audit(r#"<a href="https://[bad">broken target</a>"#);
        assert_eq!(facts.broken, 1);
        assert_eq!(facts.total, 1);
        assert!(facts.issues.iter().any(|issue| issue.contains("Broken")));
    }

    #[test]
    fn test_audit_links_counts_nofollow() {
        let facts = audit(
            r#"<body>
                <a href="/a" rel="nofollow">first page</a>
                <a href="/b" rel="NOFOLLOW noopener">second page</a>
                <a href="/c">third page</a>
            </body>"#,
        );
        assert_eq!(facts.nofollow, 2);
    }
}
