//! Social presence extraction.
//!
//! This module extracts the document signals the off-page scorer is allowed
//! to use: Open Graph tags, Twitter Card tags, and outbound links to social
//! platform profiles.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use scraper::{Html, Selector};

// Regex patterns for social platform profile links
const FACEBOOK_URL_PATTERN: &str = r"https?://(?:www\.)?facebook\.com/([^/?#]+)";
const TWITTER_URL_PATTERN: &str = r"https?://(?:www\.)?(?:twitter\.com|x\.com)/([^/?#]+)";
const INSTAGRAM_URL_PATTERN: &str = r"https?://(?:www\.)?instagram\.com/([^/?#]+)";
const LINKEDIN_URL_PATTERN: &str = r"https?://(?:www\.)?linkedin\.com/(?:company|in|pub)/([^/?#]+)";
const YOUTUBE_URL_PATTERN: &str = r"https?://(?:www\.)?youtube\.com/(?:channel|c|user|@)([^/?#]+)";
const TIKTOK_URL_PATTERN: &str = r"https?://(?:www\.)?tiktok\.com/@([^/?#]+)";
const PINTEREST_URL_PATTERN: &str = r"https?://(?:www\.)?pinterest\.(?:com|co\.uk)/([^/?#]+)";

const ANCHOR_SELECTOR_STR: &str = "a[href]";
const OPEN_GRAPH_SELECTOR_STR: &str = r#"meta[property^="og:"]"#;
const TWITTER_CARD_SELECTOR_STR: &str = r#"meta[name^="twitter:"]"#;

static FACEBOOK_RE: LazyLock<Regex> =
    LazyLock::new(|| crate::parse::compile_regex_unsafe(FACEBOOK_URL_PATTERN, "FACEBOOK_RE"));
static TWITTER_RE: LazyLock<Regex> =
    LazyLock::new(|| crate::parse::compile_regex_unsafe(TWITTER_URL_PATTERN, "TWITTER_RE"));
static INSTAGRAM_RE: LazyLock<Regex> =
    LazyLock::new(|| crate::parse::compile_regex_unsafe(INSTAGRAM_URL_PATTERN, "INSTAGRAM_RE"));
static LINKEDIN_RE: LazyLock<Regex> =
    LazyLock::new(|| crate::parse::compile_regex_unsafe(LINKEDIN_URL_PATTERN, "LINKEDIN_RE"));
static YOUTUBE_RE: LazyLock<Regex> =
    LazyLock::new(|| crate::parse::compile_regex_unsafe(YOUTUBE_URL_PATTERN, "YOUTUBE_RE"));
static TIKTOK_RE: LazyLock<Regex> =
    LazyLock::new(|| crate::parse::compile_regex_unsafe(TIKTOK_URL_PATTERN, "TIKTOK_RE"));
static PINTEREST_RE: LazyLock<Regex> =
    LazyLock::new(|| crate::parse::compile_regex_unsafe(PINTEREST_URL_PATTERN, "PINTEREST_RE"));

static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| crate::parse::parse_selector_unsafe(ANCHOR_SELECTOR_STR, "ANCHOR_SELECTOR"));
static OPEN_GRAPH_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    crate::parse::parse_selector_unsafe(OPEN_GRAPH_SELECTOR_STR, "OPEN_GRAPH_SELECTOR")
});
static TWITTER_CARD_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    crate::parse::parse_selector_unsafe(TWITTER_CARD_SELECTOR_STR, "TWITTER_CARD_SELECTOR")
});

/// One outbound social profile link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialMediaLink {
    pub platform: String,
    pub url: String,
}

/// Raw social-presence facts for one document.
#[derive(Debug, Clone, Default)]
pub struct SocialFacts {
    /// Open Graph property/content pairs.
    pub open_graph: HashMap<String, String>,
    /// Twitter Card name/content pairs.
    pub twitter_cards: HashMap<String, String>,
    /// Outbound social profile links, one per platform/URL pair.
    pub links: Vec<SocialMediaLink>,
}

impl SocialFacts {
    /// Distinct platforms the page links out to, sorted for determinism.
    pub fn platforms(&self) -> Vec<String> {
        let mut platforms: Vec<String> = self
            .links
            .iter()
            .map(|link| link.platform.clone())
            .collect();
        platforms.sort();
        platforms.dedup();
        platforms
    }
}

/// Extracts Open Graph tags, Twitter Card tags, and social profile links.
pub fn extract_social_facts(document: &Html) -> SocialFacts {
    let mut facts = SocialFacts::default();

    for element in document.select(&OPEN_GRAPH_SELECTOR) {
        if let (Some(property), Some(content)) = (
            element.value().attr("property"),
            element.value().attr("content"),
        ) {
            facts
                .open_graph
                .insert(property.to_string(), content.to_string());
        }
    }

    for element in document.select(&TWITTER_CARD_SELECTOR) {
        if let (Some(name), Some(content)) = (
            element.value().attr("name"),
            element.value().attr("content"),
        ) {
            facts
                .twitter_cards
                .insert(name.to_string(), content.to_string());
        }
    }

    let patterns: [(&LazyLock<Regex>, &str); 7] = [
        (&FACEBOOK_RE, "Facebook"),
        (&TWITTER_RE, "Twitter"),
        (&INSTAGRAM_RE, "Instagram"),
        (&LINKEDIN_RE, "LinkedIn"),
        (&YOUTUBE_RE, "YouTube"),
        (&TIKTOK_RE, "TikTok"),
        (&PINTEREST_RE, "Pinterest"),
    ];

    let mut seen_urls = std::collections::HashSet::new();
    for element in document.select(&ANCHOR_SELECTOR) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };
        if !seen_urls.insert(href.to_string()) {
            continue;
        }
        for (pattern, platform) in &patterns {
            if pattern.is_match(href) {
                facts.links.push(SocialMediaLink {
                    platform: platform.to_string(),
                    url: href.to_string(),
                });
                break;
            }
        }
    }

    facts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_open_graph_tags() {
        let document = Html::parse_document(
            r#"<head>
                <meta property="og:title" content="Test Title" />
                <meta property="og:image" content="https://example.com/img.png" />
            </head>"#,
        );
        let facts = extract_social_facts(&document);
        assert_eq!(facts.open_graph.len(), 2);
        assert_eq!(
            facts.open_graph.get("og:title").map(String::as_str),
            Some("Test Title")
        );
    }

    #[test]
    fn test_extract_twitter_cards() {
        let document = Html::parse_document(
            r#"<head><meta name="twitter:card" content="summary" /></head>"#,
        );
        let facts = extract_social_facts(&document);
        assert_eq!(
            facts.twitter_cards.get("twitter:card").map(String::as_str),
            Some("summary")
        );
    }

    #[test]
    fn test_extract_social_links_with_platforms() {
        let document = Html::parse_document(
            r#"<body>
                <a href="https://www.facebook.com/acme">Facebook</a>
                <a href="https://x.com/acme">X</a>
                <a href="https://www.linkedin.com/company/acme">LinkedIn</a>
                <a href="https://example.com/about">About</a>
            </body>"#,
        );
        let facts = extract_social_facts(&document);
        assert_eq!(facts.links.len(), 3);
        assert_eq!(facts.platforms(), vec!["Facebook", "LinkedIn", "Twitter"]);
    }

    #[test]
    fn test_duplicate_social_urls_counted_once() {
        let document = Html::parse_document(
            r#"<body>
                <a href="https://www.facebook.com/acme">footer link</a>
                <a href="https://www.facebook.com/acme">header link</a>
            </body>"#,
        );
        let facts = extract_social_facts(&document);
        assert_eq!(facts.links.len(), 1);
    }

    #[test]
    fn test_plain_page_has_no_social_facts() {
        let document = Html::parse_document("<body><a href='/home'>Home</a></body>");
        let facts = extract_social_facts(&document);
        assert!(facts.open_graph.is_empty());
        assert!(facts.twitter_cards.is_empty());
        assert!(facts.links.is_empty());
    }
}
