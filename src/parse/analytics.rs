//! Analytics and tracking tool detection.
//!
//! Detectors search both the raw HTML and the `src` attributes of script
//! tags. Both checks are necessary: analytics snippets can be inlined or
//! loaded from an external script.

use scraper::{Html, Selector};
use std::sync::LazyLock;

use crate::report::AnalyticsSignal;

static SCRIPT_SRC_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    crate::parse::parse_selector_unsafe("script[src]", "SCRIPT_SRC_SELECTOR")
});

/// Substring markers for Google Analytics (UA and GA4).
const GOOGLE_ANALYTICS_MARKERS: &[&str] = &["google-analytics.com", "gtag(", "ga('create'"];
/// Substring markers for Google Tag Manager.
const TAG_MANAGER_MARKERS: &[&str] = &["googletagmanager.com", "GTM-"];
/// Substring markers for the Facebook (Meta) pixel.
const FACEBOOK_PIXEL_MARKERS: &[&str] = &["connect.facebook.net", "fbq("];

/// Other recognized tracking tools: (name, markers).
const OTHER_TRACKING_TOOLS: &[(&str, &[&str])] = &[
    ("Hotjar", &["hotjar.com", "hj.q"]),
    ("Mixpanel", &["mixpanel.com", "mixpanel.init"]),
    ("Adobe Analytics", &["adobedtm.com", "omniture"]),
    ("LinkedIn Insight", &["snap.licdn.com", "_linkedin_partner_id"]),
    ("Matomo", &["matomo.js", "piwik.js"]),
];

/// Detects analytics and tracking tools in the document.
///
/// # Arguments
///
/// * `document` - The parsed HTML document (for script `src` attributes)
/// * `html` - The raw HTML content (for inlined snippets)
pub fn detect_tracking(document: &Html, html: &str) -> AnalyticsSignal {
    let script_sources: Vec<String> = document
        .select(&SCRIPT_SRC_SELECTOR)
        .filter_map(|element| element.value().attr("src"))
        .map(str::to_string)
        .collect();

    let found = |markers: &[&str]| -> bool {
        markers.iter().any(|marker| {
            html.contains(marker) || script_sources.iter().any(|src| src.contains(marker))
        })
    };

    let other_tools = OTHER_TRACKING_TOOLS
        .iter()
        .filter(|(_, markers)| found(markers))
        .map(|(name, _)| name.to_string())
        .collect();

    AnalyticsSignal {
        google_analytics: found(GOOGLE_ANALYTICS_MARKERS),
        tag_manager: found(TAG_MANAGER_MARKERS),
        facebook_pixel: found(FACEBOOK_PIXEL_MARKERS),
        other_tools,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect(html: &str) -> AnalyticsSignal {
        let document = Html::parse_document(html);
        detect_tracking(&document, html)
    }

    #[test]
    fn test_detects_external_google_analytics() {
        let signal = detect(
            r#"<script src="https://www.google-analytics.com/analytics.js"></script>"#,
        );
        assert!(signal.google_analytics);
        assert!(!signal.facebook_pixel);
    }

    #[test]
    fn test_detects_inline_gtag_snippet() {
        let signal = detect("<script>gtag('config', 'G-ABC123');</script>");
        assert!(signal.google_analytics);
    }

    #[test]
    fn test_detects_tag_manager() {
        let signal = detect(
            r#"<script src="https://www.googletagmanager.com/gtm.js?id=GTM-XYZ"></script>"#,
        );
        assert!(signal.tag_manager);
    }

    #[test]
    fn test_detects_facebook_pixel_inline() {
        let signal = detect("<script>fbq('init', '123456789');</script>");
        assert!(signal.facebook_pixel);
    }

    #[test]
    fn test_detects_other_tools() {
        let signal = detect(
            r#"<script src="https://static.hotjar.com/c/hotjar-1.js"></script>
               <script>mixpanel.init("token");</script>"#,
        );
        assert_eq!(signal.other_tools, vec!["Hotjar", "Mixpanel"]);
    }

    #[test]
    fn test_clean_page_detects_nothing() {
        let signal = detect("<html><body><p>No trackers here.</p></body></html>");
        assert!(!signal.google_analytics);
        assert!(!signal.tag_manager);
        assert!(!signal.facebook_pixel);
        assert!(signal.other_tools.is_empty());
        assert_eq!(signal.pixel_count(), 0);
    }
}
