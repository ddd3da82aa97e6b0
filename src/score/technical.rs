//! Technical sub-score computation.

use crate::parse::StructuredDataFacts;
use crate::report::{
    CanonicalSignal, MetaRobotsSignal, MobileUsabilitySignal, PageSpeedSignal, SchemaSignal,
};

/// Derives the page-speed proxy from the primary fetch's load time.
///
/// Desktop breakpoints: under 1s scores 100, under 3s scores 75, under 5s
/// scores 50, anything slower scores 25. Mobile is modeled as uniformly 15
/// points slower with a floor of 25 (not independently measured). The
/// composite is the rounded mean of the two.
pub fn page_speed_signal(load_time_ms: u64) -> PageSpeedSignal {
    let desktop: u8 = if load_time_ms < 1_000 {
        100
    } else if load_time_ms < 3_000 {
        75
    } else if load_time_ms < 5_000 {
        50
    } else {
        25
    };

    let mobile = desktop.saturating_sub(15).max(25);
    let composite = ((desktop as f64 + mobile as f64) / 2.0).round() as u8;

    PageSpeedSignal {
        desktop,
        mobile,
        composite,
    }
}

/// Mobile usability is the presence of a viewport meta tag (binary).
pub fn mobile_usability_signal(has_viewport: bool) -> MobileUsabilitySignal {
    MobileUsabilitySignal {
        has_viewport,
        score: if has_viewport { 100 } else { 0 },
    }
}

/// Schema presence for the technical category (binary).
pub fn schema_signal(facts: &StructuredDataFacts) -> SchemaSignal {
    let present = facts.json_ld_blocks > 0 || facts.microdata_items > 0;
    SchemaSignal {
        present,
        score: if present { 100 } else { 0 },
    }
}

/// Scores the canonical link tag: absent scores 50, relative scores 75,
/// absolute scores 100.
pub fn canonical_signal(href: Option<String>) -> CanonicalSignal {
    match href {
        None => CanonicalSignal {
            href: None,
            is_absolute: false,
            score: 50,
        },
        Some(href) => {
            let is_absolute = href.starts_with("http://") || href.starts_with("https://");
            CanonicalSignal {
                href: Some(href),
                is_absolute,
                score: if is_absolute { 100 } else { 75 },
            }
        }
    }
}

/// Parses the `<meta name="robots">` directives that gate indexability.
pub fn meta_robots_signal(content: Option<String>) -> MetaRobotsSignal {
    match content {
        None => MetaRobotsSignal::default(),
        Some(content) => {
            let lower = content.to_lowercase();
            MetaRobotsSignal {
                noindex: lower.contains("noindex"),
                nofollow: lower.contains("nofollow"),
                content: Some(content),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_speed_breakpoints() {
        assert_eq!(page_speed_signal(400).desktop, 100);
        assert_eq!(page_speed_signal(1_500).desktop, 75);
        assert_eq!(page_speed_signal(4_000).desktop, 50);
        assert_eq!(page_speed_signal(9_000).desktop, 25);
    }

    #[test]
    fn test_mobile_is_slower_with_floor() {
        assert_eq!(page_speed_signal(400).mobile, 85);
        assert_eq!(page_speed_signal(9_000).mobile, 25);
    }

    #[test]
    fn test_composite_is_rounded_mean() {
        let fast = page_speed_signal(400);
        assert_eq!(fast.composite, 93); // (100 + 85) / 2 = 92.5 rounds up
    }

    #[test]
    fn test_mobile_usability_is_binary() {
        assert_eq!(mobile_usability_signal(true).score, 100);
        assert_eq!(mobile_usability_signal(false).score, 0);
    }

    #[test]
    fn test_canonical_scoring() {
        assert_eq!(canonical_signal(None).score, 50);

        let relative = canonical_signal(Some("/page".to_string()));
        assert_eq!(relative.score, 75);
        assert!(!relative.is_absolute);

        let absolute = canonical_signal(Some("https://example.com/page".to_string()));
        assert_eq!(absolute.score, 100);
        assert!(absolute.is_absolute);
    }

    #[test]
    fn test_meta_robots_directives() {
        let signal = meta_robots_signal(Some("NOINDEX, nofollow".to_string()));
        assert!(signal.noindex);
        assert!(signal.nofollow);

        let absent = meta_robots_signal(None);
        assert!(!absent.noindex);
        assert!(!absent.nofollow);
    }
}
