//! Recommendation generation.
//!
//! A deterministic rule list evaluated in fixed priority order: critical
//! security and structure problems first, then on-page, then social and
//! structural extras. The result is deduplicated on `(title, section)` and
//! truncated to the configured cap. No rule fires twice for one report.

use std::collections::HashSet;

use crate::config::MAX_RECOMMENDATIONS;
use crate::report::{
    OffPageSignals, OnPageSignals, Recommendation, SecuritySignals, TechnicalSignals,
};

const SECTION_SECURITY: &str = "security";
const SECTION_ON_PAGE: &str = "onPage";
const SECTION_TECHNICAL: &str = "technical";
const SECTION_SOCIAL: &str = "social";

/// Generates the report-level recommendation list.
pub fn generate_recommendations(
    on_page: &OnPageSignals,
    technical: &TechnicalSignals,
    security: &SecuritySignals,
    off_page: &OffPageSignals,
) -> Vec<Recommendation> {
    // (fires, section, title) in priority order.
    let rules: Vec<(bool, &str, String)> = vec![
        (
            !security.https,
            SECTION_SECURITY,
            "Serve the site over HTTPS".to_string(),
        ),
        (
            technical.meta_robots.noindex,
            SECTION_TECHNICAL,
            "Remove the noindex directive so the page can be indexed".to_string(),
        ),
        (
            on_page.headings.h1.count == 0,
            SECTION_ON_PAGE,
            "Add exactly one H1 heading".to_string(),
        ),
        (
            on_page.headings.h1.count > 1,
            SECTION_ON_PAGE,
            "Reduce the page to a single H1 heading".to_string(),
        ),
        (
            !security.content_security_policy,
            SECTION_SECURITY,
            "Add a Content-Security-Policy header".to_string(),
        ),
        (
            !security.x_frame_options,
            SECTION_SECURITY,
            "Add an X-Frame-Options header".to_string(),
        ),
        (
            on_page.title.length == 0,
            SECTION_ON_PAGE,
            "Add a page title".to_string(),
        ),
        (
            on_page.title.length > 0 && on_page.title.score < 100,
            SECTION_ON_PAGE,
            "Bring the page title into the 30-60 character range".to_string(),
        ),
        (
            on_page.meta_description.length == 0,
            SECTION_ON_PAGE,
            "Add a meta description".to_string(),
        ),
        (
            on_page.meta_description.length > 0 && on_page.meta_description.score < 100,
            SECTION_ON_PAGE,
            "Bring the meta description into the 120-160 character range".to_string(),
        ),
        (
            on_page.images.without_alt > 0,
            SECTION_ON_PAGE,
            "Add alt text to all images".to_string(),
        ),
        (
            !on_page.links.issues.is_empty(),
            SECTION_ON_PAGE,
            "Use descriptive link text instead of generic phrases".to_string(),
        ),
        (
            on_page.headings.h1.count == 1 && on_page.headings.h2.count == 0,
            SECTION_ON_PAGE,
            "Add H2 subheadings to structure the content".to_string(),
        ),
        (
            on_page.keywords.score < 50 && !on_page.keywords.keywords.is_empty(),
            SECTION_ON_PAGE,
            "Work the target keywords into the page copy".to_string(),
        ),
        (
            on_page.structured_data.score == 0,
            SECTION_TECHNICAL,
            "Add structured data (JSON-LD) to the page".to_string(),
        ),
        (
            technical.canonicalization.href.is_none(),
            SECTION_TECHNICAL,
            "Add a canonical link tag".to_string(),
        ),
        (
            !technical.mobile_usability.has_viewport,
            SECTION_TECHNICAL,
            "Add a viewport meta tag for mobile rendering".to_string(),
        ),
        (
            !on_page.robots_txt.exists,
            SECTION_TECHNICAL,
            "Add a robots.txt file".to_string(),
        ),
        (
            !on_page.sitemap.exists,
            SECTION_TECHNICAL,
            "Publish an XML sitemap".to_string(),
        ),
        (
            off_page.social_signals.open_graph_tags == 0,
            SECTION_SOCIAL,
            "Add Open Graph tags for richer social sharing".to_string(),
        ),
        (
            off_page.social_signals.twitter_card_tags == 0,
            SECTION_SOCIAL,
            "Add Twitter Card tags".to_string(),
        ),
        (
            off_page.social_signals.social_links == 0,
            SECTION_SOCIAL,
            "Link to the site's social profiles".to_string(),
        ),
        (
            !on_page.analytics.google_analytics
                && !on_page.analytics.tag_manager
                && on_page.analytics.other_tools.is_empty(),
            SECTION_TECHNICAL,
            "Install an analytics tool to measure traffic".to_string(),
        ),
    ];

    let mut seen: HashSet<(String, String)> = HashSet::new();
    let mut recommendations = Vec::new();
    for (fires, section, title) in rules {
        if !fires {
            continue;
        }
        if !seen.insert((title.clone(), section.to_string())) {
            continue;
        }
        recommendations.push(Recommendation {
            section: section.to_string(),
            title,
        });
        if recommendations.len() == MAX_RECOMMENDATIONS {
            break;
        }
    }
    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::{ImageStats, LinkFacts, SocialFacts, StructuredDataFacts};
    use crate::report::{AnalyticsSignal, HeadingLevelSignal, RobotsTxtSignal, SitemapSignal};
    use crate::score;
    use std::collections::HashMap;

    /// Builds the signal groups for a deliberately bare page: no title, no
    /// headings, no meta, nothing. Nearly every rule fires.
    fn bare_page_signals() -> (OnPageSignals, TechnicalSignals, SecuritySignals, OffPageSignals) {
        let structured = StructuredDataFacts::default();
        let analytics = AnalyticsSignal {
            google_analytics: false,
            tag_manager: false,
            facebook_pixel: false,
            other_tools: Vec::new(),
        };
        let on_page = OnPageSignals {
            title: score::score_title(String::new()),
            meta_description: score::score_meta_description(None),
            headings: score::score_headings(<[HeadingLevelSignal; 6]>::default()),
            images: score::score_images(ImageStats {
                total: 2,
                without_alt: 2,
            }),
            links: score::score_links(LinkFacts::default()),
            keywords: score::score_keywords(vec![], true, &[], "", None, &[], &[]),
            robots_txt: RobotsTxtSignal {
                exists: false,
                score: 0,
                issue: Some("missing".to_string()),
            },
            sitemap: SitemapSignal {
                exists: false,
                url: None,
                url_count: 0,
                score: 0,
                issue: Some("missing".to_string()),
            },
            structured_data: score::score_structured_data(&structured),
            analytics: analytics.clone(),
        };
        let technical = TechnicalSignals {
            page_speed: score::page_speed_signal(6_000),
            mobile_usability: score::mobile_usability_signal(false),
            schema: score::schema_signal(&structured),
            canonicalization: score::canonical_signal(None),
            meta_robots: score::meta_robots_signal(None),
        };
        let security = score::evaluate_security("http://example.com/", &HashMap::new());
        let off_page = score::build_off_page(score::social_signals(
            &SocialFacts::default(),
            &analytics,
        ));
        (on_page, technical, security, off_page)
    }

    #[test]
    fn test_bare_page_hits_the_recommendation_cap() {
        let (on_page, technical, security, off_page) = bare_page_signals();
        let recommendations =
            generate_recommendations(&on_page, &technical, &security, &off_page);
        assert_eq!(recommendations.len(), MAX_RECOMMENDATIONS);
    }

    #[test]
    fn test_critical_rules_come_first() {
        let (on_page, technical, security, off_page) = bare_page_signals();
        let recommendations =
            generate_recommendations(&on_page, &technical, &security, &off_page);
        assert_eq!(recommendations[0].title, "Serve the site over HTTPS");
        assert_eq!(recommendations[0].section, SECTION_SECURITY);
        assert_eq!(recommendations[1].title, "Add exactly one H1 heading");
    }

    #[test]
    fn test_no_duplicate_title_section_pairs() {
        let (on_page, technical, security, off_page) = bare_page_signals();
        let recommendations =
            generate_recommendations(&on_page, &technical, &security, &off_page);
        let mut seen = HashSet::new();
        for recommendation in &recommendations {
            assert!(
                seen.insert((recommendation.title.clone(), recommendation.section.clone())),
                "duplicate recommendation: {recommendation:?}"
            );
        }
    }

    #[test]
    fn test_healthy_page_produces_few_recommendations() {
        let structured = StructuredDataFacts {
            types: vec!["WebPage".to_string(), "Organization".to_string()],
            json_ld_blocks: 1,
            json_ld_valid: true,
            microdata_items: 0,
        };
        let analytics = AnalyticsSignal {
            google_analytics: true,
            tag_manager: false,
            facebook_pixel: false,
            other_tools: Vec::new(),
        };
        let mut levels = <[HeadingLevelSignal; 6]>::default();
        levels[0].count = 1;
        levels[1].count = 3;

        let words: Vec<String> = crate::parse::tokenize(&"rust audit ".repeat(30));
        let on_page = OnPageSignals {
            title: score::score_title("A perfectly sized page title, right here".to_string()),
            meta_description: score::score_meta_description(Some("d".repeat(140))),
            headings: score::score_headings(levels),
            images: score::score_images(ImageStats {
                total: 3,
                without_alt: 0,
            }),
            links: score::score_links(LinkFacts {
                total: 10,
                internal: 6,
                external: 4,
                ..Default::default()
            }),
            keywords: score::score_keywords(
                vec!["rust".to_string()],
                false,
                &words,
                "rust title",
                None,
                &[],
                &[],
            ),
            robots_txt: RobotsTxtSignal {
                exists: true,
                score: 100,
                issue: None,
            },
            sitemap: SitemapSignal {
                exists: true,
                url: Some("https://example.com/sitemap.xml".to_string()),
                url_count: 12,
                score: 100,
                issue: None,
            },
            structured_data: score::score_structured_data(&structured),
            analytics: analytics.clone(),
        };
        let technical = TechnicalSignals {
            page_speed: score::page_speed_signal(400),
            mobile_usability: score::mobile_usability_signal(true),
            schema: score::schema_signal(&structured),
            canonicalization: score::canonical_signal(Some(
                "https://example.com/".to_string(),
            )),
            meta_robots: score::meta_robots_signal(None),
        };
        let headers: HashMap<String, String> = [
            "X-Frame-Options",
            "Content-Security-Policy",
            "X-Content-Type-Options",
            "Referrer-Policy",
            "Permissions-Policy",
        ]
        .iter()
        .map(|h| (h.to_string(), "v".to_string()))
        .collect();
        let security = score::evaluate_security("https://example.com/", &headers);

        let mut social = SocialFacts::default();
        social.open_graph.insert("og:title".into(), "t".into());
        social
            .twitter_cards
            .insert("twitter:card".into(), "summary".into());
        social.links.push(crate::parse::SocialMediaLink {
            platform: "Twitter".to_string(),
            url: "https://x.com/acme".to_string(),
        });
        let off_page = score::build_off_page(score::social_signals(&social, &analytics));

        let recommendations =
            generate_recommendations(&on_page, &technical, &security, &off_page);
        assert!(recommendations.len() < 3, "{recommendations:?}");
    }
}
