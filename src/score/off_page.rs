//! Off-page category assembly.
//!
//! Backlink counts, domain authority, and brand mentions cannot be derived
//! from a single page fetch: they stay `Unmeasured` until an external data
//! source supplies them. The social sub-score is the one real computation
//! here, derived entirely from document signals.

use crate::config::LOCAL_SEO_DEFAULT_SCORE;
use crate::parse::SocialFacts;
use crate::report::{AnalyticsSignal, OffPageMetric, OffPageSignals, SocialSignals};

// Social point schedule: 10 points per signal within each bucket's cap.
const OPEN_GRAPH_POINT_CAP: usize = 30;
const TWITTER_CARD_POINT_CAP: usize = 20;
const PIXEL_POINT_CAP: usize = 20;
const SOCIAL_LINK_POINT_CAP: usize = 30;

/// Computes the social-presence score from real document signals.
///
/// Open Graph tags earn up to 30 points, Twitter Cards up to 20, tracking
/// pixels up to 20, and social profile links up to 30, capped at 100.
pub fn social_signals(social: &SocialFacts, analytics: &AnalyticsSignal) -> SocialSignals {
    let open_graph_tags = social.open_graph.len();
    let twitter_card_tags = social.twitter_cards.len();
    let tracking_pixels = analytics.pixel_count();
    let social_links = social.links.len();

    let points = (open_graph_tags * 10).min(OPEN_GRAPH_POINT_CAP)
        + (twitter_card_tags * 10).min(TWITTER_CARD_POINT_CAP)
        + (tracking_pixels * 10).min(PIXEL_POINT_CAP)
        + (social_links * 10).min(SOCIAL_LINK_POINT_CAP);

    SocialSignals {
        open_graph_tags,
        twitter_card_tags,
        tracking_pixels,
        social_links,
        platforms: social.platforms(),
        score: points.min(100) as u8,
    }
}

/// Assembles the off-page category around the social sub-score.
pub fn build_off_page(social_signals: SocialSignals) -> OffPageSignals {
    OffPageSignals {
        backlinks: OffPageMetric::Unmeasured,
        domain_authority: OffPageMetric::Unmeasured,
        social_signals,
        brand_mentions: OffPageMetric::Unmeasured,
        local_seo_score: LOCAL_SEO_DEFAULT_SCORE,
    }
}
