//! Score aggregation.
//!
//! Combines category sub-scores into the overall score via the fixed weights
//! and rolls every scored check up into the pass/warn/fail summary.

use crate::config::{
    SUMMARY_CRITICAL_THRESHOLD, SUMMARY_PASS_THRESHOLD, UNMEASURED_NEUTRAL_SCORE,
    WEIGHT_OFF_PAGE, WEIGHT_ON_PAGE, WEIGHT_PERFORMANCE, WEIGHT_SECURITY, WEIGHT_TECHNICAL,
};
use crate::report::{
    AuditSummary, OffPageSignals, OnPageSignals, PageSpeedSignal, SecuritySignals,
    TechnicalSignals,
};

/// Mean of the on-page sub-scores: title, meta description, heading
/// structure, images, links.
pub fn on_page_average(on_page: &OnPageSignals) -> f64 {
    let scores = [
        on_page.title.score,
        on_page.meta_description.score,
        on_page.headings.structure_score,
        on_page.images.score,
        on_page.links.score,
    ];
    mean(&scores)
}

/// Mean of the technical sub-scores: page speed composite, mobile usability,
/// schema, canonicalization.
pub fn technical_average(technical: &TechnicalSignals) -> f64 {
    let scores = [
        technical.page_speed.composite,
        technical.mobile_usability.score,
        technical.schema.score,
        technical.canonicalization.score,
    ];
    mean(&scores)
}

/// Mean of the off-page sub-scores. Unmeasured figures contribute the neutral
/// default rather than a fabricated value.
pub fn off_page_average(off_page: &OffPageSignals) -> f64 {
    let scores = [
        off_page.backlinks.score_or(UNMEASURED_NEUTRAL_SCORE),
        off_page.domain_authority.score_or(UNMEASURED_NEUTRAL_SCORE),
        off_page.social_signals.score,
        off_page.brand_mentions.score_or(UNMEASURED_NEUTRAL_SCORE),
        off_page.local_seo_score,
    ];
    mean(&scores)
}

/// Resolves the performance component for the overall-score formula.
///
/// Lab performance is a pluggable external measurement. When none is
/// available the load-time-derived page-speed composite stands in: a real,
/// deterministic measurement, never an invented number.
pub fn resolve_performance(lab_performance: Option<u8>, page_speed: &PageSpeedSignal) -> u8 {
    lab_performance.unwrap_or(page_speed.composite)
}

/// Combines the category figures into the overall score with fixed weights.
pub fn overall_score(
    performance: u8,
    on_page: &OnPageSignals,
    technical: &TechnicalSignals,
    security: &SecuritySignals,
    off_page: &OffPageSignals,
) -> u8 {
    let weighted = f64::from(performance) * WEIGHT_PERFORMANCE
        + on_page_average(on_page) * WEIGHT_ON_PAGE
        + technical_average(technical) * WEIGHT_TECHNICAL
        + f64::from(security.score) * WEIGHT_SECURITY
        + off_page_average(off_page) * WEIGHT_OFF_PAGE;
    weighted.round().clamp(0.0, 100.0) as u8
}

/// Collects every individually scored check for the summary roll-up, in a
/// fixed order.
pub fn collect_check_scores(
    on_page: &OnPageSignals,
    technical: &TechnicalSignals,
    security: &SecuritySignals,
    off_page: &OffPageSignals,
) -> Vec<u8> {
    vec![
        on_page.title.score,
        on_page.meta_description.score,
        on_page.headings.structure_score,
        on_page.images.score,
        on_page.links.score,
        on_page.keywords.score,
        on_page.robots_txt.score,
        on_page.sitemap.score,
        on_page.structured_data.score,
        technical.page_speed.composite,
        technical.mobile_usability.score,
        technical.schema.score,
        technical.canonicalization.score,
        security.score,
        off_page.social_signals.score,
    ]
}

/// Buckets check scores into the pass/warn/fail summary. A check passes at
/// 80 or above and is critical below 50.
pub fn summarize(check_scores: &[u8]) -> AuditSummary {
    let mut summary = AuditSummary {
        critical_issues: 0,
        warning_issues: 0,
        passed_checks: 0,
        total_checks: check_scores.len(),
    };
    for &score in check_scores {
        if score >= SUMMARY_PASS_THRESHOLD {
            summary.passed_checks += 1;
        } else if score < SUMMARY_CRITICAL_THRESHOLD {
            summary.critical_issues += 1;
        } else {
            summary.warning_issues += 1;
        }
    }
    summary
}

fn mean(scores: &[u8]) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }
    scores.iter().map(|&s| f64::from(s)).sum::<f64>() / scores.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::OffPageMetric;

    #[test]
    fn test_mean_of_scores() {
        assert!((mean(&[100, 50]) - 75.0).abs() < f64::EPSILON);
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn test_resolve_performance_prefers_lab_measurement() {
        let page_speed = PageSpeedSignal {
            desktop: 75,
            mobile: 60,
            composite: 68,
        };
        assert_eq!(resolve_performance(Some(91), &page_speed), 91);
        assert_eq!(resolve_performance(None, &page_speed), 68);
    }

    #[test]
    fn test_off_page_average_uses_neutral_for_unmeasured() {
        let off_page = OffPageSignals {
            backlinks: OffPageMetric::Unmeasured,
            domain_authority: OffPageMetric::Unmeasured,
            social_signals: crate::report::SocialSignals {
                open_graph_tags: 0,
                twitter_card_tags: 0,
                tracking_pixels: 0,
                social_links: 0,
                platforms: Vec::new(),
                score: 60,
            },
            brand_mentions: OffPageMetric::Unmeasured,
            local_seo_score: 70,
        };
        // (50 + 50 + 60 + 50 + 70) / 5
        assert!((off_page_average(&off_page) - 56.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_summarize_buckets() {
        let summary = summarize(&[100, 85, 79, 50, 49, 0]);
        assert_eq!(summary.total_checks, 6);
        assert_eq!(summary.passed_checks, 2);
        assert_eq!(summary.warning_issues, 2);
        assert_eq!(summary.critical_issues, 2);
    }
}
