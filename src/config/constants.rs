//! Configuration constants.
//!
//! This module defines all configuration constants used throughout the
//! pipeline, including timeouts, size limits, scoring thresholds, and the
//! fixed aggregation weights.

use std::time::Duration;

// Network operation timeouts
/// Timeout for the primary page fetch.
pub const PAGE_FETCH_TIMEOUT: Duration = Duration::from_secs(20);
/// Timeout for each auxiliary probe (robots.txt, sitemap).
/// These are best-effort checks; a slow origin should not stall the audit.
pub const AUX_PROBE_TIMEOUT: Duration = Duration::from_secs(5);
/// Timeout for the screenshot collaborator.
pub const SCREENSHOT_TIMEOUT: Duration = Duration::from_secs(10);
/// Top-level deadline for a whole audit.
/// Formula: page fetch (20s) + redirect tracing on a slow chain (up to 20s,
/// overlapped) + parsing/scoring (<1s) + buffer = 45s.
pub const AUDIT_DEADLINE: Duration = Duration::from_secs(45);

/// Default User-Agent string for HTTP requests.
///
/// A descriptive bot identity, deliberately not a browser impersonation: the
/// audit should see what a well-behaved crawler sees. Users can override this
/// via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (compatible; PageAuditBot/1.0; +https://github.com/page-audit/page-audit)";

// Response and input size limits
/// Maximum response body size in bytes (2MB).
/// Bodies larger than this are truncated to prevent memory exhaustion.
pub const MAX_RESPONSE_BODY_SIZE: usize = 2 * 1024 * 1024;
/// Maximum URL length (2048 characters) to prevent DoS via extremely long
/// URLs. Matches common browser and server limits.
pub const MAX_URL_LENGTH: usize = 2048;

// Redirect handling
/// Maximum number of redirect hops to follow.
/// Prevents infinite redirect loops and excessive request chains.
pub const MAX_REDIRECT_HOPS: usize = 10;

// Extraction limits
/// How many heading texts to retain per level in the report.
pub const MAX_HEADING_TEXTS: usize = 5;
/// How many keywords to derive when the caller supplies none.
pub const MAX_DERIVED_KEYWORDS: usize = 5;
/// Minimum word length for derived keywords (words longer than 3 characters).
pub const MIN_KEYWORD_WORD_LENGTH: usize = 4;

// Recommendation generation
/// Maximum number of recommendations in a report.
pub const MAX_RECOMMENDATIONS: usize = 10;

// On-page scoring thresholds
/// Preferred `<title>` length range, inclusive.
pub const TITLE_LENGTH_RANGE: (usize, usize) = (30, 60);
/// Preferred meta description length range, inclusive.
pub const META_DESCRIPTION_LENGTH_RANGE: (usize, usize) = (120, 160);

/// Anchor texts considered too generic to describe their target.
pub const GENERIC_ANCHOR_TEXTS: &[&str] = &[
    "click here",
    "read more",
    "learn more",
    "here",
    "more",
    "link",
    "this",
];

// Overall score aggregation weights (must sum to 1.0)
/// Weight of the performance (lab) component.
pub const WEIGHT_PERFORMANCE: f64 = 0.30;
/// Weight of the on-page category average.
pub const WEIGHT_ON_PAGE: f64 = 0.25;
/// Weight of the technical category average.
pub const WEIGHT_TECHNICAL: f64 = 0.20;
/// Weight of the security score.
pub const WEIGHT_SECURITY: f64 = 0.10;
/// Weight of the off-page category average.
pub const WEIGHT_OFF_PAGE: f64 = 0.15;

// Off-page defaults
/// Neutral score an unmeasured off-page metric contributes to the category
/// average. Unknown figures must not drag the average to zero or inflate it.
pub const UNMEASURED_NEUTRAL_SCORE: u8 = 50;
/// Default local-SEO score when no local signals are evaluated.
pub const LOCAL_SEO_DEFAULT_SCORE: u8 = 70;

// Summary bucketing
/// A check at or above this score counts as passed.
pub const SUMMARY_PASS_THRESHOLD: u8 = 80;
/// A check below this score counts as critical.
pub const SUMMARY_CRITICAL_THRESHOLD: u8 = 50;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aggregation_weights_sum_to_one() {
        let sum = WEIGHT_PERFORMANCE
            + WEIGHT_ON_PAGE
            + WEIGHT_TECHNICAL
            + WEIGHT_SECURITY
            + WEIGHT_OFF_PAGE;
        assert!((sum - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_threshold_ordering() {
        assert!(SUMMARY_CRITICAL_THRESHOLD < SUMMARY_PASS_THRESHOLD);
        assert!(TITLE_LENGTH_RANGE.0 < TITLE_LENGTH_RANGE.1);
        assert!(META_DESCRIPTION_LENGTH_RANGE.0 < META_DESCRIPTION_LENGTH_RANGE.1);
    }
}
