//! Report data model.
//!
//! These types form the root aggregate returned by an audit. The whole tree is
//! built once per request and never mutated afterwards. All score fields are
//! in the range [0, 100].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single page-audit request.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditRequest {
    /// The raw, user-supplied URL. Normalized before fetching.
    pub url: String,
    /// Target keywords to analyze. When empty, keywords are derived from the
    /// document by frequency.
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Whether to ask the screenshot collaborator for captures.
    #[serde(default)]
    pub include_screenshot: bool,
}

impl AuditRequest {
    /// Convenience constructor for a request with no keywords or screenshots.
    pub fn for_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            keywords: Vec::new(),
            include_screenshot: false,
        }
    }
}

/// One recorded redirect hop: a 3xx response plus its `Location` target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RedirectHop {
    /// URL that answered with a redirect.
    pub from: String,
    /// Target taken from the `Location` header (resolved against `from`).
    pub to: String,
    /// The 3xx status code of the hop.
    pub status_code: u16,
}

/// Screenshot captures per viewport class. Every slot is independently
/// optional; the capture subsystem is best-effort.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenshotSet {
    /// Desktop-viewport capture.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desktop: Option<Vec<u8>>,
    /// Tablet-viewport capture.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tablet: Option<Vec<u8>>,
    /// Mobile-viewport capture.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<Vec<u8>>,
}

impl ScreenshotSet {
    /// True when no viewport produced an image.
    pub fn is_empty(&self) -> bool {
        self.desktop.is_none() && self.tablet.is_none() && self.mobile.is_none()
    }
}

/// Raw retrieval facts for the audited page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CrawlingData {
    /// Final URL after the HTTP client followed redirects.
    pub url: String,
    /// HTTP status of the final response.
    pub status_code: u16,
    /// Manually traced redirect chain, in hop order. Empty when the page
    /// answered directly. Never longer than the configured hop bound.
    pub redirects: Vec<RedirectHop>,
    /// Wall-clock time of the primary fetch, in milliseconds.
    pub load_time_ms: u64,
    /// Byte-exact body of the final successful response.
    pub html_content: String,
    /// Captures from the screenshot collaborator, when requested and available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screenshots: Option<ScreenshotSet>,
}

// ---------------------------------------------------------------------------
// On-page signals
// ---------------------------------------------------------------------------

/// `<title>` signal.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleSignal {
    /// Text of the first `<title>` element, empty when absent.
    pub text: String,
    /// Character length of the title text.
    pub length: usize,
    /// Sub-score in [0, 100].
    pub score: u8,
    /// Threshold-derived recommendations for this facet.
    pub recommendations: Vec<String>,
}

/// Meta description signal.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaDescriptionSignal {
    /// Content of `<meta name="description">`, when present.
    pub text: Option<String>,
    /// Character length of the description (0 when absent).
    pub length: usize,
    /// Sub-score in [0, 100].
    pub score: u8,
    /// Threshold-derived recommendations for this facet.
    pub recommendations: Vec<String>,
}

/// Count and leading texts for one heading level.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadingLevelSignal {
    /// Number of headings at this level.
    pub count: usize,
    /// The first few heading texts at this level, for the report reader.
    pub texts: Vec<String>,
}

/// H1-H6 outline signal.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadingSignals {
    /// H1 level.
    pub h1: HeadingLevelSignal,
    /// H2 level.
    pub h2: HeadingLevelSignal,
    /// H3 level.
    pub h3: HeadingLevelSignal,
    /// H4 level.
    pub h4: HeadingLevelSignal,
    /// H5 level.
    pub h5: HeadingLevelSignal,
    /// H6 level.
    pub h6: HeadingLevelSignal,
    /// H1-only score: 100 for exactly one, 0 for none, 50 for duplicates.
    pub h1_score: u8,
    /// Outline score across H1/H2 presence.
    pub structure_score: u8,
    /// Threshold-derived recommendations for the outline.
    pub recommendations: Vec<String>,
}

/// Image alt-coverage signal.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageSignal {
    /// Total `<img>` elements.
    pub total: usize,
    /// Images lacking an `alt` attribute.
    pub without_alt: usize,
    /// Sub-score in [0, 100].
    pub score: u8,
    /// Threshold-derived recommendations for this facet.
    pub recommendations: Vec<String>,
}

/// Anchor audit signal.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkSignal {
    /// Anchors considered after skip rules.
    pub total: usize,
    /// Anchors whose hostname matches the page's own.
    pub internal: usize,
    /// Anchors pointing at other hosts.
    pub external: usize,
    /// Anchors carrying `rel="nofollow"`.
    pub nofollow: usize,
    /// Anchors whose href did not resolve to a URL.
    pub broken: usize,
    /// Human-readable link problems (broken hrefs, generic anchor text, ...).
    pub issues: Vec<String>,
    /// Sub-score in [0, 100].
    pub score: u8,
    /// Threshold-derived recommendations for this facet.
    pub recommendations: Vec<String>,
}

/// Per-keyword density and placement facts.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordStat {
    /// The keyword or phrase analyzed.
    pub keyword: String,
    /// Occurrences in the text-stripped document.
    pub occurrences: usize,
    /// Occurrences as a percentage of total words.
    pub density: f64,
    /// Present in the title text.
    pub in_title: bool,
    /// Present in the meta description.
    pub in_meta_description: bool,
    /// Present in an H1 heading.
    pub in_h1: bool,
    /// Present in an H2 heading.
    pub in_h2: bool,
    /// Density-band score plus placement bonuses, capped at 100.
    pub score: u8,
}

/// Keyword usage signal.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordSignal {
    /// True when no keywords were supplied and these were derived by frequency.
    pub derived: bool,
    /// Word count of the text-stripped document.
    pub total_words: usize,
    /// Per-keyword statistics.
    pub keywords: Vec<KeywordStat>,
    /// Mean of the per-keyword scores (0 when no keywords could be derived).
    pub score: u8,
    /// Threshold-derived recommendations for this facet.
    pub recommendations: Vec<String>,
}

/// robots.txt probe outcome. Absence is a scoreable result, not an error.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RobotsTxtSignal {
    /// Whether the probe answered HTTP 200.
    pub exists: bool,
    /// 100 when present, 0 otherwise.
    pub score: u8,
    /// Explanation when the file is missing or unreachable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue: Option<String>,
}

/// Sitemap probe outcome.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SitemapSignal {
    /// Whether any well-known sitemap location answered HTTP 200.
    pub exists: bool,
    /// The sitemap URL that answered 200, when one did.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Coarse `<url>` entry count of the sitemap body.
    pub url_count: usize,
    /// 100 when found, 0 otherwise.
    pub score: u8,
    /// Explanation when no sitemap was found.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue: Option<String>,
}

/// Structured-data (JSON-LD + microdata) signal.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredDataSignal {
    /// Deduplicated schema.org types found in JSON-LD and microdata.
    pub types: Vec<String>,
    /// Number of `<script type="application/ld+json">` blocks seen.
    pub json_ld_blocks: usize,
    /// False when at least one JSON-LD block failed to parse.
    pub json_ld_valid: bool,
    /// Number of elements carrying an `itemtype` attribute.
    pub microdata_items: usize,
    /// Sub-score in [0, 100].
    pub score: u8,
    /// Threshold-derived recommendations for this facet.
    pub recommendations: Vec<String>,
}

/// Analytics / tracking tool detection.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSignal {
    /// Google Analytics (UA or GA4) detected.
    pub google_analytics: bool,
    /// Google Tag Manager detected.
    pub tag_manager: bool,
    /// Facebook (Meta) pixel detected.
    pub facebook_pixel: bool,
    /// Other recognized tracking tools (Hotjar, Mixpanel, ...).
    pub other_tools: Vec<String>,
}

impl AnalyticsSignal {
    /// Number of distinct tracking pixels/tags detected.
    pub fn pixel_count(&self) -> usize {
        usize::from(self.google_analytics)
            + usize::from(self.tag_manager)
            + usize::from(self.facebook_pixel)
            + self.other_tools.len()
    }
}

/// All on-page signal records.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OnPageSignals {
    /// Title signal.
    pub title: TitleSignal,
    /// Meta description signal.
    pub meta_description: MetaDescriptionSignal,
    /// Heading outline signal.
    pub headings: HeadingSignals,
    /// Image alt-coverage signal.
    pub images: ImageSignal,
    /// Anchor audit signal.
    pub links: LinkSignal,
    /// Keyword usage signal.
    pub keywords: KeywordSignal,
    /// robots.txt probe outcome.
    pub robots_txt: RobotsTxtSignal,
    /// Sitemap probe outcome.
    pub sitemap: SitemapSignal,
    /// Structured-data signal.
    pub structured_data: StructuredDataSignal,
    /// Tracking tool detection.
    pub analytics: AnalyticsSignal,
}

// ---------------------------------------------------------------------------
// Technical signals
// ---------------------------------------------------------------------------

/// Load-time-derived page speed proxy. Mobile is modeled as uniformly slower
/// than desktop, not independently measured.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSpeedSignal {
    /// Desktop score from the load-time breakpoints.
    pub desktop: u8,
    /// Modeled mobile score (desktop minus 15, floor 25).
    pub mobile: u8,
    /// Rounded mean of desktop and mobile.
    pub composite: u8,
}

/// Viewport meta tag presence (binary).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MobileUsabilitySignal {
    /// Whether a `<meta name="viewport">` tag is present.
    pub has_viewport: bool,
    /// 100 when present, 0 otherwise.
    pub score: u8,
}

/// Structured-data presence for the technical category.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaSignal {
    /// Whether any JSON-LD block or microdata item was found.
    pub present: bool,
    /// 100 when present, 0 otherwise.
    pub score: u8,
}

/// Canonical link tag signal.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalSignal {
    /// The canonical href, when the tag is present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Whether the href is an absolute http(s) URL.
    pub is_absolute: bool,
    /// 50 absent, 75 relative, 100 absolute.
    pub score: u8,
}

/// `<meta name="robots">` directives that gate indexability.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaRobotsSignal {
    /// Raw content of the tag, when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// A `noindex` directive is present.
    pub noindex: bool,
    /// A `nofollow` directive is present.
    pub nofollow: bool,
}

/// Technical category signals.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalSignals {
    /// Load-time page speed proxy.
    pub page_speed: PageSpeedSignal,
    /// Viewport presence.
    pub mobile_usability: MobileUsabilitySignal,
    /// Structured-data presence.
    pub schema: SchemaSignal,
    /// Canonical tag signal.
    pub canonicalization: CanonicalSignal,
    /// Meta robots directives.
    pub meta_robots: MetaRobotsSignal,
}

// ---------------------------------------------------------------------------
// Security signals
// ---------------------------------------------------------------------------

/// Severity of a security finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Hardening gap with limited direct impact.
    Low,
    /// Missing protection worth fixing soon.
    Medium,
    /// Fundamental problem (e.g. no HTTPS).
    High,
}

/// One security finding with a stable machine code.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityIssue {
    /// Stable machine code (e.g. `missing_csp`).
    pub code: String,
    /// Human-readable description.
    pub message: String,
    /// Fixed severity for this finding kind.
    pub severity: Severity,
}

/// Security category signals. Header booleans reflect the real response
/// headers of the primary fetch.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SecuritySignals {
    /// The final URL uses the https scheme.
    pub https: bool,
    /// X-Frame-Options header present.
    pub x_frame_options: bool,
    /// Content-Security-Policy header present.
    pub content_security_policy: bool,
    /// X-Content-Type-Options header present.
    pub x_content_type_options: bool,
    /// Referrer-Policy header present.
    pub referrer_policy: bool,
    /// Permissions-Policy header present.
    pub permissions_policy: bool,
    /// Weighted sum of the signals above, in [0, 100].
    pub score: u8,
    /// One issue per absent signal, each with a fixed severity.
    pub issues: Vec<SecurityIssue>,
}

// ---------------------------------------------------------------------------
// Off-page signals
// ---------------------------------------------------------------------------

/// An off-page figure that cannot be derived from a single page fetch.
///
/// `Unmeasured` is a first-class state: these numbers require an external data
/// source and are never invented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "status", content = "score")]
pub enum OffPageMetric {
    /// No external data source was consulted; the value is unknown.
    Unmeasured,
    /// A 0-100 score supplied by an external data source.
    Measured(u8),
}

impl OffPageMetric {
    /// The measured score, or `fallback` when unmeasured.
    pub fn score_or(self, fallback: u8) -> u8 {
        match self {
            OffPageMetric::Measured(score) => score,
            OffPageMetric::Unmeasured => fallback,
        }
    }
}

/// Social presence derived from real document signals (Open Graph, Twitter
/// Cards, tracking pixels, social profile links).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialSignals {
    /// Open Graph meta tags found.
    pub open_graph_tags: usize,
    /// Twitter Card meta tags found.
    pub twitter_card_tags: usize,
    /// Tracking pixels/tags detected.
    pub tracking_pixels: usize,
    /// Outbound social profile links found.
    pub social_links: usize,
    /// Distinct platforms the page links out to.
    pub platforms: Vec<String>,
    /// Point schedule total, capped at 100.
    pub score: u8,
}

/// Off-page category. Backlinks, authority and brand mentions are explicitly
/// estimated-not-measured; only the social sub-score is computed from the
/// fetched document.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OffPageSignals {
    /// Backlink figure; requires an external data source.
    pub backlinks: OffPageMetric,
    /// Domain authority figure; requires an external data source.
    pub domain_authority: OffPageMetric,
    /// Document-derived social presence.
    pub social_signals: SocialSignals,
    /// Brand mention figure; requires an external data source.
    pub brand_mentions: OffPageMetric,
    /// Default local-SEO score when no local signals are evaluated.
    pub local_seo_score: u8,
}

// ---------------------------------------------------------------------------
// Root aggregate
// ---------------------------------------------------------------------------

/// One actionable recommendation. Deduplicated on `(title, section)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    /// Report section the recommendation belongs to (e.g. "security").
    pub section: String,
    /// The recommendation text.
    pub title: String,
}

/// Pass/warn/fail roll-up across every scored check.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditSummary {
    /// Checks scoring below the critical threshold.
    pub critical_issues: usize,
    /// Checks between the critical and pass thresholds.
    pub warning_issues: usize,
    /// Checks at or above the pass threshold.
    pub passed_checks: usize,
    /// Total number of scored checks.
    pub total_checks: usize,
}

/// The full audit report returned to the caller.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditReport {
    /// Normalized URL the audit started from.
    pub url: String,
    /// Timestamp of the audit.
    pub analyzed_at: DateTime<Utc>,
    /// Raw retrieval facts.
    pub crawling_data: CrawlingData,
    /// On-page signal records.
    #[serde(rename = "onPageSEO")]
    pub on_page: OnPageSignals,
    /// Technical category signals.
    pub technical: TechnicalSignals,
    /// Security category signals.
    pub security: SecuritySignals,
    /// Off-page category signals.
    pub off_page: OffPageSignals,
    /// Weighted combination of the category scores.
    pub overall_score: u8,
    /// At most ten recommendations, priority-ordered and deduplicated.
    pub recommendations: Vec<Recommendation>,
    /// Pass/warn/fail roll-up.
    pub summary: AuditSummary,
}
