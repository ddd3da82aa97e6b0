//! page_audit library: single-page audit pipeline.
//!
//! This library fetches one web page, probes its auxiliary resources
//! (robots.txt, sitemap), traces its redirect chain, extracts on-page
//! signals from the parsed document, and composes a scored audit report.
//!
//! # Example
//!
//! ```no_run
//! use page_audit::{run_audit, AuditContext, AuditRequest, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::default();
//! let ctx = AuditContext::from_config(&config)?;
//! let request = AuditRequest::for_url("example.com");
//!
//! let report = run_audit(&request, &ctx).await?;
//! println!("{} scored {}", report.url, report.overall_score);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

#![warn(missing_docs)]

pub mod config;
mod error_handling;
mod fetch;
pub mod initialization;
mod parse;
pub mod report;
mod score;
mod screenshot;
mod server;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{AuditStats, FetchError, FetchErrorKind};
pub use fetch::{normalize_url, resolve_redirect_chain, AuditContext};
pub use report::{AuditReport, AuditRequest};
pub use run::{run_audit, run_audit_with_deadline};
pub use screenshot::{DisabledCapturer, ScreenshotCapturer};
pub use server::{serve, ServerState};

// Internal run module (contains the main audit pipeline)
mod run {
    use std::time::Instant;

    use chrono::Utc;
    use log::{info, warn};
    use scraper::Html;
    use url::Url;

    use crate::config::{AUDIT_DEADLINE, MAX_DERIVED_KEYWORDS, MAX_REDIRECT_HOPS, SCREENSHOT_TIMEOUT};
    use crate::error_handling::FetchError;
    use crate::fetch::{self, AuditContext};
    use crate::parse;
    use crate::report::{
        AuditReport, AuditRequest, CrawlingData, OnPageSignals, TechnicalSignals,
    };
    use crate::score;

    /// Runs one audit under the top-level deadline.
    ///
    /// Identical to [`run_audit`] except that deadline expiry maps to
    /// `FetchError::NavigationTimeout`. The HTTP boundary and the CLI both go
    /// through this entry point.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] when the audit fails or times out.
    pub async fn run_audit_with_deadline(
        request: &AuditRequest,
        ctx: &AuditContext,
    ) -> Result<AuditReport, FetchError> {
        match tokio::time::timeout(AUDIT_DEADLINE, run_audit(request, ctx)).await {
            Ok(result) => result,
            Err(_) => Err(FetchError::NavigationTimeout(request.url.clone())),
        }
    }

    /// Runs the full audit pipeline for one request.
    ///
    /// The primary fetch, redirect trace, robots probe, and sitemap probe
    /// have no data dependency on each other and run concurrently, each
    /// under its own timeout. Only the primary fetch is fatal: every other
    /// branch soft-fails into a negative signal. Once the body is parsed,
    /// extraction and scoring are pure and synchronous.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] when the URL is invalid or the primary fetch
    /// fails; see the taxonomy for the classification rules.
    pub async fn run_audit(
        request: &AuditRequest,
        ctx: &AuditContext,
    ) -> Result<AuditReport, FetchError> {
        let normalized = fetch::normalize_url(&request.url)?;
        let base = Url::parse(&normalized)
            .map_err(|_| FetchError::InvalidUrl(request.url.clone()))?;
        info!("Starting audit for {normalized}");

        let timed_fetch = async {
            let started = Instant::now();
            let result = fetch::fetch_page(&ctx.client, &normalized).await;
            (result, started.elapsed())
        };

        let ((page_result, fetch_elapsed), redirects, robots_txt, sitemap) = tokio::join!(
            timed_fetch,
            fetch::resolve_redirect_chain(&ctx.redirect_client, &normalized, MAX_REDIRECT_HOPS),
            fetch::check_robots_txt(&ctx.probe_client, &base),
            fetch::check_sitemap(&ctx.probe_client, &base),
        );

        // The primary fetch is the only fatal branch.
        let page = page_result?;
        let load_time_ms = fetch_elapsed.as_millis() as u64;

        let screenshots = if request.include_screenshot {
            match tokio::time::timeout(
                SCREENSHOT_TIMEOUT,
                ctx.screenshots.capture_multiple(&page.final_url),
            )
            .await
            {
                Ok(set) if !set.is_empty() => Some(set),
                Ok(_) => None,
                Err(_) => {
                    warn!("Screenshot capture timed out for {}", page.final_url);
                    None
                }
            }
        } else {
            None
        };

        // Parse once; all extractors share the document read-only. The
        // parsed document is not Send, so everything from here on stays on
        // this side of the last await.
        let document = Html::parse_document(&page.body);
        let final_url = Url::parse(&page.final_url).unwrap_or_else(|_| base.clone());

        let title_text = parse::extract_title(&document);
        let meta_description_text = parse::extract_meta_description(&document);
        let heading_levels = parse::extract_headings(&document);
        let image_stats = parse::extract_image_stats(&document);
        let link_facts = parse::audit_links(&document, &final_url);
        let structured_facts = parse::extract_structured_data(&document);
        let analytics = parse::detect_tracking(&document, &page.body);
        let social_facts = parse::extract_social_facts(&document);
        let canonical_href = parse::extract_canonical(&document);
        let meta_robots_content = parse::extract_meta_robots(&document);
        let has_viewport = parse::has_viewport(&document);

        let text = parse::strip_tags(&page.body);
        let words = parse::tokenize(&text);
        let (keyword_list, derived) = if request.keywords.is_empty() {
            (parse::derive_keywords(&words, MAX_DERIVED_KEYWORDS), true)
        } else {
            (request.keywords.clone(), false)
        };

        let h1_texts = heading_levels[0].texts.clone();
        let h2_texts = heading_levels[1].texts.clone();

        let title = score::score_title(title_text);
        let meta_description = score::score_meta_description(meta_description_text);
        let keywords = score::score_keywords(
            keyword_list,
            derived,
            &words,
            &title.text,
            meta_description.text.as_deref(),
            &h1_texts,
            &h2_texts,
        );

        let on_page = OnPageSignals {
            title,
            meta_description,
            headings: score::score_headings(heading_levels),
            images: score::score_images(image_stats),
            links: score::score_links(link_facts),
            keywords,
            robots_txt,
            sitemap,
            structured_data: score::score_structured_data(&structured_facts),
            analytics: analytics.clone(),
        };

        let technical = TechnicalSignals {
            page_speed: score::page_speed_signal(load_time_ms),
            mobile_usability: score::mobile_usability_signal(has_viewport),
            schema: score::schema_signal(&structured_facts),
            canonicalization: score::canonical_signal(canonical_href),
            meta_robots: score::meta_robots_signal(meta_robots_content),
        };

        let security = score::evaluate_security(&page.final_url, &page.security_headers);
        let off_page =
            score::build_off_page(score::social_signals(&social_facts, &analytics));

        // No lab performance source is wired in; the load-time proxy stands in.
        let performance = score::resolve_performance(None, &technical.page_speed);
        let overall_score =
            score::overall_score(performance, &on_page, &technical, &security, &off_page);
        let summary = score::summarize(&score::collect_check_scores(
            &on_page, &technical, &security, &off_page,
        ));
        let recommendations =
            score::generate_recommendations(&on_page, &technical, &security, &off_page);

        info!(
            "Audit of {} complete: overall score {} ({} recommendation(s))",
            page.final_url,
            overall_score,
            recommendations.len()
        );

        Ok(AuditReport {
            url: normalized,
            analyzed_at: Utc::now(),
            crawling_data: CrawlingData {
                url: page.final_url,
                status_code: page.status_code,
                redirects,
                load_time_ms,
                html_content: page.body,
                screenshots,
            },
            on_page,
            technical,
            security,
            off_page,
            overall_score,
            recommendations,
            summary,
        })
    }
}
