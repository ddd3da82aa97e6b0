//! Page retrieval.
//!
//! This module provides:
//! - URL normalization and validation
//! - The primary page fetch with failure classification
//! - Manual redirect-chain tracing
//! - Soft-fail probes for robots.txt and sitemaps

mod context;
mod redirects;
mod robots;

// Re-export public API
pub use context::AuditContext;
pub use redirects::resolve_redirect_chain;
pub use robots::{check_robots_txt, check_sitemap};

use std::collections::HashMap;

use crate::config::{RequestHeaders, MAX_RESPONSE_BODY_SIZE, MAX_URL_LENGTH, SECURITY_HEADERS};
use crate::error_handling::{classify_http_status, classify_transport_error, FetchError};

/// The primary fetch result: everything downstream extractors need from the
/// HTTP exchange.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Final URL after the client followed redirects.
    pub final_url: String,
    /// Status code of the final response.
    pub status_code: u16,
    /// Response body (truncated at the configured cap).
    pub body: String,
    /// Security headers present on the final response.
    pub security_headers: HashMap<String, String>,
}

/// Validates and normalizes a raw user-supplied URL.
///
/// Adds an `https://` prefix if no scheme is present, then parses and
/// re-serializes the URL. Pure, no I/O.
///
/// # Errors
///
/// Returns `FetchError::InvalidUrl` when the input is empty, exceeds the
/// length cap, fails to parse, has a non-http(s) scheme, or has no host.
pub fn normalize_url(raw: &str) -> Result<String, FetchError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.len() > MAX_URL_LENGTH {
        return Err(FetchError::InvalidUrl(truncate_for_display(raw)));
    }

    let candidate = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else if trimmed.contains("://") {
        // A non-http(s) scheme; prefixing would hide it inside the authority.
        return Err(FetchError::InvalidUrl(truncate_for_display(raw)));
    } else {
        format!("https://{trimmed}")
    };

    match url::Url::parse(&candidate) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") && parsed.host_str().is_some() => {
            Ok(parsed.to_string())
        }
        _ => Err(FetchError::InvalidUrl(truncate_for_display(raw))),
    }
}

/// Performs the single primary GET for the page under audit.
///
/// Sends the identity header set, follows redirects automatically (the client
/// carries the hop bound), and classifies every failure into the closed
/// taxonomy. The caller records wall-clock elapsed time around this call.
///
/// # Errors
///
/// One [`FetchError`] per the classification order in §`error_handling`:
/// transport failures first, then 404/403/5xx/other-4xx statuses.
pub async fn fetch_page(client: &reqwest::Client, url: &str) -> Result<FetchedPage, FetchError> {
    log::debug!("Fetching primary page: {url}");

    let response = RequestHeaders::apply_to_request_builder(client.get(url))
        .send()
        .await
        .map_err(|error| classify_transport_error(url, &error))?;

    let status_code = response.status().as_u16();
    let final_url = response.url().to_string();
    if let Some(error) = classify_http_status(&final_url, status_code) {
        return Err(error);
    }

    // Headers must be captured before the body consumes the response.
    let security_headers = extract_security_headers(response.headers());

    let mut body = response
        .text()
        .await
        .map_err(|error| classify_transport_error(&final_url, &error))?;
    if body.len() > MAX_RESPONSE_BODY_SIZE {
        let mut cut = MAX_RESPONSE_BODY_SIZE;
        while !body.is_char_boundary(cut) {
            cut -= 1;
        }
        log::warn!(
            "Truncating oversized response body for {final_url} ({} bytes)",
            body.len()
        );
        body.truncate(cut);
    }

    log::debug!("Fetched {final_url}: HTTP {status_code}, {} bytes", body.len());

    Ok(FetchedPage {
        final_url,
        status_code,
        body,
        security_headers,
    })
}

/// Extracts security-related HTTP headers from a response.
///
/// Scans the header map for the headers named in `config::SECURITY_HEADERS`.
/// Only headers present in the response are included in the map.
pub fn extract_security_headers(
    headers: &reqwest::header::HeaderMap,
) -> HashMap<String, String> {
    SECURITY_HEADERS
        .iter()
        .filter_map(|&header_name| {
            headers.get(header_name).map(|value| {
                (
                    header_name.to_string(),
                    value.to_str().unwrap_or_default().to_string(),
                )
            })
        })
        .collect()
}

/// Shortens pathological inputs before they land in error messages.
fn truncate_for_display(raw: &str) -> String {
    const DISPLAY_CAP: usize = 100;
    if raw.len() <= DISPLAY_CAP {
        return raw.to_string();
    }
    let mut cut = DISPLAY_CAP;
    while !raw.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}...", &raw[..cut])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_url_adds_https_and_trailing_slash() {
        assert_eq!(
            normalize_url("example.com").unwrap(),
            "https://example.com/"
        );
    }

    #[test]
    fn test_normalize_url_preserves_existing_scheme() {
        assert_eq!(
            normalize_url("http://example.com/path?q=1").unwrap(),
            "http://example.com/path?q=1"
        );
    }

    #[test]
    fn test_normalize_url_rejects_garbage() {
        assert!(normalize_url("not a url").is_err());
        assert!(normalize_url("").is_err());
        assert!(normalize_url("   ").is_err());
    }

    #[test]
    fn test_normalize_url_rejects_non_http_schemes() {
        assert!(normalize_url("ftp://example.com").is_err());
        assert!(normalize_url("javascript:alert(1)").is_err());
    }

    #[test]
    fn test_normalize_url_rejects_overlong_input() {
        let long = format!("example.com/{}", "a".repeat(3000));
        assert!(normalize_url(&long).is_err());
    }

    #[test]
    fn test_extract_security_headers_picks_known_subset() {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert("X-Frame-Options", "DENY".parse().unwrap());
        headers.insert("Content-Security-Policy", "default-src 'self'".parse().unwrap());
        headers.insert("X-Custom", "ignored".parse().unwrap());

        let extracted = extract_security_headers(&headers);
        assert_eq!(extracted.len(), 2);
        assert_eq!(extracted.get("X-Frame-Options").unwrap(), "DENY");
        assert!(!extracted.contains_key("X-Custom"));
    }

    #[test]
    fn test_truncate_for_display_caps_long_inputs() {
        let long = "x".repeat(500);
        let shown = truncate_for_display(&long);
        assert!(shown.len() < 110);
        assert!(shown.ends_with("..."));
    }
}
