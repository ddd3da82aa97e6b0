//! HTTP client initialization.
//!
//! Three clients with distinct redirect and timeout policies:
//! - the primary client follows redirects automatically for the page fetch,
//! - the redirect client has redirects disabled so the chain can be traced
//!   hop by hop,
//! - the probe client carries the short auxiliary-resource timeout.

use std::sync::Arc;
use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::{AUX_PROBE_TIMEOUT, MAX_REDIRECT_HOPS};

/// Initializes the primary HTTP client.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from configuration
/// - The given per-request timeout
/// - Redirect following enabled (up to the hop bound)
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(
    user_agent: &str,
    timeout: Duration,
) -> Result<Arc<reqwest::Client>, reqwest::Error> {
    let client = ClientBuilder::new()
        .timeout(timeout)
        .user_agent(user_agent.to_string())
        .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECT_HOPS))
        .build()?;
    Ok(Arc::new(client))
}

/// Initializes the HTTP client for redirect resolution.
///
/// Creates a `reqwest::Client` with redirects disabled so the redirect chain
/// can be tracked manually. This allows capturing the full redirect path
/// including intermediate URLs.
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_redirect_client(
    user_agent: &str,
    timeout: Duration,
) -> Result<Arc<reqwest::Client>, reqwest::Error> {
    let client = ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(timeout)
        .user_agent(user_agent.to_string())
        .build()?;
    Ok(Arc::new(client))
}

/// Initializes the short-timeout client used for robots.txt and sitemap
/// probes. Redirects stay enabled; a site serving its robots.txt behind a
/// redirect still counts as having one.
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_probe_client(user_agent: &str) -> Result<Arc<reqwest::Client>, reqwest::Error> {
    let client = ClientBuilder::new()
        .timeout(AUX_PROBE_TIMEOUT)
        .user_agent(user_agent.to_string())
        .build()?;
    Ok(Arc::new(client))
}
