//! HTTP redirect chain resolution.
//!
//! This module follows redirect chains manually to record the full hop
//! sequence from the initial URL to its final destination. Tracing is
//! best-effort: any failure returns the hops collected so far.

use reqwest::Url;

use crate::config::RequestHeaders;
use crate::report::RedirectHop;

/// Resolves the redirect chain for a URL, following redirects one hop at a
/// time up to `max_hops`.
///
/// Each GET is issued with redirect-following disabled. A response with a
/// status in [300, 400) and a `Location` header is recorded as a hop;
/// anything else ends the chain. Relative `Location` values are resolved
/// against the current URL.
///
/// This function never fails the pipeline: transport errors, missing
/// `Location` headers, and unparseable targets all stop the trace and return
/// whatever was collected.
///
/// # Arguments
///
/// * `client` - HTTP client with redirects disabled (for manual tracking)
/// * `start_url` - The initial URL to start from
/// * `max_hops` - Hard bound on recorded hops (guards against redirect cycles)
pub async fn resolve_redirect_chain(
    client: &reqwest::Client,
    start_url: &str,
    max_hops: usize,
) -> Vec<RedirectHop> {
    let mut hops: Vec<RedirectHop> = Vec::new();
    let mut current = start_url.to_string();

    for _ in 0..max_hops {
        let response = match RequestHeaders::apply_to_request_builder(client.get(&current))
            .send()
            .await
        {
            Ok(response) => response,
            Err(error) => {
                log::debug!("Redirect trace stopped at {current}: {error}");
                break;
            }
        };

        let status_code = response.status().as_u16();
        if !(300..400).contains(&status_code) {
            break;
        }

        let Some(location) = response.headers().get(reqwest::header::LOCATION) else {
            // Redirect status but no Location header - unusual, stop here.
            log::warn!("Redirect status {status_code} for {current} but no Location header");
            break;
        };
        let location = location.to_str().unwrap_or("");

        let next = match Url::parse(location)
            .or_else(|_| Url::parse(&current).and_then(|base| base.join(location)))
        {
            Ok(next) => next.to_string(),
            Err(_) => {
                log::warn!("Unparseable Location '{location}' from {current}");
                break;
            }
        };

        hops.push(RedirectHop {
            from: current.clone(),
            to: next.clone(),
            status_code,
        });
        current = next;
    }

    if !hops.is_empty() {
        log::debug!("Traced {} redirect hop(s) from {start_url}", hops.len());
    }
    hops
}
