//! Failure categorization.
//!
//! This module maps transport-level and HTTP-level failures onto the closed
//! [`FetchError`] taxonomy. First match wins: DNS resolution, connection
//! refusal, network reachability, timeout, then the HTTP status families.

use std::error::Error as StdError;

use super::types::FetchError;

/// Categorizes a `reqwest::Error` from the primary fetch into a `FetchError`.
///
/// reqwest wraps transport failures in an opaque chain, so classification
/// walks the error sources looking for the underlying `std::io::Error` and
/// the resolver's message.
///
/// # Arguments
///
/// * `url` - The URL that was being fetched
/// * `error` - The transport error returned by reqwest
pub fn classify_transport_error(url: &str, error: &reqwest::Error) -> FetchError {
    if chain_mentions_dns_failure(error) {
        return FetchError::DnsNotResolved(host_of(url));
    }

    if let Some(io_error) = find_io_error(error) {
        match io_error.kind() {
            std::io::ErrorKind::ConnectionRefused => {
                return FetchError::ConnectionRefused(host_of(url));
            }
            std::io::ErrorKind::HostUnreachable | std::io::ErrorKind::NetworkUnreachable => {
                return FetchError::NoInternet;
            }
            std::io::ErrorKind::TimedOut => {
                return FetchError::ConnectionTimeout(url.to_string());
            }
            _ => {}
        }
    }

    if error.is_timeout() {
        return FetchError::ConnectionTimeout(url.to_string());
    }

    FetchError::CrawlingFailed {
        url: url.to_string(),
        reason: error.to_string(),
    }
}

/// Categorizes an HTTP response status into a `FetchError`, or `None` for
/// statuses the pipeline accepts.
///
/// 404 and 403 get their own variants; the remaining 4xx and all 5xx families
/// collapse into `ClientError` / `ServerError`.
pub fn classify_http_status(url: &str, status: u16) -> Option<FetchError> {
    match status {
        404 => Some(FetchError::PageNotFound(url.to_string())),
        403 => Some(FetchError::AccessForbidden(url.to_string())),
        500..=599 => Some(FetchError::ServerError {
            url: url.to_string(),
            status,
        }),
        400..=499 => Some(FetchError::ClientError {
            url: url.to_string(),
            status,
        }),
        _ => None,
    }
}

/// Walks the source chain looking for an `std::io::Error`.
fn find_io_error<'a>(error: &'a reqwest::Error) -> Option<&'a std::io::Error> {
    let mut source: Option<&(dyn StdError + 'static)> = error.source();
    while let Some(current) = source {
        if let Some(io_error) = current.downcast_ref::<std::io::Error>() {
            return Some(io_error);
        }
        source = current.source();
    }
    None
}

/// True when any error in the chain reads like a resolver failure.
///
/// The resolver error type is private to reqwest's connector, so the message
/// text is the only stable signal.
fn chain_mentions_dns_failure(error: &reqwest::Error) -> bool {
    let mut source: Option<&(dyn StdError + 'static)> = Some(error);
    while let Some(current) = source {
        let message = current.to_string().to_lowercase();
        if message.contains("dns error")
            || message.contains("failed to lookup address")
            || message.contains("name or service not known")
            || message.contains("no address associated with hostname")
        {
            return true;
        }
        source = current.source();
    }
    false
}

/// Extracts the host from a URL for error messages, falling back to the raw
/// string when it does not parse.
fn host_of(url: &str) -> String {
    url::Url::parse(url)
        .ok()
        .and_then(|parsed| parsed.host_str().map(str::to_string))
        .unwrap_or_else(|| url.to_string())
}
