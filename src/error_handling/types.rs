//! Error type definitions.
//!
//! This module defines the closed fetch-failure taxonomy and initialization
//! error types used throughout the application.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing an HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// The closed taxonomy of ways a page fetch can fail.
///
/// Every audit failure surfaced at the boundary is exactly one of these.
/// Callers are statically forced to handle each failure kind; nothing is
/// thrown as control flow.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The raw input could not be turned into a well-formed http(s) URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The hostname did not resolve.
    #[error("hostname could not be resolved for {0}")]
    DnsNotResolved(String),

    /// The host actively refused the connection.
    #[error("connection refused by {0}")]
    ConnectionRefused(String),

    /// The request timed out or was aborted at the transport layer.
    #[error("connection to {0} timed out")]
    ConnectionTimeout(String),

    /// The top-level audit deadline expired before the page loaded.
    #[error("audit deadline exceeded while loading {0}")]
    NavigationTimeout(String),

    /// The server answered HTTP 404.
    #[error("page not found (HTTP 404) at {0}")]
    PageNotFound(String),

    /// The server answered HTTP 403.
    #[error("access forbidden (HTTP 403) at {0}")]
    AccessForbidden(String),

    /// The server answered with a 5xx status.
    #[error("server error (HTTP {status}) from {url}")]
    ServerError {
        /// URL that answered.
        url: String,
        /// The 5xx status code.
        status: u16,
    },

    /// The server answered with a 4xx status other than 403/404.
    #[error("client error (HTTP {status}) from {url}")]
    ClientError {
        /// URL that answered.
        url: String,
        /// The 4xx status code.
        status: u16,
    },

    /// The local network is unreachable.
    #[error("network is unreachable")]
    NoInternet,

    /// Anything unexpected that prevented retrieving the page.
    #[error("crawling failed for {url}: {reason}")]
    CrawlingFailed {
        /// URL being fetched.
        url: String,
        /// Short description of what went wrong.
        reason: String,
    },
}

/// Fieldless discriminant of [`FetchError`], used for counters and the
/// boundary's machine-readable `errorType` / HTTP status mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
#[allow(missing_docs)] // Discriminants; the FetchError variants carry the docs.
pub enum FetchErrorKind {
    InvalidUrl,
    DnsNotResolved,
    ConnectionRefused,
    ConnectionTimeout,
    NavigationTimeout,
    PageNotFound,
    AccessForbidden,
    ServerError,
    ClientError,
    NoInternet,
    CrawlingFailed,
}

impl FetchError {
    /// The taxonomy discriminant of this error.
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            FetchError::InvalidUrl(_) => FetchErrorKind::InvalidUrl,
            FetchError::DnsNotResolved(_) => FetchErrorKind::DnsNotResolved,
            FetchError::ConnectionRefused(_) => FetchErrorKind::ConnectionRefused,
            FetchError::ConnectionTimeout(_) => FetchErrorKind::ConnectionTimeout,
            FetchError::NavigationTimeout(_) => FetchErrorKind::NavigationTimeout,
            FetchError::PageNotFound(_) => FetchErrorKind::PageNotFound,
            FetchError::AccessForbidden(_) => FetchErrorKind::AccessForbidden,
            FetchError::ServerError { .. } => FetchErrorKind::ServerError,
            FetchError::ClientError { .. } => FetchErrorKind::ClientError,
            FetchError::NoInternet => FetchErrorKind::NoInternet,
            FetchError::CrawlingFailed { .. } => FetchErrorKind::CrawlingFailed,
        }
    }

    /// A user-facing message suitable for the API boundary.
    pub fn user_message(&self) -> String {
        match self {
            FetchError::InvalidUrl(input) => {
                format!("'{input}' is not a valid URL. Please provide a full web address.")
            }
            FetchError::DnsNotResolved(host) => {
                format!("The domain '{host}' could not be found. Please check the URL.")
            }
            FetchError::ConnectionRefused(host) => {
                format!("'{host}' refused the connection. The site may be down.")
            }
            FetchError::ConnectionTimeout(url) => {
                format!("'{url}' took too long to respond.")
            }
            FetchError::NavigationTimeout(url) => {
                format!("Auditing '{url}' exceeded the time limit.")
            }
            FetchError::PageNotFound(url) => {
                format!("The page at '{url}' does not exist (404).")
            }
            FetchError::AccessForbidden(url) => {
                format!("Access to '{url}' was denied (403). The site may block crawlers.")
            }
            FetchError::ServerError { url, status } => {
                format!("The server at '{url}' returned an error ({status}).")
            }
            FetchError::ClientError { url, status } => {
                format!("The request to '{url}' was rejected ({status}).")
            }
            FetchError::NoInternet => "No internet connection is available.".to_string(),
            FetchError::CrawlingFailed { url, .. } => {
                format!("The page at '{url}' could not be crawled.")
            }
        }
    }
}

impl std::fmt::Display for FetchErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.error_type())
    }
}

impl FetchErrorKind {
    /// Stable machine-readable code for the boundary's `errorType` field.
    pub fn error_type(&self) -> &'static str {
        match self {
            FetchErrorKind::InvalidUrl => "INVALID_URL",
            FetchErrorKind::DnsNotResolved => "URL_NOT_FOUND",
            FetchErrorKind::ConnectionRefused => "CONNECTION_REFUSED",
            FetchErrorKind::ConnectionTimeout => "CONNECTION_TIMEOUT",
            FetchErrorKind::NavigationTimeout => "NAVIGATION_TIMEOUT",
            FetchErrorKind::PageNotFound => "PAGE_NOT_FOUND",
            FetchErrorKind::AccessForbidden => "ACCESS_FORBIDDEN",
            FetchErrorKind::ServerError => "SERVER_ERROR",
            FetchErrorKind::ClientError => "CLIENT_ERROR",
            FetchErrorKind::NoInternet => "NO_INTERNET",
            FetchErrorKind::CrawlingFailed => "CRAWLING_FAILED",
        }
    }

    /// The HTTP status the boundary answers with for this failure kind.
    pub fn http_status(&self) -> u16 {
        match self {
            FetchErrorKind::InvalidUrl => 400,
            FetchErrorKind::DnsNotResolved => 404,
            FetchErrorKind::ConnectionRefused => 503,
            FetchErrorKind::ConnectionTimeout => 408,
            FetchErrorKind::NavigationTimeout => 408,
            FetchErrorKind::PageNotFound => 404,
            FetchErrorKind::AccessForbidden => 403,
            FetchErrorKind::ServerError => 502,
            // ClientError has no entry in the boundary mapping table; it
            // surfaces as an unclassified failure.
            FetchErrorKind::ClientError => 500,
            FetchErrorKind::NoInternet => 503,
            FetchErrorKind::CrawlingFailed => 422,
        }
    }
}
