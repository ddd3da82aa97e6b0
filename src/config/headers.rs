//! HTTP header name constants.
//!
//! This module defines constants for the security headers the audit captures
//! from the primary response, plus the identity headers sent with every
//! outbound request.

/// Content Security Policy header
pub const HEADER_CONTENT_SECURITY_POLICY: &str = "Content-Security-Policy";
/// X-Frame-Options header
pub const HEADER_X_FRAME_OPTIONS: &str = "X-Frame-Options";
/// X-Content-Type-Options header
pub const HEADER_X_CONTENT_TYPE_OPTIONS: &str = "X-Content-Type-Options";
/// Referrer-Policy header
pub const HEADER_REFERRER_POLICY: &str = "Referrer-Policy";
/// Permissions-Policy header
pub const HEADER_PERMISSIONS_POLICY: &str = "Permissions-Policy";

/// The security headers captured from the primary fetch and scored in the
/// security category. To add/remove headers, modify this array.
pub const SECURITY_HEADERS: &[&str] = &[
    HEADER_X_FRAME_OPTIONS,
    HEADER_CONTENT_SECURITY_POLICY,
    HEADER_X_CONTENT_TYPE_OPTIONS,
    HEADER_REFERRER_POLICY,
    HEADER_PERMISSIONS_POLICY,
];

/// Identity headers applied to every outbound request.
///
/// The audit presents itself as a well-behaved crawler with ordinary content
/// negotiation, so the origin serves it what it would serve any bot.
pub(crate) struct RequestHeaders;

impl RequestHeaders {
    /// Applies the standard request headers to a `reqwest::RequestBuilder`.
    pub(crate) fn apply_to_request_builder(
        builder: reqwest::RequestBuilder,
    ) -> reqwest::RequestBuilder {
        builder
            .header(
                reqwest::header::ACCEPT,
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            )
            .header(reqwest::header::ACCEPT_LANGUAGE, "en-US,en;q=0.9")
    }
}
