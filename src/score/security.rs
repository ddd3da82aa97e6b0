//! Security score computation.
//!
//! Header booleans are read from the real response headers of the primary
//! fetch; nothing here is fabricated. The score is a weighted sum:
//! https 40, X-Frame-Options 15, CSP 20, X-Content-Type-Options 10,
//! Referrer-Policy 10, Permissions-Policy 5.

use std::collections::HashMap;

use crate::config::{
    HEADER_CONTENT_SECURITY_POLICY, HEADER_PERMISSIONS_POLICY, HEADER_REFERRER_POLICY,
    HEADER_X_CONTENT_TYPE_OPTIONS, HEADER_X_FRAME_OPTIONS,
};
use crate::report::{SecurityIssue, SecuritySignals, Severity};

/// Evaluates the security category from the final URL and the captured
/// response headers.
///
/// Each absent signal appends one issue with a fixed severity: missing HTTPS
/// is high, missing CSP or X-Frame-Options is medium, the rest are low.
pub fn evaluate_security(
    final_url: &str,
    headers: &HashMap<String, String>,
) -> SecuritySignals {
    let has = |name: &str| headers.keys().any(|k| k.eq_ignore_ascii_case(name));

    let https = final_url.starts_with("https://");
    let x_frame_options = has(HEADER_X_FRAME_OPTIONS);
    let content_security_policy = has(HEADER_CONTENT_SECURITY_POLICY);
    let x_content_type_options = has(HEADER_X_CONTENT_TYPE_OPTIONS);
    let referrer_policy = has(HEADER_REFERRER_POLICY);
    let permissions_policy = has(HEADER_PERMISSIONS_POLICY);

    let mut score = 0u8;
    let mut issues = Vec::new();

    if https {
        score += 40;
    } else {
        issues.push(SecurityIssue {
            code: "no_https".to_string(),
            message: "The site is served over HTTP instead of HTTPS".to_string(),
            severity: Severity::High,
        });
    }

    if x_frame_options {
        score += 15;
    } else {
        issues.push(SecurityIssue {
            code: "missing_x_frame_options".to_string(),
            message: "Missing X-Frame-Options header (clickjacking protection)".to_string(),
            severity: Severity::Medium,
        });
    }

    if content_security_policy {
        score += 20;
    } else {
        issues.push(SecurityIssue {
            code: "missing_csp".to_string(),
            message: "Missing Content-Security-Policy header".to_string(),
            severity: Severity::Medium,
        });
    }

    if x_content_type_options {
        score += 10;
    } else {
        issues.push(SecurityIssue {
            code: "missing_x_content_type_options".to_string(),
            message: "Missing X-Content-Type-Options header".to_string(),
            severity: Severity::Low,
        });
    }

    if referrer_policy {
        score += 10;
    } else {
        issues.push(SecurityIssue {
            code: "missing_referrer_policy".to_string(),
            message: "Missing Referrer-Policy header".to_string(),
            severity: Severity::Low,
        });
    }

    if permissions_policy {
        score += 5;
    } else {
        issues.push(SecurityIssue {
            code: "missing_permissions_policy".to_string(),
            message: "Missing Permissions-Policy header".to_string(),
            severity: Severity::Low,
        });
    }

    SecuritySignals {
        https,
        x_frame_options,
        content_security_policy,
        x_content_type_options,
        referrer_policy,
        permissions_policy,
        score,
        issues,
    }
}
