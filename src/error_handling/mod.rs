//! Error handling and audit statistics.
//!
//! This module provides:
//! - The closed fetch-failure taxonomy surfaced at the API boundary
//! - Categorization of transport and HTTP failures into that taxonomy
//! - Counters tracking audit outcomes for the status endpoint
//!
//! Propagation policy: only the primary page fetch may fail an audit, and it
//! fails with exactly one taxonomy variant. Auxiliary probes, screenshots,
//! JSON-LD parsing, and malformed anchors all recover locally into negative
//! signals.

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::{classify_http_status, classify_transport_error};
pub use stats::AuditStats;
pub use types::{FetchError, FetchErrorKind, InitializationError};

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_audit_stats_initialization() {
        let stats = AuditStats::new();
        for kind in FetchErrorKind::iter() {
            assert_eq!(stats.error_count(kind), 0);
        }
        assert_eq!(stats.completed(), 0);
        assert_eq!(stats.failed(), 0);
    }

    #[test]
    fn test_audit_stats_increment() {
        let stats = AuditStats::new();
        stats.record_failure(FetchErrorKind::PageNotFound);
        stats.record_failure(FetchErrorKind::PageNotFound);
        stats.record_success();

        assert_eq!(stats.error_count(FetchErrorKind::PageNotFound), 2);
        assert_eq!(stats.completed(), 1);
        assert_eq!(stats.failed(), 2);
    }

    #[test]
    fn test_every_kind_has_code_and_status() {
        for kind in FetchErrorKind::iter() {
            assert!(!kind.error_type().is_empty());
            let status = kind.http_status();
            assert!((400..=599).contains(&status), "{kind:?} maps to {status}");
        }
    }
}
