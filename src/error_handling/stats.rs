//! Audit outcome statistics.
//!
//! Lock-free counters shared between the API handlers and the status
//! endpoint. One counter per failure kind, plus a completion counter.

use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicUsize, Ordering};

use strum::IntoEnumIterator;

use super::types::FetchErrorKind;

/// Counters tracking audit outcomes across the lifetime of the process.
pub struct AuditStats {
    completed: AtomicUsize,
    errors: HashMap<FetchErrorKind, AtomicUsize>,
}

impl AuditStats {
    /// Creates a new tracker with every counter at zero.
    pub fn new() -> Self {
        let errors = FetchErrorKind::iter()
            .map(|kind| (kind, AtomicUsize::new(0)))
            .collect();
        Self {
            completed: AtomicUsize::new(0),
            errors,
        }
    }

    /// Records a successfully completed audit.
    pub fn record_success(&self) {
        self.completed.fetch_add(1, Ordering::Relaxed);
    }

    /// Records an audit that failed with the given kind.
    pub fn record_failure(&self, kind: FetchErrorKind) {
        if let Some(counter) = self.errors.get(&kind) {
            counter.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Number of completed audits.
    pub fn completed(&self) -> usize {
        self.completed.load(Ordering::Relaxed)
    }

    /// Total number of failed audits across all kinds.
    pub fn failed(&self) -> usize {
        self.errors
            .values()
            .map(|counter| counter.load(Ordering::Relaxed))
            .sum()
    }

    /// Count for one failure kind.
    pub fn error_count(&self, kind: FetchErrorKind) -> usize {
        self.errors
            .get(&kind)
            .map(|counter| counter.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    /// Snapshot of all failure counters keyed by machine code, in a stable
    /// order for the status endpoint.
    pub fn error_counts(&self) -> BTreeMap<&'static str, usize> {
        FetchErrorKind::iter()
            .map(|kind| (kind.error_type(), self.error_count(kind)))
            .collect()
    }
}

impl Default for AuditStats {
    fn default() -> Self {
        Self::new()
    }
}
