//! API server state and wire types.

use std::sync::Arc;

use serde::Serialize;

use crate::error_handling::AuditStats;
use crate::fetch::AuditContext;

/// Shared state for the API handlers.
#[derive(Clone)]
pub struct ServerState {
    /// Audit pipeline resources.
    pub ctx: AuditContext,
    /// Outcome counters for the status endpoint.
    pub stats: Arc<AuditStats>,
}

impl ServerState {
    /// Wraps an audit context with fresh counters.
    pub fn new(ctx: AuditContext) -> Self {
        Self {
            ctx,
            stats: Arc::new(AuditStats::new()),
        }
    }
}

/// Error body returned by the audit endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    /// User-facing message.
    pub error: String,
    /// Machine-readable taxonomy code.
    pub error_type: String,
    /// Internal error detail.
    pub details: String,
    /// Always false on the error path.
    pub success: bool,
}
