//! API request handlers.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use super::types::{ErrorBody, ServerState};
use crate::report::AuditRequest;
use crate::run_audit_with_deadline;

/// `POST /audit`: runs one audit and returns the report, or the structured
/// error with the taxonomy's HTTP status.
pub async fn audit_handler(
    State(state): State<ServerState>,
    Json(request): Json<AuditRequest>,
) -> Response {
    match run_audit_with_deadline(&request, &state.ctx).await {
        Ok(report) => {
            state.stats.record_success();
            (StatusCode::OK, Json(report)).into_response()
        }
        Err(error) => {
            let kind = error.kind();
            state.stats.record_failure(kind);
            log::warn!("Audit of {} failed: {error}", request.url);

            let status = StatusCode::from_u16(kind.http_status())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            let body = ErrorBody {
                error: error.user_message(),
                error_type: kind.error_type().to_string(),
                details: error.to_string(),
                success: false,
            };
            (status, Json(body)).into_response()
        }
    }
}

/// `GET /status`: audit outcome counters.
pub async fn status_handler(State(state): State<ServerState>) -> Json<serde_json::Value> {
    Json(json!({
        "completed": state.stats.completed(),
        "failed": state.stats.failed(),
        "errors": state.stats.error_counts(),
    }))
}

/// `GET /health`: liveness probe.
pub async fn health_handler() -> &'static str {
    "ok"
}
