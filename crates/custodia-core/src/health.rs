use axum::http::StatusCode;

/// Handler for `GET /healthz` — liveness check.
///
/// Readiness is service-specific (usually a storage ping), so each service
/// provides its own `/readyz` handler.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}
