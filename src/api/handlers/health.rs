use axum::{extract::State, http::StatusCode, response::Json};
use serde_json::json;

/// GET /health
/// Basic health check endpoint (does not touch the store)
pub async fn health_handler(
    State(storage_backend): State<&'static str>,
) -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": "imgor",
            "version": env!("CARGO_PKG_VERSION"),
            "storage_backend": storage_backend,
            "timestamp": chrono::Utc::now().to_rfc3339(),
        })),
    )
}
