use axum::{
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::{limit::RequestBodyLimitLayer, services::ServeDir};

use crate::api::handlers::{
    health_handler, home_handler, image_handler, not_found_handler, upload_handler,
};
use crate::api::middleware::request_log;
use crate::application::use_cases::{IngestImageUseCase, RetrieveImageUseCase};

/// Application state container
pub struct AppState {
    pub ingest_use_case: Arc<IngestImageUseCase>,
    pub retrieve_use_case: Arc<RetrieveImageUseCase>,
    pub storage_backend: &'static str,
    pub static_dir: PathBuf,
    pub max_upload_bytes: usize,
}

/// Create router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    let upload_routes = Router::new()
        .route(
            "/upload",
            post(upload_handler).with_state(state.ingest_use_case),
        )
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(state.max_upload_bytes));

    Router::new()
        .route("/", get(home_handler))
        .route(
            "/health",
            get(health_handler).with_state(state.storage_backend),
        )
        .route(
            "/{image}",
            get(image_handler).with_state(state.retrieve_use_case),
        )
        .merge(upload_routes)
        .nest_service("/static", ServeDir::new(state.static_dir))
        .fallback(not_found_handler)
        .layer(axum_middleware::from_fn(
            request_log::request_log_middleware,
        ))
}
