use axum::response::Html;

use crate::api::errors::ApiError;

const HOME_PAGE: &str = include_str!("../../../templates/home.html");

/// GET /
/// Upload form
pub async fn home_handler() -> Html<&'static str> {
    Html(HOME_PAGE)
}

/// Fallback for unmatched routes
pub async fn not_found_handler() -> ApiError {
    ApiError::not_found("Unable to find file")
}
