use axum::http::Uri;

use crate::core::error::AppError;

/// Router fallback: unknown paths get the JSON 404 body
pub async fn not_found(uri: Uri) -> AppError {
    tracing::debug!("No route for {}", uri);
    AppError::NotFound("not found".to_string())
}
