//! Catch-all handler for paths outside the routing table.

use axum::http::Uri;

use crate::error::ApiError;

/// Answers every request whose path matches no route.
pub async fn not_found(uri: Uri) -> ApiError {
    tracing::debug!(path = %uri.path(), "no route matched");
    ApiError::NotFound(uri.path().to_string())
}
