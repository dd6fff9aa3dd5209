//! Health check endpoint.

use axum::Json;
use common::HealthStatus;

/// GET /api/health — reports that the process is up.
pub async fn check() -> Json<HealthStatus> {
    metrics::counter!("http_requests_total", "route" => "/api/health").increment(1);
    Json(HealthStatus::UP)
}
