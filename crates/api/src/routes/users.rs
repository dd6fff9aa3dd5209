//! User listing endpoint.

use axum::Json;
use common::UserList;

/// GET /api/users — returns the fixed list of user names.
pub async fn list() -> Json<UserList> {
    metrics::counter!("http_requests_total", "route" => "/api/users").increment(1);
    Json(UserList::DEFAULT)
}
