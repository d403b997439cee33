//! Route configuration for release endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{
    create_release, delete_release, get_release, list_releases, list_statuses, update_release,
    ReleaseAppState,
};

/// Creates the release router with all endpoints.
///
/// Routes:
/// - `GET /api/releases` - Search releases (`name`, `description`, `status`, `fromDate`, `toDate`)
/// - `POST /api/releases` - Create a release
/// - `GET /api/releases/:id` - Get a release
/// - `PUT /api/releases/:id` - Update a release, optionally moving its status
/// - `DELETE /api/releases/:id` - Delete a release
/// - `GET /api/statuses` - Status catalogue with allowed transitions
pub fn release_router() -> Router<ReleaseAppState> {
    Router::new()
        .route("/api/releases", get(list_releases).post(create_release))
        .route(
            "/api/releases/:id",
            get(get_release).put(update_release).delete(delete_release),
        )
        .route("/api/statuses", get(list_statuses))
}
