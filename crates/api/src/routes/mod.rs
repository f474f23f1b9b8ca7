pub mod admin;
pub mod auth;
pub mod health;
pub mod members;
pub mod notifications;
pub mod professions;
pub mod stats;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                          login (public)
///
/// /members                             signup (POST), directory listing (GET)
/// /members/{id}                        member profile (GET)
///
/// /professions/search                  ranked profession search (GET)
///
/// /admin/members/pending               pending applications (admin only)
/// /admin/members/{id}/status           status update (PATCH, admin only)
///
/// /notifications                       dispatch by type + member (POST, admin only)
/// /emails/approval                     direct approval email (POST, admin only)
///
/// /stats                               dashboard counts (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/members", members::router())
        .nest("/professions", professions::router())
        .nest("/admin", admin::router())
        .merge(notifications::router())
        .merge(stats::router())
}
