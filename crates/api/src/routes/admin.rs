//! Admin moderation routes, merged into `/admin`. Every handler requires
//! the admin role via the `RequireAdmin` extractor.
//!
//! ```text
//! GET    /members/pending          pending applications
//! PATCH  /members/{id}/status      approval workflow status update
//! ```

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/members/pending", get(admin::list_pending))
        .route("/members/{id}/status", patch(admin::update_member_status))
}
