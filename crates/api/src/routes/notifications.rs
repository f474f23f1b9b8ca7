//! Notification dispatch routes (admin only).
//!
//! ```text
//! POST   /notifications       dispatch by type tag + member id
//! POST   /emails/approval     direct approval email to an address
//! ```

use axum::routing::post;
use axum::Router;

use crate::handlers::notifications;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/notifications", post(notifications::dispatch))
        .route("/emails/approval", post(notifications::send_approval_email))
}
