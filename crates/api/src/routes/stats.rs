//! Dashboard count route.
//!
//! ```text
//! GET    /stats     member/event/project counts
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::stats;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/stats", get(stats::get_stats))
}
