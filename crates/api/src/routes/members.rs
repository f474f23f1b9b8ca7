//! Public member routes, merged into `/members`.
//!
//! ```text
//! POST   /            signup
//! GET    /            directory listing
//! GET    /{id}        member profile
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::members;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(members::signup).get(members::list_directory))
        .route("/{id}", get(members::get_member))
}
