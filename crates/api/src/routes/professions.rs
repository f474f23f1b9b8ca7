//! Profession catalogue routes, merged into `/professions`.
//!
//! ```text
//! GET    /search     ranked profession search
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::professions;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/search", get(professions::search))
}
