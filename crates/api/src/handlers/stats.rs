//! Dashboard count handler.

use axum::extract::State;
use axum::Json;
use guild_db::models::stats::DirectoryStats;
use guild_db::repositories::{MemberRepo, StatsRepo};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/stats
///
/// Member/event/project counts for the dashboard. The three queries run
/// concurrently with no ordering among them; each failed count degrades to
/// zero instead of failing the request.
pub async fn get_stats(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<DirectoryStats>>> {
    let (members, events, projects) = futures::join!(
        MemberRepo::count(&state.pool),
        StatsRepo::count_events(&state.pool),
        StatsRepo::count_projects(&state.pool),
    );

    Ok(Json(DataResponse {
        data: DirectoryStats {
            members: count_or_zero("members", members),
            events: count_or_zero("events", events),
            projects: count_or_zero("projects", projects),
        },
    }))
}

fn count_or_zero(entity: &'static str, result: Result<i64, sqlx::Error>) -> i64 {
    result.unwrap_or_else(|e| {
        tracing::warn!(entity, error = %e, "Count query failed; degrading to zero");
        0
    })
}
