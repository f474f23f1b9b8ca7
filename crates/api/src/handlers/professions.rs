//! Profession search handler.

use axum::extract::{Query, State};
use axum::Json;
use guild_core::search::{query_terms, rank_professions, ProfessionFields};
use guild_db::models::department_role::DepartmentRole;
use guild_db::repositories::DepartmentRoleRepo;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ProfessionSearchQuery {
    /// Free-text query; below two characters no search is performed.
    pub q: Option<String>,
    /// Optional catalogue kind, e.g. `crew`.
    pub kind: Option<String>,
}

/// A ranked profession search hit.
#[derive(Debug, Serialize)]
pub struct ProfessionMatch {
    pub department_th: String,
    pub department_en: String,
    pub role_th: String,
    pub role_en: String,
    pub score: i32,
}

/// GET /api/v1/professions/search
///
/// Rank the department/role catalogue against a free-text query. Queries
/// shorter than two characters return an empty set without touching the
/// database.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<ProfessionSearchQuery>,
) -> AppResult<Json<DataResponse<Vec<ProfessionMatch>>>> {
    let Some(terms) = params.q.as_deref().and_then(query_terms) else {
        return Ok(Json(DataResponse { data: Vec::new() }));
    };

    let candidates = match params.kind.as_deref() {
        Some(kind) => DepartmentRoleRepo::list_by_kind(&state.pool, kind).await?,
        None => DepartmentRoleRepo::list_all(&state.pool).await?,
    };

    let ranked = rank_professions(&terms, candidates.iter().map(profession_fields));

    tracing::debug!(
        terms = terms.len(),
        candidates = candidates.len(),
        results = ranked.len(),
        "Profession search ranked"
    );

    let data = ranked
        .into_iter()
        .map(|m| {
            let row = &candidates[m.index];
            ProfessionMatch {
                department_th: row.department_th.clone(),
                department_en: row.department_en.clone(),
                role_th: row.role_th.clone(),
                role_en: row.role_en.clone(),
                score: m.score,
            }
        })
        .collect();

    Ok(Json(DataResponse { data }))
}

fn profession_fields(row: &DepartmentRole) -> ProfessionFields<'_> {
    ProfessionFields {
        department_th: &row.department_th,
        department_en: &row.department_en,
        role_th: &row.role_th,
        role_en: &row.role_en,
    }
}
