//! Signup and public directory handlers.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use guild_core::collation::ThaiCollator;
use guild_core::error::CoreError;
use guild_core::membership::normalize_language;
use guild_core::search::{member_matches, query_terms, MemberFields};
use guild_core::types::DbId;
use guild_db::models::member::{CreateMember, Member, MemberResponse};
use guild_db::repositories::MemberRepo;
use guild_notify::NotificationKind;
use serde::Deserialize;
use validator::Validate;

use crate::auth::password::hash_password;
use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Signup
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(length(min = 1, message = "fullname_th must not be empty"))]
    pub fullname_th: String,
    #[validate(length(min = 1, message = "fullname_en must not be empty"))]
    pub fullname_en: String,
    pub nickname_th: Option<String>,
    pub nickname_en: Option<String>,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    pub password: String,
    #[validate(length(min = 1, message = "occupation must not be empty"))]
    pub occupation: String,
    pub department_th: Option<String>,
    pub department_en: Option<String>,
    pub role_th: Option<String>,
    pub role_en: Option<String>,
    pub profile_image_url: Option<String>,
    pub language: Option<String>,
}

/// POST /api/v1/members
///
/// Register a new membership application. The member starts `pending` /
/// `unpaid`; every admin is notified by email. A notification failure is
/// logged but does not fail the signup.
pub async fn signup(
    State(state): State<AppState>,
    Json(input): Json<SignupRequest>,
) -> AppResult<impl IntoResponse> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing failed: {e}")))?;

    let create = CreateMember {
        fullname_th: input.fullname_th,
        fullname_en: input.fullname_en,
        nickname_th: input.nickname_th,
        nickname_en: input.nickname_en,
        email: input.email,
        password_hash,
        occupation: input.occupation,
        department_th: input.department_th,
        department_en: input.department_en,
        role_th: input.role_th,
        role_en: input.role_en,
        profile_image_url: input.profile_image_url,
        language: normalize_language(input.language.as_deref()).to_string(),
    };

    let member = MemberRepo::create(&state.pool, &create).await?;

    tracing::info!(member_id = member.id, occupation = %member.occupation, "Membership application created");

    // Best-effort admin notification; the account exists either way.
    if let Err(e) = state
        .dispatcher
        .dispatch(&state.pool, NotificationKind::DirectorSignup, member.id)
        .await
    {
        tracing::error!(member_id = member.id, error = %e, "Failed to notify admins of signup");
    }

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: MemberResponse::from(member),
        }),
    ))
}

// ---------------------------------------------------------------------------
// Directory listing
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct DirectoryQuery {
    /// Profession group to list, e.g. `director` or `crew`.
    pub occupation: String,
    /// Optional department narrowing (matched against either language).
    pub department: Option<String>,
    /// Free-text filter across bilingual name/role fields.
    pub q: Option<String>,
}

/// GET /api/v1/members
///
/// List approved members of an occupation. The fixed predicate runs in the
/// database; the free-text filter and the Thai-collation sort run in memory
/// over the full result set (no pagination).
pub async fn list_directory(
    State(state): State<AppState>,
    Query(params): Query<DirectoryQuery>,
) -> AppResult<Json<DataResponse<Vec<MemberResponse>>>> {
    let mut members =
        MemberRepo::list_directory(&state.pool, &params.occupation, params.department.as_deref())
            .await?;

    if let Some(terms) = params.q.as_deref().and_then(query_terms) {
        members.retain(|m| member_matches(&terms, &filter_fields(m)));
    }

    // Final order is always Thai full name ascending, locale-aware,
    // regardless of filter state.
    let collator = ThaiCollator::new()
        .map_err(|e| AppError::InternalError(format!("Collator construction failed: {e}")))?;
    collator.sort_by_key(&mut members, |m| m.fullname_th.as_str());

    Ok(Json(DataResponse {
        data: members.into_iter().map(MemberResponse::from).collect(),
    }))
}

/// GET /api/v1/members/{id}
///
/// Fetch a single member profile.
pub async fn get_member(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<MemberResponse>>> {
    let member = MemberRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Member",
            id,
        }))?;
    Ok(Json(DataResponse {
        data: member.into(),
    }))
}

fn filter_fields(member: &Member) -> MemberFields<'_> {
    MemberFields {
        fullname_th: &member.fullname_th,
        fullname_en: &member.fullname_en,
        nickname_th: member.nickname_th.as_deref().unwrap_or(""),
        nickname_en: member.nickname_en.as_deref().unwrap_or(""),
        role_th: member.role_th.as_deref().unwrap_or(""),
        role_en: member.role_en.as_deref().unwrap_or(""),
    }
}
