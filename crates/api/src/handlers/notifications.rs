//! Explicit notification dispatch endpoints.

use axum::extract::State;
use axum::Json;
use guild_core::error::CoreError;
use guild_core::membership::normalize_language;
use guild_core::types::DbId;
use guild_notify::NotificationKind;
use serde::Deserialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::SuccessResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct DispatchRequest {
    /// Wire tag: `new_director_signup`, `director_approved`, or
    /// `director_rejected`.
    #[serde(rename = "type")]
    pub kind: String,
    pub user_id: DbId,
}

/// POST /api/v1/notifications
///
/// Dispatch a notification about a member. Unknown type tags are rejected
/// with 400 before any lookup; a missing member yields 404.
pub async fn dispatch(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<DispatchRequest>,
) -> AppResult<Json<SuccessResponse>> {
    let kind: NotificationKind = input.kind.parse().map_err(AppError::Core)?;

    state
        .dispatcher
        .dispatch(&state.pool, kind, input.user_id)
        .await?;

    Ok(Json(SuccessResponse::ok()))
}

#[derive(Debug, Deserialize, Validate)]
pub struct ApprovalEmailRequest {
    #[validate(email(message = "to must be a valid address"))]
    pub to: String,
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub occupation: String,
    pub language: Option<String>,
}

/// POST /api/v1/emails/approval
///
/// Send the approval template directly to an explicit address, bypassing
/// member lookup. Used by admin tooling to resend approval mail.
pub async fn send_approval_email(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<ApprovalEmailRequest>,
) -> AppResult<Json<SuccessResponse>> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

    state
        .dispatcher
        .send_approval(
            &input.to,
            &input.name,
            &input.occupation,
            normalize_language(input.language.as_deref()),
        )
        .await?;

    Ok(Json(SuccessResponse::ok()))
}
