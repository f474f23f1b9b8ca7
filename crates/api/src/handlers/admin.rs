//! Admin moderation handlers: the membership approval workflow.

use axum::extract::{Path, State};
use axum::Json;
use guild_core::error::CoreError;
use guild_core::membership::{
    fires_approval_email, validate_payment_status, validate_verification_status,
};
use guild_core::types::DbId;
use guild_db::models::member::{MemberResponse, MemberStatusUpdate};
use guild_db::repositories::MemberRepo;
use guild_notify::NotificationKind;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/admin/members/pending
///
/// List applications awaiting a decision, oldest first. Admin only.
pub async fn list_pending(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<MemberResponse>>>> {
    let pending = MemberRepo::list_pending(&state.pool).await?;
    Ok(Json(DataResponse {
        data: pending.into_iter().map(MemberResponse::from).collect(),
    }))
}

/// PATCH /api/v1/admin/members/{id}/status
///
/// Apply a status update to a membership application.
///
/// The admin check happens in the extractor, before any read or write. The
/// write itself is conditional on the verification status read here, so two
/// admins racing the same member surface a 409 instead of a lost update.
/// When the update moves the member into `approved` and an email address is
/// on file, exactly one approval notification is sent; a delivery failure
/// propagates to the caller but the committed status change stands.
pub async fn update_member_status(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<MemberStatusUpdate>,
) -> AppResult<Json<DataResponse<MemberResponse>>> {
    if let Some(status) = input.verification_status.as_deref() {
        validate_verification_status(status)
            .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;
    }
    if let Some(status) = input.payment_status.as_deref() {
        validate_payment_status(status).map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;
    }

    let member = MemberRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Member",
            id,
        }))?;
    let previous_status = member.verification_status.clone();

    let updated = MemberRepo::update_status(&state.pool, id, &previous_status, &input, admin.member_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Conflict(
                "Member status changed concurrently; reload and retry".into(),
            ))
        })?;

    tracing::info!(
        member_id = id,
        admin_id = admin.member_id,
        previous = %previous_status,
        verification_status = %updated.verification_status,
        payment_status = %updated.payment_status,
        "Member status updated"
    );

    if fires_approval_email(&previous_status, input.verification_status.as_deref())
        && !updated.email.is_empty()
    {
        state
            .dispatcher
            .dispatch(&state.pool, NotificationKind::DirectorApproved, updated.id)
            .await?;
    }

    Ok(Json(DataResponse {
        data: updated.into(),
    }))
}
