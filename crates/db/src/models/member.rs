//! Member entity model and DTOs.

use guild_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full member row from the `users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses
/// directly. Use [`MemberResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct Member {
    pub id: DbId,
    pub fullname_th: String,
    pub fullname_en: String,
    pub nickname_th: Option<String>,
    pub nickname_en: Option<String>,
    pub email: String,
    pub password_hash: String,
    /// Profession group, e.g. `"director"` or `"crew"`.
    pub occupation: String,
    pub department_th: Option<String>,
    pub department_en: Option<String>,
    pub role_th: Option<String>,
    pub role_en: Option<String>,
    pub profile_image_url: Option<String>,
    /// Web capability: `"admin"` or `"member"`.
    pub web_role: String,
    /// Application lifecycle: `"pending"`, `"approved"`, or `"rejected"`.
    pub verification_status: String,
    /// Fee state: `"unpaid"` or `"paid"`.
    pub payment_status: String,
    /// Admin-managed membership tier label, if any.
    pub membership_status: Option<String>,
    /// Notification language preference: `"th"` or `"en"`.
    pub language: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    /// Admin who last touched the record.
    pub updated_by: Option<DbId>,
}

/// Safe member representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct MemberResponse {
    pub id: DbId,
    pub fullname_th: String,
    pub fullname_en: String,
    pub nickname_th: Option<String>,
    pub nickname_en: Option<String>,
    pub email: String,
    pub occupation: String,
    pub department_th: Option<String>,
    pub department_en: Option<String>,
    pub role_th: Option<String>,
    pub role_en: Option<String>,
    pub profile_image_url: Option<String>,
    pub web_role: String,
    pub verification_status: String,
    pub payment_status: String,
    pub membership_status: Option<String>,
    pub language: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<Member> for MemberResponse {
    fn from(member: Member) -> Self {
        Self {
            id: member.id,
            fullname_th: member.fullname_th,
            fullname_en: member.fullname_en,
            nickname_th: member.nickname_th,
            nickname_en: member.nickname_en,
            email: member.email,
            occupation: member.occupation,
            department_th: member.department_th,
            department_en: member.department_en,
            role_th: member.role_th,
            role_en: member.role_en,
            profile_image_url: member.profile_image_url,
            web_role: member.web_role,
            verification_status: member.verification_status,
            payment_status: member.payment_status,
            membership_status: member.membership_status,
            language: member.language,
            created_at: member.created_at,
            updated_at: member.updated_at,
        }
    }
}

/// DTO for creating a new member (signup).
///
/// New members always start as `pending`/`unpaid` with the `member` web
/// role; those columns take their database defaults.
#[derive(Debug, Deserialize)]
pub struct CreateMember {
    pub fullname_th: String,
    pub fullname_en: String,
    pub nickname_th: Option<String>,
    pub nickname_en: Option<String>,
    pub email: String,
    pub password_hash: String,
    pub occupation: String,
    pub department_th: Option<String>,
    pub department_en: Option<String>,
    pub role_th: Option<String>,
    pub role_en: Option<String>,
    pub profile_image_url: Option<String>,
    pub language: String,
}

/// DTO for the admin status update. All fields are optional; only
/// non-`None` fields are applied.
#[derive(Debug, Clone, Deserialize)]
pub struct MemberStatusUpdate {
    pub membership_status: Option<String>,
    pub payment_status: Option<String>,
    pub verification_status: Option<String>,
}
