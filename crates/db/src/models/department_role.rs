//! Department/role reference data for profession search.

use guild_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `department_roles` table.
///
/// Immutable reference data: each row pairs a department with a role title
/// in both languages. `kind` discriminates the catalogue a row belongs to
/// (e.g. `"crew"`).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DepartmentRole {
    pub id: DbId,
    pub department_th: String,
    pub department_en: String,
    pub role_th: String,
    pub role_en: String,
    pub kind: String,
    pub created_at: Timestamp,
}
