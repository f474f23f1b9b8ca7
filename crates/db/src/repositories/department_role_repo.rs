//! Repository for the `department_roles` reference table.

use sqlx::PgPool;

use crate::models::department_role::DepartmentRole;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, department_th, department_en, role_th, role_en, kind, created_at";

/// Provides read operations for department/role reference data.
pub struct DepartmentRoleRepo;

impl DepartmentRoleRepo {
    /// List all rows of a catalogue kind in insertion order.
    ///
    /// Insertion order is the encounter order the ranking layer uses for
    /// dedup and tie-breaking, so it must stay deterministic.
    pub async fn list_by_kind(pool: &PgPool, kind: &str) -> Result<Vec<DepartmentRole>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM department_roles WHERE kind = $1 ORDER BY id ASC");
        sqlx::query_as::<_, DepartmentRole>(&query)
            .bind(kind)
            .fetch_all(pool)
            .await
    }

    /// List every row in insertion order.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<DepartmentRole>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM department_roles ORDER BY id ASC");
        sqlx::query_as::<_, DepartmentRole>(&query)
            .fetch_all(pool)
            .await
    }
}
