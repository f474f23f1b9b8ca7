//! Repository for the `users` table.

use guild_core::membership::{VERIFICATION_APPROVED, VERIFICATION_PENDING};
use guild_core::roles::ROLE_ADMIN;
use guild_core::types::DbId;
use sqlx::PgPool;

use crate::models::member::{CreateMember, Member, MemberStatusUpdate};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, fullname_th, fullname_en, nickname_th, nickname_en, email, \
                        password_hash, occupation, department_th, department_en, role_th, \
                        role_en, profile_image_url, web_role, verification_status, \
                        payment_status, membership_status, language, created_at, updated_at, \
                        updated_by";

/// Provides CRUD operations for members.
pub struct MemberRepo;

impl MemberRepo {
    /// Insert a new member, returning the created row.
    ///
    /// `web_role`, `verification_status`, and `payment_status` take their
    /// database defaults (`member` / `pending` / `unpaid`).
    pub async fn create(pool: &PgPool, input: &CreateMember) -> Result<Member, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (fullname_th, fullname_en, nickname_th, nickname_en, email,
                                password_hash, occupation, department_th, department_en,
                                role_th, role_en, profile_image_url, language)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Member>(&query)
            .bind(&input.fullname_th)
            .bind(&input.fullname_en)
            .bind(&input.nickname_th)
            .bind(&input.nickname_en)
            .bind(&input.email)
            .bind(&input.password_hash)
            .bind(&input.occupation)
            .bind(&input.department_th)
            .bind(&input.department_en)
            .bind(&input.role_th)
            .bind(&input.role_en)
            .bind(&input.profile_image_url)
            .bind(&input.language)
            .fetch_one(pool)
            .await
    }

    /// Find a member by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Member>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, Member>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a member by email (case-sensitive).
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<Member>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE email = $1");
        sqlx::query_as::<_, Member>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// List approved members of an occupation, optionally narrowed to a
    /// department (matched against either language).
    ///
    /// Rows come back in insertion order; the API layer applies the
    /// free-text filter and the Thai-collation sort in memory.
    pub async fn list_directory(
        pool: &PgPool,
        occupation: &str,
        department: Option<&str>,
    ) -> Result<Vec<Member>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM users
             WHERE occupation = $1
               AND verification_status = $2
               AND ($3::text IS NULL OR department_th = $3 OR department_en = $3)
             ORDER BY id ASC"
        );
        sqlx::query_as::<_, Member>(&query)
            .bind(occupation)
            .bind(VERIFICATION_APPROVED)
            .bind(department)
            .fetch_all(pool)
            .await
    }

    /// List members awaiting an admin decision, oldest application first.
    pub async fn list_pending(pool: &PgPool) -> Result<Vec<Member>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM users
             WHERE verification_status = $1
             ORDER BY created_at ASC"
        );
        sqlx::query_as::<_, Member>(&query)
            .bind(VERIFICATION_PENDING)
            .fetch_all(pool)
            .await
    }

    /// Email addresses of every user holding the admin web role.
    pub async fn admin_emails(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>(
            "SELECT email FROM users WHERE web_role = $1 AND email <> '' ORDER BY id ASC",
        )
        .bind(ROLE_ADMIN)
        .fetch_all(pool)
        .await
    }

    /// Apply an admin status update as a single conditional UPDATE.
    ///
    /// The row is only written when `verification_status` still equals
    /// `expected_verification_status` (the value the caller just read), so
    /// two admins racing the same member cannot silently overwrite each
    /// other. Only non-`None` fields in `input` are applied; audit stamps
    /// (`updated_at`, `updated_by`) are always set.
    ///
    /// Returns `None` when the row is gone or the status no longer matches;
    /// the caller distinguishes the two from its earlier read.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        expected_verification_status: &str,
        input: &MemberStatusUpdate,
        actor: DbId,
    ) -> Result<Option<Member>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET
                membership_status = COALESCE($3, membership_status),
                payment_status = COALESCE($4, payment_status),
                verification_status = COALESCE($5, verification_status),
                updated_at = NOW(),
                updated_by = $6
             WHERE id = $1 AND verification_status = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Member>(&query)
            .bind(id)
            .bind(expected_verification_status)
            .bind(&input.membership_status)
            .bind(&input.payment_status)
            .bind(&input.verification_status)
            .bind(actor)
            .fetch_optional(pool)
            .await
    }

    /// Total number of member rows.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(pool)
            .await
    }
}
