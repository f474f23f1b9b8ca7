//! Count queries backing the dashboard.

use sqlx::PgPool;

/// Provides count operations for dashboard widgets.
pub struct StatsRepo;

impl StatsRepo {
    /// Number of association events.
    pub async fn count_events(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM events")
            .fetch_one(pool)
            .await
    }

    /// Number of member projects.
    pub async fn count_projects(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM projects")
            .fetch_one(pool)
            .await
    }
}
