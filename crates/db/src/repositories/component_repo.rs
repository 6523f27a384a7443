//! Repository for the `sum_job_components` table.

use splitsum_core::types::DbId;

use crate::models::component::SumJobComponent;
use crate::DbPool;

/// Column list for `sum_job_components` queries.
const COLUMNS: &str = "id, parent_job_id, result, created_at";

/// Provides operations for per-chunk partial results.
pub struct SumJobComponentRepo;

impl SumJobComponentRepo {
    /// Record one chunk's partial result against its parent job.
    ///
    /// Inserts are append-only, so workers finishing out of order never
    /// conflict. The foreign key rejects results for a deleted job.
    pub async fn create(
        pool: &DbPool,
        parent_job_id: DbId,
        result: i64,
    ) -> Result<SumJobComponent, sqlx::Error> {
        let query = format!(
            "INSERT INTO sum_job_components (parent_job_id, result, created_at) \
             VALUES (?, ?, ?) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SumJobComponent>(&query)
            .bind(parent_job_id)
            .bind(result)
            .bind(chrono::Utc::now())
            .fetch_one(pool)
            .await
    }

    /// All recorded partial results for a job, oldest first.
    pub async fn list_results(
        pool: &DbPool,
        parent_job_id: DbId,
    ) -> Result<Vec<i64>, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT result FROM sum_job_components WHERE parent_job_id = ? ORDER BY id",
        )
        .bind(parent_job_id)
        .fetch_all(pool)
        .await
    }

    /// Number of partial results recorded for a job so far.
    pub async fn count_for_job(pool: &DbPool, parent_job_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM sum_job_components WHERE parent_job_id = ?",
        )
        .bind(parent_job_id)
        .fetch_one(pool)
        .await
    }
}
