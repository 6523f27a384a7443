//! Repository for the `sum_jobs` table.

use splitsum_core::types::DbId;

use crate::models::job::SumJob;
use crate::DbPool;

/// Column list for `sum_jobs` queries.
const COLUMNS: &str = "id, expected_chunks, created_at";

/// Provides operations for parent sum jobs.
pub struct SumJobRepo;

impl SumJobRepo {
    /// Create a new job recording how many chunks are about to be dispatched.
    pub async fn create(pool: &DbPool, expected_chunks: i64) -> Result<SumJob, sqlx::Error> {
        let query = format!(
            "INSERT INTO sum_jobs (expected_chunks, created_at) \
             VALUES (?, ?) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SumJob>(&query)
            .bind(expected_chunks)
            .bind(chrono::Utc::now())
            .fetch_one(pool)
            .await
    }

    /// Find a job by ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<SumJob>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sum_jobs WHERE id = ?");
        sqlx::query_as::<_, SumJob>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a job. Components cascade. Returns whether a row was removed.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM sum_jobs WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
