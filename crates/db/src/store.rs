//! Injected persistence boundary for sum jobs.
//!
//! The dispatcher, the chunk worker, and the aggregator are written against
//! this trait rather than the pool, so engine logic can be exercised with
//! [`MemoryStore`](crate::memory::MemoryStore) in unit tests.

use async_trait::async_trait;
use splitsum_core::types::DbId;

use crate::models::component::SumJobComponent;
use crate::models::job::SumJob;
use crate::repositories::{SumJobComponentRepo, SumJobRepo};
use crate::DbPool;

/// Errors surfaced by a [`SumJobStore`].
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The referenced parent job does not exist (or no longer exists).
    #[error("Sum job {0} not found")]
    JobNotFound(DbId),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Persistence operations shared by the dispatcher, chunk workers, and the
/// aggregator.
#[async_trait]
pub trait SumJobStore: Send + Sync {
    /// Create a job recording how many chunks are about to be dispatched.
    async fn create_job(&self, expected_chunks: i64) -> Result<SumJob, StoreError>;

    /// Look up a job by ID.
    async fn find_job(&self, id: DbId) -> Result<Option<SumJob>, StoreError>;

    /// Append one chunk's partial result to a job.
    ///
    /// Fails with [`StoreError::JobNotFound`] when the parent job is gone;
    /// nothing is written in that case.
    async fn add_component(&self, job_id: DbId, result: i64)
        -> Result<SumJobComponent, StoreError>;

    /// All recorded partial results for a job, oldest first.
    async fn component_results(&self, job_id: DbId) -> Result<Vec<i64>, StoreError>;

    /// Number of partial results recorded for a job so far.
    async fn component_count(&self, job_id: DbId) -> Result<i64, StoreError>;
}

/// [`SumJobStore`] backed by SQLite through the repository layer.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SumJobStore for SqliteStore {
    async fn create_job(&self, expected_chunks: i64) -> Result<SumJob, StoreError> {
        Ok(SumJobRepo::create(&self.pool, expected_chunks).await?)
    }

    async fn find_job(&self, id: DbId) -> Result<Option<SumJob>, StoreError> {
        Ok(SumJobRepo::find_by_id(&self.pool, id).await?)
    }

    async fn add_component(
        &self,
        job_id: DbId,
        result: i64,
    ) -> Result<SumJobComponent, StoreError> {
        SumJobComponentRepo::create(&self.pool, job_id, result)
            .await
            .map_err(|e| classify_component_insert_error(job_id, e))
    }

    async fn component_results(&self, job_id: DbId) -> Result<Vec<i64>, StoreError> {
        Ok(SumJobComponentRepo::list_results(&self.pool, job_id).await?)
    }

    async fn component_count(&self, job_id: DbId) -> Result<i64, StoreError> {
        Ok(SumJobComponentRepo::count_for_job(&self.pool, job_id).await?)
    }
}

/// Map a foreign-key violation on component insert to
/// [`StoreError::JobNotFound`] so callers see the domain failure instead of
/// a raw database error.
fn classify_component_insert_error(job_id: DbId, err: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db_err) = &err {
        if matches!(db_err.kind(), sqlx::error::ErrorKind::ForeignKeyViolation) {
            return StoreError::JobNotFound(job_id);
        }
    }
    StoreError::Database(err)
}
