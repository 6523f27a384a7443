//! Sum job entity model.

use serde::Serialize;
use splitsum_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `sum_jobs` table: one chunked sum computation.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SumJob {
    pub id: DbId,
    /// Number of chunk tasks dispatched for this job, recorded at creation
    /// so completion can be derived from the component count alone.
    pub expected_chunks: i64,
    pub created_at: Timestamp,
}
