//! Sum job component entity model.

use serde::Serialize;
use splitsum_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `sum_job_components` table: one chunk's partial result.
///
/// Components are append-only. A row is written exactly once when a chunk
/// worker finishes its sub-range and is removed only when the parent job is
/// deleted (cascade).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SumJobComponent {
    pub id: DbId,
    pub parent_job_id: DbId,
    pub result: i64,
    pub created_at: Timestamp,
}
