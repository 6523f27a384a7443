//! Typed response bodies for the sum endpoints.
//!
//! The polling contract predates this service and is flat JSON objects, so
//! these are plain structs rather than a `{ "data": ... }` envelope. Totals
//! are `i128` because the largest accepted inputs produce sums beyond 64
//! bits; serde_json writes them out as full-precision JSON numbers.

use serde::Serialize;
use splitsum_core::types::DbId;
use splitsum_queue::TaskId;

/// Body of a synchronous sum: `{ "total": ... }`.
#[derive(Debug, Serialize)]
pub struct TotalResponse {
    pub total: i128,
}

/// Body returned when a single async task is started.
#[derive(Debug, Serialize)]
pub struct TaskStartedResponse {
    pub task_id: TaskId,
    /// Relative URL to poll for this task's progress.
    pub progress_url: String,
}

/// Body returned when a split job is dispatched.
#[derive(Debug, Serialize)]
pub struct JobStartedResponse {
    pub job_id: DbId,
}

/// Progress of a single async task: `total` is null until the task is done.
#[derive(Debug, Serialize)]
pub struct TaskProgressResponse {
    pub status: &'static str,
    pub total: Option<i128>,
}

/// Progress of a split job: `total` is the sum of whatever has been recorded
/// so far, which understates the final answer until every chunk lands.
#[derive(Debug, Serialize)]
pub struct SplitProgressResponse {
    pub status: &'static str,
    pub total: i128,
}
