//! Task payloads submitted to the execution service.

use serde::{Deserialize, Serialize};

use crate::types::DbId;

/// One unit of work for the execution service.
///
/// Serialized with a `task_type` tag so a payload reads like a job-table row
/// (`task_type` plus parameters) in logs and over the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "task_type", rename_all = "snake_case")]
pub enum TaskPayload {
    /// Sum `1..=n` in a single task.
    DirectSum { n: i64 },

    /// Fault-injection variant of [`TaskPayload::DirectSum`]; fails for
    /// `n >= FAULT_TRIGGER` (see [`crate::fault`]).
    FaultySum { n: i64 },

    /// Sum the inclusive range `[start, end]` and record the partial result
    /// as a component of the parent job.
    RangeSum { job_id: DbId, start: i64, end: i64 },
}

impl TaskPayload {
    /// Stable name of the task type, for logs.
    pub fn task_type(&self) -> &'static str {
        match self {
            TaskPayload::DirectSum { .. } => "direct_sum",
            TaskPayload::FaultySum { .. } => "faulty_sum",
            TaskPayload::RangeSum { .. } => "range_sum",
        }
    }
}
