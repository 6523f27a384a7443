//! Shared query parameter types for the sum endpoints.
//!
//! Parameters arrive as optional strings and are parsed explicitly so a
//! missing value and a malformed value both produce the same 400 message
//! before any job or task is created.

use serde::Deserialize;
use splitsum_core::types::DbId;
use splitsum_queue::TaskId;

use crate::error::AppError;

/// `?n=` for every sum-starting endpoint.
#[derive(Debug, Deserialize)]
pub struct SumParams {
    pub n: Option<String>,
}

impl SumParams {
    /// Parse `n` as a 64-bit integer. Positivity is validated separately by
    /// the operation that consumes it.
    pub fn parse_n(&self) -> Result<i64, AppError> {
        self.n
            .as_deref()
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .ok_or_else(|| AppError::BadRequest("Must provide ?n=<integer> parameter".into()))
    }
}

/// `?task_id=` for single-task progress polling.
#[derive(Debug, Deserialize)]
pub struct TaskParams {
    pub task_id: Option<String>,
}

impl TaskParams {
    pub fn parse_task_id(&self) -> Result<TaskId, AppError> {
        self.task_id
            .as_deref()
            .and_then(|raw| TaskId::parse_str(raw.trim()).ok())
            .ok_or_else(|| AppError::BadRequest("Must provide ?task_id=<task> parameter".into()))
    }
}

/// `?job_id=` for split-job progress polling.
#[derive(Debug, Deserialize)]
pub struct JobParams {
    pub job_id: Option<String>,
}

impl JobParams {
    pub fn parse_job_id(&self) -> Result<DbId, AppError> {
        self.job_id
            .as_deref()
            .and_then(|raw| raw.trim().parse::<DbId>().ok())
            .ok_or_else(|| AppError::BadRequest("Must provide ?job_id=<job> parameter".into()))
    }
}
