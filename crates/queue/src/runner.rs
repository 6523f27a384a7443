//! Runner seam: executes one task payload to completion.

use async_trait::async_trait;
use splitsum_core::task::TaskPayload;

/// Failure reported by a task runner.
///
/// Carries only a message. The queue records it verbatim on the task so
/// progress endpoints can surface what went wrong.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct TaskError(pub String);

impl TaskError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Executes a single [`TaskPayload`] and produces its total.
///
/// Implementations must be safe to call concurrently: the queue spawns one
/// Tokio task per submission and shares the runner between them.
#[async_trait]
pub trait TaskRunner: Send + Sync {
    async fn run(&self, payload: TaskPayload) -> Result<i128, TaskError>;
}
