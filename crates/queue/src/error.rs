//! Queue error types.

use crate::task::TaskId;

/// Errors surfaced by a [`TaskQueue`](crate::TaskQueue).
#[derive(Debug, thiserror::Error)]
pub enum QueueError {
    /// No task with this ID was ever submitted, or its record was lost
    /// when the process restarted.
    #[error("Task {0} not found")]
    TaskNotFound(TaskId),

    /// The queue is shutting down and no longer accepts submissions.
    #[error("Task queue is shut down")]
    QueueClosed,
}
