//! The queueing interface handlers are written against.

use async_trait::async_trait;
use splitsum_core::task::TaskPayload;

use crate::error::QueueError;
use crate::task::{TaskId, TaskSnapshot};

/// Submission and polling operations for sum tasks.
///
/// Delivery contract: at-most-once. A submitted task runs on a single worker
/// and is never retried; if the process dies mid-run the task never reaches
/// a terminal state.
#[async_trait]
pub trait TaskQueue: Send + Sync {
    /// Queue a payload for execution, optionally tagged with a group key so
    /// related tasks can be inspected together.
    async fn submit(
        &self,
        payload: TaskPayload,
        group: Option<String>,
    ) -> Result<TaskId, QueueError>;

    /// Current state of a single task.
    async fn poll(&self, id: TaskId) -> Result<TaskSnapshot, QueueError>;

    /// Snapshots of every tracked task carrying the given group key, in no
    /// particular order.
    async fn group_snapshot(&self, group: &str) -> Result<Vec<TaskSnapshot>, QueueError>;
}
