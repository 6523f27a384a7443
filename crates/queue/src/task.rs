//! Task identity and state tracking types.

/// Opaque identifier handed back on submission and used for polling.
pub type TaskId = uuid::Uuid;

/// Lifecycle state of a submitted task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskState {
    /// Submitted but not yet finished.
    Pending,
    /// Finished with a result.
    Done,
    /// Finished with an error.
    Error,
}

impl TaskState {
    /// Wire word used by progress endpoints.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskState::Pending => "pending",
            TaskState::Done => "done",
            TaskState::Error => "error",
        }
    }
}

/// Point-in-time view of a task, as returned by polling.
#[derive(Debug, Clone)]
pub struct TaskSnapshot {
    pub task_id: TaskId,
    pub state: TaskState,
    /// Computed total. `Some` only when `state` is [`TaskState::Done`].
    pub result: Option<i128>,
    /// Failure message. `Some` only when `state` is [`TaskState::Error`].
    pub error: Option<String>,
}

impl TaskSnapshot {
    pub fn is_done(&self) -> bool {
        self.state == TaskState::Done
    }

    pub fn is_error(&self) -> bool {
        self.state == TaskState::Error
    }
}
