//! Task execution service for sum computations.
//!
//! This crate provides the queueing seam between HTTP handlers and the
//! workers that actually compute sums:
//!
//! - [`TaskQueue`] — the submission/polling interface handlers are written
//!   against.
//! - [`TaskRunner`] — executes a single [`TaskPayload`] to completion.
//! - [`LocalTaskQueue`] — in-process implementation that spawns one Tokio
//!   task per submission and tracks outcomes in memory.
//! - [`TaskSnapshot`] — point-in-time view of a task used for progress
//!   reporting.
//!
//! [`TaskPayload`]: splitsum_core::task::TaskPayload

pub mod error;
pub mod local;
pub mod queue;
pub mod runner;
pub mod task;

pub use error::QueueError;
pub use local::LocalTaskQueue;
pub use queue::TaskQueue;
pub use runner::{TaskError, TaskRunner};
pub use task::{TaskId, TaskSnapshot, TaskState};
