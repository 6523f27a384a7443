//! In-process task queue backed by Tokio tasks.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use splitsum_core::task::TaskPayload;
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;

use crate::error::QueueError;
use crate::queue::TaskQueue;
use crate::runner::TaskRunner;
use crate::task::{TaskId, TaskSnapshot, TaskState};

/// Internal bookkeeping for one submitted task.
#[derive(Debug)]
struct TaskRecord {
    group: Option<String>,
    state: TaskState,
    result: Option<i128>,
    error: Option<String>,
}

impl TaskRecord {
    fn snapshot(&self, task_id: TaskId) -> TaskSnapshot {
        TaskSnapshot {
            task_id,
            state: self.state,
            result: self.result,
            error: self.error.clone(),
        }
    }
}

/// [`TaskQueue`] that executes every submission on a spawned Tokio task
/// inside the current process.
///
/// Task state lives only in memory. A restart forgets every previously
/// issued [`TaskId`], after which polling them reports
/// [`QueueError::TaskNotFound`].
pub struct LocalTaskQueue {
    runner: Arc<dyn TaskRunner>,
    tasks: Arc<RwLock<HashMap<TaskId, TaskRecord>>>,
    tracker: TaskTracker,
    cancel: CancellationToken,
}

impl LocalTaskQueue {
    /// Create a running queue that executes payloads with `runner`.
    pub fn start(runner: Arc<dyn TaskRunner>) -> Arc<Self> {
        Arc::new(Self {
            runner,
            tasks: Arc::new(RwLock::new(HashMap::new())),
            tracker: TaskTracker::new(),
            cancel: CancellationToken::new(),
        })
    }

    /// Stop accepting submissions and wait for in-flight tasks to finish.
    pub async fn shutdown(&self) {
        tracing::info!("Shutting down task queue");
        self.cancel.cancel();
        self.tracker.close();
        self.tracker.wait().await;
        tracing::info!("Task queue shut down complete");
    }

    /// Number of tasks tracked since startup, any state.
    pub async fn tracked_count(&self) -> usize {
        self.tasks.read().await.len()
    }
}

#[async_trait]
impl TaskQueue for LocalTaskQueue {
    async fn submit(
        &self,
        payload: TaskPayload,
        group: Option<String>,
    ) -> Result<TaskId, QueueError> {
        if self.cancel.is_cancelled() {
            return Err(QueueError::QueueClosed);
        }

        let task_id = TaskId::new_v4();
        let task_type = payload.task_type();
        {
            let mut tasks = self.tasks.write().await;
            tasks.insert(
                task_id,
                TaskRecord {
                    group,
                    state: TaskState::Pending,
                    result: None,
                    error: None,
                },
            );
        }
        tracing::debug!(task_id = %task_id, task_type, "Task submitted");

        let runner = Arc::clone(&self.runner);
        let tasks = Arc::clone(&self.tasks);
        self.tracker.spawn(async move {
            let outcome = runner.run(payload).await;
            let mut tasks = tasks.write().await;
            // The record is only ever removed at process exit, but a missing
            // entry must not panic the worker task.
            if let Some(record) = tasks.get_mut(&task_id) {
                match outcome {
                    Ok(total) => {
                        record.state = TaskState::Done;
                        record.result = Some(total);
                        tracing::debug!(task_id = %task_id, task_type, "Task finished");
                    }
                    Err(e) => {
                        record.state = TaskState::Error;
                        record.error = Some(e.to_string());
                        tracing::warn!(task_id = %task_id, task_type, error = %e, "Task failed");
                    }
                }
            }
        });

        Ok(task_id)
    }

    async fn poll(&self, id: TaskId) -> Result<TaskSnapshot, QueueError> {
        let tasks = self.tasks.read().await;
        let record = tasks.get(&id).ok_or(QueueError::TaskNotFound(id))?;
        Ok(record.snapshot(id))
    }

    async fn group_snapshot(&self, group: &str) -> Result<Vec<TaskSnapshot>, QueueError> {
        let tasks = self.tasks.read().await;
        Ok(tasks
            .iter()
            .filter(|(_, record)| record.group.as_deref() == Some(group))
            .map(|(id, record)| record.snapshot(*id))
            .collect())
    }
}
