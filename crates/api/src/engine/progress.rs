//! Progress aggregation for sum jobs and tasks.
//!
//! Two split-progress readers coexist on purpose. [`component_progress`]
//! trusts only the database: the total is the sum of persisted components
//! and `done` means the component count has reached the dispatched chunk
//! count. [`task_progress`] instead asks the execution service about the
//! job's task group, which is the only reader that can surface a failed
//! chunk, but its bookkeeping lives in process memory and is lost on
//! restart. The two can disagree; both are exposed so callers pick the
//! semantics they need.

use splitsum_core::error::CoreError;
use splitsum_core::types::DbId;
use splitsum_db::models::job::SumJob;
use splitsum_db::store::SumJobStore;
use splitsum_queue::{TaskId, TaskQueue};

use crate::engine::job_group;
use crate::error::{AppError, AppResult};
use crate::response::{SplitProgressResponse, TaskProgressResponse};

/// Job status words exposed by the progress endpoints.
const STATUS_PENDING: &str = "pending";
const STATUS_DONE: &str = "done";
const STATUS_ERROR: &str = "error";

async fn find_job(store: &dyn SumJobStore, job_id: DbId) -> AppResult<SumJob> {
    store
        .find_job(job_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Sum job",
            id: job_id,
        }))
}

/// Split-job progress derived from persisted components only.
///
/// The total understates the final answer until every chunk has landed.
/// This reader never reports `error`: a failed chunk simply never records
/// its component, leaving the job `pending` indefinitely.
pub async fn component_progress(
    store: &dyn SumJobStore,
    job_id: DbId,
) -> AppResult<SplitProgressResponse> {
    let job = find_job(store, job_id).await?;
    let results = store.component_results(job_id).await?;

    let total: i128 = results.iter().map(|&r| r as i128).sum();
    let status = if results.len() as i64 >= job.expected_chunks {
        STATUS_DONE
    } else {
        STATUS_PENDING
    };

    Ok(SplitProgressResponse { status, total })
}

/// Split-job progress derived from the execution service's own task
/// snapshots for the job's group.
///
/// Any failed task makes the whole job `error`. The total is the sum of the
/// tasks that finished; a restart empties the group, after which the job
/// reads as `pending` with a zero total even if its components survived.
pub async fn task_progress(
    store: &dyn SumJobStore,
    queue: &dyn TaskQueue,
    job_id: DbId,
) -> AppResult<SplitProgressResponse> {
    let job = find_job(store, job_id).await?;
    let snapshots = queue.group_snapshot(&job_group(job_id)).await?;

    let total: i128 = snapshots.iter().filter_map(|s| s.result).sum();
    let status = if snapshots.iter().any(|s| s.is_error()) {
        STATUS_ERROR
    } else if snapshots.len() as i64 == job.expected_chunks
        && snapshots.iter().all(|s| s.is_done())
    {
        STATUS_DONE
    } else {
        STATUS_PENDING
    };

    Ok(SplitProgressResponse { status, total })
}

/// Progress of one task: its state plus the result once it is done.
pub async fn task_status(
    queue: &dyn TaskQueue,
    task_id: TaskId,
) -> AppResult<TaskProgressResponse> {
    let snapshot = queue.poll(task_id).await?;
    Ok(TaskProgressResponse {
        status: snapshot.state.as_str(),
        total: snapshot.result,
    })
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use async_trait::async_trait;
    use splitsum_core::sums::direct_sum;
    use splitsum_core::task::TaskPayload;
    use splitsum_db::memory::MemoryStore;
    use splitsum_queue::{QueueError, TaskSnapshot, TaskState};

    use super::*;

    /// Serves a fixed set of snapshots; submissions are rejected.
    struct FixedQueue {
        snapshots: Vec<TaskSnapshot>,
    }

    impl FixedQueue {
        fn new(snapshots: Vec<TaskSnapshot>) -> Self {
            Self { snapshots }
        }
    }

    #[async_trait]
    impl TaskQueue for FixedQueue {
        async fn submit(
            &self,
            _payload: TaskPayload,
            _group: Option<String>,
        ) -> Result<TaskId, QueueError> {
            Err(QueueError::QueueClosed)
        }

        async fn poll(&self, id: TaskId) -> Result<TaskSnapshot, QueueError> {
            self.snapshots
                .iter()
                .find(|s| s.task_id == id)
                .cloned()
                .ok_or(QueueError::TaskNotFound(id))
        }

        async fn group_snapshot(&self, _group: &str) -> Result<Vec<TaskSnapshot>, QueueError> {
            Ok(self.snapshots.clone())
        }
    }

    fn done(result: i128) -> TaskSnapshot {
        TaskSnapshot {
            task_id: TaskId::new_v4(),
            state: TaskState::Done,
            result: Some(result),
            error: None,
        }
    }

    fn pending() -> TaskSnapshot {
        TaskSnapshot {
            task_id: TaskId::new_v4(),
            state: TaskState::Pending,
            result: None,
            error: None,
        }
    }

    fn failed(message: &str) -> TaskSnapshot {
        TaskSnapshot {
            task_id: TaskId::new_v4(),
            state: TaskState::Error,
            result: None,
            error: Some(message.to_string()),
        }
    }

    // -- component_progress ---------------------------------------------------

    #[tokio::test]
    async fn component_progress_is_pending_with_partial_total() {
        let store = MemoryStore::new();
        let job = store.create_job(3).await.unwrap();
        store.add_component(job.id, 10).await.unwrap();
        store.add_component(job.id, 20).await.unwrap();

        let progress = component_progress(&store, job.id).await.unwrap();
        assert_eq!(progress.status, "pending");
        assert_eq!(progress.total, 30);
    }

    #[tokio::test]
    async fn component_progress_is_done_once_all_chunks_landed() {
        let store = MemoryStore::new();
        let job = store.create_job(3).await.unwrap();
        for result in [10, 20, 30] {
            store.add_component(job.id, result).await.unwrap();
        }

        let progress = component_progress(&store, job.id).await.unwrap();
        assert_eq!(progress.status, "done");
        assert_eq!(progress.total, 60);
    }

    #[tokio::test]
    async fn component_progress_unknown_job_is_not_found() {
        let store = MemoryStore::new();
        let err = component_progress(&store, 42).await.unwrap_err();
        assert_matches!(
            err,
            AppError::Core(CoreError::NotFound {
                entity: "Sum job",
                id: 42
            })
        );
    }

    // Recording the same chunk twice double-counts: there is no idempotency
    // key on components. The store accepts the duplicate and the aggregate
    // comes out wrong, which is exactly the anomaly this pins down.
    #[tokio::test]
    async fn duplicate_component_skews_the_total() {
        let store = MemoryStore::new();
        let job = store.create_job(2).await.unwrap();

        // Chunks of [1, 6] with size 3 are (1,3) and (4,6): results 6 and 15.
        store.add_component(job.id, 6).await.unwrap();
        store.add_component(job.id, 6).await.unwrap();

        let progress = component_progress(&store, job.id).await.unwrap();
        assert_eq!(progress.status, "done");
        assert_eq!(progress.total, 12);
        assert_ne!(progress.total, direct_sum(6));
    }

    // -- task_progress --------------------------------------------------------

    #[tokio::test]
    async fn task_progress_is_pending_while_any_task_outstanding() {
        let store = MemoryStore::new();
        let job = store.create_job(3).await.unwrap();
        let queue = FixedQueue::new(vec![done(10), done(20), pending()]);

        let progress = task_progress(&store, &queue, job.id).await.unwrap();
        assert_eq!(progress.status, "pending");
        assert_eq!(progress.total, 30);
    }

    #[tokio::test]
    async fn task_progress_is_error_when_any_task_failed() {
        let store = MemoryStore::new();
        let job = store.create_job(2).await.unwrap();
        let queue = FixedQueue::new(vec![done(10), failed("boom")]);

        let progress = task_progress(&store, &queue, job.id).await.unwrap();
        assert_eq!(progress.status, "error");
        assert_eq!(progress.total, 10);
    }

    #[tokio::test]
    async fn task_progress_is_done_when_every_task_finished() {
        let store = MemoryStore::new();
        let job = store.create_job(2).await.unwrap();
        let queue = FixedQueue::new(vec![done(10), done(20)]);

        let progress = task_progress(&store, &queue, job.id).await.unwrap();
        assert_eq!(progress.status, "done");
        assert_eq!(progress.total, 30);
    }

    #[tokio::test]
    async fn task_progress_unknown_job_is_not_found() {
        let store = MemoryStore::new();
        let queue = FixedQueue::new(Vec::new());
        let err = task_progress(&store, &queue, 7).await.unwrap_err();
        assert_matches!(err, AppError::Core(CoreError::NotFound { .. }));
    }

    // The two readers disagree once the queue's bookkeeping is gone (e.g.
    // after a restart): components persist, task snapshots do not.
    #[tokio::test]
    async fn readers_diverge_when_queue_state_is_lost() {
        let store = MemoryStore::new();
        let job = store.create_job(2).await.unwrap();
        store.add_component(job.id, 10).await.unwrap();
        store.add_component(job.id, 20).await.unwrap();
        let queue = FixedQueue::new(Vec::new());

        let from_components = component_progress(&store, job.id).await.unwrap();
        assert_eq!(from_components.status, "done");
        assert_eq!(from_components.total, 30);

        let from_tasks = task_progress(&store, &queue, job.id).await.unwrap();
        assert_eq!(from_tasks.status, "pending");
        assert_eq!(from_tasks.total, 0);
    }

    // -- task_status ----------------------------------------------------------

    #[tokio::test]
    async fn task_status_maps_each_state() {
        let snapshots = vec![done(55), pending(), failed("boom")];
        let ids: Vec<TaskId> = snapshots.iter().map(|s| s.task_id).collect();
        let queue = FixedQueue::new(snapshots);

        let finished = task_status(&queue, ids[0]).await.unwrap();
        assert_eq!(finished.status, "done");
        assert_eq!(finished.total, Some(55));

        let outstanding = task_status(&queue, ids[1]).await.unwrap();
        assert_eq!(outstanding.status, "pending");
        assert_eq!(outstanding.total, None);

        let errored = task_status(&queue, ids[2]).await.unwrap();
        assert_eq!(errored.status, "error");
        assert_eq!(errored.total, None);
    }

    #[tokio::test]
    async fn task_status_unknown_task_is_not_found() {
        let queue = FixedQueue::new(Vec::new());
        let missing = TaskId::new_v4();
        let err = task_status(&queue, missing).await.unwrap_err();
        assert_matches!(err, AppError::Queue(QueueError::TaskNotFound(id)) if id == missing);
    }
}
