//! Execution of sum task payloads.

use std::sync::Arc;

use async_trait::async_trait;
use splitsum_core::fault::failing_sum;
use splitsum_core::sums::{direct_sum, range_sum};
use splitsum_core::task::TaskPayload;
use splitsum_db::store::SumJobStore;
use splitsum_queue::runner::{TaskError, TaskRunner};

/// Executes sum payloads; chunk results are persisted as job components.
pub struct SumTaskRunner {
    store: Arc<dyn SumJobStore>,
}

impl SumTaskRunner {
    pub fn new(store: Arc<dyn SumJobStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl TaskRunner for SumTaskRunner {
    async fn run(&self, payload: TaskPayload) -> Result<i128, TaskError> {
        match payload {
            TaskPayload::DirectSum { n } => Ok(direct_sum(n)),

            TaskPayload::FaultySum { n } => {
                failing_sum(n).map_err(|e| TaskError::new(e.to_string()))
            }

            TaskPayload::RangeSum { job_id, start, end } => {
                let total = range_sum(start, end);
                // Components are stored as 64-bit integers; a chunk whose
                // partial sum does not fit fails rather than truncating.
                let result = i64::try_from(total).map_err(|_| {
                    TaskError::new(format!(
                        "Partial sum for range {start}..={end} exceeds the storable range"
                    ))
                })?;

                self.store
                    .add_component(job_id, result)
                    .await
                    .map_err(|e| TaskError::new(e.to_string()))?;

                tracing::info!(job_id, start, end, result, "Chunk result recorded");
                Ok(total)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use splitsum_db::memory::MemoryStore;

    use super::*;

    fn runner_with_store() -> (SumTaskRunner, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        (SumTaskRunner::new(Arc::clone(&store) as _), store)
    }

    #[tokio::test]
    async fn direct_sum_payload_returns_total() {
        let (runner, _) = runner_with_store();
        let total = runner.run(TaskPayload::DirectSum { n: 10 }).await.unwrap();
        assert_eq!(total, 55);

        let huge = runner
            .run(TaskPayload::DirectSum { n: 10_000_000_000 })
            .await
            .unwrap();
        assert_eq!(huge, 50_000_000_005_000_000_000);
    }

    #[tokio::test]
    async fn faulty_sum_payload_succeeds_below_trigger() {
        let (runner, _) = runner_with_store();
        let total = runner.run(TaskPayload::FaultySum { n: 10 }).await.unwrap();
        assert_eq!(total, 55);
    }

    #[tokio::test]
    async fn faulty_sum_payload_fails_at_trigger() {
        let (runner, _) = runner_with_store();
        let err = runner
            .run(TaskPayload::FaultySum { n: 2_000_000 })
            .await
            .unwrap_err();
        assert!(err.to_string().contains("1234567"));
    }

    #[tokio::test]
    async fn range_sum_payload_records_component() {
        let (runner, store) = runner_with_store();
        let job = store.create_job(1).await.unwrap();

        let total = runner
            .run(TaskPayload::RangeSum {
                job_id: job.id,
                start: 100_000_001,
                end: 200_000_000,
            })
            .await
            .unwrap();

        assert_eq!(total, 15_000_000_050_000_000);
        assert_eq!(
            store.component_results(job.id).await.unwrap(),
            vec![15_000_000_050_000_000]
        );
    }

    #[tokio::test]
    async fn range_sum_for_missing_job_writes_nothing() {
        let (runner, store) = runner_with_store();

        let err = runner
            .run(TaskPayload::RangeSum {
                job_id: 99,
                start: 1,
                end: 10,
            })
            .await
            .unwrap_err();

        assert!(err.to_string().contains("not found"));
        assert_eq!(store.component_count(99).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn oversized_partial_sum_is_rejected() {
        let (runner, store) = runner_with_store();
        let job = store.create_job(1).await.unwrap();

        // Two near-maximal values sum past i64::MAX.
        let err = runner
            .run(TaskPayload::RangeSum {
                job_id: job.id,
                start: i64::MAX - 1,
                end: i64::MAX,
            })
            .await
            .unwrap_err();

        assert!(err.to_string().contains("storable range"));
        assert_eq!(store.component_count(job.id).await.unwrap(), 0);
    }
}
