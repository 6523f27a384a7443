//! Split-sum dispatch.
//!
//! Creates the parent job, partitions `[1, n]`, and fires one chunk task per
//! sub-range at the execution service. Returns as soon as everything is
//! submitted; completion is observed by polling the progress endpoints.

use splitsum_core::partition::partition;
use splitsum_core::sums::validate_upper_bound;
use splitsum_core::task::TaskPayload;
use splitsum_db::models::job::SumJob;
use splitsum_db::store::SumJobStore;
use splitsum_queue::TaskQueue;

use crate::engine::job_group;
use crate::error::AppResult;

/// Dispatch a chunked computation of `sum(1..=n)`.
///
/// Validation runs before any row or task is created, so a rejected `n`
/// leaves no partial state behind. The number of dispatched chunks is
/// recorded on the job, which is what lets progress distinguish "all chunks
/// landed" from "none recorded yet".
pub async fn start_split_sum(
    store: &dyn SumJobStore,
    queue: &dyn TaskQueue,
    n: i64,
    chunk_size: i64,
) -> AppResult<SumJob> {
    validate_upper_bound(n)?;

    let chunks = partition(n, chunk_size);
    let job = store.create_job(chunks.len() as i64).await?;
    let group = job_group(job.id);

    for chunk in &chunks {
        queue
            .submit(
                TaskPayload::RangeSum {
                    job_id: job.id,
                    start: chunk.start,
                    end: chunk.end,
                },
                Some(group.clone()),
            )
            .await?;
    }

    tracing::info!(
        job_id = job.id,
        n,
        chunks = chunks.len(),
        "Split sum dispatched",
    );
    Ok(job)
}
