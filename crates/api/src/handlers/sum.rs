//! Handlers for the `/sum` resource.
//!
//! Every endpoint is query-string driven (`?n=`, `?task_id=`, `?job_id=`)
//! and GET-only: the service is a polling demo, not a REST resource.

use axum::extract::{Query, State};
use axum::Json;
use splitsum_core::sums::{direct_sum, validate_upper_bound};
use splitsum_core::task::TaskPayload;
use splitsum_queue::TaskId;

use crate::engine::{dispatcher, progress};
use crate::error::AppResult;
use crate::query::{JobParams, SumParams, TaskParams};
use crate::response::{
    JobStartedResponse, SplitProgressResponse, TaskProgressResponse, TaskStartedResponse,
    TotalResponse,
};
use crate::state::AppState;

/// Where a freshly started task can be polled.
fn progress_url(task_id: TaskId) -> String {
    format!("/api/v1/sum/progress?task_id={task_id}")
}

/// GET /api/v1/sum/sync
///
/// Compute the sum in the request handler itself. No task, no persistence.
pub async fn sum_sync(Query(params): Query<SumParams>) -> AppResult<Json<TotalResponse>> {
    let n = params.parse_n()?;
    validate_upper_bound(n)?;

    Ok(Json(TotalResponse { total: direct_sum(n) }))
}

/// GET /api/v1/sum/start
///
/// Submit the sum as a single async task and return a pollable handle.
pub async fn sum_start(
    State(state): State<AppState>,
    Query(params): Query<SumParams>,
) -> AppResult<Json<TaskStartedResponse>> {
    let n = params.parse_n()?;
    validate_upper_bound(n)?;

    let task_id = state.queue.submit(TaskPayload::DirectSum { n }, None).await?;
    tracing::info!(%task_id, n, "Sum task submitted");

    Ok(Json(TaskStartedResponse {
        task_id,
        progress_url: progress_url(task_id),
    }))
}

/// GET /api/v1/sum/faulty/start
///
/// Submit the deliberately failing sum variant. Polled via the same
/// progress endpoint; the failure surfaces there as status `error`.
pub async fn faulty_sum_start(
    State(state): State<AppState>,
    Query(params): Query<SumParams>,
) -> AppResult<Json<TaskStartedResponse>> {
    let n = params.parse_n()?;
    validate_upper_bound(n)?;

    let task_id = state.queue.submit(TaskPayload::FaultySum { n }, None).await?;
    tracing::info!(%task_id, n, "Faulty sum task submitted");

    Ok(Json(TaskStartedResponse {
        task_id,
        progress_url: progress_url(task_id),
    }))
}

/// GET /api/v1/sum/progress
///
/// Poll one task: `{ "status": ..., "total": ... }` with `total` null until
/// the task is done.
pub async fn sum_progress(
    State(state): State<AppState>,
    Query(params): Query<TaskParams>,
) -> AppResult<Json<TaskProgressResponse>> {
    let task_id = params.parse_task_id()?;
    let body = progress::task_status(&*state.queue, task_id).await?;
    Ok(Json(body))
}

/// GET /api/v1/sum/split/start
///
/// Split the sum into chunk tasks and return the parent job's id.
pub async fn split_sum_start(
    State(state): State<AppState>,
    Query(params): Query<SumParams>,
) -> AppResult<Json<JobStartedResponse>> {
    let n = params.parse_n()?;

    let job = dispatcher::start_split_sum(
        &*state.store,
        &*state.queue,
        n,
        state.config.chunk_size,
    )
    .await?;

    Ok(Json(JobStartedResponse { job_id: job.id }))
}

/// GET /api/v1/sum/split/progress
///
/// Aggregate a split job from its persisted components.
pub async fn split_sum_progress(
    State(state): State<AppState>,
    Query(params): Query<JobParams>,
) -> AppResult<Json<SplitProgressResponse>> {
    let job_id = params.parse_job_id()?;
    let body = progress::component_progress(&*state.store, job_id).await?;
    Ok(Json(body))
}

/// GET /api/v1/sum/split/progress/tasks
///
/// Aggregate a split job from the execution service's task snapshots.
pub async fn split_sum_task_progress(
    State(state): State<AppState>,
    Query(params): Query<JobParams>,
) -> AppResult<Json<SplitProgressResponse>> {
    let job_id = params.parse_job_id()?;
    let body = progress::task_progress(&*state.store, &*state.queue, job_id).await?;
    Ok(Json(body))
}
