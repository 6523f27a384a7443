//! Route definitions for the `/sum` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::sum;
use crate::state::AppState;

/// Routes mounted at `/sum`.
///
/// ```text
/// GET /sync                    -> sum_sync
/// GET /start                   -> sum_start
/// GET /progress                -> sum_progress
/// GET /faulty/start            -> faulty_sum_start
/// GET /split/start             -> split_sum_start
/// GET /split/progress          -> split_sum_progress
/// GET /split/progress/tasks    -> split_sum_task_progress
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/sync", get(sum::sum_sync))
        .route("/start", get(sum::sum_start))
        .route("/progress", get(sum::sum_progress))
        .route("/faulty/start", get(sum::faulty_sum_start))
        .route("/split/start", get(sum::split_sum_start))
        .route("/split/progress", get(sum::split_sum_progress))
        .route("/split/progress/tasks", get(sum::split_sum_task_progress))
}
