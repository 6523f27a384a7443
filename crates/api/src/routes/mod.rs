pub mod health;
pub mod sum;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /sum/sync                    synchronous sum (GET)
/// /sum/start                   single async sum task (GET)
/// /sum/progress                poll one task (GET)
/// /sum/faulty/start            fault-injection task (GET)
/// /sum/split/start             chunked dispatch (GET)
/// /sum/split/progress          component-aggregation progress (GET)
/// /sum/split/progress/tasks    execution-service-aggregation progress (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/sum", sum::router())
}
