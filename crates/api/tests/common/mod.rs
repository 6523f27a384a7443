//! Shared helpers for HTTP-level integration tests.

// Shared across several test binaries; not every binary uses every helper.
#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tokio::sync::Semaphore;
use tower::ServiceExt;

use splitsum_api::config::ServerConfig;
use splitsum_api::router::build_app_router;
use splitsum_api::state::AppState;
use splitsum_core::task::TaskPayload;
use splitsum_db::store::{SqliteStore, SumJobStore};
use splitsum_queue::{LocalTaskQueue, TaskError, TaskQueue, TaskRunner};
use splitsum_tasks::SumTaskRunner;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default),
/// a 30-second request timeout, and the production chunk size.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        chunk_size: 100_000_000,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool and the production chunk size.
///
/// Uses the same [`build_app_router`] as `main.rs`, so integration tests
/// exercise the exact middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses.
///
/// The task queue lives inside the returned router's state. Build the app
/// once per test and `clone()` it per request; rebuilding would discard all
/// submitted task state.
pub fn build_test_app(pool: SqlitePool) -> Router {
    let store: Arc<dyn SumJobStore> = Arc::new(SqliteStore::new(pool.clone()));
    let runner = Arc::new(SumTaskRunner::new(Arc::clone(&store)));
    app_with_runner(pool, test_config(), store, runner)
}

/// Like [`build_test_app`], but with a custom chunk size so split tests can
/// produce several chunks from a small `n`.
pub fn build_test_app_with_chunk_size(pool: SqlitePool, chunk_size: i64) -> Router {
    let mut config = test_config();
    config.chunk_size = chunk_size;

    let store: Arc<dyn SumJobStore> = Arc::new(SqliteStore::new(pool.clone()));
    let runner = Arc::new(SumTaskRunner::new(Arc::clone(&store)));
    app_with_runner(pool, config, store, runner)
}

/// Build an app whose task runner blocks on a semaphore that starts with
/// zero permits.
///
/// Every submitted task parks before doing any work, so the test can assert
/// on the pending state deterministically, then release the tasks with
/// `gate.add_permits(..)`.
pub fn build_gated_test_app(pool: SqlitePool, chunk_size: i64) -> (Router, Arc<Semaphore>) {
    let mut config = test_config();
    config.chunk_size = chunk_size;

    let gate = Arc::new(Semaphore::new(0));
    let store: Arc<dyn SumJobStore> = Arc::new(SqliteStore::new(pool.clone()));
    let runner = Arc::new(GatedSumRunner {
        inner: SumTaskRunner::new(Arc::clone(&store)),
        gate: Arc::clone(&gate),
    });

    (app_with_runner(pool, config, store, runner), gate)
}

fn app_with_runner(
    pool: SqlitePool,
    config: ServerConfig,
    store: Arc<dyn SumJobStore>,
    runner: Arc<dyn TaskRunner>,
) -> Router {
    let queue = LocalTaskQueue::start(runner);

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        store,
        queue: queue as Arc<dyn TaskQueue>,
    };

    build_app_router(state, &config)
}

/// Wraps the real task runner behind a semaphore acquired before any work.
struct GatedSumRunner {
    inner: SumTaskRunner,
    gate: Arc<Semaphore>,
}

#[async_trait]
impl TaskRunner for GatedSumRunner {
    async fn run(&self, payload: TaskPayload) -> Result<i128, TaskError> {
        let _permit = self
            .gate
            .acquire()
            .await
            .map_err(|e| TaskError::new(e.to_string()))?;
        self.inner.run(payload).await
    }
}

/// Send a GET request to the given path and return the raw response.
pub async fn get(app: Router, path: &str) -> Response {
    app.oneshot(
        Request::builder()
            .uri(path)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect the response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Collect the response body as a UTF-8 string.
///
/// Needed for totals above 2^64: `serde_json::Value` parses those as `f64`
/// and loses precision, so tests compare the raw body text instead.
pub async fn body_string(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Poll a progress endpoint until its reported status leaves `pending`,
/// returning the settled JSON body.
///
/// Tasks run on Tokio workers, so a freshly submitted task may still be
/// pending on the first poll. 200 attempts 5ms apart bound the wait at
/// about one second, far longer than any test task needs.
pub async fn poll_until_settled(app: &Router, path: &str) -> serde_json::Value {
    for _ in 0..200 {
        let response = get(app.clone(), path).await;
        let json = body_json(response).await;
        if json["status"] != "pending" {
            return json;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("Progress at {path} did not settle within the polling window");
}
