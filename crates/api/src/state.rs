use std::sync::Arc;

use splitsum_db::store::SumJobStore;
use splitsum_queue::TaskQueue;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool (used directly by the health check).
    pub pool: splitsum_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Persistence boundary for sum jobs and their components.
    pub store: Arc<dyn SumJobStore>,
    /// Execution service that runs submitted sum tasks.
    pub queue: Arc<dyn TaskQueue>,
}
