//! In-memory [`SumJobStore`] used by engine and worker unit tests.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use splitsum_core::types::DbId;
use tokio::sync::Mutex;

use crate::models::component::SumJobComponent;
use crate::models::job::SumJob;
use crate::store::{StoreError, SumJobStore};

/// Hash-map implementation of [`SumJobStore`].
///
/// Mirrors the SQLite store's semantics, including the absence of any
/// duplicate-component guard: recording the same chunk twice double-counts,
/// exactly as it would against the real table.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    last_job_id: DbId,
    last_component_id: DbId,
    jobs: HashMap<DbId, SumJob>,
    components: Vec<SumJobComponent>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SumJobStore for MemoryStore {
    async fn create_job(&self, expected_chunks: i64) -> Result<SumJob, StoreError> {
        let mut inner = self.inner.lock().await;
        inner.last_job_id += 1;
        let job = SumJob {
            id: inner.last_job_id,
            expected_chunks,
            created_at: Utc::now(),
        };
        inner.jobs.insert(job.id, job.clone());
        Ok(job)
    }

    async fn find_job(&self, id: DbId) -> Result<Option<SumJob>, StoreError> {
        Ok(self.inner.lock().await.jobs.get(&id).cloned())
    }

    async fn add_component(
        &self,
        job_id: DbId,
        result: i64,
    ) -> Result<SumJobComponent, StoreError> {
        let mut inner = self.inner.lock().await;
        if !inner.jobs.contains_key(&job_id) {
            return Err(StoreError::JobNotFound(job_id));
        }
        inner.last_component_id += 1;
        let component = SumJobComponent {
            id: inner.last_component_id,
            parent_job_id: job_id,
            result,
            created_at: Utc::now(),
        };
        inner.components.push(component.clone());
        Ok(component)
    }

    async fn component_results(&self, job_id: DbId) -> Result<Vec<i64>, StoreError> {
        Ok(self
            .inner
            .lock()
            .await
            .components
            .iter()
            .filter(|c| c.parent_job_id == job_id)
            .map(|c| c.result)
            .collect())
    }

    async fn component_count(&self, job_id: DbId) -> Result<i64, StoreError> {
        Ok(self
            .inner
            .lock()
            .await
            .components
            .iter()
            .filter(|c| c.parent_job_id == job_id)
            .count() as i64)
    }
}
