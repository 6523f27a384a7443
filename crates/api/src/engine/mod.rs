//! Sum computation engine.
//!
//! Contains the dispatcher that splits a sum request into chunk tasks and
//! the progress readers that aggregate recorded results back into a total.
//! Both sides talk to the store and the queue through their traits, so the
//! logic here is exercised against in-memory doubles in unit tests.

pub mod dispatcher;
pub mod progress;

use splitsum_core::types::DbId;

/// Group key correlating all chunk tasks dispatched for one job.
pub fn job_group(job_id: DbId) -> String {
    format!("sum-job:{job_id}")
}
