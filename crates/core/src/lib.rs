//! Pure domain logic for the splitsum service.
//!
//! This crate has zero internal dependencies so the math, partitioning, and
//! task payload types can be used by the db layer, the task queue, the task
//! bodies, and the API without cycles.

pub mod error;
pub mod fault;
pub mod partition;
pub mod sums;
pub mod task;
pub mod types;
