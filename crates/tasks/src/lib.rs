//! Worker-side task implementations.
//!
//! [`SumTaskRunner`] is the single [`TaskRunner`](splitsum_queue::TaskRunner)
//! the service installs: it executes every sum payload variant and persists
//! chunk results through the injected store.

pub mod runner;

pub use runner::SumTaskRunner;
