//! Table repositories.
//!
//! Each repository is a zero-sized struct providing async query methods that
//! accept `&DbPool` as the first argument.

pub mod component_repo;
pub mod job_repo;

pub use component_repo::SumJobComponentRepo;
pub use job_repo::SumJobRepo;
