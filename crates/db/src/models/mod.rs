//! Domain model structs.
//!
//! Each submodule contains a `FromRow` + `Serialize` entity struct matching
//! the database row. The tables here are narrow enough that inserts take
//! scalar arguments instead of create DTOs.

pub mod component;
pub mod job;

pub use component::SumJobComponent;
pub use job::SumJob;
