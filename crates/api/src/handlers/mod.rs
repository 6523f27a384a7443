//! Request handlers.
//!
//! Handlers parse query parameters, delegate to the engine, and map errors
//! via [`AppError`](crate::error::AppError).

pub mod sum;
