//! Shared record shapes and business rules of the ERP admin front end.
//!
//! Everything here is plain Rust so views and tests use the same definitions.

pub mod domain;
pub mod shared;
pub mod system;
pub mod usecases;
