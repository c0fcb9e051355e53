//! Test utilities
//!
//! In-memory repositories and entity factories. The same repositories back
//! the service unit tests and the router-level tests in `integration_tests`.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
