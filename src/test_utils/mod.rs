//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing. The
//! in-memory repositories reproduce the store contract closely enough to
//! exercise the full service layer without a running document store.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
