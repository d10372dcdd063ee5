//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! Manual mocks instead of mockall: the feed source is a single async method,
//! and tests need to hold a fetch open to exercise overlapping reloads.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
