//! Common test utilities for asana-cli tests
//!
//! This module provides:
//! - A fake Asana API served over real HTTP
//! - Record builders for tasks and users


pub use fake_api::{Canned, FakeApi, Recorded};
pub use fixtures::*;
