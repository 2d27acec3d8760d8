//! asana - A command-line client for the Asana REST API
//!
//! This library provides the transport that talks to Asana, the typed records it
//! returns, the mapping from task filters to search queries, and the task summary
//! aggregation. The `asana` binary layers argument parsing and rendering on top.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod api;
pub mod config;
pub mod models;
pub mod output;
pub mod paths;
pub mod query;
pub mod summary;
