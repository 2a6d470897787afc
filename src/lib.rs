//! priotask - an offline, single-user task scheduler
//!
//! Tasks carry a priority and a due date and are persisted to a JSON file.
//! The scheduler shows pending tasks ordered by urgency and completes the
//! one the user picks from that view.

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

pub mod adapters;
pub mod config;
pub mod core;
pub mod error;
pub mod interactive;
pub mod output;
pub mod paths;
pub mod prompt;

pub use error::SchedulerError;
