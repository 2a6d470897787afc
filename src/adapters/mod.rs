//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `json/` - JSON task file (the default backend)
//! - `memory` - in-memory snapshot, for tests and dry runs

pub mod json;
pub mod memory;

pub use json::JsonTaskRepository;
pub use memory::MemoryTaskRepository;
