//! Core domain logic for the scheduler
//!
//! This module contains pure business logic with no I/O dependencies.
//! Persistence goes through the [`ports::TaskRepository`] trait.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Task, Priority, TaskStatus)
//! - `ports/` - Trait definitions for external dependencies
//! - `store` - Canonical insertion-ordered task collection
//! - `services/` - Priority ordering and completion

pub mod models;
pub mod ports;
pub mod services;
pub mod store;
