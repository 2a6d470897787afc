//! Port traits (interfaces) for external dependencies
//!
//! The scheduler depends only on these traits, never on a concrete storage
//! backend. Implementations live in the `adapters` module; tests supply
//! in-memory ones.

mod task_repo;

pub use task_repo::TaskRepository;
