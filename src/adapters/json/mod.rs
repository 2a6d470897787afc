//! JSON-file task storage
//!
//! - [`record`] - on-disk record format
//! - [`repository`] - `TaskRepository` implementation

pub mod record;
pub mod repository;

pub use record::TaskRecord;
pub use repository::JsonTaskRepository;
