//! Task data shown by the UI
//!
//! The records themselves live in `tracker_core`; this module re-exports
//! them and adds sample data for the offline demo.

pub mod mock;

pub use tracker_core::{NewTask, Task, TaskFields, TaskId, TaskList};
