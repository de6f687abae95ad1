//! Sample tasks for the `?demo` mode
//!
//! Lets the UI run without a reachable document store.

use tracker_core::InMemoryTaskStore;

use super::{Task, TaskFields, TaskId};

/// Two sample tasks, one with a reminder set.
pub fn demo_tasks() -> Vec<Task> {
    vec![
        TaskFields::new("Doctor Appointment", "March 1st at 2:30pm")
            .with_reminder(true)
            .with_id(TaskId::from("demo-1")),
        TaskFields::new("Meeting at School", "March 3rd at 1:30pm").with_id(TaskId::from("demo-2")),
    ]
}

/// In-memory store seeded with [`demo_tasks`].
pub fn demo_store() -> InMemoryTaskStore {
    InMemoryTaskStore::with_tasks(demo_tasks())
}
