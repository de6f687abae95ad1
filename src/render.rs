//! Plain-text rendering of the task list.

use tracker_core::{Task, TaskList};

/// Shown instead of an empty list.
pub const EMPTY_LIST: &str = "No Tasks To Show";

/// One line for a task: reminder marker, id, text, day.
pub fn task_line(task: &Task) -> String {
    let marker = if task.reminder { "[*]" } else { "[ ]" };
    format!("{marker} {}  {}  ({})", task.id, task.text, task.day)
}

/// The whole list, one task per line, in list order.
pub fn task_list(tasks: &TaskList) -> String {
    if tasks.is_empty() {
        return EMPTY_LIST.to_string();
    }
    tasks.iter().map(task_line).collect::<Vec<_>>().join("\n")
}
