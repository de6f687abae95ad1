//! Task list and its rows

use leptos::prelude::*;

use crate::models::Task;
use crate::state::use_tracker_state;

/// Shown in place of the list when there are no tasks.
pub const EMPTY_LIST: &str = "No Tasks To Show";

/// CSS classes of a task row; reminders get a marker border.
pub const fn task_class(reminder: bool) -> &'static str {
    if reminder { "task reminder" } else { "task" }
}

/// All tasks in store order.
#[component]
pub fn TaskList() -> impl IntoView {
    let state = use_tracker_state();

    view! {
        <div class="task-list">
            {move || {
                state
                    .tasks
                    .get()
                    .iter()
                    .map(|task| view! { <TaskItem task=task.clone() /> })
                    .collect_view()
            }}
        </div>
    }
}

/// One row: double-click toggles the reminder, `×` deletes.
#[component]
pub fn TaskItem(task: Task) -> impl IntoView {
    let state = use_tracker_state();
    let class = task_class(task.reminder);
    let toggle_id = task.id.clone();
    let delete_id = task.id;

    view! {
        <div class=class on:dblclick=move |_| state.toggle_reminder(toggle_id.clone())>
            <h3>
                {task.text}
                <span
                    class="delete"
                    title="Delete"
                    on:click=move |_| state.delete(delete_id.clone())
                >
                    "×"
                </span>
            </h3>
            <p>{task.day}</p>
        </div>
    }
}
