//! Task list page

use leptos::prelude::*;

use crate::components::{AddTask, EMPTY_LIST, TaskList};
use crate::state::use_tracker_state;

/// The add form (when open) above the task list.
#[component]
pub fn Tasks() -> impl IntoView {
    let state = use_tracker_state();
    let has_tasks = move || state.tasks.with(|tasks| !tasks.is_empty());

    view! {
        <div class="tasks-page">
            <Show when=move || state.show_add.get()>
                <AddTask />
            </Show>
            <Show when=has_tasks fallback=|| view! { <p class="empty">{EMPTY_LIST}</p> }>
                <TaskList />
            </Show>
        </div>
    }
}
