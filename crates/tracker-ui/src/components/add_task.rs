//! Form for creating a task

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::models::NewTask;
use crate::state::use_tracker_state;

/// Collects text, day and reminder; submitting raises the add intent and
/// clears the inputs.
#[component]
pub fn AddTask() -> impl IntoView {
    let state = use_tracker_state();
    let text = RwSignal::new(String::new());
    let day = RwSignal::new(String::new());
    let reminder = RwSignal::new(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let task = NewTask::new(text.get_untracked(), day.get_untracked())
            .with_reminder(reminder.get_untracked());
        state.add(task);

        text.set(String::new());
        day.set(String::new());
        reminder.set(false);
    };

    view! {
        <form class="add-form" on:submit=on_submit>
            <div class="form-control">
                <label for="task-text">"Task"</label>
                <input
                    id="task-text"
                    type="text"
                    placeholder="Add Task"
                    prop:value=move || text.get()
                    on:input=move |ev| text.set(event_target_value(&ev))
                />
            </div>
            <div class="form-control">
                <label for="task-day">"Day & Time"</label>
                <input
                    id="task-day"
                    type="text"
                    placeholder="Add Day & Time"
                    prop:value=move || day.get()
                    on:input=move |ev| day.set(event_target_value(&ev))
                />
            </div>
            <div class="form-control form-control-check">
                <label for="task-reminder">"Set Reminder"</label>
                <input
                    id="task-reminder"
                    type="checkbox"
                    prop:checked=move || reminder.get()
                    on:change=move |ev| reminder.set(event_target_checked(&ev))
                />
            </div>
            <input type="submit" value="Save Task" class="btn btn-block" />
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_task_component_exists() {
        let _component = AddTask;
    }
}
