//! Page header with the add-form toggle

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use super::Button;
use crate::router::Page;
use crate::state::{TrackerState, use_tracker_state};

/// Title shown when none is given.
pub const DEFAULT_TITLE: &str = "Task Tracker";

/// Label and background color of the add-form toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderButton {
    pub label: &'static str,
    pub color: &'static str,
}

/// `Close` in red while the form is open, `Add` in blue otherwise.
pub const fn header_button(show_add: bool) -> HeaderButton {
    if show_add {
        HeaderButton {
            label: "Close",
            color: "#F06449",
        }
    } else {
        HeaderButton {
            label: "Add",
            color: "#5BC3EB",
        }
    }
}

/// Click handler opening or closing the add form.
pub fn add_form_toggle(state: TrackerState) -> Callback<()> {
    Callback::new(move |()| state.toggle_add_form())
}

/// Title bar; the toggle only appears on the task list route.
#[component]
pub fn Header(#[prop(default = DEFAULT_TITLE)] title: &'static str) -> impl IntoView {
    let state = use_tracker_state();
    let location = use_location();
    let on_home = move || {
        location
            .pathname
            .with(|path| Page::from_path(path) == Some(Page::Tasks))
    };
    let toggle = add_form_toggle(state);

    view! {
        <header class="header">
            <h1>{title}</h1>
            <Show when=on_home>
                {move || {
                    let button = header_button(state.show_add.get());
                    view! {
                        <Button
                            text=button.label
                            color=button.color
                            on_click=toggle
                        />
                    }
                }}
            </Show>
        </header>
    }
}
