//! Colored action button

use leptos::prelude::*;

#[component]
pub fn Button(text: &'static str, color: &'static str, on_click: Callback<()>) -> impl IntoView {
    view! {
        <button
            class="btn"
            style:background-color=color
            on:click=move |_| on_click.run(())
        >
            {text}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_component_exists() {
        let _component = Button;
    }
}
