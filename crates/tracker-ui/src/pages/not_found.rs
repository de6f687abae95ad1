//! 404 Not Found page component

use leptos::prelude::*;
use leptos_router::components::A;

use crate::router::routes;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <h2>"404 - Page Not Found"</h2>
            <A href=routes::HOME>"Go Back"</A>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_component_exists() {
        let _component = NotFound;
    }
}
