use leptos::prelude::*;
use leptos_router::components::A;

use crate::router::routes;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <p>"Copyright © 2021"</p>
            <A href=routes::ABOUT>"About"</A>
        </footer>
    }
}
