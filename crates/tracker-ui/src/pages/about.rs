//! About page

use leptos::prelude::*;
use leptos_router::components::A;

use crate::router::routes;

/// Version string shown on the about page.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[component]
pub fn About() -> impl IntoView {
    view! {
        <div class="about-page">
            <h4>"Version " {VERSION}</h4>
            <A href=routes::HOME>"Go Back"</A>
        </div>
    }
}
