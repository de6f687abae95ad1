//! Main application component
//!
//! Sets up the shared state, starts the initial load, and lays out the
//! header, routes and footer inside the router.

use leptos::prelude::*;
use leptos_router::components::Router;

use crate::components::{Footer, Header};
use crate::router::AppRoutes;
use crate::state::{TrackerState, connect_store};

#[component]
pub fn App() -> impl IntoView {
    let state = TrackerState::provide(connect_store());
    state.load();

    view! {
        <Router>
            <div class="container">
                <Header />
                <main>
                    <AppRoutes />
                </main>
                <Footer />
            </div>
        </Router>
    }
}
