//! WASM entry point for the Leptos CSR app
//!
//! Trunk compiles this to WASM; it mounts `App` to the document body.

use leptos::prelude::*;
use tracker_ui::App;

fn main() {
    // Panics show up in the browser console
    console_error_panic_hook::set_once();

    mount_to_body(|| {
        view! {
            <App />
        }
    })
}
