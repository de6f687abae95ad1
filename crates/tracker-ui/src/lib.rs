//! Leptos 0.7 CSR frontend for the task tracker
//!
//! Shows the tasks kept in the remote document store and lets the user add
//! them, delete them, and toggle their reminders.
//!
//! ## Architecture
//! - Pure CSR (Client-Side Rendering) with Leptos 0.7
//! - WASM compilation target (wasm32-unknown-unknown)
//! - Store access over `fetch` via gloo-net, sync rules from `tracker_core`
//!
//! ## Module Structure
//! - `app`: Main application component
//! - `router`: Route definitions
//! - `pages`: Top-level page components
//! - `components`: Header, form, list and footer
//! - `state`: Shared reactive state and store selection
//! - `models`: Task data and demo fixtures
//! - `error`: Error types

#![forbid(unsafe_code)]

pub mod app;
pub mod components;
pub mod error;
pub mod models;
pub mod pages;
pub mod router;
pub mod state;

pub use app::App;

#[cfg(test)]
mod tests;
