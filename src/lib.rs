#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

//! # Task Tracker
//!
//! Command-line client for the task tracker. Shares the task model and the
//! store synchronization rules with the web UI through `tracker-core`, and
//! talks to the document store with reqwest.

pub use tracker_core;

pub mod cli;
pub mod commands;
pub mod config;
pub mod render;
pub mod rest_store;

pub use config::TrackerConfig;
pub use rest_store::RestTaskStore;
