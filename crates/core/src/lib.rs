//! Core of the task tracker: task records, the remote store contract, and
//! the synchronization rules between the store and in-memory state.
//!
//! ## Module Structure
//! - `model`: task records and identifiers
//! - `wire`: JSON bodies of the document store
//! - `endpoint`: resource URLs of the task collection
//! - `store`: the `TaskStore` trait and an in-memory implementation
//! - `sync`: intents, mutations, and the task list they act on
//! - `board`: a state container with subscribe/notify
//! - `config`: store location
//! - `error`: error types
//!
//! Everything here compiles for `wasm32-unknown-unknown` as well as native
//! targets; transports live in the front-end crates.

#![forbid(unsafe_code)]

pub mod board;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod model;
pub mod store;
pub mod sync;
pub mod wire;

pub use board::{BoardView, TaskBoard};
pub use config::{DEFAULT_COLLECTION, DEFAULT_STORE_URL, StoreConfig};
pub use endpoint::StoreEndpoint;
pub use error::{ConfigError, Result, StoreError};
pub use model::{NewTask, Task, TaskFields, TaskId};
pub use store::{InMemoryTaskStore, TaskStore};
pub use sync::{Mutation, TaskList};
