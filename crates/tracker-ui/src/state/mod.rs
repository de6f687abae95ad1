//! Application state management
//!
//! [`TrackerState`] owns the task list and the add-form flag as signals and
//! is handed to components through Leptos context. Intents run on the
//! browser event loop with `spawn_local`; the signals change only once the
//! store has answered.
//!
//! # Store selection
//!
//! The store URL is compiled in (`TRACKER_STORE_URL` at build time, or the
//! default hosted store). Opening the app with `?demo` swaps in an
//! in-memory store seeded with sample tasks.

pub mod http_store;

use std::rc::Rc;

use leptos::prelude::*;
use tracker_core::{DEFAULT_STORE_URL, Mutation, StoreConfig, TaskStore, sync};
use wasm_bindgen_futures::spawn_local;

use crate::error::{Result, UiError};
use crate::models::mock::demo_store;
use crate::models::{NewTask, TaskId, TaskList};

pub use http_store::HttpTaskStore;

/// Shown when the store refuses a delete.
pub const DELETE_FAILED: &str = "Error Deleting This Task";

/// Query flag selecting the in-memory demo store.
pub const DEMO_FLAG: &str = "demo";

/// Shared state provided to every component.
#[derive(Clone, Copy)]
pub struct TrackerState {
    /// Tasks as acknowledged by the store.
    pub tasks: RwSignal<TaskList>,
    /// Whether the add form is open.
    pub show_add: RwSignal<bool>,
    store: StoredValue<Rc<dyn TaskStore>, LocalStorage>,
}

impl TrackerState {
    pub fn new(store: Rc<dyn TaskStore>) -> Self {
        Self {
            tasks: RwSignal::new(TaskList::default()),
            show_add: RwSignal::new(false),
            store: StoredValue::new_local(store),
        }
    }

    /// Create the state and put it into context for descendants.
    pub fn provide(store: Rc<dyn TaskStore>) -> Self {
        let state = Self::new(store);
        provide_context(state);
        state
    }

    pub fn toggle_add_form(&self) {
        self.show_add.update(|shown| *shown = !*shown);
    }

    /// Apply an acknowledged change to the task list.
    pub fn apply(&self, mutation: Mutation) {
        self.tasks.update(|tasks| tasks.apply(mutation));
    }

    fn store(&self) -> Rc<dyn TaskStore> {
        self.store.get_value()
    }

    /// Fetch the whole collection, replacing the list.
    pub fn load(&self) {
        let state = *self;
        spawn_local(async move {
            match sync::load(&*state.store()).await {
                Ok(mutation) => state.apply(mutation),
                Err(e) => log_error(&format!("Failed to load tasks: {e}")),
            }
        });
    }

    pub fn add(&self, task: NewTask) {
        let state = *self;
        spawn_local(async move {
            match sync::add(&*state.store(), &task).await {
                Ok(mutation) => state.apply(mutation),
                Err(e) => log_error(&format!("Failed to add task: {e}")),
            }
        });
    }

    /// Delete a task; a refusal is reported with a blocking alert.
    pub fn delete(&self, id: TaskId) {
        let state = *self;
        spawn_local(async move {
            match sync::delete(&*state.store(), &id).await {
                Ok(mutation) => state.apply(mutation),
                Err(e) => {
                    log_error(&format!("Failed to delete task {id}: {e}"));
                    if let Err(alert_error) = alert(DELETE_FAILED) {
                        log_error(&alert_error.to_string());
                    }
                }
            }
        });
    }

    pub fn toggle_reminder(&self, id: TaskId) {
        let state = *self;
        spawn_local(async move {
            match sync::toggle_reminder(&*state.store(), &id).await {
                Ok(mutation) => state.apply(mutation),
                Err(e) => log_error(&format!("Failed to toggle reminder of task {id}: {e}")),
            }
        });
    }
}

/// The state provided by [`TrackerState::provide`].
///
/// # Panics
/// Panics if called outside the component tree rooted at `App`.
pub fn use_tracker_state() -> TrackerState {
    expect_context::<TrackerState>()
}

/// Base URL of the remote store for this build.
pub fn store_url() -> &'static str {
    option_env!("TRACKER_STORE_URL").unwrap_or(DEFAULT_STORE_URL)
}

/// Whether a location query string (`?a=1&demo`) asks for demo mode.
pub fn wants_demo(search: &str) -> bool {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split('=').next())
        .any(|key| key == DEMO_FLAG)
}

/// Pick the store for a location query string.
///
/// # Errors
/// Returns `UiError::Store` if the compiled-in store URL is unusable.
pub fn select_store(search: &str) -> Result<Rc<dyn TaskStore>> {
    if wants_demo(search) {
        log_info("Using the in-memory demo store");
        let store: Rc<dyn TaskStore> = Rc::new(demo_store());
        return Ok(store);
    }
    let config = StoreConfig::with_base_url(store_url());
    let store: Rc<dyn TaskStore> = Rc::new(HttpTaskStore::new(&config)?);
    Ok(store)
}

/// The store for the current page, falling back to the demo store when the
/// configured one cannot be used.
pub fn connect_store() -> Rc<dyn TaskStore> {
    let search = current_search().unwrap_or_default();
    match select_store(&search) {
        Ok(store) => store,
        Err(e) => {
            log_error(&format!("Store unavailable, using demo data: {e}"));
            Rc::new(demo_store())
        }
    }
}

fn current_search() -> Result<String> {
    web_sys::window()
        .ok_or(UiError::NoWindow)?
        .location()
        .search()
        .map_err(|e| UiError::Browser(format!("{e:?}")))
}

fn alert(message: &str) -> Result<()> {
    web_sys::window()
        .ok_or(UiError::NoWindow)?
        .alert_with_message(message)
        .map_err(|e| UiError::Browser(format!("{e:?}")))
}

fn log_info(message: &str) {
    web_sys::console::log_1(&message.into());
}

fn log_error(message: &str) {
    web_sys::console::error_1(&message.into());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_flag_detection() {
        assert!(wants_demo("?demo"));
        assert!(wants_demo("?demo=1"));
        assert!(wants_demo("?x=2&demo"));
        assert!(!wants_demo(""));
        assert!(!wants_demo("?demolition=1"));
    }

    #[test]
    fn test_store_url_is_absolute() {
        assert!(store_url().starts_with("http"));
    }
}
