//! Remote store client contract and an in-memory implementation.

use std::cell::{Cell, RefCell};

use async_trait::async_trait;

use crate::error::{Result, StoreError};
use crate::model::{NewTask, Task, TaskFields, TaskId};

/// Request/response access to the task collection. No retries, no caching.
///
/// Futures are not required to be `Send`: the browser implementation runs on
/// the single-threaded WASM event loop.
#[async_trait(?Send)]
pub trait TaskStore {
    /// Fetch the whole collection in store enumeration order.
    async fn list(&self) -> Result<Vec<Task>>;

    /// Fetch one task.
    async fn get(&self, id: &TaskId) -> Result<Task>;

    /// Create a task; the store assigns its identifier.
    async fn create(&self, task: &NewTask) -> Result<Task>;

    /// Delete a task. Only HTTP 200 counts as success.
    async fn remove(&self, id: &TaskId) -> Result<()>;

    /// Overwrite a task document, returning the fields the store echoed.
    async fn replace(&self, id: &TaskId, fields: &TaskFields) -> Result<TaskFields>;
}

/// In-memory store for tests and the UI demo mode.
///
/// Keys are generated in insertion order. A failure status can be armed to
/// make deletes answer like a store rejecting the request.
#[derive(Debug, Default)]
pub struct InMemoryTaskStore {
    tasks: RefCell<Vec<Task>>,
    next_key: Cell<u64>,
    delete_failure: Cell<Option<u16>>,
    echo_override: Cell<Option<bool>>,
}

impl InMemoryTaskStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `tasks` in the given order.
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self {
            tasks: RefCell::new(tasks),
            ..Self::default()
        }
    }

    /// Make every following delete answer with `status`.
    pub fn fail_deletes_with(&self, status: u16) {
        self.delete_failure.set(Some(status));
    }

    /// Make every following replace echo `reminder` regardless of the
    /// value written, like a store whose document changed concurrently.
    pub fn echo_reminder(&self, reminder: bool) {
        self.echo_override.set(Some(reminder));
    }

    /// Snapshot of the stored tasks.
    pub fn snapshot(&self) -> Vec<Task> {
        self.tasks.borrow().clone()
    }

    fn generate_key(&self) -> TaskId {
        let key = self.next_key.get();
        self.next_key.set(key.saturating_add(1));
        TaskId::new(format!("-mem{key:05}"))
    }
}

#[async_trait(?Send)]
impl TaskStore for InMemoryTaskStore {
    async fn list(&self) -> Result<Vec<Task>> {
        Ok(self.snapshot())
    }

    async fn get(&self, id: &TaskId) -> Result<Task> {
        self.tasks
            .borrow()
            .iter()
            .find(|t| &t.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.clone()))
    }

    async fn create(&self, task: &NewTask) -> Result<Task> {
        let created = task.clone().with_id(self.generate_key());
        self.tasks.borrow_mut().push(created.clone());
        Ok(created)
    }

    async fn remove(&self, id: &TaskId) -> Result<()> {
        if let Some(status) = self.delete_failure.get() {
            return Err(StoreError::UnexpectedStatus { status });
        }
        // Deleting an absent node is still a 200 for the hosted store.
        self.tasks.borrow_mut().retain(|t| &t.id != id);
        Ok(())
    }

    async fn replace(&self, id: &TaskId, fields: &TaskFields) -> Result<TaskFields> {
        let mut stored = fields.clone();
        if let Some(reminder) = self.echo_override.get() {
            stored.reminder = reminder;
        }

        let mut tasks = self.tasks.borrow_mut();
        match tasks.iter_mut().find(|t| &t.id == id) {
            Some(existing) => *existing = stored.clone().with_id(id.clone()),
            None => tasks.push(stored.clone().with_id(id.clone())),
        }
        Ok(stored)
    }
}
