//! Keeping the in-memory task list in step with the remote store.
//!
//! Every user intent goes to the store first. Only a successful response
//! produces a [`Mutation`], and mutations are the only way a [`TaskList`]
//! changes. Intents on the same task are not sequenced: when two are in
//! flight, whichever response is applied last wins.

use tracing::{debug, info, warn};

use crate::error::Result;
use crate::model::{NewTask, Task, TaskId};
use crate::store::TaskStore;

/// Ordered tasks as last seen from the store, plus local appends.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

/// A state change produced by a completed intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    /// Replace the whole list with a fresh fetch.
    Replace(Vec<Task>),
    /// Add a newly created task at the end.
    Append(Task),
    /// Drop the task with this id.
    Remove(TaskId),
    /// Set the reminder flag of one task to the value the store acknowledged.
    SetReminder { id: TaskId, reminder: bool },
}

impl TaskList {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    pub fn as_slice(&self) -> &[Task] {
        &self.tasks
    }

    /// Apply a mutation in place.
    ///
    /// `Append` of an id already present overwrites that record where it
    /// stands, so ids stay unique. Mutations naming an unknown id are no-ops.
    pub fn apply(&mut self, mutation: Mutation) {
        match mutation {
            Mutation::Replace(tasks) => self.tasks = tasks,
            Mutation::Append(task) => match self.tasks.iter_mut().find(|t| t.id == task.id) {
                Some(existing) => *existing = task,
                None => self.tasks.push(task),
            },
            Mutation::Remove(id) => self.tasks.retain(|t| t.id != id),
            Mutation::SetReminder { id, reminder } => {
                if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
                    task.reminder = reminder;
                }
            }
        }
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}

/// Fetch the whole collection.
///
/// # Errors
/// Propagates transport failures from the store.
pub async fn load<S: TaskStore + ?Sized>(store: &S) -> Result<Mutation> {
    let tasks = store.list().await?;
    info!(count = tasks.len(), "loaded tasks");
    Ok(Mutation::Replace(tasks))
}

/// Create a task and append it without re-fetching the collection.
///
/// # Errors
/// Propagates store failures; nothing is appended then.
pub async fn add<S: TaskStore + ?Sized>(store: &S, task: &NewTask) -> Result<Mutation> {
    let created = store.create(task).await?;
    info!(task_id = %created.id, "created task");
    Ok(Mutation::Append(created))
}

/// Delete a task.
///
/// # Errors
/// Returns the store error (including any non-200 status); the caller must
/// leave its list unchanged and tell the user.
pub async fn delete<S: TaskStore + ?Sized>(store: &S, id: &TaskId) -> Result<Mutation> {
    match store.remove(id).await {
        Ok(()) => {
            info!(task_id = %id, "deleted task");
            Ok(Mutation::Remove(id.clone()))
        }
        Err(e) => {
            warn!(task_id = %id, error = %e, "delete rejected");
            Err(e)
        }
    }
}

/// Flip a task's reminder flag with a read-modify-write.
///
/// The flag is computed from a fresh read, written back in full, and the
/// resulting mutation carries the value the store echoed, not the value
/// computed here.
///
/// # Errors
/// Propagates store failures from either the read or the write.
pub async fn toggle_reminder<S: TaskStore + ?Sized>(store: &S, id: &TaskId) -> Result<Mutation> {
    let current = store.get(id).await?;
    let desired = current.fields().with_reminder(!current.reminder);
    let echoed = store.replace(id, &desired).await?;

    if echoed.reminder != desired.reminder {
        debug!(task_id = %id, "store acknowledged a different reminder value");
    }
    info!(task_id = %id, reminder = echoed.reminder, "toggled reminder");

    Ok(Mutation::SetReminder {
        id: id.clone(),
        reminder: echoed.reminder,
    })
}
