//! State container owning the task list for one session.

use crate::error::Result;
use crate::model::{NewTask, Task, TaskId};
use crate::store::TaskStore;
use crate::sync::{self, Mutation, TaskList};

type Subscriber = Box<dyn Fn(&BoardView<'_>)>;

/// What subscribers see after every change.
#[derive(Debug, Clone, Copy)]
pub struct BoardView<'a> {
    pub tasks: &'a TaskList,
    pub show_add: bool,
}

/// Owns the store client, the task list, and the add-form flag.
///
/// All changes go through `&mut self`, so a board never applies two
/// mutations at once. Subscribers are called after each applied change.
pub struct TaskBoard<S> {
    store: S,
    tasks: TaskList,
    show_add: bool,
    subscribers: Vec<Subscriber>,
}

impl<S: TaskStore> TaskBoard<S> {
    /// Create an empty board; call [`TaskBoard::load`] to populate it.
    pub fn new(store: S) -> Self {
        Self {
            store,
            tasks: TaskList::default(),
            show_add: false,
            subscribers: Vec::new(),
        }
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    pub const fn show_add(&self) -> bool {
        self.show_add
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Register a callback run after every change.
    pub fn subscribe(&mut self, subscriber: impl Fn(&BoardView<'_>) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Show or hide the add form.
    pub fn toggle_add_form(&mut self) {
        self.show_add = !self.show_add;
        self.notify();
    }

    /// Replace the list with the store's current collection.
    ///
    /// # Errors
    /// Propagates store failures; the list is left unchanged.
    pub async fn load(&mut self) -> Result<()> {
        let mutation = sync::load(&self.store).await?;
        self.apply(mutation);
        Ok(())
    }

    /// Create a task and append it.
    ///
    /// # Errors
    /// Propagates store failures; the list is left unchanged.
    pub async fn add(&mut self, task: &NewTask) -> Result<()> {
        let mutation = sync::add(&self.store, task).await?;
        self.apply(mutation);
        Ok(())
    }

    /// Delete a task.
    ///
    /// # Errors
    /// Propagates store failures, including non-200 statuses; the list is
    /// left unchanged.
    pub async fn delete(&mut self, id: &TaskId) -> Result<()> {
        let mutation = sync::delete(&self.store, id).await?;
        self.apply(mutation);
        Ok(())
    }

    /// Flip a task's reminder to the value the store acknowledges.
    ///
    /// # Errors
    /// Propagates store failures; the list is left unchanged.
    pub async fn toggle_reminder(&mut self, id: &TaskId) -> Result<Option<&Task>> {
        let mutation = sync::toggle_reminder(&self.store, id).await?;
        self.apply(mutation);
        Ok(self.tasks.get(id))
    }

    fn apply(&mut self, mutation: Mutation) {
        self.tasks.apply(mutation);
        self.notify();
    }

    fn notify(&self) {
        let view = BoardView {
            tasks: &self.tasks,
            show_add: self.show_add,
        };
        for subscriber in &self.subscribers {
            subscriber(&view);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::error::StoreError;
    use crate::model::TaskFields;
    use crate::store::InMemoryTaskStore;

    fn seeded() -> InMemoryTaskStore {
        InMemoryTaskStore::with_tasks(vec![
            TaskFields::new("Doctor Appointment", "March 1st at 2:30pm")
                .with_reminder(true)
                .with_id(TaskId::from("a1")),
            TaskFields::new("Meeting at School", "March 3rd at 1:30pm").with_id(TaskId::from("a2")),
        ])
    }

    #[tokio::test]
    async fn test_add_grows_list_by_one() -> Result<()> {
        let mut board = TaskBoard::new(seeded());
        board.load().await?;
        let before = board.tasks().len();

        let input = NewTask::new("Meeting", "Feb 5th");
        board.add(&input).await?;

        assert_eq!(board.tasks().len(), before.saturating_add(1));
        let created = board.tasks().as_slice().last().map(Task::fields);
        assert_eq!(created, Some(input));
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_success_removes_only_target() -> Result<()> {
        let mut board = TaskBoard::new(seeded());
        board.load().await?;
        let survivor = board.tasks().get(&TaskId::from("a2")).cloned();

        board.delete(&TaskId::from("a1")).await?;

        assert!(board.tasks().get(&TaskId::from("a1")).is_none());
        assert_eq!(board.tasks().get(&TaskId::from("a2")).cloned(), survivor);
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_failure_keeps_list() -> Result<()> {
        let mut board = TaskBoard::new(seeded());
        board.load().await?;
        board.store().fail_deletes_with(500);
        let before = board.tasks().clone();

        let result = board.delete(&TaskId::from("a1")).await;

        assert_eq!(result, Err(StoreError::UnexpectedStatus { status: 500 }));
        assert_eq!(board.tasks(), &before);
        Ok(())
    }

    #[tokio::test]
    async fn test_toggle_negates_reminder() -> Result<()> {
        let mut board = TaskBoard::new(seeded());
        board.load().await?;

        let toggled = board.toggle_reminder(&TaskId::from("a1")).await?.cloned();

        assert_eq!(toggled.map(|t| t.reminder), Some(false));
        assert_eq!(board.tasks().get(&TaskId::from("a1")).map(|t| t.reminder), Some(false));
        Ok(())
    }

    #[tokio::test]
    async fn test_subscribers_see_each_change() -> Result<()> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut board = TaskBoard::new(seeded());
        board.subscribe(move |view| sink.borrow_mut().push((view.tasks.len(), view.show_add)));

        board.load().await?;
        board.toggle_add_form();
        board.delete(&TaskId::from("a2")).await?;

        assert_eq!(*seen.borrow(), vec![(2, false), (2, true), (1, true)]);
        Ok(())
    }

    #[tokio::test]
    async fn test_failed_intent_does_not_notify() {
        let calls = Rc::new(RefCell::new(0_u32));
        let counter = Rc::clone(&calls);

        let mut board = TaskBoard::new(InMemoryTaskStore::new());
        board.subscribe(move |_| {
            let mut count = counter.borrow_mut();
            *count = count.saturating_add(1);
        });

        let result = board.toggle_reminder(&TaskId::from("missing")).await;

        assert!(result.is_err());
        assert_eq!(*calls.borrow(), 0);
    }
}
