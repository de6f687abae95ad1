//! CLI command handlers.
//!
//! Every handler goes through the board, so the printed list only ever shows
//! what the store acknowledged.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

use anyhow::{Context, Result};
use tracing::debug;
use tracker_core::{NewTask, TaskBoard, TaskId, TaskStore};

use crate::cli::Commands;
use crate::render;

/// Message attached to a rejected delete.
pub const DELETE_FAILED: &str = "Error Deleting This Task";

/// Execute a CLI command against `store` and return the text to print.
pub async fn execute_command<S: TaskStore>(command: Commands, store: S) -> Result<String> {
    let mut board = TaskBoard::new(store);
    board.subscribe(|view| debug!(tasks = view.tasks.len(), "task list changed"));

    board.load().await.context("Failed to load tasks")?;

    match command {
        Commands::List => {}

        Commands::Add {
            text,
            day,
            reminder,
        } => {
            let task = NewTask::new(text, day).with_reminder(reminder);
            board.add(&task).await.context("Failed to add task")?;
        }

        Commands::Delete { id } => {
            board
                .delete(&TaskId::from(id))
                .await
                .context(DELETE_FAILED)?;
        }

        Commands::Toggle { id } => {
            let id = TaskId::from(id);
            let task = board
                .toggle_reminder(&id)
                .await
                .with_context(|| format!("Failed to toggle reminder of task {id}"))?;
            if let Some(task) = task {
                return Ok(render::task_line(task));
            }
        }
    }

    Ok(render::task_list(board.tasks()))
}
