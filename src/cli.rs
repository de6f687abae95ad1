//! CLI command definitions using clap.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Task Tracker - list, add, delete, and toggle reminders on tasks
#[derive(Parser, Debug)]
#[command(name = "task-tracker")]
#[command(version)]
#[command(about = "Manage tasks stored in a remote JSON document store")]
#[command(
    long_about = "Task Tracker talks to the same document store as the web UI. Every command goes to the store first; the printed list reflects what the store acknowledged."
)]
pub struct Cli {
    /// TOML config file (base_url, collection, timeout_secs)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Store base URL, overriding config file and environment
    #[arg(long, global = true)]
    pub store_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Print all tasks
    List,

    /// Create a task, then print the list
    Add {
        /// What to do
        text: String,

        /// When, as free text (e.g. "Feb 5th at 2:30pm")
        #[arg(short, long)]
        day: String,

        /// Set a reminder
        #[arg(short, long, default_value_t = false)]
        reminder: bool,
    },

    /// Delete a task by id
    Delete {
        /// Task id assigned by the store
        #[arg(allow_hyphen_values = true)]
        id: String,
    },

    /// Flip the reminder flag of a task
    Toggle {
        /// Task id assigned by the store
        #[arg(allow_hyphen_values = true)]
        id: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add() -> Result<(), clap::Error> {
        let cli = Cli::try_parse_from([
            "task-tracker",
            "add",
            "Meeting",
            "--day",
            "Feb 5th",
            "--reminder",
        ])?;

        assert_eq!(
            cli.command,
            Commands::Add {
                text: "Meeting".to_string(),
                day: "Feb 5th".to_string(),
                reminder: true,
            }
        );
        Ok(())
    }

    #[test]
    fn test_store_url_and_hyphenated_id() -> Result<(), clap::Error> {
        let cli = Cli::try_parse_from([
            "task-tracker",
            "--store-url",
            "http://127.0.0.1:9000/",
            "delete",
            "-Nabc",
        ])?;

        assert_eq!(cli.store_url.as_deref(), Some("http://127.0.0.1:9000/"));
        assert_eq!(cli.command, Commands::Delete { id: "-Nabc".to_string() });
        Ok(())
    }

    #[test]
    fn test_add_requires_day() {
        let result = Cli::try_parse_from(["task-tracker", "add", "Meeting"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
