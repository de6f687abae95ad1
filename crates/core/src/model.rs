//! Task records as held in memory and as stored remotely.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Store-generated key of a task. Opaque; assigned once on creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TaskId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for TaskId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// The document stored under a task key: everything but the identifier.
///
/// Missing fields decode to their defaults, so a partially written document
/// still yields a task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskFields {
    #[serde(default)]
    pub text: String,
    /// Free-form date/time text, e.g. "Feb 5th at 2:30pm".
    #[serde(default)]
    pub day: String,
    #[serde(default)]
    pub reminder: bool,
}

/// A task about to be created. The store assigns the identifier.
pub type NewTask = TaskFields;

impl TaskFields {
    pub fn new(text: impl Into<String>, day: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            day: day.into(),
            reminder: false,
        }
    }

    /// Builder pattern: set reminder
    #[must_use]
    pub const fn with_reminder(mut self, reminder: bool) -> Self {
        self.reminder = reminder;
        self
    }

    /// Attach the identifier the store assigned to this document.
    pub fn with_id(self, id: TaskId) -> Task {
        Task {
            id,
            text: self.text,
            day: self.day,
            reminder: self.reminder,
        }
    }
}

/// A task record carrying its store key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub day: String,
    pub reminder: bool,
}

impl Task {
    /// The stored document for this task, without the identifier.
    pub fn fields(&self) -> TaskFields {
        TaskFields {
            text: self.text.clone(),
            day: self.day.clone(),
            reminder: self.reminder,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_defaults() {
        let fields = TaskFields::new("Meeting", "Feb 5th");
        assert_eq!(fields.text, "Meeting");
        assert_eq!(fields.day, "Feb 5th");
        assert!(!fields.reminder);
    }

    #[test]
    fn test_with_id_keeps_fields() {
        let task = TaskFields::new("Meeting", "Feb 5th")
            .with_reminder(true)
            .with_id(TaskId::from("xyz9"));

        assert_eq!(task.id.as_str(), "xyz9");
        assert_eq!(task.text, "Meeting");
        assert_eq!(task.day, "Feb 5th");
        assert!(task.reminder);
        assert_eq!(task.fields(), TaskFields::new("Meeting", "Feb 5th").with_reminder(true));
    }

    #[test]
    fn test_fields_serialize_without_id() -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_value(TaskFields::new("Meeting", "Feb 5th"))?;
        assert_eq!(
            json,
            serde_json::json!({"text": "Meeting", "day": "Feb 5th", "reminder": false})
        );
        Ok(())
    }

    #[test]
    fn test_missing_reminder_decodes_as_false() -> Result<(), Box<dyn std::error::Error>> {
        let fields: TaskFields = serde_json::from_str(r#"{"text":"Shop","day":"Friday"}"#)?;
        assert!(!fields.reminder);
        Ok(())
    }

    #[test]
    fn test_task_id_display() {
        assert_eq!(TaskId::new("-Nabc").to_string(), "-Nabc");
    }
}
