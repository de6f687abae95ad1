//! JSON bodies exchanged with the document store.
//!
//! The collection resource answers with an object keyed by task id whose
//! values are [`TaskFields`] documents; an empty collection is `null`.
//! Decoding keeps the object's key order, which is the order the store
//! enumerates its children in.

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::warn;

use crate::error::{Result, StoreError};
use crate::model::{Task, TaskFields, TaskId};

/// Body returned by the store for a POST to a collection.
#[derive(Debug, Deserialize)]
struct CreatedKey {
    name: String,
}

/// Decode a collection body into tasks, injecting each key as the id.
///
/// Absent, `null`, or malformed bodies yield an empty list. Entries that are
/// not task documents are skipped.
pub fn decode_collection(body: &str) -> Vec<Task> {
    if body.trim().is_empty() {
        return Vec::new();
    }

    let entries = match serde_json::from_str::<Option<Map<String, Value>>>(body) {
        Ok(Some(entries)) => entries,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!(error = %e, "collection body is not a task map; treating as empty");
            return Vec::new();
        }
    };

    entries
        .into_iter()
        .filter_map(|(key, value)| match serde_json::from_value::<TaskFields>(value) {
            Ok(fields) => Some(fields.with_id(TaskId::from(key))),
            Err(e) => {
                warn!(task_id = %key, error = %e, "skipping malformed task document");
                None
            }
        })
        .collect()
}

/// Decode a record body returned for `id`.
///
/// # Errors
/// Returns `StoreError::NotFound` for a `null` body and `StoreError::Decode`
/// when the body is not a task document.
pub fn decode_record(id: &TaskId, body: &str) -> Result<Task> {
    serde_json::from_str::<Option<TaskFields>>(body)?
        .map(|fields| fields.with_id(id.clone()))
        .ok_or_else(|| StoreError::NotFound(id.clone()))
}

/// Decode the fields echoed back by a PUT.
///
/// # Errors
/// Returns `StoreError::Decode` when the body is not a task document.
pub fn decode_fields(body: &str) -> Result<TaskFields> {
    serde_json::from_str::<Option<TaskFields>>(body)?
        .ok_or_else(|| StoreError::decode("store echoed an empty document"))
}

/// Decode the generated key returned by a POST.
///
/// # Errors
/// Returns `StoreError::Decode` when the body has no `name` field.
pub fn decode_created_key(body: &str) -> Result<TaskId> {
    let created: CreatedKey = serde_json::from_str(body)?;
    Ok(TaskId::from(created.name))
}
