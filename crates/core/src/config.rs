//! Where the task documents live.

use serde::{Deserialize, Serialize};

/// Base URL of the hosted store used when nothing else is configured.
pub const DEFAULT_STORE_URL: &str = "https://task-tracker-default-rtdb.firebaseio.com/";

/// Collection the tasks are stored under.
pub const DEFAULT_COLLECTION: &str = "tasks";

/// Location of the task collection in the remote document store.
///
/// The base URL is kept as text and validated when a
/// [`crate::StoreEndpoint`] is built from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Root of the store, e.g. `https://<db>.firebaseio.com/`.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Child of the root holding one document per task.
    #[serde(default = "default_collection")]
    pub collection: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            collection: default_collection(),
        }
    }
}

impl StoreConfig {
    /// Create a config pointing at `base_url` with the default collection.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Set the collection name.
    #[must_use]
    pub fn collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = collection.into();
        self
    }
}

fn default_base_url() -> String {
    DEFAULT_STORE_URL.to_string()
}

fn default_collection() -> String {
    DEFAULT_COLLECTION.to_string()
}
