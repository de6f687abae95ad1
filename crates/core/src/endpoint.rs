//! Resource URLs of the task collection.
//!
//! The store exposes every node of its JSON tree as `<path>.json`:
//! the collection at `{base}/{collection}.json` and each task at
//! `{base}/{collection}/{id}.json`.

use url::Url;

use crate::config::StoreConfig;
use crate::error::{Result, StoreError};
use crate::model::TaskId;

/// Validated base URL plus collection name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreEndpoint {
    base: Url,
    collection: String,
}

impl StoreEndpoint {
    /// Build an endpoint from configuration.
    ///
    /// # Errors
    /// Returns `StoreError::InvalidUrl` if the base URL does not parse, cannot
    /// hold child paths, or the collection name is empty.
    pub fn new(config: &StoreConfig) -> Result<Self> {
        let base = Url::parse(&config.base_url)?;
        if base.cannot_be_a_base() {
            return Err(StoreError::invalid_url(format!(
                "'{}' cannot hold child paths",
                config.base_url
            )));
        }
        let collection = config.collection.trim_matches('/').to_string();
        if collection.is_empty() {
            return Err(StoreError::invalid_url("collection name is empty"));
        }
        Ok(Self { base, collection })
    }

    /// URL of the whole collection.
    ///
    /// # Errors
    /// Returns `StoreError::InvalidUrl` if the path cannot be extended.
    pub fn collection_url(&self) -> Result<Url> {
        self.child(&[format!("{}.json", self.collection)])
    }

    /// URL of a single task document.
    ///
    /// # Errors
    /// Returns `StoreError::InvalidUrl` if the path cannot be extended.
    pub fn record_url(&self, id: &TaskId) -> Result<Url> {
        self.child(&[self.collection.clone(), format!("{id}.json")])
    }

    fn child(&self, segments: &[String]) -> Result<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|()| StoreError::invalid_url(format!("'{}' cannot be a base", self.base)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}
