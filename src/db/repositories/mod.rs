pub mod job;
pub mod review;
pub mod session;
pub mod user;

use anyhow::{Context, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use std::sync::Arc;

use super::KeyValueStore;

/// A JSON array persisted under one key, read and written whole.
pub(crate) struct Collection<T> {
    backend: Arc<dyn KeyValueStore>,
    key: String,
    _marker: PhantomData<T>,
}

impl<T> Collection<T>
where
    T: Serialize + DeserializeOwned,
{
    pub(crate) fn new(backend: Arc<dyn KeyValueStore>, key: String) -> Self {
        Self {
            backend,
            key,
            _marker: PhantomData,
        }
    }

    pub(crate) fn exists(&self) -> Result<bool> {
        Ok(self.backend.get(&self.key)?.is_some())
    }

    /// Missing key reads as an empty collection.
    pub(crate) fn load(&self) -> Result<Vec<T>> {
        match self.backend.get(&self.key)? {
            Some(raw) => serde_json::from_str(&raw)
                .with_context(|| format!("Corrupt collection under key {}", self.key)),
            None => Ok(Vec::new()),
        }
    }

    pub(crate) fn save(&self, items: &[T]) -> Result<()> {
        let raw = serde_json::to_string(items)
            .with_context(|| format!("Failed to encode collection {}", self.key))?;
        self.backend.set(&self.key, &raw)
    }

    pub(crate) fn append(&self, item: T) -> Result<()> {
        let mut items = self.load()?;
        items.push(item);
        self.save(&items)
    }
}
