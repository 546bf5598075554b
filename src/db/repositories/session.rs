use anyhow::Result;
use std::sync::Arc;
use tracing::debug;

use crate::db::KeyValueStore;

/// The single persisted "logged in as" pointer.
pub struct SessionRepository {
    backend: Arc<dyn KeyValueStore>,
    key: String,
}

impl SessionRepository {
    pub(crate) fn new(backend: Arc<dyn KeyValueStore>, key: String) -> Self {
        Self { backend, key }
    }

    pub fn get(&self) -> Result<Option<String>> {
        Ok(self
            .backend
            .get(&self.key)?
            .filter(|id| !id.is_empty()))
    }

    pub fn set(&self, id: Option<&str>) -> Result<()> {
        match id {
            Some(id) if !id.is_empty() => {
                debug!(id, "Session set");
                self.backend.set(&self.key, id)
            }
            _ => {
                debug!("Session cleared");
                self.backend.remove(&self.key)
            }
        }
    }
}
