use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::core::FactureError;

/// String key-value persistence used by the sequencer.
///
/// Implementations report their own failures as [`FactureError::Store`].
pub trait ConfigStore: Send + Sync {
    /// Read a value; `None` when the key was never written.
    fn get_config(
        &self,
        key: &str,
    ) -> impl Future<Output = Result<Option<String>, FactureError>> + Send;

    /// Write a value, replacing any previous one.
    fn set_config(
        &self,
        key: &str,
        value: &str,
    ) -> impl Future<Output = Result<(), FactureError>> + Send;
}

impl<S: ConfigStore> ConfigStore for Arc<S> {
    fn get_config(
        &self,
        key: &str,
    ) -> impl Future<Output = Result<Option<String>, FactureError>> + Send {
        (**self).get_config(key)
    }

    fn set_config(
        &self,
        key: &str,
        value: &str,
    ) -> impl Future<Output = Result<(), FactureError>> + Send {
        (**self).set_config(key, value)
    }
}

/// In-memory [`ConfigStore`], for tests and for embedding without a database.
#[derive(Debug, Default)]
pub struct MemoryConfigStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with the given entries.
    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: Mutex::new(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    /// Copy of every entry currently stored.
    pub async fn entries(&self) -> HashMap<String, String> {
        self.entries.lock().await.clone()
    }
}

impl ConfigStore for MemoryConfigStore {
    async fn get_config(&self, key: &str) -> Result<Option<String>, FactureError> {
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn set_config(&self, key: &str, value: &str) -> Result<(), FactureError> {
        self.entries
            .lock()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
