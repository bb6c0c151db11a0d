//! Key-value storage for the last prediction responses.
//!
//! The browser front end backs this with local storage, the CLI with a JSON
//! file, and tests with [`MemoryStore`]. Values are raw JSON text.

use crate::error::Result;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Key holding the last crop recommendation response.
pub const CROP_RESULT_KEY: &str = "agro_last_crop_result";

/// Key holding the last disease detection response.
pub const DISEASE_RESULT_KEY: &str = "agro_last_disease_result";

/// Persistent string storage addressed by key.
pub trait PredictionStore {
    /// Read the value under `key`, `None` if never written.
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the value under `key`.
    fn save(&self, key: &str, value: &str) -> Result<()>;

    /// Delete the value under `key`. Missing keys are not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

/// Process-local store. Clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently held.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl PredictionStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        self.entries.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.write().remove(key);
        Ok(())
    }
}
