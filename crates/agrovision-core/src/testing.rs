//! Store doubles for unit tests.

use crate::error::{Error, Result};
use crate::store::{MemoryStore, PredictionStore};
use std::cell::Cell;

/// Store whose every operation fails.
pub(crate) struct FailingStore;

impl PredictionStore for FailingStore {
    fn load(&self, _key: &str) -> Result<Option<String>> {
        Err(Error::Storage("quota exceeded".to_string()))
    }

    fn save(&self, _key: &str, _value: &str) -> Result<()> {
        Err(Error::Storage("quota exceeded".to_string()))
    }

    fn remove(&self, _key: &str) -> Result<()> {
        Err(Error::Storage("quota exceeded".to_string()))
    }
}

/// Memory store that counts writes.
#[derive(Default)]
pub(crate) struct CountingStore {
    pub inner: MemoryStore,
    pub saves: Cell<usize>,
}

impl PredictionStore for CountingStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        self.inner.load(key)
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        self.saves.set(self.saves.get() + 1);
        self.inner.save(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.inner.remove(key)
    }
}
