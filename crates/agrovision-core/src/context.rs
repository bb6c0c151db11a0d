//! Shared session context.
//!
//! The crop and disease views publish their last successful responses here and
//! the chat view reads them back. Views receive the context explicitly rather
//! than reaching for a global store.

use crate::error::{Error, Result};
use crate::store::{PredictionStore, CROP_RESULT_KEY, DISEASE_RESULT_KEY};
use crate::types::ChatRequest;
use serde_json::Value;
use tracing::{debug, warn};

/// Read/write access to the cached prediction envelopes.
#[derive(Debug, Clone, Default)]
pub struct SessionContext<S> {
    store: S,
}

impl<S: PredictionStore> SessionContext<S> {
    /// Wrap a storage backend.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Replace the cached crop response with `raw`.
    pub fn record_crop(&self, raw: &Value) -> Result<()> {
        self.write(CROP_RESULT_KEY, raw)
    }

    /// Replace the cached disease response with `raw`.
    pub fn record_disease(&self, raw: &Value) -> Result<()> {
        self.write(DISEASE_RESULT_KEY, raw)
    }

    /// Last crop response, or `None` if absent or unreadable.
    pub fn cached_crop(&self) -> Option<Value> {
        self.read(CROP_RESULT_KEY)
    }

    /// Last disease response, or `None` if absent or unreadable.
    pub fn cached_disease(&self) -> Option<Value> {
        self.read(DISEASE_RESULT_KEY)
    }

    /// Build a chat request carrying whatever predictions are cached.
    pub fn chat_request(&self, question: impl Into<String>) -> ChatRequest {
        ChatRequest {
            question: question.into(),
            crop_result: self.cached_crop(),
            disease_result: self.cached_disease(),
        }
    }

    /// Forget both cached predictions.
    pub fn clear(&self) -> Result<()> {
        self.store.remove(CROP_RESULT_KEY)?;
        self.store.remove(DISEASE_RESULT_KEY)
    }

    fn write(&self, key: &str, raw: &Value) -> Result<()> {
        let text = serde_json::to_string(raw).map_err(|e| Error::Storage(e.to_string()))?;
        self.store.save(key, &text)?;
        debug!(key, bytes = text.len(), "Cached prediction");
        Ok(())
    }

    fn read(&self, key: &str) -> Option<Value> {
        let text = match self.store.load(key) {
            Ok(Some(text)) => text,
            Ok(None) => return None,
            Err(e) => {
                warn!(key, error = %e, "Failed to read cached prediction");
                return None;
            }
        };
        match serde_json::from_str(&text) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(key, error = %e, "Cached prediction is not valid JSON");
                None
            }
        }
    }
}
