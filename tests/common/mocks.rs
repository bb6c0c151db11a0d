//! Mock implementations for testing.
//!
//! [`MockAgroApi`] stands in for the backend so session logic can be tested
//! without a server. It records every request it receives.

use agrovision::AgroApi;
use agrovision_core::{
    ChatRequest, ChatResponse, CropFormState, Error, HealthStatus, ImageUpload, Result,
};
use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::{json, Value};
use std::sync::Arc;

/// Requests seen by a [`MockAgroApi`].
#[derive(Debug, Default)]
pub struct Recorded {
    pub crop_forms: Vec<CropFormState>,
    pub uploads: Vec<ImageUpload>,
    pub chats: Vec<ChatRequest>,
}

/// Backend double with fixed responses.
///
/// ```
/// let api = MockAgroApi::new()
///     .with_crop(json!({"recommendations": [{"crop": "Millet", "confidence": 87}]}))
///     .with_answer("Plant after the first rains.");
/// ```
#[derive(Clone)]
pub struct MockAgroApi {
    crop: Result<Value>,
    disease: Result<Value>,
    answer: Result<String>,
    recorded: Arc<Mutex<Recorded>>,
}

impl Default for MockAgroApi {
    fn default() -> Self {
        Self::new()
    }
}

impl MockAgroApi {
    /// Every endpoint fails with a transport error until configured.
    pub fn new() -> Self {
        let down = Error::Transport("mock backend not configured".to_string());
        Self {
            crop: Err(down.clone()),
            disease: Err(down.clone()),
            answer: Err(down),
            recorded: Arc::new(Mutex::new(Recorded::default())),
        }
    }

    pub fn with_crop(mut self, raw: Value) -> Self {
        self.crop = Ok(raw);
        self
    }

    pub fn with_disease(mut self, raw: Value) -> Self {
        self.disease = Ok(raw);
        self
    }

    pub fn with_answer(mut self, answer: &str) -> Self {
        self.answer = Ok(answer.to_string());
        self
    }

    pub fn failing_chat(mut self, error: Error) -> Self {
        self.answer = Err(error);
        self
    }

    /// Shared handle to the recorded requests.
    pub fn recorded(&self) -> Arc<Mutex<Recorded>> {
        Arc::clone(&self.recorded)
    }
}

#[async_trait]
impl AgroApi for MockAgroApi {
    async fn predict_crop(&self, form: &CropFormState) -> Result<Value> {
        self.recorded.lock().crop_forms.push(*form);
        self.crop.clone()
    }

    async fn predict_disease(&self, image: &ImageUpload) -> Result<Value> {
        self.recorded.lock().uploads.push(image.clone());
        self.disease.clone()
    }

    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse> {
        self.recorded.lock().chats.push(request.clone());
        self.answer.clone().map(|answer| ChatResponse { answer })
    }

    async fn health(&self) -> Result<HealthStatus> {
        Ok(HealthStatus {
            status: "ok".to_string(),
        })
    }
}

/// Crop response used across tests: Millet 87%, Sorghum 72%.
pub fn millet_response() -> Value {
    json!({
        "recommendations": [
            {"crop": "Millet", "confidence": 87},
            {"crop": "Sorghum", "confidence": 72}
        ]
    })
}

/// Disease response used across tests.
pub fn blight_response() -> Value {
    json!({"disease": "Tomato Early Blight", "confidence": 93.5})
}
