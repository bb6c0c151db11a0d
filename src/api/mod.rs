//! Backend API client
//!
//! [`AgroApi`] is the seam between the view logic and the network. The
//! production implementation is [`HttpAgroApi`]; tests substitute mocks.

pub mod http;

pub use http::HttpAgroApi;

use agrovision_core::{ChatRequest, ChatResponse, CropFormState, HealthStatus, ImageUpload, Result};
use async_trait::async_trait;
use serde_json::Value;

/// Prediction, chat and health endpoints of the AgroVision backend.
///
/// Prediction calls return the raw response envelope so it can be cached and
/// forwarded to the chat endpoint unchanged.
#[async_trait]
pub trait AgroApi: Send + Sync {
    /// `POST /api/predict-crop`
    async fn predict_crop(&self, form: &CropFormState) -> Result<Value>;

    /// `POST /api/predict-disease` (multipart, `file` part)
    async fn predict_disease(&self, image: &ImageUpload) -> Result<Value>;

    /// `POST /api/chat`
    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse>;

    /// `GET /healthz`
    async fn health(&self) -> Result<HealthStatus>;
}
