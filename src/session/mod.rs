//! Native session driving the shared view state
//!
//! [`Assistant`] owns one of each view from `agrovision-core`, the session
//! context that links them, and an [`AgroApi`] implementation. Each method
//! performs the one network round trip the corresponding view needs.

use crate::api::AgroApi;
use crate::types::Result as AppResult;
use agrovision_core::{
    ChatMessage, ChatSession, CropPrediction, CropView, DiseaseResult, DiseaseView, Error,
    HealthStatus, HistoryEntry, ImageUpload, PredictionStore, Result, SessionContext,
};
use chrono::{Local, NaiveDate};
use std::path::Path;
use tracing::info;

/// Result of one chat exchange.
#[derive(Debug, Clone, PartialEq)]
pub struct Exchange {
    /// The assistant message appended to the transcript.
    pub reply: ChatMessage,
    /// Why the backend could not answer, when the reply is the apology.
    pub failure: Option<Error>,
}

/// One user's session across the crop, disease and chat views.
pub struct Assistant<A, S> {
    api: A,
    ctx: SessionContext<S>,
    /// Crop recommendation form and result.
    pub crop: CropView,
    /// Disease detection image and result.
    pub disease: DiseaseView<ImageUpload>,
    /// Chat transcript and history.
    pub chat: ChatSession,
}

impl<A: AgroApi, S: PredictionStore> Assistant<A, S> {
    /// Fresh views over `api` and `store`.
    pub fn new(api: A, store: S) -> Self {
        Self {
            api,
            ctx: SessionContext::new(store),
            crop: CropView::new(),
            disease: DiseaseView::new(),
            chat: ChatSession::new(),
        }
    }

    /// Cached predictions shared by the views.
    pub fn context(&self) -> &SessionContext<S> {
        &self.ctx
    }

    /// Backend client.
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Submit the crop form.
    pub async fn recommend_crops(&mut self) -> Result<CropPrediction> {
        let form = self.crop.begin_submit()?;
        let response = self.api.predict_crop(&form).await;
        self.crop.complete(&self.ctx, response)
    }

    /// Read an image from disk and select it for detection.
    pub fn select_image_file(&mut self, path: &Path) -> AppResult<()> {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();
        agrovision_core::image_content_type(&file_name)?;
        let bytes = std::fs::read(path)?;
        let upload = ImageUpload::new(file_name, bytes)?;
        info!(path = %path.display(), bytes = upload.bytes.len(), "Selected image");
        self.disease
            .select_image(upload, Some(path.display().to_string()));
        Ok(())
    }

    /// Submit the selected image.
    pub async fn detect_disease(&mut self) -> Result<DiseaseResult> {
        let image = self.disease.begin_submit()?.clone();
        let response = self.api.predict_disease(&image).await;
        self.disease.complete(&self.ctx, response)
    }

    /// Send a chat message dated today.
    pub async fn ask(&mut self, input: &str) -> Result<Exchange> {
        self.ask_on(input, Local::now().date_naive()).await
    }

    /// Send a chat message, dating a new history entry `today`.
    ///
    /// Fails only when the message is rejected before sending; a failed
    /// request still appends the apology and is reported in
    /// [`Exchange::failure`].
    pub async fn ask_on(&mut self, input: &str, today: NaiveDate) -> Result<Exchange> {
        let request = self.chat.submit(&self.ctx, input, today)?;
        let response = self.api.chat(&request).await;
        let failure = response.as_ref().err().cloned();
        let reply = self.chat.complete(response.map(|r| r.answer)).clone();
        Ok(Exchange { reply, failure })
    }

    /// Start a new chat, keeping history.
    pub fn new_chat(&mut self) {
        self.chat.reset();
    }

    /// Remove a history entry by position.
    pub fn delete_history(&mut self, index: usize) -> Result<HistoryEntry> {
        self.chat.delete_history(index)
    }

    /// Check that the backend is reachable.
    pub async fn health(&self) -> Result<HealthStatus> {
        self.api.health().await
    }
}
