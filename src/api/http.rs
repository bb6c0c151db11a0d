//! reqwest implementation of [`AgroApi`]

use super::AgroApi;
use crate::utils::config::ApiConfig;
use agrovision_core::{
    ChatRequest, ChatResponse, CropFormState, Error, HealthStatus, ImageUpload, Result,
};
use agrovision_core::types::decode_envelope;
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument};

/// HTTP client bound to one backend origin.
#[derive(Debug, Clone)]
pub struct HttpAgroApi {
    client: Client,
    base_url: String,
}

impl HttpAgroApi {
    /// Client for `base_url` with no request timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Client built from the `[api]` section of the configuration.
    pub fn from_config(config: &ApiConfig) -> crate::types::Result<Self> {
        let mut builder = Client::builder().user_agent(concat!("agrovision/", env!("CARGO_PKG_VERSION")));
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Origin requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn transport(e: reqwest::Error) -> Error {
    Error::Transport(e.to_string())
}

async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T> {
    let status = resp.status();
    if !status.is_success() {
        debug!(%status, "Backend returned an error status");
        return Err(Error::Status(status.as_u16()));
    }
    resp.json::<T>()
        .await
        .map_err(|e| Error::Decode(e.to_string()))
}

#[async_trait]
impl AgroApi for HttpAgroApi {
    #[instrument(skip(self, form), fields(base = %self.base_url))]
    async fn predict_crop(&self, form: &CropFormState) -> Result<Value> {
        let resp = self
            .client
            .post(self.url("/api/predict-crop"))
            .json(form)
            .send()
            .await
            .map_err(transport)?;
        read_json(resp).await
    }

    #[instrument(skip(self, image), fields(base = %self.base_url, file = %image.file_name))]
    async fn predict_disease(&self, image: &ImageUpload) -> Result<Value> {
        let part = Part::bytes(image.bytes.clone())
            .file_name(image.file_name.clone())
            .mime_str(image.content_type)
            .map_err(transport)?;
        let resp = self
            .client
            .post(self.url("/api/predict-disease"))
            .multipart(Form::new().part("file", part))
            .send()
            .await
            .map_err(transport)?;
        read_json(resp).await
    }

    #[instrument(skip(self, request), fields(base = %self.base_url))]
    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse> {
        let resp = self
            .client
            .post(self.url("/api/chat"))
            .json(request)
            .send()
            .await
            .map_err(transport)?;
        let raw: Value = read_json(resp).await?;
        decode_envelope(&raw)
    }

    async fn health(&self) -> Result<HealthStatus> {
        let resp = self
            .client
            .get(self.url("/healthz"))
            .send()
            .await
            .map_err(transport)?;
        read_json(resp).await
    }
}
