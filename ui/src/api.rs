//! API client for communicating with the AgroVision backend

use agrovision_core::types::decode_envelope;
use agrovision_core::{ChatRequest, ChatResponse, CropFormState, Error, Result};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use wasm_bindgen::JsValue;
use web_sys::{File, FormData};

/// Backend used when none is set at build time.
pub const DEFAULT_API_BASE: &str = "https://agrovision-ai-z1za.onrender.com";

/// Backend origin, from `AGRO_API_BASE_URL` at build time or the default.
pub fn api_base() -> String {
    option_env!("AGRO_API_BASE_URL")
        .filter(|url| !url.trim().is_empty())
        .unwrap_or(DEFAULT_API_BASE)
        .trim()
        .trim_end_matches('/')
        .to_string()
}

fn network(e: gloo_net::Error) -> Error {
    Error::Transport(e.to_string())
}

fn js(e: JsValue) -> Error {
    Error::Transport(format!("{:?}", e))
}

async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T> {
    if !resp.ok() {
        return Err(Error::Status(resp.status()));
    }
    resp.json::<T>()
        .await
        .map_err(|e| Error::Decode(e.to_string()))
}

/// `POST /api/predict-crop`, returning the raw envelope.
pub async fn predict_crop(base_url: &str, form: &CropFormState) -> Result<Value> {
    let resp = Request::post(&format!("{}/api/predict-crop", base_url))
        .json(form)
        .map_err(network)?
        .send()
        .await
        .map_err(network)?;
    read_json(resp).await
}

/// `POST /api/predict-disease` with the image as the `file` part.
pub async fn predict_disease(base_url: &str, file: &File) -> Result<Value> {
    let body = FormData::new().map_err(js)?;
    body.append_with_blob_and_filename("file", file, &file.name())
        .map_err(js)?;

    // The browser sets the multipart boundary header itself.
    let resp = Request::post(&format!("{}/api/predict-disease", base_url))
        .body(body)
        .map_err(network)?
        .send()
        .await
        .map_err(network)?;
    read_json(resp).await
}

/// `POST /api/chat`
pub async fn chat(base_url: &str, request: &ChatRequest) -> Result<ChatResponse> {
    let resp = Request::post(&format!("{}/api/chat", base_url))
        .json(request)
        .map_err(network)?
        .send()
        .await
        .map_err(network)?;
    let raw: Value = read_json(resp).await?;
    decode_envelope(&raw)
}
