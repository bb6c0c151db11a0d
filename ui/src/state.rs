//! Global application state

use agrovision_core::{
    ChatSession, CropView, DiseaseView, Error, PredictionStore, Result, SessionContext,
};
use gloo_storage::{LocalStorage as BrowserStorage, Storage};
use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;
use web_sys::File;

use crate::api::api_base;

/// Browser local storage holding raw response text under each key.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

fn storage_error(e: impl std::fmt::Debug) -> Error {
    Error::Storage(format!("{:?}", e))
}

impl PredictionStore for LocalStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        BrowserStorage::raw().get_item(key).map_err(storage_error)
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        BrowserStorage::raw().set_item(key, value).map_err(storage_error)
    }

    fn remove(&self, key: &str) -> Result<()> {
        BrowserStorage::raw().remove_item(key).map_err(storage_error)
    }
}

/// Global application state
///
/// View state lives here rather than in the pages so a response that arrives
/// after navigating away still updates the view and the prediction cache.
#[derive(Clone)]
pub struct AppState {
    /// API base URL
    pub api_base: RwSignal<String>,
    /// Cached predictions shared by the crop, disease and chat pages
    pub ctx: SessionContext<LocalStore>,
    /// Crop form and last recommendation
    pub crop: RwSignal<CropView>,
    /// Selected leaf image and last detection; browser `File` handles are not `Send`
    pub disease: RwSignal<DiseaseView<File>, LocalStorage>,
    /// Chat transcript and history
    pub chat: RwSignal<ChatSession>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            api_base: RwSignal::new(api_base()),
            ctx: SessionContext::new(LocalStore),
            crop: RwSignal::new(CropView::new()),
            disease: RwSignal::new_local(DiseaseView::new()),
            chat: RwSignal::new(ChatSession::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
