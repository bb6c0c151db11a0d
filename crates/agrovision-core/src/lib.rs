//! # agrovision-core
//!
//! UI-agnostic state and data model for the AgroVision agriculture assistant.
//!
//! The crate performs no I/O. Each view is a small state machine: the front end
//! calls `begin_submit`/`submit` to get the request to send, performs the HTTP
//! call itself, and hands the outcome back through `complete`. This keeps the
//! browser app and the CLI on exactly the same behaviour.
//!
//! ## Quick Start
//!
//! ```rust
//! use agrovision_core::{CropView, MemoryStore, SessionContext};
//! use serde_json::json;
//!
//! let ctx = SessionContext::new(MemoryStore::new());
//! let mut view = CropView::new();
//!
//! let _body = view.begin_submit().unwrap();
//! // ... POST the body to /api/predict-crop ...
//! let raw = json!({"recommendations": [{"crop": "Millet", "confidence": 87}]});
//! let prediction = view.complete(&ctx, Ok(raw)).unwrap();
//!
//! assert_eq!(prediction.recommendations[0].display_line(), "Millet — 87%");
//! assert!(ctx.cached_crop().is_some());
//! ```
//!
//! ## Modules
//!
//! - [`options`] - Crop form fields and their allowed values
//! - [`types`] - Messages, predictions and wire types
//! - [`store`] / [`context`] - Cached predictions shared between views
//! - [`crop`], [`disease`], [`chat`] - View state machines
//! - [`routes`] - Page paths and navbar labels

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod chat;
pub mod context;
pub mod crop;
pub mod disease;
pub mod error;
pub mod guard;
pub mod options;
pub mod routes;
pub mod store;
pub mod types;

#[cfg(test)]
mod testing;

pub use chat::ChatSession;
pub use context::SessionContext;
pub use crop::CropView;
pub use disease::{image_content_type, DiseaseView, ImageUpload};
pub use error::{Error, Result};
pub use guard::InFlight;
pub use options::{CropFormState, PhRange, RainfallLevel, Season, SoilType, Weather};
pub use routes::Route;
pub use store::{MemoryStore, PredictionStore, CROP_RESULT_KEY, DISEASE_RESULT_KEY};
pub use types::{
    ChatMessage, ChatRequest, ChatResponse, CropPrediction, CropRecommendation, DiseaseResult,
    HealthStatus, HistoryEntry, Role, APOLOGY, GREETING,
};
