//! Disease detection view state.

use crate::context::SessionContext;
use crate::error::{Error, Result};
use crate::guard::InFlight;
use crate::store::PredictionStore;
use crate::types::{decode_envelope, DiseaseResult};
use serde_json::Value;
use std::path::Path;
use tracing::{error, info, warn};

/// Content type for an accepted leaf image, judged by file extension.
///
/// Only `jpg`, `jpeg` and `png` are accepted.
pub fn image_content_type(file_name: &str) -> Result<&'static str> {
    let ext = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("jpg") | Some("jpeg") => Ok("image/jpeg"),
        Some("png") => Ok("image/png"),
        _ => Err(Error::UnsupportedImage(file_name.to_string())),
    }
}

/// An image held in memory, ready to upload as the `file` part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    /// Original file name.
    pub file_name: String,
    /// MIME type derived from the file name.
    pub content_type: &'static str,
    /// Raw file contents.
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    /// Accept `bytes` as an upload if `file_name` has an image extension.
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Result<Self> {
        let file_name = file_name.into();
        let content_type = image_content_type(&file_name)?;
        Ok(Self {
            file_name,
            content_type,
            bytes,
        })
    }
}

/// Selected image, its preview and the last result of the disease view.
///
/// `F` is the front end's file handle: [`ImageUpload`] natively, a browser
/// `File` in the web app.
#[derive(Debug, Clone, PartialEq)]
pub struct DiseaseView<F> {
    image: Option<F>,
    preview: Option<String>,
    result: Option<DiseaseResult>,
    in_flight: InFlight,
}

impl<F> Default for DiseaseView<F> {
    fn default() -> Self {
        Self {
            image: None,
            preview: None,
            result: None,
            in_flight: InFlight::default(),
        }
    }
}

impl<F> DiseaseView<F> {
    /// An empty view.
    pub fn new() -> Self {
        Self::default()
    }

    /// The selected image.
    pub fn image(&self) -> Option<&F> {
        self.image.as_ref()
    }

    /// Preview handle of the selected image.
    pub fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    /// Result currently on display.
    pub fn result(&self) -> Option<&DiseaseResult> {
        self.result.as_ref()
    }

    /// Whether a submission is pending.
    pub fn is_loading(&self) -> bool {
        self.in_flight.is_busy()
    }

    /// Replace the selected image and clear any displayed result.
    ///
    /// Returns the previous preview so the caller can release it.
    pub fn select_image(&mut self, image: F, preview: Option<String>) -> Option<String> {
        self.image = Some(image);
        self.result = None;
        std::mem::replace(&mut self.preview, preview)
    }

    /// Start a submission and return the image to upload.
    pub fn begin_submit(&mut self) -> Result<&F> {
        if self.in_flight.is_busy() {
            return Err(Error::Busy);
        }
        let image = self.image.as_ref().ok_or(Error::MissingImage)?;
        self.in_flight.begin()?;
        info!("Requesting disease detection");
        Ok(image)
    }

    /// Apply the outcome of the request started by [`begin_submit`](Self::begin_submit).
    ///
    /// On success the displayed result is replaced and the response envelope
    /// is cached in `ctx`. On failure nothing changes.
    pub fn complete<S: PredictionStore>(
        &mut self,
        ctx: &SessionContext<S>,
        response: Result<Value>,
    ) -> Result<DiseaseResult> {
        self.in_flight.finish();

        let outcome = response.and_then(|raw| {
            let result: DiseaseResult = decode_envelope(&raw)?;
            Ok((raw, result))
        });
        let (raw, result) = match outcome {
            Ok(ok) => ok,
            Err(e) => {
                error!(error = %e, "Disease detection failed");
                return Err(e);
            }
        };

        if let Err(e) = ctx.record_disease(&raw) {
            warn!(error = %e, "Failed to cache disease result");
        }
        self.result = Some(result.clone());
        Ok(result)
    }

    /// Clear image, preview and result. The cached result is kept.
    ///
    /// Returns the dropped preview so the caller can release it.
    pub fn new_prediction(&mut self) -> Option<String> {
        self.image = None;
        self.result = None;
        self.preview.take()
    }
}
