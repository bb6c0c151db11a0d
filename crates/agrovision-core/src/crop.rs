//! Crop recommendation view state.

use crate::context::SessionContext;
use crate::error::Result;
use crate::guard::InFlight;
use crate::options::CropFormState;
use crate::store::PredictionStore;
use crate::types::{decode_envelope, CropPrediction};
use serde_json::Value;
use tracing::{error, info, warn};

/// Form, last prediction and request status of the crop view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CropView {
    /// Current form values.
    pub form: CropFormState,
    prediction: Option<CropPrediction>,
    in_flight: InFlight,
}

impl CropView {
    /// A view with the default form and no prediction.
    pub fn new() -> Self {
        Self::default()
    }

    /// Prediction currently on display.
    pub fn prediction(&self) -> Option<&CropPrediction> {
        self.prediction.as_ref()
    }

    /// Whether a submission is pending.
    pub fn is_loading(&self) -> bool {
        self.in_flight.is_busy()
    }

    /// Start a submission and return the request body to send.
    pub fn begin_submit(&mut self) -> Result<CropFormState> {
        self.in_flight.begin()?;
        info!(form = ?self.form, "Requesting crop recommendation");
        Ok(self.form)
    }

    /// Apply the outcome of the request started by [`begin_submit`](Self::begin_submit).
    ///
    /// On success the displayed prediction is replaced and the full response
    /// envelope is cached in `ctx`. On failure nothing changes.
    pub fn complete<S: PredictionStore>(
        &mut self,
        ctx: &SessionContext<S>,
        response: Result<Value>,
    ) -> Result<CropPrediction> {
        self.in_flight.finish();

        let outcome = response.and_then(|raw| {
            let prediction: CropPrediction = decode_envelope(&raw)?;
            Ok((raw, prediction))
        });
        let (raw, prediction) = match outcome {
            Ok(ok) => ok,
            Err(e) => {
                error!(error = %e, "Crop recommendation failed");
                return Err(e);
            }
        };

        if let Err(e) = ctx.record_crop(&raw) {
            warn!(error = %e, "Failed to cache crop result");
        }
        self.prediction = Some(prediction.clone());
        Ok(prediction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::options::{Season, SoilType};
    use crate::store::{MemoryStore, CROP_RESULT_KEY};
    use crate::testing::{CountingStore, FailingStore};
    use serde_json::json;

    fn millet() -> Value {
        json!({"recommendations": [{"crop": "Millet", "confidence": 87}]})
    }

    #[test]
    fn test_sandy_summer_scenario() {
        let ctx = SessionContext::new(MemoryStore::new());
        let mut view = CropView::new();
        view.form.soil_type = SoilType::Sandy;
        view.form.season = Season::Summer;

        let body = view.begin_submit().unwrap();
        assert_eq!(body.soil_type, SoilType::Sandy);
        assert!(view.is_loading());

        let prediction = view.complete(&ctx, Ok(millet())).unwrap();
        let lines: Vec<String> = prediction.recommendations.iter().map(|r| r.display_line()).collect();
        assert_eq!(lines, vec!["Millet — 87%"]);
        assert!(!view.is_loading());
        assert_eq!(view.prediction(), Some(&prediction));

        let cached = ctx.store().load(CROP_RESULT_KEY).unwrap().unwrap();
        assert_eq!(serde_json::from_str::<Value>(&cached).unwrap(), millet());
    }

    #[test]
    fn test_one_write_on_success_none_on_failure() {
        let ctx = SessionContext::new(CountingStore::default());
        let mut view = CropView::new();

        view.begin_submit().unwrap();
        view.complete(&ctx, Ok(millet())).unwrap();
        assert_eq!(ctx.store().saves.get(), 1);

        view.begin_submit().unwrap();
        let err = view
            .complete(&ctx, Err(Error::Transport("timed out".to_string())))
            .unwrap_err();
        assert!(matches!(err, Error::Transport(_)));
        assert_eq!(ctx.store().saves.get(), 1);

        view.begin_submit().unwrap();
        view.complete(&ctx, Ok(json!({"unexpected": true}))).unwrap_err();
        assert_eq!(ctx.store().saves.get(), 1);
    }

    #[test]
    fn test_failure_keeps_previous_prediction() {
        let ctx = SessionContext::new(MemoryStore::new());
        let mut view = CropView::new();
        view.begin_submit().unwrap();
        let first = view.complete(&ctx, Ok(millet())).unwrap();

        view.begin_submit().unwrap();
        let err = view
            .complete(&ctx, Ok(json!({"error": "Invalid input value provided"})))
            .unwrap_err();

        assert_eq!(err, Error::Backend("Invalid input value provided".to_string()));
        assert_eq!(view.prediction(), Some(&first));
    }

    #[test]
    fn test_concurrent_submission_rejected() {
        let mut view = CropView::new();
        view.begin_submit().unwrap();
        assert_eq!(view.begin_submit(), Err(Error::Busy));
    }

    #[test]
    fn test_late_completion_caches_through_cloned_context() {
        // The front end hands a clone of the context to the request task and
        // may have left the page before the response arrives.
        let ctx = SessionContext::new(MemoryStore::new());
        let mut view = CropView::new();
        view.begin_submit().unwrap();

        let task_ctx = ctx.clone();
        view.complete(&task_ctx, Ok(millet())).unwrap();
        drop(task_ctx);

        assert_eq!(ctx.cached_crop(), Some(millet()));
        assert!(view.prediction().is_some());
        assert!(!view.is_loading());
    }

    #[test]
    fn test_cache_failure_still_displays() {
        let ctx = SessionContext::new(FailingStore);
        let mut view = CropView::new();
        view.begin_submit().unwrap();
        assert!(view.complete(&ctx, Ok(millet())).is_ok());
        assert!(view.prediction().is_some());
    }
}
