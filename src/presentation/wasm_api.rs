use js_sys::Promise;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

use crate::application::{PredictionService, SubmissionOutcome};
use crate::domain::logging::LogComponent;
use crate::infrastructure::http::{PredictionHttpClient, PredictionRequest};
use crate::infrastructure::ui::UiNotificationService;
use crate::log_warn;

/// WASM API for driving the submission flow from a plain HTML page.
/// Minimal logic - only a bridge to the application layer.
#[wasm_bindgen]
pub struct PredictionFormApi {
    service: Rc<PredictionService>,
    ui: UiNotificationService,
}

#[wasm_bindgen]
impl PredictionFormApi {
    /// Create an API bound to the canvas the chart draws on.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: String) -> Self {
        Self {
            service: Rc::new(PredictionService::new(&canvas_id)),
            ui: UiNotificationService::new(),
        }
    }

    /// Create an API pointing at a non-default backend address.
    #[wasm_bindgen(js_name = withBaseUrl)]
    pub fn with_base_url(canvas_id: String, base_url: String) -> Self {
        let client = PredictionHttpClient::with_base_url(base_url);
        Self {
            service: Rc::new(PredictionService::with_client(&canvas_id, client)),
            ui: UiNotificationService::new(),
        }
    }

    /// Submit one prediction request. Mirrors the form contract: the
    /// button goes busy for the lifetime of the request and is restored
    /// regardless of the outcome; failures raise a blocking alert.
    ///
    /// Resolves to "applied" or "stale"; rejects with the error message.
    pub fn submit(&self, bank: String, date: String, period: String) -> Promise {
        let service = Rc::clone(&self.service);
        let ui = self.ui.clone();

        future_to_promise(async move {
            let request = PredictionRequest { bank_name: bank, date, period };

            if let Err(err) = ui.set_submit_busy(true) {
                log_warn!(
                    LogComponent::Presentation("PredictionFormApi"),
                    "Could not enter busy state: {}",
                    err
                );
            }

            let outcome = service.submit(request).await;

            let result = match outcome {
                Ok(SubmissionOutcome::Applied(summary)) => {
                    match ui.show_results(&summary.target_date, &summary.price_text) {
                        Ok(()) => Ok(JsValue::from_str("applied")),
                        Err(err) => Err(JsValue::from_str(&err.to_string())),
                    }
                }
                Ok(SubmissionOutcome::Stale) => Ok(JsValue::from_str("stale")),
                Err(err) => {
                    service.notify_failure(&err);
                    Err(JsValue::from_str(&err.to_string()))
                }
            };

            // Idle state is restored unconditionally.
            if let Err(err) = ui.set_submit_busy(false) {
                log_warn!(
                    LogComponent::Presentation("PredictionFormApi"),
                    "Could not restore idle state: {}",
                    err
                );
            }

            result
        })
    }

    /// Whether a chart is currently rendered.
    #[wasm_bindgen(js_name = hasChart)]
    pub fn has_chart(&self) -> bool {
        self.service.renderer().borrow().has_chart()
    }
}
