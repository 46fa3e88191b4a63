use crate::application::sequencer::RequestSequencer;
use crate::domain::{
    errors::AppError,
    forecast::Forecast,
    logging::{LogComponent, get_logger},
};
use crate::infrastructure::{
    http::{PredictionHttpClient, PredictionRequest},
    rendering::ForecastRenderer,
    ui::UiNotificationService,
};
use std::cell::RefCell;
use std::rc::Rc;

/// What one submission produced, from the caller's point of view
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    /// The forecast was rendered; the summary fills the text slots.
    Applied(ForecastSummary),
    /// A newer submission superseded this one; nothing was shown.
    Stale,
}

/// Display-ready pieces of a rendered forecast
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastSummary {
    pub bank: String,
    pub period_label: String,
    pub target_date: String,
    pub price_text: String,
    pub point_count: usize,
}

impl ForecastSummary {
    fn from_forecast(forecast: &Forecast) -> Self {
        Self {
            bank: forecast.bank.value().to_string(),
            period_label: forecast.period_label.clone(),
            target_date: forecast.target_date.clone(),
            price_text: forecast.target_price.format_inr(),
            point_count: forecast.point_count(),
        }
    }
}

/// Application service coordinating one submission end to end:
/// ticket, HTTP call, payload validation, chart replacement.
pub struct PredictionService {
    client: PredictionHttpClient,
    renderer: Rc<RefCell<ForecastRenderer>>,
    sequencer: RequestSequencer,
    ui: UiNotificationService,
}

impl PredictionService {
    pub fn new(canvas_id: &str) -> Self {
        Self::with_client(canvas_id, PredictionHttpClient::new())
    }

    pub fn with_client(canvas_id: &str, client: PredictionHttpClient) -> Self {
        Self {
            client,
            renderer: Rc::new(RefCell::new(ForecastRenderer::new(canvas_id, 800, 400))),
            sequencer: RequestSequencer::new(),
            ui: UiNotificationService::new(),
        }
    }

    pub fn renderer(&self) -> Rc<RefCell<ForecastRenderer>> {
        Rc::clone(&self.renderer)
    }

    /// Run one submission. Both success and failure effects are gated on
    /// the ticket still being current when the request settles.
    pub async fn submit(
        &self,
        request: PredictionRequest,
    ) -> Result<SubmissionOutcome, AppError> {
        let ticket = self.sequencer.begin();

        get_logger().info(
            LogComponent::Application("PredictionService"),
            &format!(
                "🚀 Submission #{}: {} / {} / {}",
                self.sequencer.issued_count(),
                request.bank_name,
                request.period,
                request.date
            ),
        );

        match self.client.predict(&request).await {
            Ok(response) => {
                if !self.sequencer.is_current(ticket) {
                    get_logger().info(
                        LogComponent::Application("PredictionService"),
                        "Discarding stale response; a newer submission is in flight",
                    );
                    return Ok(SubmissionOutcome::Stale);
                }

                let forecast = response.into_forecast()?;
                self.renderer.borrow_mut().replace(&forecast)?;

                get_logger().info(
                    LogComponent::Application("PredictionService"),
                    &format!(
                        "✅ Rendered {} points for {}",
                        forecast.point_count(),
                        forecast.bank.value()
                    ),
                );
                Ok(SubmissionOutcome::Applied(ForecastSummary::from_forecast(&forecast)))
            }
            Err(err) => {
                if !self.sequencer.is_current(ticket) {
                    get_logger().info(
                        LogComponent::Application("PredictionService"),
                        "Discarding stale failure; a newer submission is in flight",
                    );
                    return Ok(SubmissionOutcome::Stale);
                }
                Err(err.into())
            }
        }
    }

    /// The single user-facing failure surface: a blocking alert carrying
    /// the underlying message.
    pub fn notify_failure(&self, error: &AppError) {
        self.ui.alert_error(&format!("Failed to get prediction: {}", error));
    }
}
