use crate::domain::{
    errors::{InfrastructureError, NetworkError, ValidationError},
    forecast::{Forecast, ForecastValidationService},
    logging::{LogComponent, get_logger},
};
use gloo::net::http::Request;
use serde::{Deserialize, Serialize};

/// Wire DTO - body of `POST /predict`, field names fixed by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub bank_name: String,
    pub date: String,
    pub period: String,
}

/// Wire DTO - successful `/predict` response, untrusted until validated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub target_date: String,
    pub target_prediction: f64,
    pub dates: Vec<String>,
    pub prices: Vec<f64>,
    pub bank: String,
    pub period: String,
}

impl PredictionResponse {
    /// Validate the raw payload into a domain forecast.
    pub fn into_forecast(self) -> Result<Forecast, ValidationError> {
        ForecastValidationService::new().assemble(
            &self.bank,
            &self.period,
            &self.target_date,
            self.target_prediction,
            self.dates,
            self.prices,
        )
    }
}

/// HTTP client for the prediction backend
#[derive(Clone)]
pub struct PredictionHttpClient {
    base_url: String,
}

impl Default for PredictionHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl PredictionHttpClient {
    /// Default endpoint matches the local uvicorn dev setup.
    pub fn new() -> Self {
        Self { base_url: "http://127.0.0.1:8000".to_string() }
    }

    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url: base_url.trim_end_matches('/').to_string() }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue the single prediction request. Non-2xx statuses, transport
    /// failures and malformed bodies all surface as `NetworkError`.
    pub async fn predict(
        &self,
        request: &PredictionRequest,
    ) -> Result<PredictionResponse, InfrastructureError> {
        let url = format!("{}/predict", self.base_url);

        get_logger().info(
            LogComponent::Infrastructure("PredictionHttpClient"),
            &format!("📡 POST {} for {} ({})", url, request.bank_name, request.period),
        );

        let json_body = serde_json::to_string(request).map_err(|e| {
            InfrastructureError::Network(NetworkError::RequestFailed(format!(
                "Failed to serialize body: {}",
                e
            )))
        })?;

        let response = Request::post(&url)
            .header("Content-Type", "application/json")
            .body(json_body)
            .map_err(|e| {
                InfrastructureError::Network(NetworkError::RequestFailed(format!(
                    "Failed to create request body: {:?}",
                    e
                )))
            })?
            .send()
            .await
            .map_err(|e| {
                InfrastructureError::Network(NetworkError::RequestFailed(format!("{:?}", e)))
            })?;

        if !response.ok() {
            let error = NetworkError::HttpStatus {
                status: response.status(),
                status_text: response.status_text(),
            };
            get_logger().error(
                LogComponent::Infrastructure("PredictionHttpClient"),
                &format!("❌ {}", error),
            );
            return Err(InfrastructureError::Network(error));
        }

        let data = response.json::<PredictionResponse>().await.map_err(|e| {
            InfrastructureError::Network(NetworkError::MalformedBody(format!("{:?}", e)))
        })?;

        get_logger().info(
            LogComponent::Infrastructure("PredictionHttpClient"),
            &format!("✅ Received forecast with {} points", data.prices.len()),
        );

        Ok(data)
    }
}
