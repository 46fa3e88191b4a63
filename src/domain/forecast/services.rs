use crate::domain::errors::ValidationError;
use crate::domain::forecast::{BankSymbol, Forecast, Price, PricePoint};

/// Domain service that turns a raw prediction payload into a `Forecast`.
///
/// The backend is trusted for semantics but not for shape: a payload with
/// mismatched series lengths, an empty series or non-finite prices is
/// rejected here instead of producing a garbled chart.
pub struct ForecastValidationService;

impl ForecastValidationService {
    pub fn new() -> Self {
        Self
    }

    pub fn assemble(
        &self,
        bank: &str,
        period: &str,
        target_date: &str,
        target_prediction: f64,
        dates: Vec<String>,
        prices: Vec<f64>,
    ) -> Result<Forecast, ValidationError> {
        if bank.is_empty() {
            return Err(ValidationError::MissingField("bank"));
        }
        if target_date.is_empty() {
            return Err(ValidationError::MissingField("target_date"));
        }
        if dates.len() != prices.len() {
            return Err(ValidationError::SeriesLengthMismatch {
                dates: dates.len(),
                prices: prices.len(),
            });
        }
        if dates.is_empty() {
            return Err(ValidationError::EmptySeries);
        }
        if !target_prediction.is_finite() {
            return Err(ValidationError::NonFinitePrice { index: 0 });
        }
        if let Some(index) = prices.iter().position(|p| !p.is_finite()) {
            return Err(ValidationError::NonFinitePrice { index });
        }

        let points = dates
            .into_iter()
            .zip(prices)
            .map(|(date, price)| PricePoint::new(date, Price::from(price)))
            .collect();

        Ok(Forecast::from_validated_parts(
            BankSymbol::from(bank),
            period.to_string(),
            target_date.to_string(),
            Price::from(target_prediction),
            points,
        ))
    }
}

impl Default for ForecastValidationService {
    fn default() -> Self {
        Self::new()
    }
}
