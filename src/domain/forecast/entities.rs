pub use super::value_objects::{BankSymbol, ForecastPeriod, Price};
use serde::{Deserialize, Serialize};

/// Domain entity - one predicted closing price on a calendar date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: String,
    pub price: Price,
}

impl PricePoint {
    pub fn new(date: String, price: Price) -> Self {
        Self { date, price }
    }
}

/// Domain entity - a validated forecast as returned by the backend
#[derive(Debug, Clone, PartialEq)]
pub struct Forecast {
    pub bank: BankSymbol,
    pub period: ForecastPeriod,
    /// Period string exactly as the backend echoed it, used for labels.
    pub period_label: String,
    pub target_date: String,
    pub target_price: Price,
    points: Vec<PricePoint>,
}

impl Forecast {
    /// Invariant: `points` is non-empty with finite prices; enforced by
    /// the validation service, which is the only constructor path.
    pub(super) fn from_validated_parts(
        bank: BankSymbol,
        period_label: String,
        target_date: String,
        target_price: Price,
        points: Vec<PricePoint>,
    ) -> Self {
        let period = ForecastPeriod::from_wire(&period_label);
        Self { bank, period, period_label, target_date, target_price, points }
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Min and max predicted price across the series.
    pub fn price_range(&self) -> (Price, Price) {
        let mut min = self.points[0].price;
        let mut max = self.points[0].price;
        for point in &self.points {
            if point.price < min {
                min = point.price;
            }
            if point.price > max {
                max = point.price;
            }
        }
        (min, max)
    }

    /// Series label as drawn on the chart.
    pub fn series_label(&self) -> String {
        format!("{} Price Forecast ({})", self.bank.value(), self.period_label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forecast(prices: &[f64]) -> Forecast {
        let points = prices
            .iter()
            .enumerate()
            .map(|(i, p)| PricePoint::new(format!("2024-05-{:02}", i + 1), Price::from(*p)))
            .collect();
        Forecast::from_validated_parts(
            BankSymbol::from("SBIN"),
            "month".to_string(),
            "2024-05-01".to_string(),
            Price::from(prices[0]),
            points,
        )
    }

    #[test]
    fn price_range_spans_min_and_max() {
        let f = forecast(&[810.0, 795.5, 820.25, 801.0]);
        let (min, max) = f.price_range();
        assert_eq!(min.value(), 795.5);
        assert_eq!(max.value(), 820.25);
    }

    #[test]
    fn series_label_includes_bank_and_period() {
        let f = forecast(&[810.0]);
        assert_eq!(f.series_label(), "SBIN Price Forecast (month)");
    }
}
