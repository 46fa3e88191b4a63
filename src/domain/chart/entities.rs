use super::value_objects::ChartStyle;
use crate::domain::forecast::{Forecast, Price, PricePoint};

/// Domain entity - a line chart built from one validated forecast.
///
/// This is the "chart handle" of the UI: the renderer owns at most one of
/// these at a time and replaces it wholesale on every new forecast.
#[derive(Debug, Clone)]
pub struct ForecastChart {
    pub label: String,
    pub style: ChartStyle,
    pub target: PricePoint,
    points: Vec<PricePoint>,
}

impl ForecastChart {
    pub fn from_forecast(forecast: &Forecast) -> Self {
        Self {
            label: forecast.series_label(),
            style: ChartStyle::for_period(forecast.period),
            target: PricePoint::new(forecast.target_date.clone(), forecast.target_price),
            points: forecast.points().to_vec(),
        }
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Price range padded by 5% on each side so the line never hugs the
    /// canvas edge. A flat series gets a fixed band around its value.
    pub fn padded_price_range(&self) -> (f64, f64) {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for point in &self.points {
            min = min.min(point.price.value());
            max = max.max(point.price.value());
        }
        let span = max - min;
        if span <= f64::EPSILON {
            return (min - 1.0, max + 1.0);
        }
        let padding = span * 0.05;
        (min - padding, max + padding)
    }

    pub fn target_price(&self) -> Price {
        self.target.price
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::forecast::{ForecastValidationService, Price};

    fn chart(period: &str, prices: Vec<f64>) -> ForecastChart {
        let dates = (1..=prices.len()).map(|d| format!("2024-01-{:02}", d)).collect();
        let forecast = ForecastValidationService::new()
            .assemble("ICICIBANK", period, "2024-01-01", prices[0], dates, prices)
            .unwrap();
        ForecastChart::from_forecast(&forecast)
    }

    #[test]
    fn chart_carries_period_style_and_label() {
        let c = chart("year", vec![1000.0, 1010.0, 1020.0]);
        assert_eq!(c.label, "ICICIBANK Price Forecast (year)");
        assert_eq!(c.style.point_radius, 0.0);
        assert_eq!(c.point_count(), 3);
    }

    #[test]
    fn padded_range_extends_beyond_series_extremes() {
        let c = chart("day", vec![100.0, 200.0]);
        let (min, max) = c.padded_price_range();
        assert!(min < 100.0);
        assert!(max > 200.0);
    }

    #[test]
    fn flat_series_gets_a_non_zero_band() {
        let c = chart("day", vec![150.0, 150.0]);
        let (min, max) = c.padded_price_range();
        assert!(max - min >= 2.0);
    }

    #[test]
    fn target_point_is_preserved() {
        let c = chart("month", vec![42.0, 43.0]);
        assert_eq!(c.target_price(), Price::from(42.0));
        assert_eq!(c.target.date, "2024-01-01");
    }
}
