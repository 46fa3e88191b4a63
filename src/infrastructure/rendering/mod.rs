pub mod line_renderer;

pub use line_renderer::LineChartRenderer;

use crate::domain::{
    chart::ForecastChart,
    errors::RenderingError,
    forecast::Forecast,
    logging::{LogComponent, get_logger},
};

/// Owns the live chart handle and the canvas it draws on.
///
/// Invariant: at most one `ForecastChart` is alive at any time. Every new
/// forecast replaces the previous chart wholesale; the displaced handle is
/// dropped before the new one is drawn, so the canvas never shows two
/// overlaid series.
pub struct ForecastRenderer {
    canvas: LineChartRenderer,
    chart: Option<ForecastChart>,
}

impl ForecastRenderer {
    pub fn new(canvas_id: &str, width: u32, height: u32) -> Self {
        Self {
            canvas: LineChartRenderer::new(canvas_id.to_string(), width, height),
            chart: None,
        }
    }

    /// Create-or-replace: build the chart for `forecast`, destroy whatever
    /// chart was live before, then draw the new one.
    pub fn replace(&mut self, forecast: &Forecast) -> Result<(), RenderingError> {
        let chart = ForecastChart::from_forecast(forecast);

        if let Some(old) = self.install(chart) {
            get_logger().debug(
                LogComponent::Infrastructure("ForecastRenderer"),
                &format!("Destroyed previous chart '{}'", old.label),
            );
        }

        if let Some(chart) = &self.chart {
            self.canvas.render(chart)?;
        }
        Ok(())
    }

    /// Swap in a new chart handle, returning the displaced one. Dropping
    /// the returned value destroys the old chart.
    pub fn install(&mut self, chart: ForecastChart) -> Option<ForecastChart> {
        self.chart.replace(chart)
    }

    pub fn has_chart(&self) -> bool {
        self.chart.is_some()
    }

    pub fn chart(&self) -> Option<&ForecastChart> {
        self.chart.as_ref()
    }

    pub fn set_dimensions(&mut self, width: u32, height: u32) {
        self.canvas.set_dimensions(width, height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::forecast::ForecastValidationService;

    fn forecast(bank: &str) -> Forecast {
        ForecastValidationService::new()
            .assemble(
                bank,
                "month",
                "2024-05-01",
                100.0,
                vec!["2024-05-01".to_string(), "2024-05-02".to_string()],
                vec![100.0, 101.0],
            )
            .unwrap()
    }

    #[test]
    fn starts_without_a_chart() {
        let renderer = ForecastRenderer::new("prediction-chart", 800, 400);
        assert!(!renderer.has_chart());
    }

    #[test]
    fn installing_twice_keeps_exactly_one_chart() {
        let mut renderer = ForecastRenderer::new("prediction-chart", 800, 400);

        let first = ForecastChart::from_forecast(&forecast("SBIN"));
        assert!(renderer.install(first).is_none());
        assert!(renderer.has_chart());

        let second = ForecastChart::from_forecast(&forecast("HDFCBANK"));
        let displaced = renderer.install(second);

        // The first chart comes back out; only the second stays live.
        assert_eq!(displaced.unwrap().label, "SBIN Price Forecast (month)");
        assert_eq!(
            renderer.chart().unwrap().label,
            "HDFCBANK Price Forecast (month)"
        );
    }
}
