use crate::domain::{
    chart::ForecastChart,
    errors::RenderingError,
    logging::{LogComponent, get_logger},
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

const BACKGROUND_COLOR: &str = "#1e1b2e";
const LINE_COLOR: &str = "#ffffff";
const FILL_COLOR: &str = "#d8b4fe";
const AXIS_TEXT_COLOR: &str = "#aaaaaa";
const TARGET_COLOR: &str = "#c084fc";

/// Layout parameters shared by every drawing pass
#[derive(Debug, Clone, PartialEq)]
struct ScaleParams {
    padding: f64,
    text_space: f64,
    chart_width: f64,
    chart_height: f64,
    min_price: f64,
    max_price: f64,
}

impl ScaleParams {
    fn new(width: u32, height: u32, price_range: (f64, f64)) -> Self {
        let padding = 50.0;
        let text_space = 80.0;
        Self {
            padding,
            text_space,
            chart_width: width as f64 - padding * 2.0 - text_space,
            chart_height: height as f64 - padding * 2.0,
            min_price: price_range.0,
            max_price: price_range.1,
        }
    }

    fn x_for_index(&self, index: usize, count: usize) -> f64 {
        if count <= 1 {
            return self.padding + self.chart_width / 2.0;
        }
        self.padding + self.chart_width * index as f64 / (count - 1) as f64
    }

    fn y_for_price(&self, price: f64) -> f64 {
        let span = self.max_price - self.min_price;
        // Invert because canvas Y grows downward
        self.padding + (self.max_price - price) / span * self.chart_height
    }

    fn baseline_y(&self) -> f64 {
        self.padding + self.chart_height
    }
}

/// Screen positions of the whole series, computed once per render
fn series_positions(chart: &ForecastChart, params: &ScaleParams) -> Vec<(f64, f64)> {
    let count = chart.point_count();
    chart
        .points()
        .iter()
        .enumerate()
        .map(|(i, point)| (params.x_for_index(i, count), params.y_for_price(point.price.value())))
        .collect()
}

/// Canvas 2D line chart renderer - Infrastructure implementation
pub struct LineChartRenderer {
    canvas_id: String,
    width: u32,
    height: u32,
}

impl LineChartRenderer {
    pub fn new(canvas_id: String, width: u32, height: u32) -> Self {
        Self { canvas_id, width, height }
    }

    pub fn set_dimensions(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    fn get_canvas_context(
        &self,
    ) -> Result<(HtmlCanvasElement, CanvasRenderingContext2d), RenderingError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| RenderingError::CanvasAccessFailed("document unavailable".into()))?;

        let canvas = document
            .get_element_by_id(&self.canvas_id)
            .ok_or_else(|| {
                RenderingError::CanvasAccessFailed(format!(
                    "canvas '{}' not found",
                    self.canvas_id
                ))
            })?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| {
                RenderingError::CanvasAccessFailed(format!(
                    "'{}' is not a canvas element",
                    self.canvas_id
                ))
            })?;

        canvas.set_width(self.width);
        canvas.set_height(self.height);

        let context = canvas
            .get_context("2d")
            .map_err(|_| RenderingError::CanvasAccessFailed("failed to get 2D context".into()))?
            .ok_or_else(|| RenderingError::CanvasAccessFailed("2D context unavailable".into()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| RenderingError::CanvasAccessFailed("failed to cast 2D context".into()))?;

        Ok((canvas, context))
    }

    /// Draw the full chart: filled line, optional point markers, capped
    /// x-axis ticks, price scale and the target price line.
    pub fn render(&self, chart: &ForecastChart) -> Result<(), RenderingError> {
        let (_canvas, context) = self.get_canvas_context()?;

        context.clear_rect(0.0, 0.0, self.width as f64, self.height as f64);
        context.set_fill_style(&JsValue::from(BACKGROUND_COLOR));
        context.fill_rect(0.0, 0.0, self.width as f64, self.height as f64);

        if chart.point_count() == 0 {
            return self.render_no_data_message(&context);
        }

        let params = ScaleParams::new(self.width, self.height, chart.padded_price_range());
        let positions = series_positions(chart, &params);

        self.render_area_fill(&context, &positions, &params);
        self.render_line(&context, &positions, chart.style.line_width);
        if chart.style.draws_points() {
            self.render_point_markers(&context, &positions, chart.style.point_radius)?;
        }
        self.render_x_ticks(&context, chart, &positions, &params)?;
        self.render_price_scale(&context, &params)?;
        self.render_target_line(&context, chart, &params)?;
        self.render_title(&context, &chart.label)?;

        get_logger().debug(
            LogComponent::Infrastructure("LineChartRenderer"),
            &format!("Rendered '{}' with {} points", chart.label, chart.point_count()),
        );

        Ok(())
    }

    fn render_area_fill(
        &self,
        context: &CanvasRenderingContext2d,
        positions: &[(f64, f64)],
        params: &ScaleParams,
    ) {
        context.set_fill_style(&JsValue::from(FILL_COLOR));
        context.set_global_alpha(0.35);
        context.begin_path();
        context.move_to(positions[0].0, params.baseline_y());
        for (x, y) in positions {
            context.line_to(*x, *y);
        }
        if let Some((last_x, _)) = positions.last() {
            context.line_to(*last_x, params.baseline_y());
        }
        context.close_path();
        context.fill();
        context.set_global_alpha(1.0);
    }

    /// Smooth line through the series; quadratic segments through midpoints
    /// give the curved look without a full spline fit.
    fn render_line(
        &self,
        context: &CanvasRenderingContext2d,
        positions: &[(f64, f64)],
        line_width: f64,
    ) {
        context.set_stroke_style(&JsValue::from(LINE_COLOR));
        context.set_line_width(line_width);
        context.begin_path();
        context.move_to(positions[0].0, positions[0].1);

        if positions.len() <= 2 {
            for (x, y) in &positions[1..] {
                context.line_to(*x, *y);
            }
        } else {
            for window in positions.windows(2).skip(1) {
                let (cx, cy) = window[0];
                let mid_x = (window[0].0 + window[1].0) / 2.0;
                let mid_y = (window[0].1 + window[1].1) / 2.0;
                context.quadratic_curve_to(cx, cy, mid_x, mid_y);
            }
            if let Some((x, y)) = positions.last() {
                context.line_to(*x, *y);
            }
        }
        context.stroke();
    }

    fn render_point_markers(
        &self,
        context: &CanvasRenderingContext2d,
        positions: &[(f64, f64)],
        radius: f64,
    ) -> Result<(), RenderingError> {
        context.set_fill_style(&JsValue::from(FILL_COLOR));
        for (x, y) in positions {
            context.begin_path();
            context
                .arc(*x, *y, radius, 0.0, std::f64::consts::TAU)
                .map_err(|e| RenderingError::DrawFailed(format!("{:?}", e)))?;
            context.fill();
        }
        Ok(())
    }

    fn render_x_ticks(
        &self,
        context: &CanvasRenderingContext2d,
        chart: &ForecastChart,
        positions: &[(f64, f64)],
        params: &ScaleParams,
    ) -> Result<(), RenderingError> {
        context.set_fill_style(&JsValue::from(AXIS_TEXT_COLOR));
        context.set_font("11px Arial");

        let label_y = params.baseline_y() + 20.0;
        for index in chart.style.tick_indices(chart.point_count()) {
            let label = &chart.points()[index].date;
            let (x, _) = positions[index];
            context
                .fill_text(label, x - 28.0, label_y)
                .map_err(|e| RenderingError::DrawFailed(format!("{:?}", e)))?;
        }

        context
            .fill_text("Date", params.padding + params.chart_width / 2.0, label_y + 18.0)
            .map_err(|e| RenderingError::DrawFailed(format!("{:?}", e)))?;
        Ok(())
    }

    fn render_price_scale(
        &self,
        context: &CanvasRenderingContext2d,
        params: &ScaleParams,
    ) -> Result<(), RenderingError> {
        context.set_fill_style(&JsValue::from(AXIS_TEXT_COLOR));
        context.set_font("12px Arial");

        let max_text = format!("₹{:.2}", params.max_price);
        context
            .fill_text(&max_text, 4.0, params.padding + 12.0)
            .map_err(|e| RenderingError::DrawFailed(format!("{:?}", e)))?;

        let min_text = format!("₹{:.2}", params.min_price);
        context
            .fill_text(&min_text, 4.0, params.baseline_y())
            .map_err(|e| RenderingError::DrawFailed(format!("{:?}", e)))?;

        context
            .fill_text("Price (INR)", 4.0, params.padding - 12.0)
            .map_err(|e| RenderingError::DrawFailed(format!("{:?}", e)))?;
        Ok(())
    }

    /// Horizontal marker at the predicted target price, labelled on the
    /// right of the plot area.
    fn render_target_line(
        &self,
        context: &CanvasRenderingContext2d,
        chart: &ForecastChart,
        params: &ScaleParams,
    ) -> Result<(), RenderingError> {
        let target = chart.target_price().value();
        if target < params.min_price || target > params.max_price {
            return Ok(());
        }

        let y = params.y_for_price(target);
        context.set_stroke_style(&JsValue::from(TARGET_COLOR));
        context.set_line_width(1.0);
        context.begin_path();
        context.move_to(params.padding, y);
        context.line_to(params.padding + params.chart_width, y);
        context.stroke();

        context.set_fill_style(&JsValue::from(TARGET_COLOR));
        context
            .fill_text(
                &format!("₹{:.2}", target),
                params.padding + params.chart_width + 10.0,
                y + 4.0,
            )
            .map_err(|e| RenderingError::DrawFailed(format!("{:?}", e)))?;
        Ok(())
    }

    fn render_no_data_message(
        &self,
        context: &CanvasRenderingContext2d,
    ) -> Result<(), RenderingError> {
        context.set_fill_style(&JsValue::from(LINE_COLOR));
        context.set_font("16px Arial");
        context
            .fill_text("No forecast data", 50.0, self.height as f64 / 2.0)
            .map_err(|e| RenderingError::DrawFailed(format!("{:?}", e)))?;

        get_logger().warn(
            LogComponent::Infrastructure("LineChartRenderer"),
            "No forecast points to render",
        );
        Ok(())
    }

    fn render_title(
        &self,
        context: &CanvasRenderingContext2d,
        label: &str,
    ) -> Result<(), RenderingError> {
        context.set_fill_style(&JsValue::from(LINE_COLOR));
        context.set_font("14px Arial");
        context
            .fill_text(label, 50.0, 24.0)
            .map_err(|e| RenderingError::DrawFailed(format!("{:?}", e)))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chart::ForecastChart;
    use crate::domain::forecast::ForecastValidationService;

    fn chart(prices: Vec<f64>) -> ForecastChart {
        let dates = (1..=prices.len()).map(|d| format!("2024-03-{:02}", d)).collect();
        let forecast = ForecastValidationService::new()
            .assemble("SBIN", "day", "2024-03-01", prices[0], dates, prices)
            .unwrap();
        ForecastChart::from_forecast(&forecast)
    }

    #[test]
    fn x_positions_are_monotonic_across_the_chart_width() {
        let chart = chart(vec![100.0, 105.0, 102.0, 110.0]);
        let params = ScaleParams::new(800, 400, chart.padded_price_range());
        let positions = series_positions(&chart, &params);

        assert!(positions.windows(2).all(|w| w[0].0 < w[1].0));
        assert_eq!(positions.first().unwrap().0, params.padding);
        assert_eq!(positions.last().unwrap().0, params.padding + params.chart_width);
    }

    #[test]
    fn higher_prices_map_to_smaller_y() {
        let chart = chart(vec![100.0, 200.0]);
        let params = ScaleParams::new(800, 400, chart.padded_price_range());
        let positions = series_positions(&chart, &params);
        assert!(positions[1].1 < positions[0].1);
    }

    #[test]
    fn all_positions_stay_inside_the_plot_area() {
        let chart = chart(vec![10.0, 55.0, 30.0, 99.0, 72.0]);
        let params = ScaleParams::new(800, 400, chart.padded_price_range());
        for (x, y) in series_positions(&chart, &params) {
            assert!(x >= params.padding && x <= params.padding + params.chart_width);
            assert!(y >= params.padding && y <= params.baseline_y());
        }
    }

    #[test]
    fn single_point_is_centered() {
        let chart = chart(vec![500.0]);
        let params = ScaleParams::new(800, 400, chart.padded_price_range());
        let positions = series_positions(&chart, &params);
        assert_eq!(positions[0].0, params.padding + params.chart_width / 2.0);
    }
}
