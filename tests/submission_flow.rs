#![cfg(target_arch = "wasm32")]

use stock_forecast_wasm::application::{PredictionService, RequestSequencer};
use stock_forecast_wasm::domain::forecast::{Forecast, ForecastValidationService};
use stock_forecast_wasm::infrastructure::http::{PredictionHttpClient, PredictionRequest};
use stock_forecast_wasm::infrastructure::rendering::ForecastRenderer;
use stock_forecast_wasm::infrastructure::ui::UiNotificationService;

use futures::future::join;
use gloo_timers::future::sleep;
use std::time::Duration;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn forecast(bank: &str, period: &str, points: usize) -> Forecast {
    let dates = (1..=points).map(|d| format!("2024-06-{:02}", d)).collect();
    let prices = (0..points).map(|i| 800.0 + i as f64).collect();
    ForecastValidationService::new()
        .assemble(bank, period, "2024-06-01", 800.0, dates, prices)
        .unwrap()
}

fn mount_canvas(id: &str) {
    let document = web_sys::window().unwrap().document().unwrap();
    if document.get_element_by_id(id).is_some() {
        return;
    }
    let canvas = document.create_element("canvas").unwrap();
    canvas.set_id(id);
    document.body().unwrap().append_child(&canvas).unwrap();
}

fn mount_results_dom() {
    let document = web_sys::window().unwrap().document().unwrap();
    let body = document.body().unwrap();
    for (tag, id, class) in [
        ("div", "result-section", Some("hidden")),
        ("span", "res-date", None),
        ("span", "res-price", None),
        ("button", "predict-btn", None),
    ] {
        if document.get_element_by_id(id).is_some() {
            continue;
        }
        let element = document.create_element(tag).unwrap();
        element.set_id(id);
        if let Some(class) = class {
            element.set_class_name(class);
        }
        body.append_child(&element).unwrap();
    }
}

#[wasm_bindgen_test]
fn rendering_twice_replaces_the_chart() {
    mount_canvas("flow-chart");
    let mut renderer = ForecastRenderer::new("flow-chart", 400, 200);

    renderer.replace(&forecast("SBIN", "month", 5)).unwrap();
    assert!(renderer.has_chart());

    renderer.replace(&forecast("AXISBANK", "year", 40)).unwrap();
    assert!(renderer.has_chart());
    assert_eq!(
        renderer.chart().unwrap().label,
        "AXISBANK Price Forecast (year)"
    );
    // Year policy applied to the live chart
    assert_eq!(renderer.chart().unwrap().style.point_radius, 0.0);
}

#[wasm_bindgen_test(async)]
async fn slow_first_submission_loses_to_the_fast_second() {
    let sequencer = RequestSequencer::new();

    let slow_ticket = sequencer.begin();
    let fast_ticket = sequencer.begin();

    let slow = async {
        sleep(Duration::from_millis(30)).await;
        sequencer.is_current(slow_ticket)
    };
    let fast = async {
        sleep(Duration::from_millis(5)).await;
        sequencer.is_current(fast_ticket)
    };

    let (slow_applies, fast_applies) = join(slow, fast).await;
    assert!(!slow_applies);
    assert!(fast_applies);
}

#[wasm_bindgen_test]
fn show_results_reveals_section_and_fills_slots() {
    mount_results_dom();
    let document = web_sys::window().unwrap().document().unwrap();
    let ui = UiNotificationService::new();

    ui.show_results("2024-05-01", "₹123.40").unwrap();

    let section = document.get_element_by_id("result-section").unwrap();
    assert!(!section.class_list().contains("hidden"));
    assert_eq!(
        document.get_element_by_id("res-date").unwrap().text_content().unwrap(),
        "2024-05-01"
    );
    assert_eq!(
        document.get_element_by_id("res-price").unwrap().text_content().unwrap(),
        "₹123.40"
    );
}

#[wasm_bindgen_test(async)]
async fn failed_submission_leaves_no_chart_and_restores_the_button() {
    mount_results_dom();
    let document = web_sys::window().unwrap().document().unwrap();
    let ui = UiNotificationService::new();

    // Seed the result slots so any accidental write is visible.
    for (id, sentinel) in [("res-date", "stale-date"), ("res-price", "stale-price")] {
        document
            .get_element_by_id(id)
            .unwrap()
            .set_text_content(Some(sentinel));
    }

    // Port 1 is never listening, so the request settles with an error.
    let service = PredictionService::with_client(
        "err-chart",
        PredictionHttpClient::with_base_url("http://127.0.0.1:1".to_string()),
    );
    let request = PredictionRequest {
        bank_name: "SBIN".to_string(),
        date: "2024-06-01".to_string(),
        period: "month".to_string(),
    };

    ui.set_submit_busy(true).unwrap();
    let outcome = service.submit(request).await;
    ui.set_submit_busy(false).unwrap();

    assert!(outcome.is_err());
    assert!(!service.renderer().borrow().has_chart());

    use wasm_bindgen::JsCast;
    let button = document
        .get_element_by_id("predict-btn")
        .unwrap()
        .dyn_into::<web_sys::HtmlButtonElement>()
        .unwrap();
    assert!(!button.disabled());
    assert_eq!(button.text_content().unwrap(), "Get Prediction");

    assert_eq!(
        document.get_element_by_id("res-date").unwrap().text_content().unwrap(),
        "stale-date"
    );
    assert_eq!(
        document.get_element_by_id("res-price").unwrap().text_content().unwrap(),
        "stale-price"
    );
}

#[wasm_bindgen_test]
fn busy_toggle_disables_and_restores_the_button() {
    mount_results_dom();
    let document = web_sys::window().unwrap().document().unwrap();
    let ui = UiNotificationService::new();

    use wasm_bindgen::JsCast;
    let button = document
        .get_element_by_id("predict-btn")
        .unwrap()
        .dyn_into::<web_sys::HtmlButtonElement>()
        .unwrap();

    ui.set_submit_busy(true).unwrap();
    assert!(button.disabled());
    assert_eq!(button.text_content().unwrap(), "Predicting...");

    ui.set_submit_busy(false).unwrap();
    assert!(!button.disabled());
    assert_eq!(button.text_content().unwrap(), "Get Prediction");
}
