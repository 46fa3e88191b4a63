use leptos::*;
use std::rc::Rc;

use crate::application::{ForecastSummary, PredictionService, SubmissionOutcome};
use crate::domain::forecast::BankSymbol;
use crate::domain::logging::LogComponent;
use crate::infrastructure::http::PredictionRequest;
use crate::log_info;

const CHART_CANVAS_ID: &str = "prediction-chart";

/// Root component of the forecast client
#[component]
pub fn App() -> impl IntoView {
    view! {
        <style>
            {r#"
            .forecast-app {
                font-family: 'SF Pro Display', -apple-system, BlinkMacSystemFont, sans-serif;
                background: linear-gradient(135deg, #312e81 0%, #6d28d9 100%);
                min-height: 100vh;
                padding: 20px;
                color: white;
            }

            .header {
                text-align: center;
                margin-bottom: 20px;
                background: rgba(255, 255, 255, 0.1);
                backdrop-filter: blur(10px);
                padding: 20px;
                border-radius: 15px;
                border: 1px solid rgba(255, 255, 255, 0.2);
            }

            .prediction-form {
                display: flex;
                justify-content: center;
                align-items: flex-end;
                gap: 16px;
                margin-bottom: 20px;
                flex-wrap: wrap;
            }

            .form-field {
                display: flex;
                flex-direction: column;
                gap: 4px;
                font-size: 13px;
            }

            .form-field select,
            .form-field input {
                padding: 8px 10px;
                border-radius: 8px;
                border: 1px solid rgba(255, 255, 255, 0.4);
                background: rgba(255, 255, 255, 0.9);
                color: #1e1b2e;
                font-size: 14px;
            }

            .submit-btn {
                background: #d8b4fe;
                color: #312e81;
                border: none;
                padding: 10px 22px;
                border-radius: 8px;
                font-weight: 700;
                cursor: pointer;
            }

            .submit-btn:disabled {
                opacity: 0.6;
                cursor: wait;
            }

            .result-section {
                text-align: center;
                margin-bottom: 20px;
            }

            .result-values {
                display: flex;
                justify-content: center;
                gap: 40px;
                margin-bottom: 15px;
            }

            .result-item {
                text-align: center;
            }

            .result-value {
                font-size: 24px;
                font-weight: 700;
                font-family: 'Courier New', monospace;
                color: #d8b4fe;
            }

            .result-label {
                font-size: 12px;
                color: #c4b5fd;
                margin-top: 5px;
            }

            .chart-container {
                display: flex;
                flex-direction: column;
                align-items: center;
                gap: 10px;
            }

            .status {
                color: #c4b5fd;
                font-size: 14px;
                text-align: center;
            }

            .hidden {
                display: none;
            }
            "#}
        </style>
        <div class="forecast-app">
            <Header />
            <PredictionPanel />
        </div>
    }
}

/// Static page header
#[component]
fn Header() -> impl IntoView {
    view! {
        <div class="header">
            <h1>"📈 Bank Stock Price Forecast"</h1>
            <p>"Pick a bank, a window and a date to chart the predicted prices"</p>
        </div>
    }
}

/// Form, results area and chart. One submission flow: the form issues a
/// request, the latest settled submission fills the result slots and
/// replaces the chart.
#[component]
fn PredictionPanel() -> impl IntoView {
    let (bank, set_bank) = create_signal("HDFCBANK".to_string());
    let (period, set_period) = create_signal("month".to_string());
    let (date, set_date) = create_signal(String::new());
    let (busy, set_busy) = create_signal(false);
    let (result, set_result) = create_signal::<Option<ForecastSummary>>(None);
    let (status, set_status) = create_signal("Submit the form to request a forecast".to_string());

    let service = Rc::new(PredictionService::new(CHART_CANVAS_ID));

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let request = PredictionRequest {
            bank_name: bank.get_untracked(),
            date: date.get_untracked(),
            period: period.get_untracked(),
        };

        set_busy.set(true);
        set_status.set("Requesting forecast...".to_string());

        let service = Rc::clone(&service);
        spawn_local(async move {
            match service.submit(request).await {
                Ok(SubmissionOutcome::Applied(summary)) => {
                    set_status.set(format!(
                        "Rendered {} points for {} ({})",
                        summary.point_count, summary.bank, summary.period_label
                    ));
                    set_result.set(Some(summary));
                }
                Ok(SubmissionOutcome::Stale) => {
                    log_info!(
                        LogComponent::Presentation("PredictionPanel"),
                        "Superseded submission settled; view unchanged"
                    );
                }
                Err(err) => {
                    service.notify_failure(&err);
                    set_status.set("Prediction failed".to_string());
                }
            }
            // Idle state is restored regardless of the outcome.
            set_busy.set(false);
        });
    };

    view! {
        <form class="prediction-form" on:submit=on_submit>
            <label class="form-field">
                "Bank"
                <select
                    on:change=move |ev| set_bank.set(event_target_value(&ev))
                    prop:value=move || bank.get()
                >
                    {BankSymbol::supported()
                        .iter()
                        .map(|symbol| view! { <option value=*symbol>{*symbol}</option> })
                        .collect_view()}
                </select>
            </label>
            <label class="form-field">
                "Period"
                <select
                    on:change=move |ev| set_period.set(event_target_value(&ev))
                    prop:value=move || period.get()
                >
                    <option value="day">"Day"</option>
                    <option value="month">"Month"</option>
                    <option value="year">"Year"</option>
                </select>
            </label>
            <label class="form-field">
                "Date"
                <input
                    type="date"
                    on:input=move |ev| set_date.set(event_target_value(&ev))
                    prop:value=move || date.get()
                />
            </label>
            <button class="submit-btn" type="submit" prop:disabled=move || busy.get()>
                {move || if busy.get() { "Predicting..." } else { "Get Prediction" }}
            </button>
        </form>

        <div class="result-section" class:hidden=move || result.get().is_none()>
            <div class="result-values">
                <div class="result-item">
                    <div class="result-value">
                        {move || result.get().map(|r| r.target_date).unwrap_or_default()}
                    </div>
                    <div class="result-label">"Target Date"</div>
                </div>
                <div class="result-item">
                    <div class="result-value">
                        {move || result.get().map(|r| r.price_text).unwrap_or_default()}
                    </div>
                    <div class="result-label">"Predicted Price"</div>
                </div>
            </div>
            <div class="chart-container">
                <canvas
                    id=CHART_CANVAS_ID
                    width="800"
                    height="400"
                    style="border: 2px solid #6d28d9; border-radius: 10px; background: #1e1b2e;"
                />
            </div>
        </div>

        <div class="status">{move || status.get()}</div>
    }
}
