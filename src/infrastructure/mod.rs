pub mod http;
pub mod rendering;

/// Browser-backed implementations of the domain logging abstractions
pub mod services {
    use crate::domain::logging::{LogEntry, LogLevel, Logger, TimeProvider, get_time_provider};
    use wasm_bindgen::JsValue;

    /// Logger writing formatted entries to the browser console
    pub struct ConsoleLogger {
        min_level: LogLevel,
    }

    impl ConsoleLogger {
        pub fn new_development() -> Self {
            Self { min_level: LogLevel::Debug }
        }

        pub fn new_production() -> Self {
            Self { min_level: LogLevel::Info }
        }
    }

    impl Logger for ConsoleLogger {
        fn log(&self, entry: LogEntry) {
            if entry.level < self.min_level {
                return;
            }

            let timestamp = get_time_provider().format_timestamp(entry.timestamp);
            let formatted =
                format!("[{}] {} {}: {}", timestamp, entry.level, entry.component, entry.message);
            let js_message = JsValue::from_str(&formatted);

            match entry.level {
                LogLevel::Error => web_sys::console::error_1(&js_message),
                LogLevel::Warn => web_sys::console::warn_1(&js_message),
                _ => web_sys::console::log_1(&js_message),
            }
        }
    }

    /// Time provider backed by the browser clock
    pub struct BrowserTimeProvider;

    impl BrowserTimeProvider {
        pub fn new() -> Self {
            Self
        }
    }

    impl Default for BrowserTimeProvider {
        fn default() -> Self {
            Self::new()
        }
    }

    impl TimeProvider for BrowserTimeProvider {
        fn current_timestamp(&self) -> u64 {
            js_sys::Date::now() as u64
        }

        fn format_timestamp(&self, timestamp: u64) -> String {
            // Seconds within the day are precise enough for console logs
            let seconds = (timestamp / 1000) % 86_400;
            format!("{:02}:{:02}:{:02}.{:03}", seconds / 3600, seconds / 60 % 60, seconds % 60, timestamp % 1000)
        }
    }
}

/// DOM interaction services for the plain-HTML page (separate from the
/// Leptos components, which hold this state in signals)
pub mod ui {
    use crate::domain::{
        errors::PresentationError,
        logging::{LogComponent, get_logger},
    };
    use wasm_bindgen::JsCast;
    use web_sys::{Document, HtmlButtonElement};

    const RESULT_SECTION_ID: &str = "result-section";
    const RESULT_DATE_ID: &str = "res-date";
    const RESULT_PRICE_ID: &str = "res-price";
    const SUBMIT_BUTTON_ID: &str = "predict-btn";

    const BUTTON_BUSY_LABEL: &str = "Predicting...";
    const BUTTON_IDLE_LABEL: &str = "Get Prediction";

    /// Service for updating UI elements without mixing with business logic
    #[derive(Clone)]
    pub struct UiNotificationService;

    impl UiNotificationService {
        pub fn new() -> Self {
            Self
        }

        fn document(&self) -> Result<Document, PresentationError> {
            web_sys::window()
                .and_then(|w| w.document())
                .ok_or(PresentationError::BrowserApiUnavailable("document"))
        }

        /// Toggle the submit button between its busy and idle states.
        /// A missing button is logged, not fatal: the Leptos page renders
        /// its own button and does not use this id.
        pub fn set_submit_busy(&self, busy: bool) -> Result<(), PresentationError> {
            let document = self.document()?;

            let Some(element) = document.get_element_by_id(SUBMIT_BUTTON_ID) else {
                get_logger().warn(
                    LogComponent::Infrastructure("UI"),
                    &format!("Submit button '{}' not found in DOM", SUBMIT_BUTTON_ID),
                );
                return Ok(());
            };

            let label = if busy { BUTTON_BUSY_LABEL } else { BUTTON_IDLE_LABEL };
            element.set_text_content(Some(label));
            if let Ok(button) = element.dyn_into::<HtmlButtonElement>() {
                button.set_disabled(busy);
            }
            Ok(())
        }

        /// Reveal the results area and fill the date and price slots.
        pub fn show_results(
            &self,
            target_date: &str,
            price_text: &str,
        ) -> Result<(), PresentationError> {
            let document = self.document()?;

            let section = document
                .get_element_by_id(RESULT_SECTION_ID)
                .ok_or_else(|| PresentationError::ElementNotFound(RESULT_SECTION_ID.into()))?;
            let _ = section.class_list().remove_1("hidden");

            let date_slot = document
                .get_element_by_id(RESULT_DATE_ID)
                .ok_or_else(|| PresentationError::ElementNotFound(RESULT_DATE_ID.into()))?;
            date_slot.set_text_content(Some(target_date));

            let price_slot = document
                .get_element_by_id(RESULT_PRICE_ID)
                .ok_or_else(|| PresentationError::ElementNotFound(RESULT_PRICE_ID.into()))?;
            price_slot.set_text_content(Some(price_text));

            get_logger().debug(
                LogComponent::Infrastructure("UI"),
                &format!("Results revealed: {} at {}", price_text, target_date),
            );
            Ok(())
        }

        /// Blocking error notification, the single failure surface of the
        /// submission flow.
        pub fn alert_error(&self, message: &str) {
            get_logger().error(LogComponent::Infrastructure("UI"), message);
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(message);
            }
        }
    }

    impl Default for UiNotificationService {
        fn default() -> Self {
            Self::new()
        }
    }
}
