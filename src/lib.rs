use wasm_bindgen::prelude::*;

pub mod app;
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

use crate::domain::logging::{LogComponent, get_logger};

/// Initialize logging, panic reporting and mount the Leptos app.
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let time_provider = Box::new(infrastructure::services::BrowserTimeProvider::new());
    domain::logging::init_time_provider(time_provider);

    let console_logger = Box::new(infrastructure::services::ConsoleLogger::new_development());
    domain::logging::init_logger(console_logger);

    get_logger().info(
        LogComponent::Presentation("Initialize"),
        "🚀 Forecast client initialized",
    );

    leptos::mount_to_body(app::App);
}
