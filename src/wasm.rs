use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Event;

use crate::config::ThemeConfig;
use crate::controller::ThemeController;
use crate::error::{SurfaceError, ThemeError};
use crate::web::{LocalStorage, WebDocument};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let config = ThemeConfig::default();
    if let Err(e) = console_log::init_with_level(config.log_level.to_level()) {
        web_sys::console::log_1(&format!("Logger already initialized: {}", e).into());
    }

    if let Err(e) = install(config) {
        log::error!("Theme controller unavailable: {}", e);
    }
}

/// Build the controller and run `initialize` once the DOM is ready.
fn install(config: ThemeConfig) -> Result<(), ThemeError> {
    let store = LocalStorage::open()?;
    let document = WebDocument::current()?;
    let page = document.document().clone();
    let controller = ThemeController::with_config(config, store, document);

    // The module may finish loading after DOMContentLoaded has already fired.
    if page.ready_state() != "loading" {
        run_initialize(&controller);
        return Ok(());
    }

    let onready = Closure::once(move |_event: Event| {
        run_initialize(&controller);
    });
    page.add_event_listener_with_callback("DOMContentLoaded", onready.as_ref().unchecked_ref())
        .map_err(|e| {
            SurfaceError::Backend(format!("Failed to attach DOMContentLoaded handler: {:?}", e))
        })?;
    onready.forget();
    Ok(())
}

fn run_initialize(controller: &ThemeController<LocalStorage, WebDocument>) {
    if let Err(e) = controller.initialize() {
        log::error!("Failed to apply theme: {}", e);
    }
}
