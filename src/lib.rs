// ============================================================================
// SEEDR DASHBOARD - FRONTEND MVVM (PURE RUST + WASM)
// ============================================================================
// - Views: response panel and auth badge, written through the UI port
// - ViewModels: validation + one API call per action
// - Services: HTTP only
// - State: persisted session + shared handles
// - Models: request/response shapes
// ============================================================================

pub mod config;
pub mod models;
pub mod services;
pub mod viewmodels;
pub mod state;
pub mod dom;
pub mod views;
pub mod utils;
pub mod app;

#[cfg(test)]
mod test_support;

use std::cell::RefCell;
use std::str::FromStr;

use wasm_bindgen::prelude::*;
use wasm_logger::Config;

use crate::app::App;
use crate::config::CONFIG;
use crate::models::Action;

thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    if CONFIG.is_logging_enabled() {
        wasm_logger::init(Config::default());
    }
    log::info!("🚀 Seedr Dashboard - Rust + WASM");

    let app = App::new()?;
    app.bind_actions()?;
    app.start_auto_login();

    APP.with(|cell| {
        *cell.borrow_mut() = Some(app);
    });
    Ok(())
}

/// Runs a dashboard action by name (`"listFiles"`, `"deleteTorrent"`...)
/// for pages that wire buttons from JavaScript
#[wasm_bindgen]
pub fn run_action(name: &str) -> Result<(), JsValue> {
    let action = Action::from_str(name)
        .map_err(|_| JsValue::from_str(&format!("Unknown action: {}", name)))?;

    APP.with(|cell| match cell.borrow().as_ref() {
        Some(app) => {
            app.run(action);
            Ok(())
        }
        None => Err(JsValue::from_str("App is not initialized")),
    })
}
