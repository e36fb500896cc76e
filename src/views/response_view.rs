// ============================================================================
// RESPONSE VIEW - Raw JSON output + status badge
// ============================================================================

use std::rc::Rc;

use serde_json::Value;

use crate::dom::UiPort;
use crate::models::{ApiResponse, DashboardError};
use crate::utils::constants::RESPONSE_PLACEHOLDER;
use crate::views::ids::*;

#[derive(Clone)]
pub struct ResponseView {
    ui: Rc<dyn UiPort>,
}

impl ResponseView {
    pub fn new(ui: Rc<dyn UiPort>) -> Self {
        Self { ui }
    }

    /// Pretty-prints `body` and classifies `status` as success (2xx) or error
    pub fn render(&self, body: &Value, status: u16) {
        let formatted = serde_json::to_string_pretty(body).unwrap_or_else(|_| body.to_string());
        self.ui.set_text(RESPONSE_OUTPUT, &formatted);

        if (200..300).contains(&status) {
            self.ui.set_text(RESPONSE_STATUS, &format!("Success ({})", status));
            self.ui.set_class(RESPONSE_STATUS, "response-status success");
        } else {
            self.ui.set_text(RESPONSE_STATUS, &format!("Error ({})", status));
            self.ui.set_class(RESPONSE_STATUS, "response-status error");
        }

        self.ui.scroll_into_view(RESPONSE_SECTION);
    }

    pub fn render_response(&self, response: &ApiResponse) {
        self.render(&response.body, response.status);
    }

    /// Renders the outcome of an action, errors included, and returns the
    /// status that was shown
    pub fn render_result(&self, result: Result<ApiResponse, DashboardError>) -> u16 {
        let response = result.unwrap_or_else(|err| {
            if let DashboardError::Transport(message) = &err {
                log::error!("❌ [API] {}", message);
            }
            err.into_response()
        });
        self.render_response(&response);
        response.status
    }

    pub fn clear(&self) {
        self.ui.set_text(RESPONSE_OUTPUT, RESPONSE_PLACEHOLDER);
        self.ui.set_text(RESPONSE_STATUS, "");
        self.ui.set_class(RESPONSE_STATUS, "response-status");
    }

    /// Placeholder shown while a slow request is in flight
    pub fn show_pending(&self, text: &str) {
        self.ui.set_text(RESPONSE_OUTPUT, text);
    }
}
