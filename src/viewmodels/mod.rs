// ============================================================================
// VIEWMODELS - One per dashboard section
// ============================================================================
// Read inputs through the UI port, validate, call one endpoint, update the
// session and form fields. Rendering happens in the dispatcher.
// ============================================================================

pub mod auth_viewmodel;
pub mod account_viewmodel;
pub mod files_viewmodel;
pub mod torrents_viewmodel;
pub mod player_viewmodel;
pub mod dispatcher;

pub use auth_viewmodel::{AuthViewModel, AutoLoginOutcome};
pub use account_viewmodel::AccountViewModel;
pub use files_viewmodel::FilesViewModel;
pub use torrents_viewmodel::TorrentsViewModel;
pub use player_viewmodel::PlayerViewModel;
pub use dispatcher::{ActionOutcome, Dispatcher};

use crate::dom::UiPort;
use crate::models::{ApiResponse, DashboardError};

pub type ActionResult = Result<ApiResponse, DashboardError>;

/// `Ok(None)` when the user declined the confirmation prompt
pub type ConfirmedResult = Result<Option<ApiResponse>, DashboardError>;

/// Value of a required input; empty means missing
pub(crate) fn required(ui: &dyn UiPort, id: &str, message: &str) -> Result<String, DashboardError> {
    let value = ui.get_field(id);
    if value.is_empty() {
        Err(DashboardError::validation(message))
    } else {
        Ok(value)
    }
}

/// Value of an optional input, `default` when left empty
pub(crate) fn field_or(ui: &dyn UiPort, id: &str, default: &str) -> String {
    let value = ui.get_field(id);
    if value.is_empty() {
        default.to_string()
    } else {
        value
    }
}

/// Whole number from an optional input, `default` when left empty
pub(crate) fn number_or(ui: &dyn UiPort, id: &str, default: u32, message: &str) -> Result<u32, DashboardError> {
    let value = ui.get_field(id);
    if value.is_empty() {
        return Ok(default);
    }
    value.trim().parse().map_err(|_| DashboardError::validation(message))
}

pub(crate) fn clear_fields(ui: &dyn UiPort, ids: &[&str]) {
    for id in ids {
        ui.set_field(id, "");
    }
}
