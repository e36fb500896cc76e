// ============================================================================
// DOM MODULE - DOM helpers and the UI port
// ============================================================================

pub mod element;
pub mod builder;
pub mod events;
pub mod ui_port;

pub use element::*;
pub use builder::*;
pub use events::*;
pub use ui_port::{DomUi, InfoEntry, UiPort};
