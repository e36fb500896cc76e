// ============================================================================
// STATE MODULE - Persisted session + shared application handles
// ============================================================================

pub mod session_store;
pub mod app_state;

pub use session_store::SessionStore;
pub use app_state::AppState;
