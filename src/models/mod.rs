pub mod session;
pub mod auth;
pub mod api;
pub mod requests;
pub mod action;

pub use session::{AuthStatus, SessionState, TokenBundle};
pub use auth::{DeviceCodeFlow, DeviceCodeLoginRequest, PasswordLoginRequest, RefreshTokenLoginRequest};
pub use api::{ApiResponse, DashboardError};
pub use requests::*;
pub use action::Action;
