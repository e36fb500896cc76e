pub mod ids;
pub mod response_view;
pub mod auth_status_view;

pub use response_view::ResponseView;
pub use auth_status_view::AuthStatusView;
