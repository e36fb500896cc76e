pub mod api_client;
pub mod transport;

pub use api_client::ApiClient;
pub use transport::{ApiRequest, GlooTransport, HttpTransport, Method, RequestBody};
