use serde_json::{json, Value};
use thiserror::Error;

/// One HTTP round trip as shown to the user
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// String field of the body, if present and non-empty
    pub fn str_field(&self, key: &str) -> Option<&str> {
        self.body
            .get(key)
            .and_then(Value::as_str)
            .filter(|value| !value.is_empty())
    }

    /// Non-2xx responses become `DashboardError::Api`; the client applies
    /// this to every reply
    pub fn error_for_status(self) -> Result<Self, DashboardError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(DashboardError::Api {
                status: self.status,
                body: self.body,
            })
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DashboardError {
    /// Required input missing, detected before any network call
    #[error("{0}")]
    Validation(String),
    /// Network failure or non-JSON response
    #[error("{0}")]
    Transport(String),
    /// Non-2xx reply, status and body kept as received
    #[error("API error {status}")]
    Api { status: u16, body: Value },
}

impl DashboardError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// Response rendered for this error. API errors pass through verbatim.
    pub fn into_response(self) -> ApiResponse {
        match self {
            Self::Validation(message) => ApiResponse::new(400, json!({ "error": message })),
            Self::Transport(message) => ApiResponse::new(500, json!({ "error": message })),
            Self::Api { status, body } => ApiResponse::new(status, body),
        }
    }
}
