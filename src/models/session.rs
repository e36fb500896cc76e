use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ============================================================================
// SESSION MODEL
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthStatus {
    Authenticated,
    #[default]
    Unauthenticated,
}

/// Token bundle as returned by the API under `token`.
/// Unknown fields (token_type, expires_in...) are kept so the stored JSON round-trips.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenBundle {
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TokenBundle {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: None,
            extra: Map::new(),
        }
    }

    pub fn with_refresh_token(mut self, refresh_token: impl Into<String>) -> Self {
        self.refresh_token = Some(refresh_token.into());
        self
    }

    /// A non-empty refresh token makes the login persistent across reloads
    pub fn has_refresh_token(&self) -> bool {
        self.refresh_token
            .as_deref()
            .map(|token| !token.is_empty())
            .unwrap_or(false)
    }

    /// Lenient parse of the `token` field of an auth response
    pub fn from_response(body: &Value) -> Option<Self> {
        let token = body.get("token")?;
        serde_json::from_value(token.clone()).ok()
    }
}

/// Persisted session. `Authenticated` implies a non-empty user id.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionState {
    pub user_id: Option<String>,
    pub auth_status: AuthStatus,
    pub device_code: Option<String>,
    pub token_bundle: Option<TokenBundle>,
    pub remember_me: Option<bool>,
}

impl SessionState {
    /// Authenticated session. An empty user id yields an unauthenticated state.
    pub fn authenticated(user_id: impl Into<String>, token_bundle: Option<TokenBundle>) -> Self {
        let user_id = user_id.into();
        if user_id.is_empty() {
            return Self {
                token_bundle,
                ..Self::default()
            };
        }
        Self {
            user_id: Some(user_id),
            auth_status: AuthStatus::Authenticated,
            token_bundle,
            ..Self::default()
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth_status == AuthStatus::Authenticated
            && self.user_id.as_deref().map(|id| !id.is_empty()).unwrap_or(false)
    }

    pub fn refresh_token(&self) -> Option<&str> {
        self.token_bundle
            .as_ref()
            .and_then(|bundle| bundle.refresh_token.as_deref())
            .filter(|token| !token.is_empty())
    }
}
