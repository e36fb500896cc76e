use serde::{Deserialize, Serialize};

/// Response of POST /auth/device-code
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct DeviceCodeFlow {
    pub device_code: String,
    #[serde(default)]
    pub user_code: String,
    #[serde(default, alias = "verification_uri")]
    pub verification_url: String,
    #[serde(default)]
    pub expires_in: Option<u64>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct PasswordLoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct DeviceCodeLoginRequest {
    pub device_code: String,
}

/// `user_id` is only sent by the automatic session restore
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct RefreshTokenLoginRequest {
    pub refresh_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}
