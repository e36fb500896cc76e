/// API base path
/// Configured at compile time:
/// - Default: /api/v1 (dashboard served by the API itself)
/// - Override with SEEDR_API_BASE (e.g. http://localhost:8000/api/v1)
pub const API_BASE: &str = match option_env!("SEEDR_API_BASE") {
    Some(url) => url,
    None => "/api/v1",
};

/// User id sent when nothing is stored
pub const DEFAULT_USER_ID: &str = "default";

/// localStorage keys
pub const STORAGE_KEY_USER_ID: &str = "seedr_user_id";
pub const STORAGE_KEY_AUTH_STATUS: &str = "seedr_auth_status";
pub const STORAGE_KEY_DEVICE_CODE: &str = "seedr_device_code";
pub const STORAGE_KEY_TOKEN_DATA: &str = "seedr_token_data";
pub const STORAGE_KEY_REMEMBER_ME: &str = "seedr_remember_me";

/// Value stored under STORAGE_KEY_AUTH_STATUS when logged in
pub const AUTH_STATUS_AUTHENTICATED: &str = "authenticated";

pub const RESPONSE_PLACEHOLDER: &str = "No response yet. Try an API call!";
pub const LIST_ALL_PENDING: &str = "Traversing all folders... this might take a moment...";
pub const SESSION_RESTORED_TEXT: &str = "✓ Session Restored";
pub const NOT_AUTHENTICATED_TEXT: &str = "Not Authenticated";

pub const ARCHIVE_READY_TIP: &str = "⚡ Download link ready! NOTE: If you get a 404 error, wait 10-15 seconds for Seedr to finish zipping, then click the link again.";

pub const ADD_AND_DOWNLOAD_PENDING: &str = "Adding torrent and waiting for download links...";
/// Server-side wait limits used when the inputs are left empty
pub const DEFAULT_MAX_WAIT_SECONDS: u32 = 300;
pub const DEFAULT_POLL_INTERVAL_SECONDS: u32 = 5;

/// Folder used when the folder-id input is left empty
pub const ROOT_FOLDER_ID: &str = "0";
/// Torrent destination used when the folder-id input is left empty
pub const DEFAULT_TORRENT_FOLDER_ID: &str = "-1";
