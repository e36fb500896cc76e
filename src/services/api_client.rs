// ============================================================================
// API CLIENT - HTTP only (stateless)
// ============================================================================
// No business logic: one method per endpoint. 2xx responses come back as
// `ApiResponse`, any other status as `DashboardError::Api` with the body
// untouched.
// ============================================================================

use std::rc::Rc;

use crate::models::*;
use crate::services::transport::{ApiRequest, HttpTransport};

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    transport: Rc<dyn HttpTransport>,
}

type ApiResult = Result<ApiResponse, DashboardError>;

impl ApiClient {
    pub fn new(base_url: impl Into<String>, transport: Rc<dyn HttpTransport>) -> Self {
        Self {
            base_url: base_url.into(),
            transport,
        }
    }

    async fn execute(&self, request: ApiRequest) -> ApiResult {
        log::debug!("🌐 [API] {:?} {}", request.method, request.path);
        let response = self.transport.send(&self.base_url, request).await?;
        if !response.is_success() {
            log::warn!("⚠️ [API] HTTP {}", response.status);
        }
        response.error_for_status()
    }

    // ------------------------------------------------------------------------
    // Auth
    // ------------------------------------------------------------------------

    pub async fn request_device_code(&self) -> ApiResult {
        self.execute(ApiRequest::post("/auth/device-code")).await
    }

    pub async fn login_with_device_code(&self, device_code: &str) -> ApiResult {
        let body = DeviceCodeLoginRequest {
            device_code: device_code.to_string(),
        };
        self.execute(ApiRequest::post("/auth/login/device-code").json(&body)?).await
    }

    pub async fn login_with_password(&self, username: &str, password: &str) -> ApiResult {
        log::info!("🔐 [API] Password login for {}", username);
        let body = PasswordLoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        self.execute(ApiRequest::post("/auth/login/password").json(&body)?).await
    }

    pub async fn login_with_refresh_token(&self, refresh_token: &str, user_id: Option<&str>) -> ApiResult {
        let body = RefreshTokenLoginRequest {
            refresh_token: refresh_token.to_string(),
            user_id: user_id.map(str::to_string),
        };
        self.execute(ApiRequest::post("/auth/login/refresh-token").json(&body)?).await
    }

    pub async fn refresh_access_token(&self, user_id: &str) -> ApiResult {
        self.execute(ApiRequest::post("/auth/refresh").query("user_id", user_id)).await
    }

    pub async fn logout(&self, user_id: &str) -> ApiResult {
        self.execute(ApiRequest::post("/auth/logout").query("user_id", user_id)).await
    }

    // ------------------------------------------------------------------------
    // Account
    // ------------------------------------------------------------------------

    pub async fn get_settings(&self, user_id: &str) -> ApiResult {
        self.execute(ApiRequest::get("/account/settings").query("user_id", user_id)).await
    }

    pub async fn get_memory_bandwidth(&self, user_id: &str) -> ApiResult {
        self.execute(ApiRequest::get("/account/memory-bandwidth").query("user_id", user_id)).await
    }

    pub async fn get_devices(&self, user_id: &str) -> ApiResult {
        self.execute(ApiRequest::get("/account/devices").query("user_id", user_id)).await
    }

    pub async fn list_wishlist(&self, user_id: &str) -> ApiResult {
        self.execute(ApiRequest::get("/account/list_wishlist").query("user_id", user_id)).await
    }

    pub async fn change_name(&self, user_id: &str, body: &ChangeNameRequest) -> ApiResult {
        self.execute(ApiRequest::put("/account/name").query("user_id", user_id).json(body)?).await
    }

    pub async fn change_password(&self, user_id: &str, body: &ChangePasswordRequest) -> ApiResult {
        self.execute(ApiRequest::put("/account/password").query("user_id", user_id).json(body)?).await
    }

    // ------------------------------------------------------------------------
    // Files & folders
    // ------------------------------------------------------------------------

    pub async fn list_folder(&self, user_id: &str, folder_id: &str) -> ApiResult {
        let request = ApiRequest::get("/files/list")
            .query("folder_id", folder_id)
            .query("user_id", user_id);
        self.execute(request).await
    }

    pub async fn list_all_files(&self, user_id: &str) -> ApiResult {
        self.execute(ApiRequest::get("/files/list-all").query("user_id", user_id)).await
    }

    pub async fn create_folder(&self, user_id: &str, body: &CreateFolderRequest) -> ApiResult {
        self.execute(ApiRequest::post("/files/folder").query("user_id", user_id).json(body)?).await
    }

    pub async fn rename_file(&self, user_id: &str, file_id: &str, new_name: &str) -> ApiResult {
        let body = RenameRequest { new_name: new_name.to_string() };
        let request = ApiRequest::put(format!("/files/file/{}/rename", file_id))
            .query("user_id", user_id)
            .json(&body)?;
        self.execute(request).await
    }

    pub async fn rename_folder(&self, user_id: &str, folder_id: &str, new_name: &str) -> ApiResult {
        let body = RenameRequest { new_name: new_name.to_string() };
        let request = ApiRequest::put(format!("/files/folder/{}/rename", folder_id))
            .query("user_id", user_id)
            .json(&body)?;
        self.execute(request).await
    }

    pub async fn delete_file(&self, user_id: &str, file_id: &str) -> ApiResult {
        self.execute(ApiRequest::delete(format!("/files/file/{}", file_id)).query("user_id", user_id)).await
    }

    pub async fn delete_folder(&self, user_id: &str, folder_id: &str) -> ApiResult {
        self.execute(ApiRequest::delete(format!("/files/folder/{}", folder_id)).query("user_id", user_id)).await
    }

    pub async fn search_files(&self, user_id: &str, query: &str) -> ApiResult {
        let request = ApiRequest::get("/files/search")
            .query("query", query)
            .query("user_id", user_id);
        self.execute(request).await
    }

    pub async fn fetch_file(&self, user_id: &str, file_id: &str) -> ApiResult {
        self.execute(ApiRequest::get(format!("/files/fetch/{}", file_id)).query("user_id", user_id)).await
    }

    pub async fn create_archive(&self, user_id: &str, folder_id: &str) -> ApiResult {
        self.execute(ApiRequest::post(format!("/files/archive/{}", folder_id)).query("user_id", user_id)).await
    }

    pub async fn archive_status(&self, user_id: &str, archive_id: &str) -> ApiResult {
        let request = ApiRequest::get(format!("/files/archive/{}/status", archive_id)).query("user_id", user_id);
        self.execute(request).await
    }

    // ------------------------------------------------------------------------
    // Torrents
    // ------------------------------------------------------------------------

    pub async fn list_torrents(&self, user_id: &str) -> ApiResult {
        self.execute(ApiRequest::get("/torrents/list").query("user_id", user_id)).await
    }

    pub async fn add_magnet(&self, user_id: &str, body: &AddMagnetRequest) -> ApiResult {
        self.execute(ApiRequest::post("/torrents/add").query("user_id", user_id).json(body)?).await
    }

    pub async fn smart_add(&self, user_id: &str, body: &SmartAddRequest) -> ApiResult {
        self.execute(ApiRequest::post("/torrents/smartAdd").query("user_id", user_id).json(body)?).await
    }

    pub async fn add_and_download(&self, user_id: &str, body: &AddAndDownloadRequest) -> ApiResult {
        let request = ApiRequest::post("/torrents/addAndDownload")
            .query("user_id", user_id)
            .json(body)?;
        self.execute(request).await
    }

    pub async fn add_torrent_file(&self, user_id: &str, folder_id: &str, file: TorrentFile) -> ApiResult {
        log::info!("📤 [API] Uploading {} ({} bytes)", file.name, file.bytes.len());
        let fields = vec![("folder_id".to_string(), folder_id.to_string())];
        let request = ApiRequest::post("/torrents/add/file")
            .query("user_id", user_id)
            .multipart(fields, "file", file);
        self.execute(request).await
    }

    pub async fn delete_torrent(&self, user_id: &str, torrent_id: &str) -> ApiResult {
        self.execute(ApiRequest::delete(format!("/torrents/{}", torrent_id)).query("user_id", user_id)).await
    }

    pub async fn scan_page(&self, user_id: &str, url: &str) -> ApiResult {
        let body = ScanPageRequest { url: url.to_string() };
        self.execute(ApiRequest::post("/torrents/scan-page").query("user_id", user_id).json(&body)?).await
    }

    pub async fn delete_wishlist(&self, user_id: &str, wishlist_id: &str) -> ApiResult {
        let request = ApiRequest::delete(format!("/torrents/wishlist/{}", wishlist_id)).query("user_id", user_id);
        self.execute(request).await
    }

    pub async fn torrent_metadata(&self, query: &str) -> ApiResult {
        let body = MetadataRequest { query: query.to_string() };
        self.execute(ApiRequest::post("/torrents/metadata").json(&body)?).await
    }

    // ------------------------------------------------------------------------
    // Player
    // ------------------------------------------------------------------------

    pub async fn play_url(&self, body: &PlayRequest) -> ApiResult {
        self.execute(ApiRequest::post("/vlc/play").json(body)?).await
    }

    pub async fn player_config(&self) -> ApiResult {
        self.execute(ApiRequest::get("/vlc/config")).await
    }
}
