// ============================================================================
// TORRENTS VIEWMODEL - Magnets, .torrent uploads, wishlist
// ============================================================================

use crate::models::{AddAndDownloadRequest, AddMagnetRequest, DashboardError, SmartAddRequest};
use crate::state::AppState;
use crate::utils::constants::{
    ADD_AND_DOWNLOAD_PENDING, DEFAULT_MAX_WAIT_SECONDS, DEFAULT_POLL_INTERVAL_SECONDS, DEFAULT_TORRENT_FOLDER_ID,
};
use crate::viewmodels::{clear_fields, field_or, number_or, required, ActionResult, ConfirmedResult};
use crate::views::ids::*;

pub struct TorrentsViewModel {
    state: AppState,
}

impl TorrentsViewModel {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub async fn list_torrents(&self) -> ActionResult {
        self.state.api.list_torrents(&self.state.user_id()).await
    }

    pub async fn add_magnet(&self) -> ActionResult {
        let ui = self.state.ui.as_ref();
        let body = AddMagnetRequest {
            magnet_link: required(ui, MAGNET_LINK, "Magnet link is required")?,
            folder_id: field_or(ui, MAGNET_FOLDER_ID, DEFAULT_TORRENT_FOLDER_ID),
        };

        let response = self.state.api.add_magnet(&self.state.user_id(), &body).await?;
        clear_fields(ui, &[MAGNET_LINK, MAGNET_FOLDER_ID]);
        Ok(response)
    }

    /// Magnet add with the server-side free-space check (507 when full)
    pub async fn smart_add(&self) -> ActionResult {
        let ui = self.state.ui.as_ref();
        let body = SmartAddRequest {
            magnet_link: required(ui, SMART_MAGNET_LINK, "Magnet link is required")?,
            folder_id: field_or(ui, SMART_FOLDER_ID, DEFAULT_TORRENT_FOLDER_ID),
            skip_space_check: ui.is_checked(SMART_SKIP_SPACE_CHECK),
        };

        let response = self
            .state
            .api
            .smart_add(&self.state.user_id(), &body)
            .await
            .inspect_err(|e| log_insufficient_space(e, &body.magnet_link))?;
        clear_fields(ui, &[SMART_MAGNET_LINK, SMART_FOLDER_ID]);
        Ok(response)
    }

    /// Smart add, then the server polls until the files have download URLs
    /// (or `max_wait_seconds` runs out) and returns them in one response
    pub async fn add_and_download(&self) -> ActionResult {
        let ui = self.state.ui.as_ref();
        let body = AddAndDownloadRequest {
            magnet_link: required(ui, DOWNLOAD_MAGNET_LINK, "Magnet link is required")?,
            folder_id: field_or(ui, DOWNLOAD_TARGET_FOLDER_ID, DEFAULT_TORRENT_FOLDER_ID),
            skip_space_check: ui.is_checked(DOWNLOAD_SKIP_SPACE_CHECK),
            wait_for_completion: ui.is_checked(DOWNLOAD_WAIT),
            max_wait_seconds: number_or(
                ui,
                DOWNLOAD_MAX_WAIT_SECONDS,
                DEFAULT_MAX_WAIT_SECONDS,
                "Max wait must be a whole number of seconds",
            )?,
            poll_interval: number_or(
                ui,
                DOWNLOAD_POLL_INTERVAL,
                DEFAULT_POLL_INTERVAL_SECONDS,
                "Poll interval must be a whole number of seconds",
            )?,
            play_in_vlc: ui.is_checked(DOWNLOAD_PLAY_IN_VLC),
        };

        if body.wait_for_completion {
            self.state.response.show_pending(ADD_AND_DOWNLOAD_PENDING);
        }
        let response = self
            .state
            .api
            .add_and_download(&self.state.user_id(), &body)
            .await
            .inspect_err(|e| log_insufficient_space(e, &body.magnet_link))?;
        clear_fields(ui, &[DOWNLOAD_MAGNET_LINK, DOWNLOAD_TARGET_FOLDER_ID]);
        Ok(response)
    }

    pub async fn add_torrent_file(&self) -> ActionResult {
        let ui = self.state.ui.as_ref();
        let file = ui
            .read_file(TORRENT_FILE)
            .await
            .map_err(DashboardError::transport)?
            .ok_or_else(|| DashboardError::validation("Please select a torrent file"))?;
        let folder_id = field_or(ui, FILE_FOLDER_ID, DEFAULT_TORRENT_FOLDER_ID);

        let response = self
            .state
            .api
            .add_torrent_file(&self.state.user_id(), &folder_id, file)
            .await?;
        clear_fields(ui, &[TORRENT_FILE, FILE_FOLDER_ID]);
        Ok(response)
    }

    pub async fn delete_torrent(&self) -> ConfirmedResult {
        let ui = self.state.ui.as_ref();
        let torrent_id = required(ui, DELETE_TORRENT_ID, "Torrent ID is required")?;
        if !ui.confirm("Are you sure you want to delete this torrent?") {
            return Ok(None);
        }

        let response = self.state.api.delete_torrent(&self.state.user_id(), &torrent_id).await?;
        clear_fields(ui, &[DELETE_TORRENT_ID]);
        Ok(Some(response))
    }

    pub async fn scan_page(&self) -> ActionResult {
        let ui = self.state.ui.as_ref();
        let url = required(ui, SCAN_URL, "URL is required")?;

        let response = self.state.api.scan_page(&self.state.user_id(), &url).await?;
        clear_fields(ui, &[SCAN_URL]);
        Ok(response)
    }

    pub async fn delete_wishlist(&self) -> ConfirmedResult {
        let ui = self.state.ui.as_ref();
        let wishlist_id = required(ui, WISHLIST_ID, "Wishlist ID is required")?;
        if !ui.confirm("Are you sure you want to delete this wishlist item?") {
            return Ok(None);
        }

        let response = self
            .state
            .api
            .delete_wishlist(&self.state.user_id(), &wishlist_id)
            .await?;
        clear_fields(ui, &[WISHLIST_ID]);
        Ok(Some(response))
    }

    pub async fn get_metadata(&self) -> ActionResult {
        let query = required(self.state.ui.as_ref(), METADATA_QUERY, "Magnet link or info hash is required")?;
        self.state.api.torrent_metadata(&query).await
    }
}

fn log_insufficient_space(error: &DashboardError, magnet_link: &str) {
    if let DashboardError::Api { status: 507, .. } = error {
        log::warn!("💾 [TORRENTS] Not enough space for {}", magnet_link);
    }
}
