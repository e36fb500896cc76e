// ============================================================================
// DISPATCHER - Button action -> viewmodel -> response panel
// ============================================================================

use crate::models::Action;
use crate::state::AppState;
use crate::viewmodels::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// A response (real or synthesized) was rendered with this status
    Rendered { status: u16 },
    /// The user declined a confirmation prompt
    Declined,
    /// The response panel was reset
    Cleared,
}

pub struct Dispatcher {
    state: AppState,
    auth: AuthViewModel,
    account: AccountViewModel,
    files: FilesViewModel,
    torrents: TorrentsViewModel,
    player: PlayerViewModel,
}

impl Dispatcher {
    pub fn new(state: AppState) -> Self {
        Self {
            auth: AuthViewModel::new(state.clone()),
            account: AccountViewModel::new(state.clone()),
            files: FilesViewModel::new(state.clone()),
            torrents: TorrentsViewModel::new(state.clone()),
            player: PlayerViewModel::new(state.clone()),
            state,
        }
    }

    pub fn auth(&self) -> &AuthViewModel {
        &self.auth
    }

    pub async fn dispatch(&self, action: Action) -> ActionOutcome {
        log::debug!("▶️ [ACTION] {}", action);
        match action {
            Action::GetDeviceCode => self.render(self.auth.request_device_code().await),
            Action::LoginWithDeviceCode => self.render(self.auth.login_with_device_code().await),
            Action::LoginWithPassword => self.render(self.auth.login_with_password().await),
            Action::LoginWithRefreshToken => self.render(self.auth.login_with_refresh_token().await),
            Action::RefreshAccessToken => self.render(self.auth.refresh_access_token().await),
            Action::Logout => self.render(self.auth.logout().await),

            Action::GetSettings => self.render(self.account.get_settings().await),
            Action::GetMemoryBandwidth => self.render(self.account.get_memory_bandwidth().await),
            Action::GetDevices => self.render(self.account.get_devices().await),
            Action::ListWishlist => self.render(self.account.list_wishlist().await),
            Action::ChangeName => self.render(self.account.change_name().await),
            Action::ChangePassword => self.render(self.account.change_password().await),

            Action::ListFiles => self.render(self.files.list_files().await),
            Action::ListAllFiles => self.render(self.files.list_all_files().await),
            Action::CreateFolder => self.render(self.files.create_folder().await),
            Action::RenameFile => self.render(self.files.rename_file().await),
            Action::RenameFolder => self.render(self.files.rename_folder().await),
            Action::DeleteFile => self.render_confirmed(self.files.delete_file().await),
            Action::DeleteFolder => self.render_confirmed(self.files.delete_folder().await),
            Action::SearchFiles => self.render(self.files.search_files().await),
            Action::FetchFile => self.render(self.files.fetch_file().await),
            Action::DownloadFolder => self.render(self.files.download_folder().await),
            Action::CreateArchive => self.render(self.files.create_archive().await),
            Action::CheckArchiveStatus => self.render(self.files.check_archive_status().await),

            Action::ListTorrents => self.render(self.torrents.list_torrents().await),
            Action::AddTorrentMagnet => self.render(self.torrents.add_magnet().await),
            Action::SmartAddTorrent => self.render(self.torrents.smart_add().await),
            Action::AddAndDownload => self.render(self.torrents.add_and_download().await),
            Action::AddTorrentFile => self.render(self.torrents.add_torrent_file().await),
            Action::DeleteTorrent => self.render_confirmed(self.torrents.delete_torrent().await),
            Action::ScanPage => self.render(self.torrents.scan_page().await),
            Action::DeleteWishlist => self.render_confirmed(self.torrents.delete_wishlist().await),
            Action::GetTorrentMetadata => self.render(self.torrents.get_metadata().await),

            Action::PlayInPlayer => self.render(self.player.play().await),
            Action::GetPlayerConfig => self.render(self.player.get_config().await),

            Action::ClearResponse => {
                self.state.response.clear();
                ActionOutcome::Cleared
            }
        }
    }

    fn render(&self, result: ActionResult) -> ActionOutcome {
        let status = self.state.response.render_result(result);
        ActionOutcome::Rendered { status }
    }

    fn render_confirmed(&self, result: ConfirmedResult) -> ActionOutcome {
        match result {
            Ok(None) => {
                log::info!("🚫 [ACTION] Cancelled by user");
                ActionOutcome::Declined
            }
            Ok(Some(response)) => self.render(Ok(response)),
            Err(e) => self.render(Err(e)),
        }
    }
}
