// ============================================================================
// REQUEST BODIES - account, files, torrents, player
// ============================================================================

use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ChangeNameRequest {
    pub name: String,
    pub password: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ChangePasswordRequest {
    pub old_password: String,
    pub new_password: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CreateFolderRequest {
    pub name: String,
    pub parent_folder_id: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RenameRequest {
    pub new_name: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct AddMagnetRequest {
    pub magnet_link: String,
    pub folder_id: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SmartAddRequest {
    pub magnet_link: String,
    pub folder_id: String,
    pub skip_space_check: bool,
}

/// Smart add that waits server-side until download URLs exist
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct AddAndDownloadRequest {
    pub magnet_link: String,
    pub folder_id: String,
    pub skip_space_check: bool,
    pub wait_for_completion: bool,
    pub max_wait_seconds: u32,
    pub poll_interval: u32,
    pub play_in_vlc: bool,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ScanPageRequest {
    pub url: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct MetadataRequest {
    pub query: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PlayRequest {
    pub url: String,
    pub enqueue: bool,
}

/// A .torrent file picked in the upload input
#[derive(Debug, Clone, PartialEq)]
pub struct TorrentFile {
    pub name: String,
    pub bytes: Vec<u8>,
}
