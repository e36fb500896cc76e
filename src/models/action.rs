use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Every button of the dashboard, bound through `data-action="<name>"`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, EnumIter, AsRefStr)]
#[strum(serialize_all = "camelCase")]
pub enum Action {
    // Auth
    GetDeviceCode,
    LoginWithDeviceCode,
    LoginWithPassword,
    LoginWithRefreshToken,
    RefreshAccessToken,
    Logout,
    // Account
    GetSettings,
    GetMemoryBandwidth,
    GetDevices,
    ListWishlist,
    ChangeName,
    ChangePassword,
    // Files & folders
    ListFiles,
    ListAllFiles,
    CreateFolder,
    RenameFile,
    RenameFolder,
    DeleteFile,
    DeleteFolder,
    SearchFiles,
    FetchFile,
    DownloadFolder,
    CreateArchive,
    CheckArchiveStatus,
    // Torrents
    ListTorrents,
    AddTorrentMagnet,
    SmartAddTorrent,
    AddAndDownload,
    AddTorrentFile,
    DeleteTorrent,
    ScanPage,
    DeleteWishlist,
    GetTorrentMetadata,
    // Player
    PlayInPlayer,
    GetPlayerConfig,
    // Response panel
    ClearResponse,
}
