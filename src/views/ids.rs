// Element ids of the dashboard page

// Response panel
pub const RESPONSE_OUTPUT: &str = "responseOutput";
pub const RESPONSE_STATUS: &str = "responseStatus";
pub const RESPONSE_SECTION: &str = ".response-section";

// Auth header
pub const AUTH_STATUS: &str = "authStatus";
pub const LOGOUT_BUTTON: &str = "logoutBtn";
pub const LOGOUT_BUTTON_DISPLAY: &str = "block";

// Auth forms
pub const USERNAME: &str = "username";
pub const PASSWORD: &str = "password";
pub const REFRESH_TOKEN: &str = "refreshToken";
pub const DEVICE_CODE_INFO: &str = "deviceCodeInfo";
pub const DEVICE_CODE_LOGIN_FORM: &str = "deviceCodeLoginForm";
/// CSS `display` used when these panels are shown; the login form lays out
/// its input and button in a row
pub const DEVICE_CODE_INFO_DISPLAY: &str = "block";
pub const DEVICE_CODE_LOGIN_FORM_DISPLAY: &str = "flex";
pub const DEVICE_CODE_INPUT: &str = "deviceCodeInput";

// Account
pub const NEW_NAME: &str = "newName";
pub const CHANGE_NAME_PASSWORD: &str = "changeNamePassword";
pub const OLD_PASSWORD: &str = "oldPassword";
pub const NEW_PASSWORD: &str = "newPassword";

// Files & folders
pub const LIST_FOLDER_ID: &str = "listFolderId";
pub const FOLDER_NAME: &str = "folderName";
pub const PARENT_FOLDER_ID: &str = "parentFolderId";
pub const RENAME_FILE_ID: &str = "renameFileId";
pub const NEW_FILE_NAME: &str = "newFileName";
pub const RENAME_FOLDER_ID: &str = "renameFolderId";
pub const NEW_FOLDER_NAME: &str = "newFolderName";
pub const DELETE_FILE_ID: &str = "deleteFileId";
pub const DELETE_FOLDER_ID: &str = "deleteFolderId";
pub const SEARCH_QUERY: &str = "searchQuery";
pub const FETCH_FILE_ID: &str = "fetchFileId";
pub const DOWNLOAD_FOLDER_ID: &str = "downloadFolderId";
pub const ARCHIVE_FOLDER_ID: &str = "archiveFolderId";
pub const CHECK_ARCHIVE_ID: &str = "checkArchiveId";

// Torrents
pub const MAGNET_LINK: &str = "magnetLink";
pub const MAGNET_FOLDER_ID: &str = "magnetFolderId";
pub const SMART_MAGNET_LINK: &str = "smartMagnetLink";
pub const SMART_FOLDER_ID: &str = "smartFolderId";
pub const SMART_SKIP_SPACE_CHECK: &str = "smartSkipSpaceCheck";
pub const DOWNLOAD_MAGNET_LINK: &str = "downloadMagnetLink";
pub const DOWNLOAD_TARGET_FOLDER_ID: &str = "downloadTargetFolderId";
pub const DOWNLOAD_SKIP_SPACE_CHECK: &str = "downloadSkipSpaceCheck";
pub const DOWNLOAD_WAIT: &str = "downloadWaitForCompletion";
pub const DOWNLOAD_MAX_WAIT_SECONDS: &str = "downloadMaxWaitSeconds";
pub const DOWNLOAD_POLL_INTERVAL: &str = "downloadPollInterval";
pub const DOWNLOAD_PLAY_IN_VLC: &str = "downloadPlayInVlc";
pub const TORRENT_FILE: &str = "torrentFile";
pub const FILE_FOLDER_ID: &str = "fileFolderId";
pub const DELETE_TORRENT_ID: &str = "deleteTorrentId";
pub const SCAN_URL: &str = "scanUrl";
pub const WISHLIST_ID: &str = "wishlistId";
pub const METADATA_QUERY: &str = "metadataQuery";

// Player
pub const PLAY_URL: &str = "playUrl";
pub const PLAY_ENQUEUE: &str = "playEnqueue";
