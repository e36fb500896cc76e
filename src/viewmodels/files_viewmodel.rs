// ============================================================================
// FILES VIEWMODEL - Folders, files and archives
// ============================================================================

use serde_json::Value;

use crate::models::{ApiResponse, CreateFolderRequest};
use crate::state::AppState;
use crate::utils::constants::{ARCHIVE_READY_TIP, LIST_ALL_PENDING, ROOT_FOLDER_ID};
use crate::viewmodels::{clear_fields, field_or, required, ActionResult, ConfirmedResult};
use crate::views::ids::*;

pub struct FilesViewModel {
    state: AppState,
}

impl FilesViewModel {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub async fn list_files(&self) -> ActionResult {
        let folder_id = field_or(self.state.ui.as_ref(), LIST_FOLDER_ID, ROOT_FOLDER_ID);
        self.state.api.list_folder(&self.state.user_id(), &folder_id).await
    }

    /// Walks every folder server-side, so a placeholder is shown meanwhile
    pub async fn list_all_files(&self) -> ActionResult {
        self.state.response.show_pending(LIST_ALL_PENDING);
        self.state.api.list_all_files(&self.state.user_id()).await
    }

    pub async fn create_folder(&self) -> ActionResult {
        let ui = self.state.ui.as_ref();
        let body = CreateFolderRequest {
            name: required(ui, FOLDER_NAME, "Folder name is required")?,
            parent_folder_id: field_or(ui, PARENT_FOLDER_ID, ROOT_FOLDER_ID),
        };

        let response = self.state.api.create_folder(&self.state.user_id(), &body).await?;
        clear_fields(ui, &[FOLDER_NAME, PARENT_FOLDER_ID]);
        Ok(response)
    }

    pub async fn rename_file(&self) -> ActionResult {
        let ui = self.state.ui.as_ref();
        let message = "File ID and new name are required";
        let file_id = required(ui, RENAME_FILE_ID, message)?;
        let new_name = required(ui, NEW_FILE_NAME, message)?;

        let response = self
            .state
            .api
            .rename_file(&self.state.user_id(), &file_id, &new_name)
            .await?;
        clear_fields(ui, &[RENAME_FILE_ID, NEW_FILE_NAME]);
        Ok(response)
    }

    pub async fn rename_folder(&self) -> ActionResult {
        let ui = self.state.ui.as_ref();
        let message = "Folder ID and new name are required";
        let folder_id = required(ui, RENAME_FOLDER_ID, message)?;
        let new_name = required(ui, NEW_FOLDER_NAME, message)?;

        let response = self
            .state
            .api
            .rename_folder(&self.state.user_id(), &folder_id, &new_name)
            .await?;
        clear_fields(ui, &[RENAME_FOLDER_ID, NEW_FOLDER_NAME]);
        Ok(response)
    }

    pub async fn delete_file(&self) -> ConfirmedResult {
        let ui = self.state.ui.as_ref();
        let file_id = required(ui, DELETE_FILE_ID, "File ID is required")?;
        if !ui.confirm("Are you sure you want to delete this file?") {
            return Ok(None);
        }

        let response = self.state.api.delete_file(&self.state.user_id(), &file_id).await?;
        clear_fields(ui, &[DELETE_FILE_ID]);
        Ok(Some(response))
    }

    pub async fn delete_folder(&self) -> ConfirmedResult {
        let ui = self.state.ui.as_ref();
        let folder_id = required(ui, DELETE_FOLDER_ID, "Folder ID is required")?;
        if !ui.confirm("Are you sure you want to delete this folder and all its contents?") {
            return Ok(None);
        }

        let response = self.state.api.delete_folder(&self.state.user_id(), &folder_id).await?;
        clear_fields(ui, &[DELETE_FOLDER_ID]);
        Ok(Some(response))
    }

    pub async fn search_files(&self) -> ActionResult {
        let query = required(self.state.ui.as_ref(), SEARCH_QUERY, "Search query is required")?;
        self.state.api.search_files(&self.state.user_id(), &query).await
    }

    pub async fn fetch_file(&self) -> ActionResult {
        let file_id = required(self.state.ui.as_ref(), FETCH_FILE_ID, "File ID is required")?;
        self.state.api.fetch_file(&self.state.user_id(), &file_id).await
    }

    pub async fn download_folder(&self) -> ActionResult {
        let ui = self.state.ui.as_ref();
        let folder_id = required(ui, DOWNLOAD_FOLDER_ID, "Folder ID is required")?;

        let response = self.state.api.create_archive(&self.state.user_id(), &folder_id).await?;
        clear_fields(ui, &[DOWNLOAD_FOLDER_ID]);
        Ok(response)
    }

    /// On success the archive id is copied into the status-check field and
    /// the rendered body gets a `tip` about zipping delay
    pub async fn create_archive(&self) -> ActionResult {
        let ui = self.state.ui.as_ref();
        let folder_id = required(ui, ARCHIVE_FOLDER_ID, "Folder ID is required")?;

        let response = self.state.api.create_archive(&self.state.user_id(), &folder_id).await?;
        if let Some(archive_id) = archive_id(&response) {
            log::info!("📦 [FILES] Archive {} created for folder {}", archive_id, folder_id);
            ui.set_field(CHECK_ARCHIVE_ID, &archive_id);
        }
        clear_fields(ui, &[ARCHIVE_FOLDER_ID]);

        let ApiResponse { status, mut body } = response;
        if let Value::Object(map) = &mut body {
            map.insert("tip".to_string(), Value::String(ARCHIVE_READY_TIP.to_string()));
        }
        Ok(ApiResponse::new(status, body))
    }

    pub async fn check_archive_status(&self) -> ActionResult {
        let archive_id = required(self.state.ui.as_ref(), CHECK_ARCHIVE_ID, "Archive ID is required")?;
        self.state.api.archive_status(&self.state.user_id(), &archive_id).await
    }
}

/// `archive_id`, or the older `uniq` field; numeric ids are accepted
fn archive_id(response: &ApiResponse) -> Option<String> {
    ["archive_id", "uniq"].iter().find_map(|key| match response.body.get(*key)? {
        Value::String(id) if !id.is_empty() => Some(id.clone()),
        Value::Number(id) => Some(id.to_string()),
        _ => None,
    })
}
