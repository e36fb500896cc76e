// ============================================================================
// ACCOUNT VIEWMODEL
// ============================================================================

use crate::models::{ChangeNameRequest, ChangePasswordRequest};
use crate::state::AppState;
use crate::viewmodels::{clear_fields, required, ActionResult};
use crate::views::ids::*;

pub struct AccountViewModel {
    state: AppState,
}

impl AccountViewModel {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub async fn get_settings(&self) -> ActionResult {
        self.state.api.get_settings(&self.state.user_id()).await
    }

    pub async fn get_memory_bandwidth(&self) -> ActionResult {
        self.state.api.get_memory_bandwidth(&self.state.user_id()).await
    }

    pub async fn get_devices(&self) -> ActionResult {
        self.state.api.get_devices(&self.state.user_id()).await
    }

    pub async fn list_wishlist(&self) -> ActionResult {
        self.state.api.list_wishlist(&self.state.user_id()).await
    }

    pub async fn change_name(&self) -> ActionResult {
        let ui = self.state.ui.as_ref();
        let message = "Both name and password are required";
        let body = ChangeNameRequest {
            name: required(ui, NEW_NAME, message)?,
            password: required(ui, CHANGE_NAME_PASSWORD, message)?,
        };

        let response = self.state.api.change_name(&self.state.user_id(), &body).await?;
        clear_fields(ui, &[NEW_NAME, CHANGE_NAME_PASSWORD]);
        Ok(response)
    }

    pub async fn change_password(&self) -> ActionResult {
        let ui = self.state.ui.as_ref();
        let message = "Both old and new passwords are required";
        let body = ChangePasswordRequest {
            old_password: required(ui, OLD_PASSWORD, message)?,
            new_password: required(ui, NEW_PASSWORD, message)?,
        };

        let response = self.state.api.change_password(&self.state.user_id(), &body).await?;
        clear_fields(ui, &[OLD_PASSWORD, NEW_PASSWORD]);
        Ok(response)
    }
}
