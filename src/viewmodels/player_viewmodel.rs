// Player viewmodel: hands stream URLs to the VLC bridge behind the API

use crate::models::PlayRequest;
use crate::state::AppState;
use crate::viewmodels::{clear_fields, required, ActionResult};
use crate::views::ids::{PLAY_ENQUEUE, PLAY_URL};

pub struct PlayerViewModel {
    state: AppState,
}

impl PlayerViewModel {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub async fn play(&self) -> ActionResult {
        let ui = self.state.ui.as_ref();
        let body = PlayRequest {
            url: required(ui, PLAY_URL, "URL is required")?,
            enqueue: ui.is_checked(PLAY_ENQUEUE),
        };

        let response = self.state.api.play_url(&body).await?;
        clear_fields(ui, &[PLAY_URL]);
        Ok(response)
    }

    pub async fn get_config(&self) -> ActionResult {
        self.state.api.player_config().await
    }
}
