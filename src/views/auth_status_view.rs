// ============================================================================
// AUTH STATUS VIEW - Header badge + logout button
// ============================================================================

use std::rc::Rc;

use futures::FutureExt;

use crate::dom::UiPort;
use crate::models::TokenBundle;
use crate::utils::constants::NOT_AUTHENTICATED_TEXT;
use crate::utils::{Scheduler, TaskSlot};
use crate::views::ids::{AUTH_STATUS, LOGOUT_BUTTON, LOGOUT_BUTTON_DISPLAY};

#[derive(Clone)]
pub struct AuthStatusView {
    ui: Rc<dyn UiPort>,
    scheduler: Rc<dyn Scheduler>,
    revert: TaskSlot,
}

impl AuthStatusView {
    pub fn new(ui: Rc<dyn UiPort>, scheduler: Rc<dyn Scheduler>) -> Self {
        Self {
            ui,
            scheduler,
            revert: TaskSlot::new(),
        }
    }

    /// Badge text for a logged-in user; 🔒 marks a persistent login
    pub fn status_text(user_id: &str, token_bundle: Option<&TokenBundle>) -> String {
        let lock = if token_bundle.map(TokenBundle::has_refresh_token).unwrap_or(false) {
            "🔒 "
        } else {
            ""
        };
        format!("{}Authenticated: {}", lock, user_id)
    }

    pub fn paint(&self, authenticated: bool, user_id: &str, token_bundle: Option<&TokenBundle>) {
        // a repaint wins over a pending flash revert
        self.revert.cancel();

        if authenticated {
            self.ui.set_text(AUTH_STATUS, &Self::status_text(user_id, token_bundle));
            self.ui.toggle_class(AUTH_STATUS, "authenticated", true);
            self.ui.show_element(LOGOUT_BUTTON, LOGOUT_BUTTON_DISPLAY);
        } else {
            self.ui.set_text(AUTH_STATUS, NOT_AUTHENTICATED_TEXT);
            self.ui.toggle_class(AUTH_STATUS, "authenticated", false);
            self.ui.hide_element(LOGOUT_BUTTON);
        }
    }

    /// Shows `text` on the badge, then puts the current text back after `duration_ms`
    pub fn flash(&self, text: &str, duration_ms: u32) {
        let original = self.ui.text(AUTH_STATUS);
        self.ui.set_text(AUTH_STATUS, text);

        let ui = self.ui.clone();
        let task = self.scheduler.schedule(
            duration_ms,
            async move {
                ui.set_text(AUTH_STATUS, &original);
            }
            .boxed_local(),
        );
        self.revert.replace(task);
    }
}
