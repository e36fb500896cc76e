// ============================================================================
// APP STATE - Everything the view models share
// ============================================================================
// Cheap to clone: every field is an Rc handle or a small value.
// ============================================================================

use std::rc::Rc;

use crate::config::{AppConfig, DefaultAuthConfig};
use crate::dom::UiPort;
use crate::models::{SessionState, TokenBundle};
use crate::services::{ApiClient, HttpTransport};
use crate::state::SessionStore;
use crate::utils::{KeyValueStorage, Scheduler, TaskSlot};
use crate::views::{AuthStatusView, ResponseView};

#[derive(Clone)]
pub struct AppState {
    pub session: SessionStore,
    pub ui: Rc<dyn UiPort>,
    pub api: ApiClient,
    pub scheduler: Rc<dyn Scheduler>,
    pub response: ResponseView,
    pub auth_status: AuthStatusView,
    pub default_auth: DefaultAuthConfig,
    pub relogin_delay_ms: u32,
    pub session_restored_ms: u32,
    /// Pending re-login after a logout in default-credential mode
    pub relogin: TaskSlot,
}

impl AppState {
    pub fn new(
        storage: Rc<dyn KeyValueStorage>,
        ui: Rc<dyn UiPort>,
        transport: Rc<dyn HttpTransport>,
        scheduler: Rc<dyn Scheduler>,
        config: &AppConfig,
    ) -> Self {
        Self {
            session: SessionStore::new(storage),
            response: ResponseView::new(ui.clone()),
            auth_status: AuthStatusView::new(ui.clone(), scheduler.clone()),
            api: ApiClient::new(config.api_base.clone(), transport),
            ui,
            scheduler,
            default_auth: config.default_auth.clone(),
            relogin_delay_ms: config.relogin_delay_ms,
            session_restored_ms: config.session_restored_ms,
            relogin: TaskSlot::new(),
        }
    }

    /// User id for outgoing requests
    pub fn user_id(&self) -> String {
        self.session.effective_user_id()
    }

    /// Paints the header from what is stored
    pub fn paint_stored_session(&self) -> SessionState {
        let state = self.session.load();
        match (state.is_authenticated(), state.user_id.as_deref()) {
            (true, Some(user_id)) => {
                log::info!("💾 [APP] Stored session found for {}", user_id);
                self.auth_status.paint(true, user_id, state.token_bundle.as_ref());
            }
            _ => self.auth_status.paint(false, "", None),
        }
        state
    }

    /// Marks the session authenticated. The token bundle is only replaced
    /// when one is given.
    pub fn sign_in(&self, user_id: &str, token_bundle: Option<TokenBundle>) {
        self.relogin.cancel();
        let state = SessionState::authenticated(user_id, token_bundle);
        self.session.save(&state);
        self.auth_status.paint(true, user_id, state.token_bundle.as_ref());
        log::info!("✅ [AUTH] Authenticated as {}", user_id);
    }

    /// Forgets everything stored about the session
    pub fn sign_out(&self) {
        self.relogin.cancel();
        self.session.clear();
        self.auth_status.paint(false, "", None);
        log::info!("🚪 [AUTH] Signed out");
    }
}
