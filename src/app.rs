// ============================================================================
// APP - Wires the browser ports and binds the dashboard buttons
// ============================================================================

use std::rc::Rc;
use std::str::FromStr;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::config::{AppConfig, CONFIG};
use crate::dom::{get_attribute, get_element_by_id, on_click, query_selector_all, DomUi};
use crate::models::Action;
use crate::services::GlooTransport;
use crate::state::AppState;
use crate::utils::{BrowserStorage, KeyValueStorage, MemoryStorage, TimeoutScheduler};
use crate::viewmodels::Dispatcher;
use crate::views::ids::LOGOUT_BUTTON;

pub struct App {
    dispatcher: Rc<Dispatcher>,
}

impl App {
    pub fn new() -> Result<Self, JsValue> {
        let storage: Rc<dyn KeyValueStorage> = match BrowserStorage::open() {
            Some(storage) => Rc::new(storage),
            None => {
                log::warn!("⚠️ [APP] localStorage unavailable, session will not survive a reload");
                Rc::new(MemoryStorage::new())
            }
        };

        let config = AppConfig {
            default_auth: CONFIG.resolved_default_auth(),
            ..CONFIG.clone()
        };
        log::info!("⚙️ [APP] API base: {}", config.api_base);
        if config.default_auth.enabled {
            log::info!("🔑 [APP] DEFAULT_AUTH mode enabled");
        }

        let state = AppState::new(
            storage,
            Rc::new(DomUi),
            Rc::new(GlooTransport),
            Rc::new(TimeoutScheduler),
            &config,
        );
        state.paint_stored_session();

        Ok(Self {
            dispatcher: Rc::new(Dispatcher::new(state)),
        })
    }

    /// Binds every `[data-action]` element; returns how many were bound
    pub fn bind_actions(&self) -> Result<usize, JsValue> {
        let mut bound = 0;
        for element in query_selector_all("[data-action]")? {
            let Some(name) = get_attribute(&element, "data-action") else {
                continue;
            };
            match Action::from_str(&name) {
                Ok(action) => {
                    let dispatcher = self.dispatcher.clone();
                    on_click(&element, move |_| Self::spawn_action(dispatcher.clone(), action))?;
                    bound += 1;
                }
                Err(_) => log::warn!("⚠️ [APP] Unknown data-action \"{}\"", name),
            }
        }

        // the header logout button predates data-action
        if let Some(logout) = get_element_by_id(LOGOUT_BUTTON) {
            if get_attribute(&logout, "data-action").is_none() {
                let dispatcher = self.dispatcher.clone();
                on_click(&logout, move |_| Self::spawn_action(dispatcher.clone(), Action::Logout))?;
                bound += 1;
            }
        }

        log::info!("🔗 [APP] {} actions bound", bound);
        Ok(bound)
    }

    /// Runs an action without waiting for it
    pub fn run(&self, action: Action) {
        Self::spawn_action(self.dispatcher.clone(), action);
    }

    pub fn start_auto_login(&self) {
        let dispatcher = self.dispatcher.clone();
        spawn_local(async move {
            let outcome = dispatcher.auth().auto_login().await;
            log::info!("🔐 [APP] Auto-login: {:?}", outcome);
        });
    }

    fn spawn_action(dispatcher: Rc<Dispatcher>, action: Action) {
        spawn_local(async move {
            let outcome = dispatcher.dispatch(action).await;
            log::debug!("[APP] {} -> {:?}", action, outcome);
        });
    }
}
