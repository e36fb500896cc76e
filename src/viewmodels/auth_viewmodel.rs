// ============================================================================
// AUTH VIEWMODEL - Logins, logout and the startup auto-login
// ============================================================================

use futures::FutureExt;

use crate::dom::InfoEntry;
use crate::models::{DashboardError, DeviceCodeFlow, TokenBundle};
use crate::state::AppState;
use crate::utils::constants::{DEFAULT_USER_ID, SESSION_RESTORED_TEXT};
use crate::viewmodels::{clear_fields, required, ActionResult};
use crate::views::ids::*;

/// Which branch of the startup auto-login ran
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AutoLoginOutcome {
    /// Password login with the default credentials
    DefaultCredentials { authenticated: bool },
    /// Default-credential mode is on but username or password is missing
    MissingDefaultCredentials,
    /// Nothing stored and no fallback credentials
    NoStoredSession,
    /// Stored bundle has no refresh token; the painted state is kept
    NoRefreshToken,
    Restored { user_id: String },
    /// Refresh token rejected; session cleared
    RestoreRejected { status: u16 },
    /// Network failure; session cleared
    Failed,
}

#[derive(Clone)]
pub struct AuthViewModel {
    state: AppState,
}

impl AuthViewModel {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    // ------------------------------------------------------------------------
    // Startup
    // ------------------------------------------------------------------------

    /// Runs once at page load; issues at most one request
    pub async fn auto_login(&self) -> AutoLoginOutcome {
        let default_auth = &self.state.default_auth;

        if default_auth.enabled {
            if !default_auth.has_credentials() {
                log::error!("❌ [AUTH] DEFAULT_AUTH is enabled but credentials are missing");
                return AutoLoginOutcome::MissingDefaultCredentials;
            }
            log::info!("🔑 [AUTH] DEFAULT_AUTH mode: logging in with default credentials");
            return self.auto_login_with_defaults().await;
        }

        let stored = self.state.session.load();
        let (Some(bundle), Some(user_id)) = (stored.token_bundle, stored.user_id) else {
            if default_auth.has_credentials() {
                log::info!("🔑 [AUTH] No stored session, trying default credentials");
                return self.auto_login_with_defaults().await;
            }
            log::debug!("[AUTH] No stored session to restore");
            return AutoLoginOutcome::NoStoredSession;
        };

        let Some(refresh_token) = bundle.refresh_token.filter(|t| !t.is_empty()) else {
            return AutoLoginOutcome::NoRefreshToken;
        };

        log::info!("🔄 [AUTH] Restoring session with stored refresh token...");
        match self
            .state
            .api
            .login_with_refresh_token(&refresh_token, Some(&user_id))
            .await
        {
            Ok(response) => {
                let restored_id = response.str_field("user_id").unwrap_or(&user_id).to_string();
                self.state
                    .sign_in(&restored_id, TokenBundle::from_response(&response.body));
                self.state
                    .auth_status
                    .flash(SESSION_RESTORED_TEXT, self.state.session_restored_ms);
                AutoLoginOutcome::Restored { user_id: restored_id }
            }
            Err(DashboardError::Api { status, .. }) => {
                log::warn!("⚠️ [AUTH] Session restore rejected ({}), clearing stored credentials", status);
                self.state.sign_out();
                AutoLoginOutcome::RestoreRejected { status }
            }
            Err(e) => {
                log::error!("❌ [AUTH] Auto-login error: {}", e);
                self.state.sign_out();
                AutoLoginOutcome::Failed
            }
        }
    }

    async fn auto_login_with_defaults(&self) -> AutoLoginOutcome {
        match self.login_with_default_credentials().await {
            Ok(authenticated) => AutoLoginOutcome::DefaultCredentials { authenticated },
            Err(e) => {
                log::error!("❌ [AUTH] Auto-login error: {}", e);
                self.state.sign_out();
                AutoLoginOutcome::Failed
            }
        }
    }

    /// Password login with the configured default credentials. Nothing is
    /// rendered; returns whether the login succeeded.
    pub async fn login_with_default_credentials(&self) -> Result<bool, DashboardError> {
        let Some((username, password)) = self.state.default_auth.credentials() else {
            log::warn!("⚠️ [AUTH] No default credentials configured");
            return Ok(false);
        };

        self.state.ui.set_field(USERNAME, username);

        match self.state.api.login_with_password(username, password).await {
            Ok(response) => {
                let user_id = response.str_field("user_id").unwrap_or(username).to_string();
                self.state.sign_in(&user_id, TokenBundle::from_response(&response.body));
                Ok(true)
            }
            Err(DashboardError::Api { body, .. }) => {
                log::warn!(
                    "⚠️ [AUTH] Login with default credentials failed: {}",
                    body.get("error").unwrap_or(&body)
                );
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }

    // ------------------------------------------------------------------------
    // Actions
    // ------------------------------------------------------------------------

    pub async fn request_device_code(&self) -> ActionResult {
        let response = self.state.api.request_device_code().await?;
        match serde_json::from_value::<DeviceCodeFlow>(response.body.clone()) {
            Ok(flow) => self.show_device_code(&flow),
            Err(e) => log::warn!("⚠️ [AUTH] Unexpected device code response: {}", e),
        }
        Ok(response)
    }

    fn show_device_code(&self, flow: &DeviceCodeFlow) {
        let ui = &self.state.ui;
        self.state.session.set_device_code(&flow.device_code);

        let mut entries = vec![
            InfoEntry {
                label: "User Code".to_string(),
                value: flow.user_code.clone(),
                href: None,
            },
            InfoEntry {
                label: "Verification URL".to_string(),
                value: flow.verification_url.clone(),
                href: Some(flow.verification_url.clone()),
            },
        ];
        if let Some(expires_in) = flow.expires_in {
            entries.push(InfoEntry {
                label: "Expires in".to_string(),
                value: format!("{} seconds", expires_in),
                href: None,
            });
        }
        ui.set_info_panel(
            DEVICE_CODE_INFO,
            &entries,
            "Visit the URL above and enter the user code to authorize.",
        );
        ui.show_element(DEVICE_CODE_INFO, DEVICE_CODE_INFO_DISPLAY);
        ui.show_element(DEVICE_CODE_LOGIN_FORM, DEVICE_CODE_LOGIN_FORM_DISPLAY);
        ui.set_field(DEVICE_CODE_INPUT, &flow.device_code);
    }

    pub async fn login_with_device_code(&self) -> ActionResult {
        let typed = Some(self.state.ui.get_field(DEVICE_CODE_INPUT)).filter(|code| !code.is_empty());
        let device_code = typed
            .or_else(|| self.state.session.device_code())
            .ok_or_else(|| DashboardError::validation("Please get a device code first"))?;

        let response = self.state.api.login_with_device_code(&device_code).await?;
        let user_id = response.str_field("user_id").unwrap_or(DEFAULT_USER_ID).to_string();
        self.state.sign_in(&user_id, TokenBundle::from_response(&response.body));
        self.state.ui.hide_element(DEVICE_CODE_INFO);
        self.state.ui.hide_element(DEVICE_CODE_LOGIN_FORM);
        self.state.session.clear_device_code();
        Ok(response)
    }

    pub async fn login_with_password(&self) -> ActionResult {
        let ui = self.state.ui.as_ref();
        let message = "Username and password are required";
        let username = required(ui, USERNAME, message)?;
        let password = required(ui, PASSWORD, message)?;

        let response = self
            .state
            .api
            .login_with_password(&username, &password)
            .await
            .inspect_err(|e| {
                if let DashboardError::Api { status, .. } = e {
                    log::warn!("⚠️ [AUTH] Password login rejected ({})", status);
                }
            })?;
        let user_id = response.str_field("user_id").unwrap_or(&username).to_string();
        self.state.sign_in(&user_id, TokenBundle::from_response(&response.body));
        clear_fields(ui, &[PASSWORD]);
        Ok(response)
    }

    pub async fn login_with_refresh_token(&self) -> ActionResult {
        let refresh_token = required(self.state.ui.as_ref(), REFRESH_TOKEN, "Refresh token is required")?;

        let response = self.state.api.login_with_refresh_token(&refresh_token, None).await?;
        let user_id = response.str_field("user_id").unwrap_or(DEFAULT_USER_ID).to_string();
        self.state.sign_in(&user_id, TokenBundle::from_response(&response.body));
        Ok(response)
    }

    /// New access token for the stored user; the session is re-saved when
    /// the response carries a token
    pub async fn refresh_access_token(&self) -> ActionResult {
        let user_id = self.state.user_id();
        let response = self.state.api.refresh_access_token(&user_id).await?;
        if let Some(bundle) = TokenBundle::from_response(&response.body) {
            self.state.sign_in(&user_id, Some(bundle));
        }
        Ok(response)
    }

    pub async fn logout(&self) -> ActionResult {
        let user_id = self.state.user_id();
        let response = self.state.api.logout(&user_id).await?;
        self.state.sign_out();
        if self.state.default_auth.enabled {
            self.schedule_relogin();
        }
        Ok(response)
    }

    fn schedule_relogin(&self) {
        log::info!("🔁 [AUTH] DEFAULT_AUTH mode: re-login in {} ms", self.state.relogin_delay_ms);
        let vm = self.clone();
        let task = self.state.scheduler.schedule(
            self.state.relogin_delay_ms,
            async move {
                if let Err(e) = vm.login_with_default_credentials().await {
                    log::error!("❌ [AUTH] Re-login error: {}", e);
                }
            }
            .boxed_local(),
        );
        self.state.relogin.replace(task);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DefaultAuthConfig;
    use crate::dom::UiPort;
    use crate::models::{AuthStatus, SessionState};
    use crate::services::RequestBody;
    use crate::test_support::{FakeUi, Harness};
    use crate::utils::constants::NOT_AUTHENTICATED_TEXT;
    use futures::executor::block_on;
    use serde_json::json;

    fn stored_bundle(h: &Harness, user_id: &str, bundle: TokenBundle) {
        h.session.save(&SessionState::authenticated(user_id, Some(bundle)));
    }

    // ---- auto-login --------------------------------------------------------

    #[test]
    fn default_mode_logs_in_once_and_ignores_stored_session() {
        let h = Harness::with_default_auth(DefaultAuthConfig::enabled_with("demo", "pw"));
        stored_bundle(&h, "old", TokenBundle::new("T0").with_refresh_token("R0"));
        h.transport.reply(200, json!({ "user_id": "demo", "token": { "access_token": "T1" } }));

        let outcome = block_on(AuthViewModel::new(h.state.clone()).auto_login());

        assert_eq!(outcome, AutoLoginOutcome::DefaultCredentials { authenticated: true });
        assert_eq!(h.transport.paths(), vec!["/auth/login/password"]);
        assert_eq!(h.ui.field(USERNAME), "demo");
        assert_eq!(h.session.load().user_id.as_deref(), Some("demo"));
    }

    #[test]
    fn default_mode_without_password_stops() {
        let h = Harness::with_default_auth(DefaultAuthConfig {
            enabled: true,
            username: Some("demo".into()),
            password: None,
        });

        let outcome = block_on(AuthViewModel::new(h.state.clone()).auto_login());

        assert_eq!(outcome, AutoLoginOutcome::MissingDefaultCredentials);
        assert_eq!(h.transport.call_count(), 0);
    }

    #[test]
    fn nothing_stored_and_no_fallback_makes_no_calls() {
        let h = Harness::new();

        let outcome = block_on(AuthViewModel::new(h.state.clone()).auto_login());

        assert_eq!(outcome, AutoLoginOutcome::NoStoredSession);
        assert_eq!(h.transport.call_count(), 0);
    }

    #[test]
    fn nothing_stored_uses_fallback_credentials() {
        let h = Harness::with_default_auth(DefaultAuthConfig {
            enabled: false,
            username: Some("demo".into()),
            password: Some("pw".into()),
        });

        let outcome = block_on(AuthViewModel::new(h.state.clone()).auto_login());

        assert_eq!(outcome, AutoLoginOutcome::DefaultCredentials { authenticated: true });
        assert_eq!(h.transport.paths(), vec!["/auth/login/password"]);
    }

    #[test]
    fn refresh_token_restores_session_with_returned_user() {
        let h = Harness::new();
        stored_bundle(&h, "alice", TokenBundle::new("T0").with_refresh_token("R0"));
        h.transport.reply(
            200,
            json!({ "user_id": "alice2", "token": { "access_token": "T1", "refresh_token": "R1" } }),
        );

        let outcome = block_on(AuthViewModel::new(h.state.clone()).auto_login());

        assert_eq!(outcome, AutoLoginOutcome::Restored { user_id: "alice2".into() });
        let request = h.transport.last().unwrap();
        assert_eq!(request.path, "/auth/login/refresh-token");
        assert_eq!(
            request.body,
            RequestBody::Json(json!({ "refresh_token": "R0", "user_id": "alice" }))
        );

        let state = h.session.load();
        assert_eq!(state.auth_status, AuthStatus::Authenticated);
        assert_eq!(state.user_id.as_deref(), Some("alice2"));
        assert_eq!(state.refresh_token(), Some("R1"));

        assert_eq!(h.ui.text(AUTH_STATUS), SESSION_RESTORED_TEXT);
        assert_eq!(h.scheduler.delays(), vec![2000]);
        h.scheduler.run_pending();
        assert_eq!(h.ui.text(AUTH_STATUS), "🔒 Authenticated: alice2");
    }

    #[test]
    fn restore_falls_back_to_stored_user_id() {
        let h = Harness::new();
        stored_bundle(&h, "alice", TokenBundle::new("T0").with_refresh_token("R0"));
        h.transport.reply(200, json!({ "token": { "access_token": "T1" } }));

        let outcome = block_on(AuthViewModel::new(h.state.clone()).auto_login());

        assert_eq!(outcome, AutoLoginOutcome::Restored { user_id: "alice".into() });
    }

    #[test]
    fn rejected_refresh_token_clears_session() {
        let h = Harness::new();
        stored_bundle(&h, "alice", TokenBundle::new("T0").with_refresh_token("R0"));
        h.transport.reply(401, json!({ "detail": "invalid_grant" }));

        let outcome = block_on(AuthViewModel::new(h.state.clone()).auto_login());

        assert_eq!(outcome, AutoLoginOutcome::RestoreRejected { status: 401 });
        assert_eq!(h.session.load(), SessionState::default());
        assert_eq!(h.ui.text(AUTH_STATUS), NOT_AUTHENTICATED_TEXT);
    }

    #[test]
    fn network_failure_during_restore_is_contained() {
        let h = Harness::new();
        stored_bundle(&h, "alice", TokenBundle::new("T0").with_refresh_token("R0"));
        h.transport.fail("Failed to fetch");

        let outcome = block_on(AuthViewModel::new(h.state.clone()).auto_login());

        assert_eq!(outcome, AutoLoginOutcome::Failed);
        assert!(!h.session.load().is_authenticated());
    }

    #[test]
    fn bundle_without_refresh_token_keeps_state() {
        let h = Harness::new();
        stored_bundle(&h, "alice", TokenBundle::new("T0"));

        let outcome = block_on(AuthViewModel::new(h.state.clone()).auto_login());

        assert_eq!(outcome, AutoLoginOutcome::NoRefreshToken);
        assert_eq!(h.transport.call_count(), 0);
        assert!(h.session.load().is_authenticated());
    }

    #[test]
    fn rejected_default_credentials_stay_logged_out() {
        let h = Harness::with_default_auth(DefaultAuthConfig::enabled_with("demo", "wrong"));
        h.transport.reply(401, json!({ "error": "Invalid credentials" }));

        let outcome = block_on(AuthViewModel::new(h.state.clone()).auto_login());

        assert_eq!(outcome, AutoLoginOutcome::DefaultCredentials { authenticated: false });
        assert!(!h.session.load().is_authenticated());
    }

    // ---- actions -----------------------------------------------------------

    #[test]
    fn password_login_scenario() {
        let h = Harness::with_ui(
            FakeUi::new()
                .with_field(USERNAME, "alice")
                .with_field(PASSWORD, "secret"),
        );
        h.transport.reply(200, json!({ "user_id": "alice", "token": { "access_token": "T1" } }));

        let response = block_on(AuthViewModel::new(h.state.clone()).login_with_password()).unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(
            h.transport.last().unwrap().body,
            RequestBody::Json(json!({ "username": "alice", "password": "secret" }))
        );
        let state = h.session.load();
        assert_eq!(state.auth_status, AuthStatus::Authenticated);
        assert_eq!(state.user_id.as_deref(), Some("alice"));
        assert_eq!(h.ui.field(PASSWORD), "");
        assert_eq!(h.ui.field(USERNAME), "alice");
    }

    #[test]
    fn password_login_requires_both_fields() {
        let h = Harness::with_ui(FakeUi::new().with_field(USERNAME, "alice"));

        let err = block_on(AuthViewModel::new(h.state.clone()).login_with_password()).unwrap_err();

        assert_eq!(err.into_response().body, json!({ "error": "Username and password are required" }));
        assert_eq!(h.transport.call_count(), 0);
    }

    #[test]
    fn rejected_password_login_stays_logged_out() {
        let h = Harness::with_ui(
            FakeUi::new()
                .with_field(USERNAME, "alice")
                .with_field(PASSWORD, "wrong"),
        );
        h.transport.reply(401, json!({ "error": "Invalid credentials" }));

        let err = block_on(AuthViewModel::new(h.state.clone()).login_with_password()).unwrap_err();

        assert_eq!(
            err,
            DashboardError::Api {
                status: 401,
                body: json!({ "error": "Invalid credentials" })
            }
        );
        assert!(!h.session.load().is_authenticated());
        assert_eq!(h.ui.field(PASSWORD), "wrong");
    }

    #[test]
    fn device_code_flow_fills_panel_and_logs_in() {
        let h = Harness::new();
        let vm = AuthViewModel::new(h.state.clone());
        h.transport.reply(
            200,
            json!({
                "device_code": "DC1",
                "user_code": "ABCD-1234",
                "verification_uri": "https://seedr.cc/devices",
                "expires_in": 900
            }),
        );

        block_on(vm.request_device_code()).unwrap();

        assert_eq!(h.session.device_code().as_deref(), Some("DC1"));
        assert_eq!(h.ui.field(DEVICE_CODE_INPUT), "DC1");
        assert_eq!(h.ui.display(DEVICE_CODE_LOGIN_FORM).as_deref(), Some("flex"));
        assert_eq!(h.ui.display(DEVICE_CODE_INFO).as_deref(), Some("block"));
        let (entries, _) = h.ui.panel(DEVICE_CODE_INFO).unwrap();
        assert_eq!(entries[0].value, "ABCD-1234");
        assert_eq!(entries[1].href.as_deref(), Some("https://seedr.cc/devices"));
        assert_eq!(entries[2].value, "900 seconds");

        h.transport.reply(200, json!({ "token": { "access_token": "T1" } }));
        block_on(vm.login_with_device_code()).unwrap();

        assert_eq!(
            h.transport.last().unwrap().body,
            RequestBody::Json(json!({ "device_code": "DC1" }))
        );
        assert_eq!(h.session.load().user_id.as_deref(), Some(DEFAULT_USER_ID));
        assert_eq!(h.session.device_code(), None);
        assert!(!h.ui.is_visible(DEVICE_CODE_LOGIN_FORM));
        assert!(!h.ui.is_visible(DEVICE_CODE_INFO));
    }

    #[test]
    fn device_login_falls_back_to_stored_code() {
        let h = Harness::new();
        h.session.set_device_code("DC9");

        block_on(AuthViewModel::new(h.state.clone()).login_with_device_code()).unwrap();

        assert_eq!(
            h.transport.last().unwrap().body,
            RequestBody::Json(json!({ "device_code": "DC9" }))
        );
    }

    #[test]
    fn pending_device_code_survives_a_rejected_login() {
        let h = Harness::new();
        h.session.set_device_code("DC1");
        h.transport.reply(400, json!({ "detail": "authorization_pending" }));

        let err = block_on(AuthViewModel::new(h.state.clone()).login_with_device_code()).unwrap_err();

        assert_eq!(err.into_response().status, 400);
        assert_eq!(h.session.device_code().as_deref(), Some("DC1"));
        assert!(!h.session.load().is_authenticated());
    }

    #[test]
    fn device_login_without_any_code_is_rejected() {
        let h = Harness::new();

        let err = block_on(AuthViewModel::new(h.state.clone()).login_with_device_code()).unwrap_err();

        assert_eq!(err.to_string(), "Please get a device code first");
        assert_eq!(h.transport.call_count(), 0);
    }

    #[test]
    fn refresh_token_login_requires_token() {
        let h = Harness::new();

        let err = block_on(AuthViewModel::new(h.state.clone()).login_with_refresh_token()).unwrap_err();

        assert_eq!(err.to_string(), "Refresh token is required");
        assert_eq!(h.transport.call_count(), 0);
    }

    #[test]
    fn refresh_token_login_sends_only_the_token() {
        let h = Harness::with_ui(FakeUi::new().with_field(REFRESH_TOKEN, "R1"));
        h.transport.reply(200, json!({ "user_id": "bob", "token": { "access_token": "T", "refresh_token": "R2" } }));

        block_on(AuthViewModel::new(h.state.clone()).login_with_refresh_token()).unwrap();

        assert_eq!(
            h.transport.last().unwrap().body,
            RequestBody::Json(json!({ "refresh_token": "R1" }))
        );
        assert_eq!(h.ui.text(AUTH_STATUS), "🔒 Authenticated: bob");
    }

    #[test]
    fn refresh_access_token_resaves_bundle() {
        let h = Harness::new().logged_in_as("alice");
        h.transport.reply(200, json!({ "token": { "access_token": "T2" } }));

        block_on(AuthViewModel::new(h.state.clone()).refresh_access_token()).unwrap();

        assert_eq!(h.transport.last().unwrap().query_value("user_id"), Some("alice"));
        assert_eq!(h.session.token_bundle().unwrap().access_token, "T2");
    }

    #[test]
    fn logout_clears_session() {
        let h = Harness::new().logged_in_as("alice");

        block_on(AuthViewModel::new(h.state.clone()).logout()).unwrap();

        let request = h.transport.last().unwrap();
        assert_eq!(request.path, "/auth/logout");
        assert_eq!(request.query_value("user_id"), Some("alice"));
        assert_eq!(h.session.load(), SessionState::default());
        assert!(h.scheduler.delays().is_empty());
    }

    #[test]
    fn failed_logout_keeps_session() {
        let h = Harness::new().logged_in_as("alice");
        h.transport.reply(500, json!({ "error": "boom" }));

        let err = block_on(AuthViewModel::new(h.state.clone()).logout()).unwrap_err();

        assert_eq!(err.into_response().status, 500);
        assert!(h.session.load().is_authenticated());
    }

    #[test]
    fn logout_in_default_mode_schedules_one_relogin() {
        let h = Harness::with_default_auth(DefaultAuthConfig::enabled_with("demo", "pw")).logged_in_as("demo");

        block_on(AuthViewModel::new(h.state.clone()).logout()).unwrap();
        assert_eq!(h.scheduler.delays(), vec![500]);
        assert_eq!(h.transport.call_count(), 1);

        assert_eq!(h.scheduler.run_pending(), 1);
        assert_eq!(h.transport.paths(), vec!["/auth/logout", "/auth/login/password"]);
        assert!(h.session.load().is_authenticated());
    }

    #[test]
    fn manual_login_cancels_pending_relogin() {
        let h = Harness::with_default_auth(DefaultAuthConfig::enabled_with("demo", "pw")).logged_in_as("demo");
        let vm = AuthViewModel::new(h.state.clone());
        block_on(vm.logout()).unwrap();

        h.ui.set_field(USERNAME, "alice");
        h.ui.set_field(PASSWORD, "secret");
        h.transport.reply(200, json!({ "user_id": "alice" }));
        block_on(vm.login_with_password()).unwrap();

        assert_eq!(h.scheduler.run_pending(), 0);
        assert_eq!(h.session.load().user_id.as_deref(), Some("alice"));
    }
}
