// In-memory fakes for the ports, shared by the unit tests

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::rc::Rc;

use async_trait::async_trait;
use futures::future::LocalBoxFuture;
use serde_json::{json, Value};

use crate::config::{AppConfig, DefaultAuthConfig};
use crate::dom::{InfoEntry, UiPort};
use crate::models::{ApiResponse, DashboardError, TorrentFile};
use crate::services::{ApiRequest, HttpTransport};
use crate::state::{AppState, SessionStore};
use crate::utils::{MemoryStorage, ScheduledTask, Scheduler};

// ----------------------------------------------------------------------------
// UI
// ----------------------------------------------------------------------------

/// Page state visible to assertions
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UiSnapshot {
    pub fields: BTreeMap<String, String>,
    pub texts: BTreeMap<String, String>,
    pub classes: BTreeMap<String, String>,
    /// Shown elements and the display value they were shown with
    pub displays: BTreeMap<String, String>,
}

#[derive(Default)]
pub struct FakeUi {
    page: RefCell<UiSnapshot>,
    checked: RefCell<BTreeSet<String>>,
    panels: RefCell<BTreeMap<String, (Vec<InfoEntry>, String)>>,
    file: RefCell<Option<TorrentFile>>,
    confirm_answer: Cell<bool>,
    confirm_prompts: RefCell<Vec<String>>,
    scrolls: Cell<usize>,
}

impl FakeUi {
    pub fn new() -> Self {
        let ui = Self::default();
        ui.confirm_answer.set(true);
        ui
    }

    pub fn with_field(self, id: &str, value: &str) -> Self {
        self.set_field(id, value);
        self
    }

    pub fn field(&self, id: &str) -> String {
        self.get_field(id)
    }

    pub fn class(&self, id: &str) -> String {
        self.page.borrow().classes.get(id).cloned().unwrap_or_default()
    }

    pub fn has_class(&self, id: &str, class: &str) -> bool {
        self.class(id).split_whitespace().any(|c| c == class)
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.page.borrow().displays.contains_key(id)
    }

    pub fn display(&self, id: &str) -> Option<String> {
        self.page.borrow().displays.get(id).cloned()
    }

    pub fn check(&self, id: &str) {
        self.checked.borrow_mut().insert(id.to_string());
    }

    pub fn select_file(&self, name: &str, bytes: &[u8]) {
        *self.file.borrow_mut() = Some(TorrentFile {
            name: name.to_string(),
            bytes: bytes.to_vec(),
        });
    }

    pub fn answer_confirm(&self, answer: bool) {
        self.confirm_answer.set(answer);
    }

    pub fn confirm_prompts(&self) -> Vec<String> {
        self.confirm_prompts.borrow().clone()
    }

    pub fn panel(&self, id: &str) -> Option<(Vec<InfoEntry>, String)> {
        self.panels.borrow().get(id).cloned()
    }

    pub fn scroll_count(&self) -> usize {
        self.scrolls.get()
    }

    pub fn snapshot(&self) -> UiSnapshot {
        self.page.borrow().clone()
    }

    /// Parsed content of the response panel
    pub fn rendered_body(&self) -> Value {
        serde_json::from_str(&self.text(crate::views::ids::RESPONSE_OUTPUT)).unwrap_or(Value::Null)
    }
}

#[async_trait(?Send)]
impl UiPort for FakeUi {
    fn get_field(&self, id: &str) -> String {
        self.page.borrow().fields.get(id).cloned().unwrap_or_default()
    }

    fn set_field(&self, id: &str, value: &str) {
        self.page.borrow_mut().fields.insert(id.to_string(), value.to_string());
    }

    fn is_checked(&self, id: &str) -> bool {
        self.checked.borrow().contains(id)
    }

    fn show_element(&self, id: &str, display: &str) {
        self.page.borrow_mut().displays.insert(id.to_string(), display.to_string());
    }

    fn hide_element(&self, id: &str) {
        self.page.borrow_mut().displays.remove(id);
    }

    fn text(&self, id: &str) -> String {
        self.page.borrow().texts.get(id).cloned().unwrap_or_default()
    }

    fn set_text(&self, id: &str, text: &str) {
        self.page.borrow_mut().texts.insert(id.to_string(), text.to_string());
    }

    fn set_class(&self, id: &str, class: &str) {
        self.page.borrow_mut().classes.insert(id.to_string(), class.to_string());
    }

    fn toggle_class(&self, id: &str, class: &str, on: bool) {
        let mut classes: Vec<String> = self
            .class(id)
            .split_whitespace()
            .filter(|c| *c != class)
            .map(str::to_string)
            .collect();
        if on {
            classes.push(class.to_string());
        }
        self.set_class(id, &classes.join(" "));
    }

    fn set_info_panel(&self, id: &str, entries: &[InfoEntry], note: &str) {
        self.panels
            .borrow_mut()
            .insert(id.to_string(), (entries.to_vec(), note.to_string()));
    }

    fn scroll_into_view(&self, _selector: &str) {
        self.scrolls.set(self.scrolls.get() + 1);
    }

    fn confirm(&self, message: &str) -> bool {
        self.confirm_prompts.borrow_mut().push(message.to_string());
        self.confirm_answer.get()
    }

    async fn read_file(&self, _id: &str) -> Result<Option<TorrentFile>, String> {
        Ok(self.file.borrow().clone())
    }
}

// ----------------------------------------------------------------------------
// Transport
// ----------------------------------------------------------------------------

/// Records every request; replies from a script, then `200 {}`
#[derive(Default)]
pub struct FakeTransport {
    requests: RefCell<Vec<ApiRequest>>,
    replies: RefCell<VecDeque<Result<ApiResponse, DashboardError>>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(&self, status: u16, body: Value) {
        self.replies.borrow_mut().push_back(Ok(ApiResponse::new(status, body)));
    }

    pub fn fail(&self, message: &str) {
        self.replies
            .borrow_mut()
            .push_back(Err(DashboardError::transport(message)));
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    pub fn paths(&self) -> Vec<String> {
        self.requests.borrow().iter().map(|r| r.path.clone()).collect()
    }

    pub fn call_count(&self) -> usize {
        self.requests.borrow().len()
    }

    pub fn last(&self) -> Option<ApiRequest> {
        self.requests.borrow().last().cloned()
    }
}

#[async_trait(?Send)]
impl HttpTransport for FakeTransport {
    async fn send(&self, _base_url: &str, request: ApiRequest) -> Result<ApiResponse, DashboardError> {
        self.requests.borrow_mut().push(request);
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(ApiResponse::new(200, json!({}))))
    }
}

// ----------------------------------------------------------------------------
// Scheduler
// ----------------------------------------------------------------------------

/// Keeps scheduled tasks until the test runs them
#[derive(Default)]
pub struct ManualScheduler {
    tasks: RefCell<Vec<(u32, ScheduledTask, LocalBoxFuture<'static, ()>)>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delays of the tasks still waiting, cancelled ones included
    pub fn delays(&self) -> Vec<u32> {
        self.tasks.borrow().iter().map(|(delay, _, _)| *delay).collect()
    }

    /// Fires every task scheduled so far, skipping cancelled ones
    pub fn run_pending(&self) -> usize {
        let tasks: Vec<_> = self.tasks.borrow_mut().drain(..).collect();
        let mut ran = 0;
        for (_, token, task) in tasks {
            if token.is_cancelled() {
                continue;
            }
            futures::executor::block_on(task);
            ran += 1;
        }
        ran
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay_ms: u32, task: LocalBoxFuture<'static, ()>) -> ScheduledTask {
        let token = ScheduledTask::new();
        self.tasks.borrow_mut().push((delay_ms, token.clone(), task));
        token
    }
}

// ----------------------------------------------------------------------------
// Wiring
// ----------------------------------------------------------------------------

pub struct Harness {
    pub state: AppState,
    pub ui: Rc<FakeUi>,
    pub transport: Rc<FakeTransport>,
    pub scheduler: Rc<ManualScheduler>,
    pub session: SessionStore,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_default_auth(DefaultAuthConfig::default())
    }

    pub fn with_default_auth(default_auth: DefaultAuthConfig) -> Self {
        Self::build(FakeUi::new(), default_auth)
    }

    pub fn with_ui(ui: FakeUi) -> Self {
        Self::build(ui, DefaultAuthConfig::default())
    }

    fn build(ui: FakeUi, default_auth: DefaultAuthConfig) -> Self {
        let ui = Rc::new(ui);
        let transport = Rc::new(FakeTransport::new());
        let scheduler = Rc::new(ManualScheduler::new());
        let config = AppConfig {
            default_auth,
            ..AppConfig::default()
        };
        let state = AppState::new(
            Rc::new(MemoryStorage::new()),
            ui.clone(),
            transport.clone(),
            scheduler.clone(),
            &config,
        );
        let session = state.session.clone();
        Self {
            state,
            ui,
            transport,
            scheduler,
            session,
        }
    }

    /// Stores an authenticated session as a previous page load would have
    pub fn logged_in_as(self, user_id: &str) -> Self {
        self.session
            .save(&crate::models::SessionState::authenticated(user_id, None));
        self
    }
}
