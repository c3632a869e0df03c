//! In-memory page, transport and timer used by unit tests.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;
use std::time::Duration;

use futures::executor::LocalPool;
use futures::future::LocalBoxFuture;
use futures::task::LocalSpawnExt;

use crate::config::FormConfig;
use crate::controller::{FormController, Platform, Spawner};
use crate::error::SubmitError;
use crate::events::{EventSource, Handler, PageEvent, Subscription};
use crate::net::api::{Transport, rejected};
use crate::state::submission::StatusMessage;
use crate::util::platform::{ClientMeta, Timer};
use crate::util::storage::MemoryStorage;
use crate::view::{Field, FormView, PageChrome};

pub const TIMESTAMP: &str = "2026-10-19T12:00:00.000Z";
pub const USER_AGENT: &str = "Mozilla/5.0 (test)";

// =============================================================================
// PAGE
// =============================================================================

#[derive(Clone, Debug, Default)]
pub struct FieldState {
    pub value: String,
    pub default: String,
    pub required: bool,
    pub aria_required: bool,
    pub placeholder: String,
    pub max_length: Option<String>,
    pub email: bool,
}

impl FieldState {
    fn required() -> Self {
        Self { required: true, ..Self::default() }
    }

    fn is_valid(&self) -> bool {
        if self.value.is_empty() {
            return !self.required;
        }
        !self.email || looks_like_email(&self.value)
    }
}

fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
        }
        None => false,
    }
}

type Listeners = Rc<RefCell<Vec<(u64, PageEvent, Handler)>>>;

/// Contact page without a browser.
#[derive(Default)]
pub struct FakePage {
    pub fields: RefCell<BTreeMap<Field, FieldState>>,
    pub preferred: RefCell<Option<String>>,
    pub preferred_default: Option<String>,
    pub status: RefCell<Option<StatusMessage>>,
    pub counter: RefCell<String>,
    pub loading: Cell<bool>,
    pub loading_log: RefCell<Vec<bool>>,
    pub resets: Cell<usize>,
    pub focused: Cell<Option<Field>>,
    pub reports: Cell<usize>,
    pub theme: RefCell<Option<String>>,
    pub icon: RefCell<String>,
    pub theme_color: RefCell<String>,
    pub prefers_dark: Cell<bool>,
    pub scroll_offset: Cell<f64>,
    pub back_to_top_visible: Cell<bool>,
    pub scroll_to_top_calls: Cell<usize>,
    listeners: Listeners,
    next_id: Cell<u64>,
}

impl FakePage {
    /// The markup rendered by `ContactPage`: name/email/message/consent
    /// required, email typed, email radio checked by default.
    pub fn contact_form() -> Self {
        let mut fields = BTreeMap::new();
        fields.insert(Field::Name, FieldState::required());
        fields.insert(Field::Email, FieldState { email: true, ..FieldState::required() });
        fields.insert(Field::Phone, FieldState::default());
        fields.insert(Field::Subject, FieldState::default());
        fields.insert(Field::Inquiry, FieldState::default());
        fields.insert(Field::Message, FieldState::required());
        fields.insert(Field::Consent, FieldState::required());
        fields.insert(Field::Company, FieldState::default());
        Self {
            fields: RefCell::new(fields),
            preferred: RefCell::new(Some("email".to_owned())),
            preferred_default: Some("email".to_owned()),
            ..Self::default()
        }
    }

    pub fn with_max_length(self, max: &str) -> Self {
        if let Some(state) = self.fields.borrow_mut().get_mut(&Field::Message) {
            state.max_length = Some(max.to_owned());
        }
        self
    }

    pub fn without_field(self, field: Field) -> Self {
        self.fields.borrow_mut().remove(&field);
        self
    }

    pub fn field(&self, field: Field) -> FieldState {
        self.fields.borrow().get(&field).cloned().unwrap_or_default()
    }

    pub fn status_text(&self) -> Option<String> {
        self.status.borrow().as_ref().map(|s| s.text.clone())
    }

    pub fn counter_text(&self) -> String {
        self.counter.borrow().clone()
    }

    /// Fill a valid submission.
    pub fn fill_valid(&self, name: &str, email: &str, message: &str) {
        self.set_value(Field::Name, name);
        self.set_value(Field::Email, email);
        self.set_value(Field::Message, message);
        self.set_value(Field::Consent, "on");
    }

    /// User typing: updates the value and fires `input` events.
    pub fn type_into(&self, field: Field, value: &str) {
        self.set_value(field, value);
        if field == Field::Message {
            self.fire(PageEvent::MessageInput);
        }
        self.fire(PageEvent::FormInput);
    }

    /// Committed edit: fires the field's `change` event.
    pub fn change(&self, field: Field, value: &str) {
        self.set_value(field, value);
        match field {
            Field::Name => self.fire(PageEvent::NameChange),
            Field::Email => self.fire(PageEvent::EmailChange),
            Field::Inquiry => self.fire(PageEvent::InquiryChange),
            _ => {}
        }
    }

    pub fn choose_preferred(&self, value: Option<&str>) {
        *self.preferred.borrow_mut() = value.map(str::to_owned);
        self.fire(PageEvent::PreferredChange);
        self.fire(PageEvent::FormInput);
    }

    pub fn fire(&self, event: PageEvent) {
        let handlers: Vec<Handler> = self
            .listeners
            .borrow()
            .iter()
            .filter(|(_, e, _)| *e == event)
            .map(|(_, _, h)| Rc::clone(h))
            .collect();
        for handler in handlers {
            handler();
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    fn first_invalid(&self) -> Option<Field> {
        let fields = self.fields.borrow();
        Field::ALL
            .into_iter()
            .find(|field| fields.get(field).is_some_and(|state| !state.is_valid()))
    }
}

impl FormView for FakePage {
    fn value(&self, field: Field) -> Option<String> {
        self.fields.borrow().get(&field).map(|s| s.value.clone())
    }

    fn set_value(&self, field: Field, value: &str) {
        if let Some(state) = self.fields.borrow_mut().get_mut(&field) {
            state.value = value.to_owned();
        }
    }

    fn max_length_attribute(&self, field: Field) -> Option<String> {
        self.fields.borrow().get(&field).and_then(|s| s.max_length.clone())
    }

    fn set_required(&self, field: Field, required: bool) {
        if let Some(state) = self.fields.borrow_mut().get_mut(&field) {
            state.required = required;
            state.aria_required = required;
        }
    }

    fn set_placeholder(&self, field: Field, text: &str) {
        if let Some(state) = self.fields.borrow_mut().get_mut(&field) {
            state.placeholder = text.to_owned();
        }
    }

    fn checked_preferred(&self) -> Option<String> {
        self.preferred.borrow().clone()
    }

    fn set_counter_text(&self, text: &str) {
        *self.counter.borrow_mut() = text.to_owned();
    }

    fn set_status(&self, status: Option<&StatusMessage>) {
        *self.status.borrow_mut() = status.cloned();
    }

    fn set_loading(&self, loading: bool) {
        self.loading.set(loading);
        self.loading_log.borrow_mut().push(loading);
    }

    fn reset(&self) {
        self.resets.set(self.resets.get() + 1);
        for state in self.fields.borrow_mut().values_mut() {
            state.value = state.default.clone();
        }
        *self.preferred.borrow_mut() = self.preferred_default.clone();
    }

    fn check_validity(&self) -> bool {
        self.first_invalid().is_none()
    }

    fn focus_first_invalid(&self) {
        self.focused.set(self.first_invalid());
    }

    fn report_validity(&self) {
        self.reports.set(self.reports.get() + 1);
    }

    fn entries(&self) -> Vec<(String, String)> {
        let fields = self.fields.borrow();
        let mut out = Vec::new();
        for field in Field::ALL {
            let Some(state) = fields.get(&field) else {
                continue;
            };
            if field == Field::Consent && state.value.is_empty() {
                continue;
            }
            out.push((field.id().to_owned(), state.value.clone()));
            if field == Field::Phone {
                if let Some(preferred) = self.preferred.borrow().clone() {
                    out.push(("preferred".to_owned(), preferred));
                }
            }
        }
        out
    }
}

impl PageChrome for FakePage {
    fn theme_attribute(&self) -> Option<String> {
        self.theme.borrow().clone()
    }

    fn set_theme_attribute(&self, mode: &str) {
        *self.theme.borrow_mut() = Some(mode.to_owned());
    }

    fn set_toggle_icon(&self, class: &str) {
        *self.icon.borrow_mut() = class.to_owned();
    }

    fn set_theme_color(&self, color: &str) {
        *self.theme_color.borrow_mut() = color.to_owned();
    }

    fn prefers_dark(&self) -> bool {
        self.prefers_dark.get()
    }

    fn scroll_y(&self) -> f64 {
        self.scroll_offset.get()
    }

    fn set_back_to_top_visible(&self, visible: bool) {
        self.back_to_top_visible.set(visible);
    }

    fn scroll_to_top(&self) {
        self.scroll_to_top_calls.set(self.scroll_to_top_calls.get() + 1);
        self.scroll_offset.set(0.0);
    }
}

impl EventSource for FakePage {
    fn listen(&self, event: PageEvent, handler: Handler) -> Subscription {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.listeners.borrow_mut().push((id, event, handler));
        let listeners = Rc::clone(&self.listeners);
        Subscription::new(move || listeners.borrow_mut().retain(|(other, _, _)| *other != id))
    }
}

// =============================================================================
// TRANSPORT / TIMER / CLIENT
// =============================================================================

#[derive(Clone, Debug)]
pub enum Reply {
    Ok,
    Status(u16, String),
    Offline,
}

pub struct FakeTransport {
    pub requests: RefCell<Vec<(String, String)>>,
    pub reply: RefCell<Reply>,
}

impl Default for FakeTransport {
    fn default() -> Self {
        Self { requests: RefCell::new(Vec::new()), reply: RefCell::new(Reply::Ok) }
    }
}

impl FakeTransport {
    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for FakeTransport {
    async fn post_json(&self, url: &str, body: &str) -> Result<(), SubmitError> {
        self.requests
            .borrow_mut()
            .push((url.to_owned(), body.to_owned()));
        match self.reply.borrow().clone() {
            Reply::Ok => Ok(()),
            Reply::Status(status, body) => Err(rejected(status, &body)),
            Reply::Offline => Err(SubmitError::Network("offline".to_owned())),
        }
    }
}

#[derive(Default)]
pub struct FakeTimer {
    pub sleeps: RefCell<Vec<Duration>>,
}

#[async_trait::async_trait(?Send)]
impl Timer for FakeTimer {
    async fn sleep(&self, delay: Duration) {
        self.sleeps.borrow_mut().push(delay);
    }
}

pub struct FixedClient;

impl ClientMeta for FixedClient {
    fn timestamp(&self) -> String {
        TIMESTAMP.to_owned()
    }

    fn user_agent(&self) -> String {
        USER_AGENT.to_owned()
    }
}

// =============================================================================
// HARNESS
// =============================================================================

/// Fakes plus the executor that runs spawned submissions.
pub struct Harness {
    pub page: Rc<FakePage>,
    pub storage: Rc<MemoryStorage>,
    pub transport: Rc<FakeTransport>,
    pub timer: Rc<FakeTimer>,
    pub pool: RefCell<LocalPool>,
}

impl Harness {
    pub fn new(page: FakePage, storage: MemoryStorage) -> Self {
        Self::with_storage(page, Rc::new(storage))
    }

    /// Share storage with another harness, as a reload would.
    pub fn with_storage(page: FakePage, storage: Rc<MemoryStorage>) -> Self {
        Self {
            page: Rc::new(page),
            storage,
            transport: Rc::new(FakeTransport::default()),
            timer: Rc::new(FakeTimer::default()),
            pool: RefCell::new(LocalPool::new()),
        }
    }

    pub fn contact_form() -> Self {
        Self::new(FakePage::contact_form(), MemoryStorage::new())
    }

    pub fn platform(&self) -> Platform {
        let spawner = self.pool.borrow().spawner();
        let spawn: Spawner = Rc::new(move |fut: LocalBoxFuture<'static, ()>| {
            if let Err(e) = spawner.spawn_local(fut) {
                leptos::logging::error!("test spawner shut down: {e}");
            }
        });
        Platform {
            view: self.page.clone(),
            chrome: self.page.clone(),
            events: self.page.clone(),
            storage: self.storage.clone(),
            transport: self.transport.clone(),
            timer: self.timer.clone(),
            client: Rc::new(FixedClient),
            spawner: spawn,
        }
    }

    pub fn install(&self, config: FormConfig) -> FormController {
        FormController::install(self.platform(), config)
    }

    /// Drive spawned futures until none can progress.
    pub fn run(&self) {
        self.pool.borrow_mut().run_until_stalled();
    }
}
