//! The page controller: wires theme, scroll, field helpers and submission to
//! page events.
//!
//! ARCHITECTURE
//! ============
//! `FormController::install` runs the startup pass (theme, back-to-top,
//! counter, remembered fields, phone requirement) and registers one
//! subscription per event. Components share the page only through the
//! capabilities in [`Platform`]; handlers hold `Rc`s to the components.
//! The async submit is handed to the injected spawner so the event callback
//! itself never blocks.


pub mod field_assist;
pub mod scroll;
pub mod submission;
pub mod theme;

use std::rc::Rc;

use futures::future::LocalBoxFuture;

use crate::config::FormConfig;
use crate::events::{EventSource, Handler, PageEvent, Subscriptions};
use crate::net::api::Transport;
use crate::util::platform::{ClientMeta, Timer};
use crate::util::storage::Storage;
use crate::view::{Field, FormView, PageChrome};

use self::field_assist::FieldAssist;
use self::scroll::ScrollAffordance;
use self::submission::SubmissionPipeline;
use self::theme::ThemeManager;

/// Runs a detached local future.
pub type Spawner = Rc<dyn Fn(LocalBoxFuture<'static, ()>)>;

/// Capabilities the controller is built from.
#[derive(Clone)]
pub struct Platform {
    pub view: Rc<dyn FormView>,
    pub chrome: Rc<dyn PageChrome>,
    pub events: Rc<dyn EventSource>,
    pub storage: Rc<dyn Storage>,
    pub transport: Rc<dyn Transport>,
    pub timer: Rc<dyn Timer>,
    pub client: Rc<dyn ClientMeta>,
    pub spawner: Spawner,
}

/// Installed controller. Dropping it detaches every listener.
pub struct FormController {
    theme: Rc<ThemeManager>,
    scroll: Rc<ScrollAffordance>,
    assist: Rc<FieldAssist>,
    pipeline: Rc<SubmissionPipeline>,
    subscriptions: Subscriptions,
}

impl FormController {
    /// Run the startup pass and attach all listeners.
    pub fn install(platform: Platform, config: FormConfig) -> Self {
        let theme = Rc::new(ThemeManager::new(
            Rc::clone(&platform.chrome),
            Rc::clone(&platform.storage),
        ));
        let scroll = Rc::new(ScrollAffordance::new(
            Rc::clone(&platform.chrome),
            config.scroll_threshold,
        ));
        let assist = Rc::new(FieldAssist::new(
            Rc::clone(&platform.view),
            Rc::clone(&platform.storage),
            config.default_max_length,
        ));
        let live = config.is_live();
        let pipeline = Rc::new(SubmissionPipeline::new(
            config,
            Rc::clone(&platform.view),
            Rc::clone(&assist),
            Rc::clone(&platform.transport),
            Rc::clone(&platform.timer),
            Rc::clone(&platform.client),
        ));

        let mode = theme.init();
        scroll.refresh();
        assist.update_counter();
        assist.restore_contact();
        assist.update_phone_requirement();

        let mut controller = Self {
            theme,
            scroll,
            assist,
            pipeline,
            subscriptions: Subscriptions::default(),
        };
        controller.wire(platform.events.as_ref(), platform.spawner);
        leptos::logging::log!(
            "contact form ready (theme={}, mode={})",
            mode.as_str(),
            if live { "live" } else { "demo" }
        );
        controller
    }

    fn wire(&mut self, events: &dyn EventSource, spawner: Spawner) {
        let theme = Rc::clone(&self.theme);
        self.on(events, PageEvent::ThemeToggle, move || {
            theme.toggle();
        });

        let scroll = Rc::clone(&self.scroll);
        self.on(events, PageEvent::Scroll, move || {
            scroll.refresh();
        });
        let scroll = Rc::clone(&self.scroll);
        self.on(events, PageEvent::BackToTop, move || scroll.scroll_to_top());

        let assist = Rc::clone(&self.assist);
        self.on(events, PageEvent::MessageInput, move || {
            assist.update_counter();
        });
        let assist = Rc::clone(&self.assist);
        self.on(events, PageEvent::NameChange, move || assist.persist(Field::Name));
        let assist = Rc::clone(&self.assist);
        self.on(events, PageEvent::EmailChange, move || assist.persist(Field::Email));
        let assist = Rc::clone(&self.assist);
        self.on(events, PageEvent::PreferredChange, move || {
            assist.update_phone_requirement();
        });
        let assist = Rc::clone(&self.assist);
        self.on(events, PageEvent::InquiryChange, move || {
            assist.update_subject_placeholder();
        });

        let pipeline = Rc::clone(&self.pipeline);
        self.on(events, PageEvent::FormInput, move || pipeline.clear_status());

        let pipeline = Rc::clone(&self.pipeline);
        self.on(events, PageEvent::Submit, move || {
            let pipeline = Rc::clone(&pipeline);
            spawner(Box::pin(async move {
                pipeline.submit().await;
            }));
        });
    }

    fn on(&mut self, events: &dyn EventSource, event: PageEvent, handler: impl Fn() + 'static) {
        let handler: Handler = Rc::new(handler);
        self.subscriptions.push(events.listen(event, handler));
    }

    pub fn theme(&self) -> &ThemeManager {
        &self.theme
    }

    pub fn scroll(&self) -> &ScrollAffordance {
        &self.scroll
    }

    pub fn assist(&self) -> &FieldAssist {
        &self.assist
    }

    pub fn pipeline(&self) -> &SubmissionPipeline {
        &self.pipeline
    }

    /// Detach every listener.
    pub fn dispose(&mut self) {
        self.subscriptions.dispose_all();
    }
}
