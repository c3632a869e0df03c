//! Contact form submission: honeypot, validation, delivery and status.
//!
//! DESIGN
//! ======
//! `submit` walks the lifecycle in [`SubmissionPhase`] and always returns to
//! `Idle`. Every failure is caught here; callers only see a
//! [`SubmitOutcome`].
//!
//! ERROR HANDLING
//! ==============
//! Delivery errors are logged with their detail and replaced by one fixed
//! message on the page. The bot short-circuit shows the same success banner
//! a real submission would.

#[cfg(test)]
#[path = "submission_test.rs"]
mod submission_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::config::FormConfig;
use crate::controller::field_assist::FieldAssist;
use crate::error::SubmitError;
use crate::net::api::Transport;
use crate::net::payload::FormPayload;
use crate::state::submission::{StatusMessage, SubmissionPhase, SubmitOutcome};
use crate::util::platform::{ClientMeta, Timer};
use crate::view::{Field, FormView};

pub struct SubmissionPipeline {
    config: FormConfig,
    view: Rc<dyn FormView>,
    assist: Rc<FieldAssist>,
    transport: Rc<dyn Transport>,
    timer: Rc<dyn Timer>,
    client: Rc<dyn ClientMeta>,
    phase: Cell<SubmissionPhase>,
    history: RefCell<Vec<SubmissionPhase>>,
}

impl SubmissionPipeline {
    pub fn new(
        config: FormConfig,
        view: Rc<dyn FormView>,
        assist: Rc<FieldAssist>,
        transport: Rc<dyn Transport>,
        timer: Rc<dyn Timer>,
        client: Rc<dyn ClientMeta>,
    ) -> Self {
        Self {
            config,
            view,
            assist,
            transport,
            timer,
            client,
            phase: Cell::new(SubmissionPhase::Idle),
            history: RefCell::new(Vec::new()),
        }
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase.get()
    }

    /// Phases entered since construction, oldest first.
    pub fn history(&self) -> Vec<SubmissionPhase> {
        self.history.borrow().clone()
    }

    pub fn clear_status(&self) {
        self.view.set_status(None);
    }

    /// Handle one submit. Default navigation is prevented by the event binding.
    pub async fn submit(&self) -> SubmitOutcome {
        self.clear_status();

        if self.is_bot() {
            self.fake_success();
            return SubmitOutcome::Suppressed;
        }

        self.enter(SubmissionPhase::Validating);
        if !self.view.check_validity() {
            self.view.focus_first_invalid();
            self.view.report_validity();
            self.view.set_status(Some(&StatusMessage::validation_error()));
            self.enter(SubmissionPhase::Rejected);
            self.enter(SubmissionPhase::Idle);
            return SubmitOutcome::Rejected;
        }

        let payload = self.payload();

        self.enter(SubmissionPhase::Sending);
        self.view.set_loading(true);

        let outcome = match self.deliver(&payload).await {
            Ok(()) => {
                self.enter(SubmissionPhase::Succeeded);
                self.complete();
                SubmitOutcome::Sent
            }
            Err(e) => {
                leptos::logging::error!("contact form submission failed: {e}");
                self.enter(SubmissionPhase::Failed);
                self.view.set_status(Some(&StatusMessage::send_error()));
                SubmitOutcome::Failed
            }
        };

        self.view.set_loading(false);
        self.enter(SubmissionPhase::Idle);
        outcome
    }

    /// Honeypot filled in.
    fn is_bot(&self) -> bool {
        self.view
            .value(Field::Company)
            .is_some_and(|value| !value.trim().is_empty())
    }

    fn fake_success(&self) {
        self.view.set_status(Some(&StatusMessage::success()));
        self.view.reset();
        self.view.set_value(Field::Message, "");
        self.assist.update_phone_requirement();
        self.assist.reset_counter();
    }

    fn payload(&self) -> FormPayload {
        FormPayload::build(
            self.view.entries(),
            &self.client.timestamp(),
            &self.client.user_agent(),
        )
    }

    async fn deliver(&self, payload: &FormPayload) -> Result<(), SubmitError> {
        match &self.config.endpoint {
            Some(url) => {
                let body = payload.to_json()?;
                self.transport.post_json(url, &body).await
            }
            None => {
                self.timer.sleep(self.config.simulated_delay).await;
                Ok(())
            }
        }
    }

    /// Success banner, then reset while keeping name/email.
    fn complete(&self) {
        self.view.set_status(Some(&StatusMessage::success()));
        let name = self.view.value(Field::Name).unwrap_or_default();
        let email = self.view.value(Field::Email).unwrap_or_default();
        self.view.reset();
        self.view.set_value(Field::Name, &name);
        self.view.set_value(Field::Email, &email);
        self.assist.update_phone_requirement();
        self.assist.reset_counter();
    }

    fn enter(&self, next: SubmissionPhase) {
        let current = self.phase.get();
        if !current.can_advance_to(next) {
            leptos::logging::debug_warn!("unexpected submission transition {current:?} -> {next:?}");
        }
        self.phase.set(next);
        self.history.borrow_mut().push(next);
    }
}
