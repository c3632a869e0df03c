//! Page events and disposable listener registrations.
//!
//! DESIGN
//! ======
//! Every listener the controller installs is represented by a
//! [`Subscription`]. Dropping or disposing it detaches the listener, so
//! tearing a controller down is deterministic.

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

use std::fmt;
use std::rc::Rc;

/// Listener callback.
pub type Handler = Rc<dyn Fn()>;

/// Interactions the controller reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageEvent {
    /// Click on the theme toggle.
    ThemeToggle,
    /// Window scroll.
    Scroll,
    /// Click on the back-to-top control.
    BackToTop,
    /// `input` on the message field.
    MessageInput,
    /// `change` on the name field.
    NameChange,
    /// `change` on the email field.
    EmailChange,
    /// `change` on any preferred-contact radio.
    PreferredChange,
    /// `change` on the inquiry selector.
    InquiryChange,
    /// `input` anywhere inside the form.
    FormInput,
    /// Form `submit`; default navigation is already prevented.
    Submit,
}

/// Source of page events.
pub trait EventSource {
    /// Attach `handler` to `event`. Returns an inert subscription when the
    /// target is missing.
    fn listen(&self, event: PageEvent, handler: Handler) -> Subscription;
}

/// Handle to an attached listener.
#[must_use = "dropping a Subscription detaches its listener"]
pub struct Subscription {
    detach: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(detach: impl FnOnce() + 'static) -> Self {
        Self { detach: Some(Box::new(detach)) }
    }

    /// Subscription with nothing to detach.
    pub fn inert() -> Self {
        Self { detach: None }
    }

    pub fn is_active(&self) -> bool {
        self.detach.is_some()
    }

    /// Detach now. Idempotent.
    pub fn dispose(&mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}

/// Owned set of subscriptions torn down together.
#[derive(Debug, Default)]
pub struct Subscriptions {
    items: Vec<Subscription>,
}

impl Subscriptions {
    pub fn push(&mut self, subscription: Subscription) {
        self.items.push(subscription);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Dispose in reverse registration order.
    pub fn dispose_all(&mut self) {
        while let Some(mut subscription) = self.items.pop() {
            subscription.dispose();
        }
    }
}

impl Drop for Subscriptions {
    fn drop(&mut self) {
        self.dispose_all();
    }
}
