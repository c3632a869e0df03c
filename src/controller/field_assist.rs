//! Field-level helpers: character counter, remembered name/email, the
//! phone requirement and the subject placeholder.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort. When storage is unavailable the fields simply
//! start empty and edits are not remembered; nothing else changes.

#[cfg(test)]
#[path = "field_assist_test.rs"]
mod field_assist_test;

use std::rc::Rc;

use crate::state::contact::{
    ContactConvenienceFields, EMAIL_KEY, NAME_KEY, PreferredContactMethod, counter_text,
    message_length, resolve_max_length, subject_placeholder,
};
use crate::util::storage::{self, Storage};
use crate::view::{Field, FormView};

pub struct FieldAssist {
    view: Rc<dyn FormView>,
    storage: Rc<dyn Storage>,
    default_max_length: usize,
}

impl FieldAssist {
    pub fn new(view: Rc<dyn FormView>, storage: Rc<dyn Storage>, default_max_length: usize) -> Self {
        Self { view, storage, default_max_length }
    }

    // =========================================================================
    // COUNTER
    // =========================================================================

    pub fn max_length(&self) -> usize {
        resolve_max_length(
            self.view.max_length_attribute(Field::Message).as_deref(),
            self.default_max_length,
        )
    }

    /// Render `"{length} / {max}"` for the current message.
    pub fn update_counter(&self) -> String {
        let length = self
            .view
            .value(Field::Message)
            .map_or(0, |value| message_length(&value));
        let text = counter_text(length, self.max_length());
        self.view.set_counter_text(&text);
        text
    }

    /// Show the empty-message counter.
    pub fn reset_counter(&self) {
        self.view.set_counter_text(&counter_text(0, self.max_length()));
    }

    // =========================================================================
    // CONVENIENCE FIELDS
    // =========================================================================

    pub fn stored_contact(&self) -> ContactConvenienceFields {
        ContactConvenienceFields::from_stored(
            storage::load(self.storage.as_ref(), NAME_KEY),
            storage::load(self.storage.as_ref(), EMAIL_KEY),
        )
    }

    /// Prefill name/email from storage.
    pub fn restore_contact(&self) {
        let stored = self.stored_contact();
        if let Some(name) = &stored.name {
            self.view.set_value(Field::Name, name);
        }
        if let Some(email) = &stored.email {
            self.view.set_value(Field::Email, email);
        }
    }

    /// Remember the trimmed value of a convenience field.
    pub fn persist(&self, field: Field) {
        let key = match field {
            Field::Name => NAME_KEY,
            Field::Email => EMAIL_KEY,
            _ => return,
        };
        let Some(value) = self.view.value(field) else {
            return;
        };
        storage::save(self.storage.as_ref(), key, value.trim());
    }

    // =========================================================================
    // CONDITIONAL REQUIREMENT
    // =========================================================================

    pub fn preferred_method(&self) -> PreferredContactMethod {
        PreferredContactMethod::from_checked(self.view.checked_preferred().as_deref())
    }

    /// Phone is required exactly when phone is the preferred method.
    pub fn update_phone_requirement(&self) -> bool {
        let required = self.preferred_method().requires_phone();
        self.view.set_required(Field::Phone, required);
        required
    }

    // =========================================================================
    // PLACEHOLDER
    // =========================================================================

    pub fn update_subject_placeholder(&self) -> &'static str {
        let inquiry = self.view.value(Field::Inquiry).unwrap_or_default();
        let text = subject_placeholder(&inquiry);
        self.view.set_placeholder(Field::Subject, text);
        text
    }
}
