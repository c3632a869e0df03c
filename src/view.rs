//! The page surface the controller drives.
//!
//! ARCHITECTURE
//! ============
//! `FormView` covers the contact form, `PageChrome` everything outside it
//! (theme attribute, meta color, scroll). The browser binding implements both
//! over the DOM; tests implement them over plain fields. Missing elements are
//! the implementor's problem: reads return `None`/defaults and writes no-op.

use crate::state::submission::StatusMessage;

/// Named controls of the contact form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    Subject,
    Inquiry,
    Message,
    Consent,
    /// Hidden honeypot.
    Company,
}

impl Field {
    pub const ALL: [Self; 8] = [
        Self::Name,
        Self::Email,
        Self::Phone,
        Self::Subject,
        Self::Inquiry,
        Self::Message,
        Self::Consent,
        Self::Company,
    ];

    /// Element id; doubles as the form control `name`.
    pub fn id(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Subject => "subject",
            Self::Inquiry => "inquiry",
            Self::Message => "message",
            Self::Consent => "consent",
            Self::Company => "company",
        }
    }
}

/// Name of the preferred-contact radio group.
pub const PREFERRED_GROUP: &str = "preferred";

/// Contact form capability.
pub trait FormView {
    /// Current value of `field`; `None` when the control is missing.
    fn value(&self, field: Field) -> Option<String>;
    fn set_value(&self, field: Field, value: &str);
    /// Raw `maxlength` attribute.
    fn max_length_attribute(&self, field: Field) -> Option<String>;
    /// Set or clear both the `required` flag and `aria-required`.
    fn set_required(&self, field: Field, required: bool);
    fn set_placeholder(&self, field: Field, text: &str);
    /// Value of the checked radio in the preferred-contact group.
    fn checked_preferred(&self) -> Option<String>;
    fn set_counter_text(&self, text: &str);
    /// Show a banner, or clear it with `None`.
    fn set_status(&self, status: Option<&StatusMessage>);
    /// Busy state of the submit control and the form.
    fn set_loading(&self, loading: bool);
    /// Restore every control to its default value.
    fn reset(&self);
    /// Run constraint validation without reporting.
    fn check_validity(&self) -> bool;
    fn focus_first_invalid(&self);
    /// Trigger the platform's validity-reporting UI.
    fn report_validity(&self);
    /// Named entries in document order, with form-data semantics (unchecked
    /// boxes and radios omitted).
    fn entries(&self) -> Vec<(String, String)>;
}

/// Everything on the page outside the form.
pub trait PageChrome {
    /// Current `data-theme` attribute on the root element.
    fn theme_attribute(&self) -> Option<String>;
    fn set_theme_attribute(&self, mode: &str);
    fn set_toggle_icon(&self, class: &str);
    fn set_theme_color(&self, color: &str);
    /// `(prefers-color-scheme: dark)` matches.
    fn prefers_dark(&self) -> bool;
    fn scroll_y(&self) -> f64;
    fn set_back_to_top_visible(&self, visible: bool);
    /// Smooth scroll to the origin.
    fn scroll_to_top(&self);
}

/// Element ids shared by the rendered markup and the DOM binding.
pub mod ids {
    pub const FORM: &str = "contactForm";
    pub const STATUS: &str = "formStatus";
    pub const COUNTER: &str = "charCounter";
    pub const SUBMIT: &str = "submitBtn";
    pub const THEME_TOGGLE: &str = "themeToggle";
    pub const BACK_TO_TOP: &str = "backToTop";
}
