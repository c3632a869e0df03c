//! Contact form value types: preferred method, inquiry type, counter text and
//! the remembered convenience fields.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

/// Storage key for the remembered name.
pub const NAME_KEY: &str = "contact_name";
/// Storage key for the remembered email.
pub const EMAIL_KEY: &str = "contact_email";

/// Placeholder used when the inquiry type is empty or unknown.
pub const DEFAULT_SUBJECT_PLACEHOLDER: &str = "How can we help?";

// =============================================================================
// PREFERRED CONTACT METHOD
// =============================================================================

/// Value of the checked `preferred` radio.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum PreferredContactMethod {
    #[default]
    Email,
    Phone,
    Other(String),
}

impl PreferredContactMethod {
    /// Map the checked radio value; nothing checked means email.
    pub fn from_checked(value: Option<&str>) -> Self {
        match value {
            None | Some("" | "email") => Self::Email,
            Some("phone") => Self::Phone,
            Some(other) => Self::Other(other.to_owned()),
        }
    }

    pub fn requires_phone(&self) -> bool {
        matches!(self, Self::Phone)
    }
}

// =============================================================================
// INQUIRY TYPE
// =============================================================================

/// Selectable inquiry categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InquiryType {
    Support,
    Sales,
    Partnership,
    Feedback,
    Other,
}

impl InquiryType {
    pub const ALL: [Self; 5] = [
        Self::Support,
        Self::Sales,
        Self::Partnership,
        Self::Feedback,
        Self::Other,
    ];

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == raw)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Support => "support",
            Self::Sales => "sales",
            Self::Partnership => "partnership",
            Self::Feedback => "feedback",
            Self::Other => "other",
        }
    }

    /// Human label shown in the selector.
    pub fn label(self) -> &'static str {
        match self {
            Self::Support => "Support",
            Self::Sales => "Sales",
            Self::Partnership => "Partnership",
            Self::Feedback => "Feedback",
            Self::Other => "Other",
        }
    }

    pub fn subject_placeholder(self) -> &'static str {
        match self {
            Self::Support => "Issue with my account or product",
            Self::Sales => "Pricing, quote, or purchase inquiry",
            Self::Partnership => "Let’s collaborate",
            Self::Feedback => "Share product feedback",
            Self::Other => DEFAULT_SUBJECT_PLACEHOLDER,
        }
    }
}

/// Subject placeholder for a raw selector value.
pub fn subject_placeholder(raw: &str) -> &'static str {
    InquiryType::parse(raw).map_or(DEFAULT_SUBJECT_PLACEHOLDER, InquiryType::subject_placeholder)
}

// =============================================================================
// CHARACTER COUNTER
// =============================================================================

/// Length as the browser counts it for `maxlength` (UTF-16 code units).
pub fn message_length(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Counter label, e.g. `"42 / 500"`.
pub fn counter_text(length: usize, max: usize) -> String {
    format!("{length} / {max}")
}

/// Parse a `maxlength` attribute, falling back to `default` when absent or
/// malformed.
pub fn resolve_max_length(attribute: Option<&str>, default: usize) -> usize {
    attribute
        .and_then(|raw| raw.trim().parse::<usize>().ok())
        .unwrap_or(default)
}

// =============================================================================
// CONVENIENCE FIELDS
// =============================================================================

/// Name/email remembered across sessions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactConvenienceFields {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl ContactConvenienceFields {
    /// Build from raw stored values; empty strings count as absent.
    pub fn from_stored(name: Option<String>, email: Option<String>) -> Self {
        Self {
            name: name.filter(|v| !v.is_empty()),
            email: email.filter(|v| !v.is_empty()),
        }
    }
}
