//! Submission lifecycle state and user-facing status messages.
//!
//! DESIGN
//! ======
//! Phases form a small cycle: `Idle → Validating → (Rejected | Sending) →
//! (Succeeded | Failed) → Idle`. The bot short-circuit never leaves `Idle`.
//! Status text is fixed; error details stay in the log.

#[cfg(test)]
#[path = "submission_test.rs"]
mod submission_test;

pub const SUCCESS_TEXT: &str = "Thank you! Your message has been sent. We’ll get back to you soon.";
pub const VALIDATION_ERROR_TEXT: &str = "Please fix the highlighted fields and try again.";
pub const SEND_ERROR_TEXT: &str = "Sorry, something went wrong while sending your message. Please try again.";

/// Where a submission currently stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Validating,
    Rejected,
    Sending,
    Succeeded,
    Failed,
}

impl SubmissionPhase {
    /// Whether `self → next` is an edge of the lifecycle.
    pub fn can_advance_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Idle, Self::Validating)
                | (Self::Validating, Self::Rejected | Self::Sending)
                | (Self::Sending, Self::Succeeded | Self::Failed)
                | (Self::Rejected | Self::Succeeded | Self::Failed, Self::Idle)
        )
    }

    /// Loading indicator is on only while a request is in flight.
    pub fn is_busy(self) -> bool {
        self == Self::Sending
    }
}

/// Final result of one submit attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Honeypot was filled; success was faked and nothing was sent.
    Suppressed,
    /// Constraint validation failed; nothing was sent.
    Rejected,
    /// Delivered (or simulated in demo mode).
    Sent,
    /// Delivery failed; the error was logged.
    Failed,
}

/// Visual flavor of the status banner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

impl StatusKind {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "alert-success",
            Self::Error => "alert-error",
        }
    }
}

/// Banner shown in the status container.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    pub fn success() -> Self {
        Self { kind: StatusKind::Success, text: SUCCESS_TEXT.to_owned() }
    }

    pub fn validation_error() -> Self {
        Self { kind: StatusKind::Error, text: VALIDATION_ERROR_TEXT.to_owned() }
    }

    pub fn send_error() -> Self {
        Self { kind: StatusKind::Error, text: SEND_ERROR_TEXT.to_owned() }
    }
}
