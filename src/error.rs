//! Error types for submission and storage failures.
//!
//! ERROR HANDLING
//! ==============
//! Neither error escapes the controller. Submission errors are logged and
//! replaced by a fixed user-facing message; storage errors only disable the
//! convenience feature that needed them.

// =============================================================================
// SUBMISSION
// =============================================================================

/// Failure while delivering a contact payload to the configured endpoint.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// The request never produced a response (offline, CORS, DNS, ...).
    #[error("request failed: {0}")]
    Network(String),
    /// The endpoint answered with a non-2xx status.
    #[error("{detail}")]
    Rejected { status: u16, detail: String },
    /// The payload could not be encoded as JSON.
    #[error("payload encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
}

// =============================================================================
// STORAGE
// =============================================================================

/// Failure while reading or writing durable client storage.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No storage area is available (private browsing, disabled cookies).
    #[error("storage unavailable")]
    Unavailable,
    /// The storage area rejected the operation (quota, security error).
    #[error("storage access failed: {0}")]
    Access(String),
}
