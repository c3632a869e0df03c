//! HTTP delivery of the contact payload.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds only carry the trait and the pure helpers; tests drive the
//! pipeline through a fake transport.
//!
//! ERROR HANDLING
//! ==============
//! A non-2xx status becomes [`SubmitError::Rejected`] carrying the response
//! body when one could be read, else a generic `Request failed (status)`.
//! Failing to read the body is not itself an error.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::error::SubmitError;

/// Outbound channel for encoded payloads.
#[async_trait::async_trait(?Send)]
pub trait Transport {
    /// POST `body` (JSON) to `url`. Any 2xx status is success.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::Network`] when no response arrives and
    /// [`SubmitError::Rejected`] for non-2xx statuses.
    async fn post_json(&self, url: &str, body: &str) -> Result<(), SubmitError>;
}

/// Detail string for a rejected request.
pub fn failure_detail(status: u16, body: &str) -> String {
    if body.is_empty() {
        format!("Request failed ({status})")
    } else {
        body.to_owned()
    }
}

/// Build the error for a non-2xx response.
pub fn rejected(status: u16, body: &str) -> SubmitError {
    SubmitError::Rejected { status, detail: failure_detail(status, body) }
}

/// `fetch`-backed transport.
#[cfg(feature = "csr")]
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpTransport;

#[cfg(feature = "csr")]
#[async_trait::async_trait(?Send)]
impl Transport for HttpTransport {
    async fn post_json(&self, url: &str, body: &str) -> Result<(), SubmitError> {
        let resp = gloo_net::http::Request::post(url)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .body(body.to_owned())
            .map_err(|e| SubmitError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;
        if resp.ok() {
            return Ok(());
        }
        let text = resp.text().await.unwrap_or_default();
        Err(rejected(resp.status(), &text))
    }
}
