//! Timer and client-identity capabilities.
//!
//! Browser implementations are compiled under `csr`; native builds only see
//! the traits.

use std::time::Duration;

/// Cooperative delay on the UI thread.
#[async_trait::async_trait(?Send)]
pub trait Timer {
    async fn sleep(&self, delay: Duration);
}

/// Metadata attached to every payload.
pub trait ClientMeta {
    /// Current time as an ISO-8601 string.
    fn timestamp(&self) -> String;
    /// Client identifier sent as `userAgent`.
    fn user_agent(&self) -> String;
}

/// `setTimeout`-backed timer.
#[cfg(feature = "csr")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTimer;

#[cfg(feature = "csr")]
#[async_trait::async_trait(?Send)]
impl Timer for BrowserTimer {
    async fn sleep(&self, delay: Duration) {
        gloo_timers::future::sleep(delay).await;
    }
}

/// Reads the clock from `Date` and the identifier from `navigator`.
#[cfg(feature = "csr")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserClient;

#[cfg(feature = "csr")]
impl ClientMeta for BrowserClient {
    fn timestamp(&self) -> String {
        js_sys::Date::new_0().to_iso_string().into()
    }

    fn user_agent(&self) -> String {
        web_sys::window()
            .and_then(|w| w.navigator().user_agent().ok())
            .unwrap_or_default()
    }
}
