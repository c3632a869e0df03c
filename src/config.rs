//! Controller configuration.
//!
//! The submission endpoint is baked in at build time through
//! `CONTACT_FORM_ENDPOINT`; leaving it unset (or blank) keeps the form in
//! demo mode, where submissions succeed after a fixed delay without touching
//! the network. The browser binding may override it from the form's
//! `data-endpoint` attribute.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

/// Delay used to simulate a round-trip when no endpoint is configured.
pub const SIMULATED_DELAY: Duration = Duration::from_millis(1000);
/// Scroll offset (px) above which the back-to-top control is shown.
pub const SCROLL_THRESHOLD: f64 = 300.0;
/// Counter maximum used when the message field declares no `maxlength`.
pub const DEFAULT_MAX_LENGTH: usize = 500;

/// Tunables for one installed controller.
#[derive(Clone, Debug, PartialEq)]
pub struct FormConfig {
    /// Submission endpoint; `None` selects demo mode.
    pub endpoint: Option<String>,
    pub simulated_delay: Duration,
    pub scroll_threshold: f64,
    pub default_max_length: usize,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            simulated_delay: SIMULATED_DELAY,
            scroll_threshold: SCROLL_THRESHOLD,
            default_max_length: DEFAULT_MAX_LENGTH,
        }
    }
}

impl FormConfig {
    /// Build a config from `CONTACT_FORM_ENDPOINT` as seen at compile time.
    pub fn from_build_env() -> Self {
        Self::default().with_endpoint(option_env!("CONTACT_FORM_ENDPOINT"))
    }

    /// Replace the endpoint. Blank values select demo mode.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: Option<&str>) -> Self {
        self.endpoint = normalize_endpoint(endpoint);
        self
    }

    /// Whether submissions go over the network.
    pub fn is_live(&self) -> bool {
        self.endpoint.is_some()
    }
}

fn normalize_endpoint(raw: Option<&str>) -> Option<String> {
    let trimmed = raw?.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
}
