//! JSON body posted to the contact endpoint.
//!
//! The payload is a flat object: every named form entry except the honeypot,
//! followed by `timestamp` and `userAgent`. Later entries overwrite earlier
//! ones with the same name, so the metadata keys always win.

#[cfg(test)]
#[path = "payload_test.rs"]
mod payload_test;

use std::collections::BTreeMap;

use serde::Serialize;

/// Name of the hidden anti-spam field.
pub const HONEYPOT_FIELD: &str = "company";
pub const TIMESTAMP_KEY: &str = "timestamp";
pub const USER_AGENT_KEY: &str = "userAgent";

/// One submission's worth of form data.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormPayload {
    fields: BTreeMap<String, String>,
}

impl FormPayload {
    /// Build from form entries in document order plus client metadata.
    pub fn build<I>(entries: I, timestamp: &str, user_agent: &str) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut fields: BTreeMap<String, String> = entries
            .into_iter()
            .filter(|(name, _)| name != HONEYPOT_FIELD)
            .collect();
        fields.insert(TIMESTAMP_KEY.to_owned(), timestamp.to_owned());
        fields.insert(USER_AGENT_KEY.to_owned(), user_agent.to_owned());
        Self { fields }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Encode as the JSON request body.
    ///
    /// # Errors
    ///
    /// Returns the serializer error; a string map cannot realistically fail.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
