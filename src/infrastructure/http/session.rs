//! Per-client session state carried in a signed cookie.
//!
//! The payload is a small key/value map plus a queue of flash messages,
//! serialized as JSON and base64-encoded so it survives as a cookie value.
//! Handlers load it from the request's [`SignedCookieJar`], mutate it, and
//! hand the jar back with the response.

use axum_extra::extract::cookie::{Cookie, SameSite, SignedCookieJar};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const SESSION_COOKIE: &str = "roster_session";

/// Name of the last user registered from this client.
pub const USERNAME_KEY: &str = "username";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Success,
    Info,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Warning => "warning",
            Severity::Success => "success",
            Severity::Info => "info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    pub severity: Severity,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    values: BTreeMap<String, String>,
    #[serde(default)]
    flashes: Vec<Flash>,
}

impl Session {
    /// Reads the session from the jar. A missing, tampered or unreadable
    /// cookie yields an empty session.
    pub fn load(jar: &SignedCookieJar) -> Self {
        jar.get(SESSION_COOKIE)
            .and_then(|cookie| Self::decode(cookie.value()))
            .unwrap_or_default()
    }

    /// Writes the session back into the jar, removing the cookie once the
    /// session holds nothing.
    pub fn store(self, jar: SignedCookieJar) -> SignedCookieJar {
        if self.is_empty() {
            return jar.remove(Cookie::build(SESSION_COOKIE).path("/"));
        }

        match self.encode() {
            Ok(value) => jar.add(
                Cookie::build((SESSION_COOKIE, value))
                    .path("/")
                    .http_only(true)
                    .same_site(SameSite::Lax),
            ),
            Err(e) => {
                tracing::error!("Failed to encode session: {}", e);
                jar
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.values.remove(key)
    }

    /// Queues a message for the next rendered page.
    pub fn flash(&mut self, severity: Severity, message: impl Into<String>) {
        self.flashes.push(Flash {
            severity,
            message: message.into(),
        });
    }

    /// Drains the queued messages; each one is shown exactly once.
    pub fn take_flashes(&mut self) -> Vec<Flash> {
        std::mem::take(&mut self.flashes)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty() && self.flashes.is_empty()
    }

    fn encode(&self) -> Result<String, serde_json::Error> {
        let json = serde_json::to_vec(self)?;
        Ok(URL_SAFE_NO_PAD.encode(json))
    }

    fn decode(value: &str) -> Option<Self> {
        let bytes = URL_SAFE_NO_PAD.decode(value).ok()?;
        serde_json::from_slice(&bytes).ok()
    }
}
