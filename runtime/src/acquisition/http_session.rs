//! Forwarded portal session.
//!
//! A `PortalSession` wraps the cookie value the caller forwarded to us and
//! renders it as the `Cookie` header the portal expects. The value is opaque:
//! we never inspect or validate it, the portal does.

use std::fmt;

/// Name of the portal's session cookie.
pub const SESSION_COOKIE_NAME: &str = "RITSESSIONID";

/// A session credential forwarded by the caller.
#[derive(Clone, PartialEq, Eq)]
pub struct PortalSession {
    value: String,
}

impl PortalSession {
    /// Wrap a forwarded cookie value.
    ///
    /// Returns `None` for an empty or whitespace-only value, which the portal
    /// would reject anyway.
    pub fn from_forwarded(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.is_empty() {
            return None;
        }
        Some(Self {
            value: value.to_string(),
        })
    }

    /// Format the session as a `Cookie` header value.
    pub fn cookie_header(&self) -> String {
        format!("{SESSION_COOKIE_NAME}={}", self.value)
    }
}

// Keep the credential out of logs.
impl fmt::Debug for PortalSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PortalSession")
            .field("value", &"<redacted>")
            .finish()
    }
}
