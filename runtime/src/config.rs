//! Process-wide configuration, read once at start-up and shared read-only.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// User-agent sent to the portal when none is configured.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";

/// Default transport timeout for the single outbound request.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Everything needed to talk to the upstream portal.
#[derive(Debug, Clone)]
pub struct PortalConfig {
    /// Portal root, e.g. `https://portal.example.edu`.
    pub base_url: url::Url,
    pub user_agent: String,
    pub timeout: Duration,
}

impl PortalConfig {
    /// Parse and validate the configured base URL.
    pub fn new(base_url: &str, user_agent: &str, timeout: Duration) -> anyhow::Result<Self> {
        let base_url = url::Url::parse(base_url)
            .map_err(|e| anyhow::anyhow!("invalid portal base URL `{base_url}`: {e}"))?;
        if base_url.cannot_be_a_base() {
            anyhow::bail!("portal base URL `{base_url}` cannot be used as a base");
        }
        Ok(Self {
            base_url,
            user_agent: user_agent.to_string(),
            timeout,
        })
    }

    /// Resolve a portal-relative path against the base URL.
    ///
    /// The base URL's own path is kept, so a portal mounted under a prefix
    /// still resolves correctly.
    pub fn endpoint(&self, path: &str) -> String {
        let base = self.base_url.as_str().trim_end_matches('/');
        format!("{base}/{}", path.trim_start_matches('/'))
    }
}

/// HTTP server settings.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    /// JSONL audit trail; disabled when `None`.
    pub audit_log: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_paths() {
        let cfg = PortalConfig::new(
            "https://portal.example.edu/",
            DEFAULT_USER_AGENT,
            Duration::from_secs(5),
        )
        .unwrap();
        assert_eq!(
            cfg.endpoint("/ktuacademics/student/attendance"),
            "https://portal.example.edu/ktuacademics/student/attendance"
        );

        let prefixed = PortalConfig::new(
            "http://127.0.0.1:9000/mock",
            DEFAULT_USER_AGENT,
            Duration::from_secs(5),
        )
        .unwrap();
        assert_eq!(
            prefixed.endpoint("ktuacademics/student/attendance"),
            "http://127.0.0.1:9000/mock/ktuacademics/student/attendance"
        );
    }

    #[test]
    fn test_rejects_bad_base_url() {
        assert!(PortalConfig::new("not a url", "ua", Duration::from_secs(1)).is_err());
        assert!(PortalConfig::new("mailto:someone", "ua", Duration::from_secs(1)).is_err());
    }
}
