//! Outbound HTTP to the portal.
//!
//! [`AttendanceSource`] is the seam between the pipeline and the network;
//! [`PortalClient`] is the reqwest-backed implementation used in production.

use crate::acquisition::http_session::PortalSession;
use crate::config::PortalConfig;
use crate::error::AttendanceError;
use async_trait::async_trait;
use tracing::debug;

/// Portal path serving the monthly attendance page.
pub const ATTENDANCE_PATH: &str = "ktuacademics/student/attendance";

/// Form body posted to the attendance page, already in upstream encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttendancePayload {
    pub month: u8,
    /// Upstream semester code (caller semester + 8).
    pub semester: u8,
    pub year: i64,
}

impl AttendancePayload {
    /// Form fields in the order the portal's own form sends them.
    pub fn form_fields(&self) -> [(&'static str, String); 3] {
        [
            ("month", self.month.to_string()),
            ("semester", self.semester.to_string()),
            ("year", self.year.to_string()),
        ]
    }
}

/// Something that can return the raw attendance page HTML.
#[async_trait]
pub trait AttendanceSource: Send + Sync {
    /// Perform the single outbound request. Any non-success outcome is
    /// `UpstreamUnavailable`.
    async fn fetch_attendance(
        &self,
        session: &PortalSession,
        payload: &AttendancePayload,
    ) -> Result<String, AttendanceError>;
}

/// reqwest client bound to one portal.
pub struct PortalClient {
    client: reqwest::Client,
    endpoint: String,
}

impl PortalClient {
    /// Build a client using the configured user-agent and timeout.
    pub fn new(config: &PortalConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout)
            .build()
            .map_err(|e| anyhow::anyhow!("failed to build HTTP client: {e}"))?;

        Ok(Self {
            client,
            endpoint: config.endpoint(ATTENDANCE_PATH),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl AttendanceSource for PortalClient {
    async fn fetch_attendance(
        &self,
        session: &PortalSession,
        payload: &AttendancePayload,
    ) -> Result<String, AttendanceError> {
        debug!(endpoint = %self.endpoint, ?payload, "posting attendance query");

        let resp = self
            .client
            .post(&self.endpoint)
            .header(reqwest::header::COOKIE, session.cookie_header())
            .form(&payload.form_fields())
            .send()
            .await
            .map_err(|e| AttendanceError::UpstreamUnavailable(format!("request failed: {e}")))?;

        let status = resp.status();
        if status != reqwest::StatusCode::OK {
            return Err(AttendanceError::UpstreamUnavailable(format!(
                "portal answered {status}"
            )));
        }

        resp.text()
            .await
            .map_err(|e| AttendanceError::UpstreamUnavailable(format!("reading body: {e}")))
    }
}
