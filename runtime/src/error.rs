//! Error taxonomy for the attendance pipeline.
//!
//! Every failure carries internal detail for the logs, but callers only ever
//! see the fixed text from [`AttendanceError::user_message`].

use axum::http::StatusCode;

/// Which caller-supplied parameter was rejected, and why.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidParameter {
    /// A parameter was absent or not an integer.
    #[error("parameter `{0}` is missing or not an integer")]
    Malformed(&'static str),
    #[error("month {0} is outside 1..=12")]
    MonthOutOfRange(i64),
    #[error("semester {0} is outside 1..=8")]
    SemesterOutOfRange(i64),
}

/// Structural problems found while reading the portal's attendance page.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("invalid selector `{0}`")]
    Selector(String),
    #[error("select control `{0}` or its selected option not found")]
    MetadataMissing(&'static str),
    #[error("attendance table `#{0}` not found")]
    TableMissing(&'static str),
    #[error("row {0} has no day header cell")]
    DayHeaderMissing(usize),
    #[error("day label `{0}` is not a number")]
    InvalidDay(String),
    #[error("present cell text `{0}` has no `-` between code and name")]
    MalformedSubject(String),
}

/// Terminal failure of one attendance request.
#[derive(Debug, thiserror::Error)]
pub enum AttendanceError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(#[from] InvalidParameter),
    /// The request arrived without a forwarded session cookie.
    #[error("no session cookie was forwarded")]
    MissingCookie,
    #[error("upstream unavailable: {0}")]
    UpstreamUnavailable(String),
    #[error("upstream portal rejected the session cookie")]
    SessionExpired,
    #[error("failed to parse attendance page: {0}")]
    ParseFailure(#[from] ParseError),
}

impl AttendanceError {
    /// HTTP status reported to the caller.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidParameter(_) => StatusCode::BAD_REQUEST,
            Self::MissingCookie | Self::SessionExpired => StatusCode::UNAUTHORIZED,
            Self::UpstreamUnavailable(_) | Self::ParseFailure(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Fixed caller-facing message. Never includes internal detail.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidParameter(InvalidParameter::Malformed(_)) => "Invalid parameters",
            Self::InvalidParameter(InvalidParameter::MonthOutOfRange(_)) => "Invalid month",
            Self::InvalidParameter(InvalidParameter::SemesterOutOfRange(_)) => "Invalid semester",
            Self::MissingCookie => "Session cookie required",
            Self::UpstreamUnavailable(_) => "Failed to fetch data",
            Self::SessionExpired => "Cookie expired. Please login again.",
            Self::ParseFailure(_) => "Failed to parse data",
        }
    }

    /// Short machine-readable kind, used in logs and the audit trail.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidParameter(_) => "invalid_parameter",
            Self::MissingCookie => "missing_cookie",
            Self::UpstreamUnavailable(_) => "upstream_unavailable",
            Self::SessionExpired => "session_expired",
            Self::ParseFailure(_) => "parse_failure",
        }
    }
}
