//! Attendance report types and the response envelope.

use crate::error::AttendanceError;
use serde::{Deserialize, Serialize};

/// One dropdown value echoed back by the portal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedOption {
    /// Visible text, trimmed and lower-cased.
    pub label: String,
    /// Raw `value` attribute.
    pub code: String,
}

/// One attended class-hour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub day: u32,
    /// 1-based position of the cell within its row.
    pub hour: u32,
    pub subject_code: String,
    pub subject_name: String,
}

/// A month of attendance as reported by the portal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceReport {
    pub month: SelectedOption,
    pub semester: SelectedOption,
    pub year: String,
    /// Row-major, then column order, exactly as found in the page.
    pub records: Vec<AttendanceRecord>,
}

/// JSON body returned to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<AttendanceReport>,
}

pub const SUCCESS_MESSAGE: &str = "Successfully fetched data";

/// Map a pipeline outcome to the caller-facing body.
pub fn assemble(outcome: &Result<AttendanceReport, AttendanceError>) -> ApiResponse {
    match outcome {
        Ok(report) => ApiResponse {
            message: SUCCESS_MESSAGE.to_string(),
            data: Some(report.clone()),
        },
        Err(e) => ApiResponse {
            message: e.user_message().to_string(),
            data: None,
        },
    }
}
