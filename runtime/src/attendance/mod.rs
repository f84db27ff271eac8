//! Attendance extraction: query encoding, session check, and page parsing.

pub mod dom;
pub mod page;
pub mod pipeline;
pub mod query;
pub mod report;
pub mod selectors;
pub mod table;

pub use pipeline::fetch_report;
pub use query::{AttendanceQuery, RawAttendanceQuery};
pub use report::{ApiResponse, AttendanceRecord, AttendanceReport, SelectedOption};
