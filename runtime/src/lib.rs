//! Read-only attendance API over an academic portal.
//!
//! A request names a month, semester, and year and forwards the caller's
//! portal session cookie. We post the query to the portal, confirm the
//! session was accepted, and turn the returned attendance table into typed
//! [`attendance::AttendanceRecord`]s.

pub mod acquisition;
pub mod attendance;
pub mod audit;
pub mod cli;
pub mod config;
pub mod error;
pub mod server;

pub use error::{AttendanceError, ParseError};
