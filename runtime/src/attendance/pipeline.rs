//! One attendance request, start to finish.
//!
//! Stages run strictly in order and none is retried. Any stage may end the
//! request with an [`AttendanceError`]; there is no partial report.

use crate::acquisition::http_client::AttendanceSource;
use crate::acquisition::http_session::PortalSession;
use crate::attendance::page;
use crate::attendance::query::{AttendanceQuery, RawAttendanceQuery};
use crate::attendance::report::AttendanceReport;
use crate::attendance::selectors;
use crate::attendance::table;
use crate::error::AttendanceError;
use scraper::Html;
use std::fmt;
use tracing::{debug, warn};

/// Pipeline stage, for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Validating,
    Fetching,
    CheckingSession,
    ExtractingMetadata,
    ParsingTable,
    Assembled,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Validating => "validating",
            Self::Fetching => "fetching",
            Self::CheckingSession => "checking_session",
            Self::ExtractingMetadata => "extracting_metadata",
            Self::ParsingTable => "parsing_table",
            Self::Assembled => "assembled",
        };
        f.write_str(name)
    }
}

/// Validate, fetch, and parse one month of attendance.
///
/// Validation failures return before the source is touched.
pub async fn fetch_report(
    source: &dyn AttendanceSource,
    session: &PortalSession,
    raw: &RawAttendanceQuery,
) -> Result<AttendanceReport, AttendanceError> {
    let mut stage = Stage::Validating;
    let result = run(source, session, raw, &mut stage).await;
    match &result {
        Ok(report) => debug!(stage = %stage, records = report.records.len(), "attendance report assembled"),
        Err(e) => warn!(stage = %stage, kind = e.kind(), error = %e, "attendance request failed"),
    }
    result
}

async fn run(
    source: &dyn AttendanceSource,
    session: &PortalSession,
    raw: &RawAttendanceQuery,
    stage: &mut Stage,
) -> Result<AttendanceReport, AttendanceError> {
    debug!(stage = %stage, ?raw, "attendance request");
    let query = AttendanceQuery::from_raw(raw)?;

    *stage = Stage::Fetching;
    debug!(stage = %stage, ?query, "fetching attendance page");
    let html = source.fetch_attendance(session, &query.payload()).await?;

    parse_attendance_page(&html, stage)
}

/// Everything after the fetch: session check, metadata, and table.
///
/// Synchronous on purpose: `scraper::Html` is not `Send`, so the document
/// must never live across an await point.
pub fn parse_attendance_page(html: &str, stage: &mut Stage) -> Result<AttendanceReport, AttendanceError> {
    *stage = Stage::CheckingSession;
    let document = Html::parse_document(html);
    page::ensure_session(&document)?;

    *stage = Stage::ExtractingMetadata;
    let period = selectors::extract_period(&document)?;

    *stage = Stage::ParsingTable;
    let records = table::parse_attendance_table(&document)?;

    *stage = Stage::Assembled;
    Ok(AttendanceReport {
        month: period.month,
        semester: period.semester,
        year: period.year,
        records,
    })
}
