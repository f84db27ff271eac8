//! Walk the attendance table and emit one record per attended class-hour.
//!
//! Layout: one body row per day, a `<th>` day label ("21st") followed by one
//! `<td>` per class-hour. Attended hours carry the `present` class and text of
//! the form `"<code> - <name>"`, where the name may be followed by a
//! newline-separated annotation.

use crate::attendance::dom;
use crate::attendance::report::AttendanceRecord;
use crate::error::ParseError;
use scraper::{ElementRef, Html, Selector};

/// `id` of the attendance table.
pub const TABLE_ID: &str = "itsthetable";

const PRESENT_CLASS: &str = "present";
const ORDINAL_SUFFIXES: [&str; 4] = ["st", "nd", "rd", "th"];

/// Parse every row of the attendance table.
pub fn parse_attendance_table(document: &Html) -> Result<Vec<AttendanceRecord>, ParseError> {
    let table = dom::find_first(document.root_element(), &format!("table#{TABLE_ID}"))?
        .ok_or(ParseError::TableMissing(TABLE_ID))?;

    let row_selectors = RowSelectors {
        header: dom::selector("th")?,
        data: dom::selector("td")?,
    };

    let mut records = Vec::new();
    for (index, row) in dom::find_all(table, "tbody tr")?.into_iter().enumerate() {
        parse_row(index, row, &row_selectors, &mut records)?;
    }
    Ok(records)
}

/// Selectors applied to every body row, compiled once per table.
struct RowSelectors {
    header: Selector,
    data: Selector,
}

fn parse_row(
    index: usize,
    row: ElementRef,
    selectors: &RowSelectors,
    records: &mut Vec<AttendanceRecord>,
) -> Result<(), ParseError> {
    let label = row
        .select(&selectors.header)
        .next()
        .ok_or(ParseError::DayHeaderMissing(index))?;
    let label = dom::text_of(label);
    let label = label.trim();

    let cells: Vec<ElementRef> = row.select(&selectors.data).collect();
    // Holidays and class-free days collapse into a single spanning cell.
    if cells.len() == 1 {
        return Ok(());
    }

    // Only parsed once a present cell needs it.
    let mut parsed_day = None;
    for (position, cell) in cells.into_iter().enumerate() {
        if !is_present(cell) {
            continue;
        }
        let day = match parsed_day {
            Some(d) => d,
            None => *parsed_day.insert(parse_day(label)?),
        };
        let (subject_code, subject_name) = split_subject(&dom::text_of(cell))?;
        records.push(AttendanceRecord {
            day,
            hour: position as u32 + 1,
            subject_code,
            subject_name,
        });
    }
    Ok(())
}

fn is_present(cell: ElementRef) -> bool {
    cell.value().classes().any(|c| c == PRESENT_CLASS)
}

/// `"21st"` → 21. Labels without an ordinal suffix are parsed as-is.
pub fn parse_day(label: &str) -> Result<u32, ParseError> {
    let digits = ORDINAL_SUFFIXES
        .iter()
        .find_map(|suffix| label.strip_suffix(suffix))
        .unwrap_or(label);
    digits
        .parse()
        .map_err(|_| ParseError::InvalidDay(label.to_string()))
}

/// Split `"CS301 - Data Structures\nRoom 4"` into `("CS301", "Data Structures")`.
///
/// Only the first `-` separates code from name, so hyphenated names survive.
pub fn split_subject(text: &str) -> Result<(String, String), ParseError> {
    let (code, rest) = text
        .split_once('-')
        .ok_or_else(|| ParseError::MalformedSubject(text.trim().to_string()))?;
    let name = rest.trim().split('\n').next().unwrap_or_default().trim();
    Ok((code.trim().to_string(), name.to_string()))
}
