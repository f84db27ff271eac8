//! Caller parameters → upstream payload.

use crate::acquisition::http_client::AttendancePayload;
use crate::error::InvalidParameter;

/// The portal serves two semester ranges behind one form field; the range we
/// query starts at this offset.
pub const SEMESTER_OFFSET: u8 = 8;

/// Query string exactly as received. Fields stay textual so that malformed
/// input reaches validation instead of being rejected by the extractor.
#[derive(Debug, Clone, Default)]
pub struct RawAttendanceQuery {
    pub month: Option<String>,
    pub semester: Option<String>,
    pub year: Option<String>,
}

impl RawAttendanceQuery {
    /// Build from decoded query pairs. A repeated key keeps its first value.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut raw = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "month" => &mut raw.month,
                "semester" => &mut raw.semester,
                "year" => &mut raw.year,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        raw
    }
}

/// A validated attendance query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttendanceQuery {
    /// 1..=12
    pub month: u8,
    /// 1..=8
    pub semester: u8,
    pub year: i64,
}

impl AttendanceQuery {
    /// Validate raw parameters.
    ///
    /// All three must be present integers before any range check runs, so a
    /// request with a bad month and a missing year reports the missing year.
    pub fn from_raw(raw: &RawAttendanceQuery) -> Result<Self, InvalidParameter> {
        let month = parse_int("month", raw.month.as_deref())?;
        let semester = parse_int("semester", raw.semester.as_deref())?;
        let year = parse_int("year", raw.year.as_deref())?;
        Self::new(month, semester, year)
    }

    /// Range-check already-parsed values.
    pub fn new(month: i64, semester: i64, year: i64) -> Result<Self, InvalidParameter> {
        if !(1..=12).contains(&month) {
            return Err(InvalidParameter::MonthOutOfRange(month));
        }
        if !(1..=8).contains(&semester) {
            return Err(InvalidParameter::SemesterOutOfRange(semester));
        }
        Ok(Self {
            month: month as u8,
            semester: semester as u8,
            year,
        })
    }

    /// Encode for the portal.
    pub fn payload(&self) -> AttendancePayload {
        AttendancePayload {
            month: self.month,
            semester: self.semester + SEMESTER_OFFSET,
            year: self.year,
        }
    }
}

fn parse_int(name: &'static str, value: Option<&str>) -> Result<i64, InvalidParameter> {
    value
        .map(str::trim)
        .and_then(|v| v.parse::<i64>().ok())
        .ok_or(InvalidParameter::Malformed(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(month: Option<&str>, semester: Option<&str>, year: Option<&str>) -> RawAttendanceQuery {
        RawAttendanceQuery {
            month: month.map(String::from),
            semester: semester.map(String::from),
            year: year.map(String::from),
        }
    }

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_from_pairs_keeps_first_value() {
        let raw = RawAttendanceQuery::from_pairs(pairs(&[
            ("month", "10"),
            ("month", "11"),
            ("semester", "5"),
            ("utm", "x"),
            ("year", "2024"),
            ("semester", "6"),
        ]));
        assert_eq!(raw.month.as_deref(), Some("10"));
        assert_eq!(raw.semester.as_deref(), Some("5"));
        assert_eq!(raw.year.as_deref(), Some("2024"));
    }

    #[test]
    fn test_from_pairs_missing_key_is_malformed() {
        let raw = RawAttendanceQuery::from_pairs(pairs(&[("month", "10"), ("semester", "5")]));
        assert_eq!(
            AttendanceQuery::from_raw(&raw),
            Err(InvalidParameter::Malformed("year"))
        );
    }

    #[test]
    fn test_valid_query_encodes_semester_offset() {
        let q = AttendanceQuery::from_raw(&raw(Some("10"), Some("3"), Some("2024"))).unwrap();
        assert_eq!(
            q.payload(),
            AttendancePayload {
                month: 10,
                semester: 11,
                year: 2024
            }
        );
    }

    #[test]
    fn test_every_semester_is_offset_by_eight() {
        for s in 1..=8 {
            let q = AttendanceQuery::new(1, s, 2023).unwrap();
            assert_eq!(i64::from(q.payload().semester), s + 8);
        }
    }

    #[test]
    fn test_month_bounds() {
        assert!(AttendanceQuery::new(1, 1, 2024).is_ok());
        assert!(AttendanceQuery::new(12, 1, 2024).is_ok());
        assert_eq!(
            AttendanceQuery::new(0, 1, 2024),
            Err(InvalidParameter::MonthOutOfRange(0))
        );
        assert_eq!(
            AttendanceQuery::new(13, 1, 2024),
            Err(InvalidParameter::MonthOutOfRange(13))
        );
    }

    #[test]
    fn test_semester_bounds() {
        assert!(AttendanceQuery::new(5, 8, 2024).is_ok());
        assert_eq!(
            AttendanceQuery::new(5, 0, 2024),
            Err(InvalidParameter::SemesterOutOfRange(0))
        );
        assert_eq!(
            AttendanceQuery::new(5, 9, 2024),
            Err(InvalidParameter::SemesterOutOfRange(9))
        );
    }

    #[test]
    fn test_missing_or_non_numeric_is_malformed() {
        assert_eq!(
            AttendanceQuery::from_raw(&raw(None, Some("3"), Some("2024"))),
            Err(InvalidParameter::Malformed("month"))
        );
        assert_eq!(
            AttendanceQuery::from_raw(&raw(Some("10"), Some("three"), Some("2024"))),
            Err(InvalidParameter::Malformed("semester"))
        );
        assert_eq!(
            AttendanceQuery::from_raw(&raw(Some("10"), Some("3"), Some("20.5"))),
            Err(InvalidParameter::Malformed("year"))
        );
    }

    #[test]
    fn test_malformed_checked_before_range() {
        assert_eq!(
            AttendanceQuery::from_raw(&raw(Some("99"), Some("3"), None)),
            Err(InvalidParameter::Malformed("year"))
        );
    }
}
