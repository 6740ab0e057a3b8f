use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::core::{AppError, Result};

/// Calendar date format accepted by report query parameters
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Inclusive `createdAt` window built from optional calendar dates.
///
/// The lower bound starts at 00:00:00 of its day and the upper bound stops at
/// 23:59:59 of its day. A missing side is unbounded. Timestamps are UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateRange {
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
}

impl DateRange {
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self {
            start: start.map(start_of_day),
            end: end.map(end_of_day),
        }
    }

    /// Parse optional `startDate`/`endDate` parameters. Empty strings count as absent.
    pub fn parse(start: Option<&str>, end: Option<&str>) -> Result<Self> {
        let start = parse_date_param("startDate", start)?;
        let end = parse_date_param("endDate", end)?;
        Ok(Self::new(start, end))
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Whether a document timestamp falls in the window. Documents without a
    /// timestamp only match an unbounded window.
    pub fn contains(&self, created_at: Option<NaiveDateTime>) -> bool {
        if self.is_unbounded() {
            return true;
        }
        let Some(ts) = created_at else {
            return false;
        };
        self.start.map_or(true, |start| ts >= start) && self.end.map_or(true, |end| ts <= end)
    }
}

/// Treats `None` and `""` alike; anything else must be `YYYY-MM-DD`
pub fn parse_date_param(field: &str, value: Option<&str>) -> Result<Option<NaiveDate>> {
    match value {
        None | Some("") => Ok(None),
        Some(raw) => NaiveDate::parse_from_str(raw, DATE_FORMAT)
            .map(Some)
            .map_err(|_| AppError::invalid_date_format(field)),
    }
}

fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    // 23:59:59 is always a valid wall-clock time
    date.and_hms_opt(23, 59, 59)
        .unwrap_or_else(|| date.and_time(NaiveTime::MIN))
}
