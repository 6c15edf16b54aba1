//! Calendar dates attached to exercises.
//!
//! Exercise dates are stored as UTC instants. Clients supply them as loose
//! date strings and read them back as `"Www Mmm DD YYYY"` (for example
//! `"Mon Jan 01 1990"`), with no time or timezone component.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Message returned to clients for any unparsable date input.
pub const INVALID_DATE_MESSAGE: &str = "Invalid Date";

const CALENDAR_FORMAT: &str = "%a %b %d %Y";
const DATE_ONLY_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", CALENDAR_FORMAT];
const LOCAL_DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Raised when a date string cannot be interpreted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid Date")]
pub struct InvalidDate {
    input: String,
}

impl InvalidDate {
    /// The rejected input, for logging.
    pub fn input(&self) -> &str {
        self.input.as_str()
    }
}

/// Instant an exercise took place.
///
/// # Examples
/// ```
/// use exercise_tracker::domain::ExerciseDate;
///
/// let date = ExerciseDate::parse("1990-01-01").expect("ISO date");
/// assert_eq!(date.calendar_string(), "Mon Jan 01 1990");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExerciseDate(DateTime<Utc>);

impl ExerciseDate {
    /// Wrap an instant.
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }

    /// Parse a client-supplied date.
    ///
    /// Accepts, in order: `YYYY-MM-DD`, `YYYY/MM/DD` and the rendered
    /// `"Www Mmm DD YYYY"` form (midnight UTC), `YYYY` and `YYYY-MM` (first day
    /// of the period), RFC 3339 timestamps, offset-less
    /// `YYYY-MM-DDTHH:MM[:SS[.fff]]` read as UTC, and RFC 2822.
    pub fn parse(raw: &str) -> Result<Self, InvalidDate> {
        let trimmed = raw.trim();
        parse_instant(trimmed).map(Self).ok_or_else(|| InvalidDate {
            input: raw.to_owned(),
        })
    }

    /// Parse an optional input, treating absent or blank values as `None`.
    pub fn parse_optional(raw: Option<&str>) -> Result<Option<Self>, InvalidDate> {
        match raw {
            Some(value) if !value.trim().is_empty() => Self::parse(value).map(Some),
            _ => Ok(None),
        }
    }

    /// Underlying UTC instant.
    pub fn instant(&self) -> DateTime<Utc> {
        self.0
    }

    /// Render as `"Www Mmm DD YYYY"` using the UTC calendar date.
    pub fn calendar_string(&self) -> String {
        self.0.format(CALENDAR_FORMAT).to_string()
    }
}

impl From<DateTime<Utc>> for ExerciseDate {
    fn from(value: DateTime<Utc>) -> Self {
        Self(value)
    }
}

impl fmt::Display for ExerciseDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.calendar_string())
    }
}

fn parse_instant(value: &str) -> Option<DateTime<Utc>> {
    if value.is_empty() {
        return None;
    }

    let date = DATE_ONLY_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
        .or_else(|| parse_year_month(value));
    if let Some(date) = date {
        return date
            .and_hms_opt(0, 0, 0)
            .map(|midnight| Utc.from_utc_datetime(&midnight));
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Some(timestamp.with_timezone(&Utc));
    }

    for format in LOCAL_DATE_TIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }

    DateTime::parse_from_rfc2822(value)
        .ok()
        .map(|timestamp| timestamp.with_timezone(&Utc))
}

/// `YYYY` or `YYYY-MM`, resolved to the first day of the period.
fn parse_year_month(value: &str) -> Option<NaiveDate> {
    let (year, month) = match value.split_once('-') {
        Some((year, month)) => (year, Some(month)),
        None => (value, None),
    };
    let year = fixed_digits(year, 4)?;
    let month = match month {
        Some(month) => fixed_digits(month, 2)?,
        None => 1,
    };
    NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, month, 1)
}

fn fixed_digits(field: &str, width: usize) -> Option<u32> {
    if field.len() != width || !field.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}
