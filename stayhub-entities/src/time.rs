use std::{fmt, ops::Add};

use thiserror::Error;
use time::{
    format_description::{well_known::Rfc3339, BorrowedFormatItem},
    macros::format_description,
    OffsetDateTime,
};

pub use time::{Date, Duration};

/// A point in time with second precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn now() -> Self {
        Self(OffsetDateTime::now_utc().unix_timestamp())
    }

    pub const fn from_unix_seconds(seconds: i64) -> Self {
        Self(seconds)
    }

    pub const fn into_unix_seconds(self) -> i64 {
        self.0
    }
}

impl Add<Duration> for Timestamp {
    type Output = Self;

    fn add(self, rhs: Duration) -> Self {
        Self(self.0 + rhs.whole_seconds())
    }
}

impl From<OffsetDateTime> for Timestamp {
    fn from(from: OffsetDateTime) -> Self {
        Self(from.unix_timestamp())
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        let date_time = OffsetDateTime::from_unix_timestamp(self.0).map_err(|_| fmt::Error)?;
        let formatted = date_time.format(&Rfc3339).map_err(|_| fmt::Error)?;
        f.write_str(&formatted)
    }
}

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

#[derive(Debug, Error)]
#[error("Invalid calendar date")]
pub struct DateParseError;

/// Parses a calendar date in `YYYY-MM-DD` notation.
pub fn parse_date(s: &str) -> Result<Date, DateParseError> {
    Date::parse(s, DATE_FORMAT).map_err(|_| DateParseError)
}

/// Formats a calendar date in `YYYY-MM-DD` notation.
pub fn format_date(date: Date) -> String {
    date.format(DATE_FORMAT).expect("date formatting")
}
