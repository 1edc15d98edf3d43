//! Calendar dates in the fixed `YYYY-MM-DD` form.
//!
//! `CalendarDate` is a proleptic Gregorian date that is valid by
//! construction. Text goes in through [`CalendarDate::parse`] and comes back
//! out through `Display`; the two are exact inverses for every
//! representable date.

use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::DateParseError;

/// Length of the only accepted text form, `YYYY-MM-DD`.
const DATE_TEXT_LEN: usize = 10;

/// Widths of the year, month and day segments.
const SEGMENT_WIDTHS: [usize; 3] = [4, 2, 2];

/// Years that fit the four-digit text form.
const MIN_YEAR: i32 = 0;
const MAX_YEAR: i32 = 9999;

/// A valid calendar date between 0000-01-01 and 9999-12-31.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Build a date from its components, rejecting anything that is not a
    /// real day (month 13, February 30, ...) or falls outside 0..=9999.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateParseError> {
        let invalid = || DateParseError::InvalidCalendarDate(format!("{year:04}-{month:02}-{day:02}"));

        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(invalid());
        }

        NaiveDate::from_ymd_opt(year, month, day)
            .map(CalendarDate)
            .ok_or_else(invalid)
    }

    /// Parse `YYYY-MM-DD`.
    ///
    /// Components must be zero-padded: "2024-2-5" is malformed, not
    /// February 5th.
    pub fn parse(text: &str) -> Result<Self, DateParseError> {
        let malformed = || DateParseError::MalformedDateText(text.to_string());

        if text.len() != DATE_TEXT_LEN {
            return Err(malformed());
        }

        let segments: Vec<&str> = text.split('-').collect();
        let [year, month, day] = segments.as_slice() else {
            return Err(malformed());
        };

        for (segment, width) in [year, month, day].into_iter().zip(SEGMENT_WIDTHS) {
            if segment.len() != width || !segment.bytes().all(|b| b.is_ascii_digit()) {
                return Err(malformed());
            }
        }

        let year: i32 = year.parse().map_err(|_| malformed())?;
        let month: u32 = month.parse().map_err(|_| malformed())?;
        let day: u32 = day.parse().map_err(|_| malformed())?;

        Self::from_ymd(year, month, day)
            .map_err(|_| DateParseError::InvalidCalendarDate(text.to_string()))
    }

    /// Today's date in the local timezone.
    pub fn today() -> Result<Self, DateParseError> {
        Self::try_from(Local::now().date_naive())
    }

    /// Render as `YYYY-MM-DD`. Same output as `Display`.
    pub fn format(&self) -> String {
        self.to_string()
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// True when both dates fall on the same month and day, whatever the year.
    pub fn same_day_of_year(&self, other: &CalendarDate) -> bool {
        self.month() == other.month() && self.day() == other.day()
    }
}

impl TryFrom<NaiveDate> for CalendarDate {
    type Error = DateParseError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        Self::from_ymd(date.year(), date.month(), date.day())
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year(), self.month(), self.day())
    }
}

impl FromStr for CalendarDate {
    type Err = DateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// `later - earlier` is the signed number of days between them.
impl Sub for CalendarDate {
    type Output = i64;

    fn sub(self, earlier: CalendarDate) -> i64 {
        days_between(earlier, self)
    }
}

impl Serialize for CalendarDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        CalendarDate::parse(&text).map_err(serde::de::Error::custom)
    }
}

/// Signed count of whole days from `earlier` to `later`.
///
/// Negative when `later` is actually before `earlier`.
pub fn days_between(earlier: CalendarDate, later: CalendarDate) -> i64 {
    (later.0 - earlier.0).num_days()
}

/// Where a date sits relative to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelativeDay {
    Today,
    InDays(u64),
    DaysAgo(u64),
}

impl RelativeDay {
    /// Classify an offset as computed by `days_between(today, date)`.
    pub fn from_offset(offset: i64) -> Self {
        match offset {
            0 => RelativeDay::Today,
            n if n > 0 => RelativeDay::InDays(n.unsigned_abs()),
            n => RelativeDay::DaysAgo(n.unsigned_abs()),
        }
    }

    pub fn between(today: CalendarDate, date: CalendarDate) -> Self {
        Self::from_offset(days_between(today, date))
    }
}

impl fmt::Display for RelativeDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelativeDay::Today => write!(f, "today"),
            RelativeDay::InDays(n) => write!(f, "in {} days", n),
            RelativeDay::DaysAgo(n) => write!(f, "{} days ago", n),
        }
    }
}
