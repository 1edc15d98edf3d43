//! Error types for the days core.

use thiserror::Error;

/// Why a piece of text could not be turned into a `CalendarDate`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateParseError {
    /// Wrong length, wrong separators, non-numeric or non-padded segments.
    #[error("Malformed date '{0}'. Expected YYYY-MM-DD")]
    MalformedDateText(String),

    /// Well-formed text that does not name a real calendar date.
    #[error("Invalid calendar date '{0}'")]
    InvalidCalendarDate(String),
}

/// Errors that can occur while loading events.
#[derive(Error, Debug)]
pub enum DaysError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Events file is missing the '{0}' column")]
    MissingColumn(&'static str),

    #[error("Event columns differ in length (date: {dates}, category: {categories}, description: {descriptions})")]
    ColumnLengthMismatch {
        dates: usize,
        categories: usize,
        descriptions: usize,
    },
}

/// Result type alias for days operations.
pub type DaysResult<T> = Result<T, DaysError>;
