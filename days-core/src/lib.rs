//! Core types for the days CLI.
//!
//! This crate holds everything that does not touch the terminal or the
//! user's configuration:
//! - `CalendarDate` parsing, formatting and day arithmetic
//! - `Event` records and the events file loader
//! - the birthday greeting and the per-event relative-date report

pub mod birthday;
pub mod date;
pub mod error;
pub mod event;
pub mod events_file;
pub mod report;

// Re-export the commonly used types at crate root for convenience
pub use birthday::BirthdayReport;
pub use date::{CalendarDate, RelativeDay, days_between};
pub use error::{DateParseError, DaysError, DaysResult};
pub use event::Event;
pub use events_file::{EventColumns, LoadedEvents, SkippedRow, load_events, read_events_file};
pub use report::report_lines;
