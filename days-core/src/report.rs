//! Relative-date lines for the event listing.

use crate::date::{CalendarDate, RelativeDay};
use crate::event::Event;

/// `<YYYY-MM-DD>: <description> (<category>) - <relative>`
pub fn report_line(event: &Event, today: CalendarDate) -> String {
    format!("{} - {}", event, RelativeDay::between(today, event.timestamp()))
}

/// One line per event, in the order given.
pub fn report_lines(events: &[Event], today: CalendarDate) -> Vec<String> {
    events.iter().map(|event| report_line(event, today)).collect()
}
