//! Calendar event records.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::date::CalendarDate;

/// A dated event from the events file.
///
/// Only ever built from a date that already parsed; rows with bad dates are
/// rejected by the loader before they get here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "date")]
    timestamp: CalendarDate,
    category: String,
    description: String,
}

impl Event {
    pub fn new(timestamp: CalendarDate, category: impl Into<String>, description: impl Into<String>) -> Self {
        Event {
            timestamp,
            category: category.into(),
            description: description.into(),
        }
    }

    pub fn timestamp(&self) -> CalendarDate {
        self.timestamp
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// `1989-11-09: Fall of the Berlin wall (history)`
impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.timestamp, self.description, self.category)
    }
}
