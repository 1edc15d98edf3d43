//! Loading events from the CSV events file.
//!
//! Reading happens in two steps. `read_events_file` pulls the `date`,
//! `category` and `description` columns out of the CSV as plain strings.
//! `load_events` then validates the dates row by row. A bad date only costs
//! its own row; the rest of the batch still loads.

use std::io;
use std::path::Path;

use tracing::{debug, warn};

use crate::date::CalendarDate;
use crate::error::{DateParseError, DaysError, DaysResult};
use crate::event::Event;

pub const DATE_COLUMN: &str = "date";
pub const CATEGORY_COLUMN: &str = "category";
pub const DESCRIPTION_COLUMN: &str = "description";

/// The three event columns as parallel sequences of raw strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventColumns {
    dates: Vec<String>,
    categories: Vec<String>,
    descriptions: Vec<String>,
}

impl EventColumns {
    /// Columns must all be the same length.
    pub fn new(dates: Vec<String>, categories: Vec<String>, descriptions: Vec<String>) -> DaysResult<Self> {
        if dates.len() != categories.len() || dates.len() != descriptions.len() {
            return Err(DaysError::ColumnLengthMismatch {
                dates: dates.len(),
                categories: categories.len(),
                descriptions: descriptions.len(),
            });
        }

        Ok(EventColumns {
            dates,
            categories,
            descriptions,
        })
    }

    pub fn push_row(&mut self, date: impl Into<String>, category: impl Into<String>, description: impl Into<String>) {
        self.dates.push(date.into());
        self.categories.push(category.into());
        self.descriptions.push(description.into());
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Rows as `(date, category, description)` in file order.
    pub fn rows(&self) -> impl Iterator<Item = (&str, &str, &str)> {
        self.dates
            .iter()
            .zip(&self.categories)
            .zip(&self.descriptions)
            .map(|((date, category), description)| (date.as_str(), category.as_str(), description.as_str()))
    }
}

impl<D, C, S> FromIterator<(D, C, S)> for EventColumns
where
    D: Into<String>,
    C: Into<String>,
    S: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (D, C, S)>>(iter: I) -> Self {
        let mut columns = EventColumns::default();
        for (date, category, description) in iter {
            columns.push_row(date, category, description);
        }
        columns
    }
}

/// A row that was left out because its date did not parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    /// Zero-based data row (the header is not counted).
    pub index: usize,
    pub raw: String,
    pub error: DateParseError,
}

/// Result of validating a batch of rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadedEvents {
    /// Valid events, in input order.
    pub events: Vec<Event>,
    pub skipped: Vec<SkippedRow>,
}

/// Turn raw columns into events, skipping (and logging) rows with bad dates.
pub fn load_events(columns: &EventColumns) -> LoadedEvents {
    let mut loaded = LoadedEvents::default();

    for (index, (date, category, description)) in columns.rows().enumerate() {
        match CalendarDate::parse(date) {
            Ok(timestamp) => loaded.events.push(Event::new(timestamp, category, description)),
            Err(error) => {
                warn!("bad date at row {}: {}", index, date);
                loaded.skipped.push(SkippedRow {
                    index,
                    raw: date.to_string(),
                    error,
                });
            }
        }
    }

    debug!(
        loaded = loaded.events.len(),
        skipped = loaded.skipped.len(),
        "Validated event rows"
    );

    loaded
}

/// Read the event columns from a CSV file with a header row.
pub fn read_events_file(path: &Path) -> DaysResult<EventColumns> {
    debug!(path = %path.display(), "Reading events file");
    let file = std::fs::File::open(path)?;
    read_events(file)
}

/// Read the event columns from any CSV source with a header row.
///
/// Columns are located by name, so their order does not matter and extra
/// columns are ignored. Short rows yield empty fields.
pub fn read_events<R: io::Read>(source: R) -> DaysResult<EventColumns> {
    // Fields are trimmed here, so " 2024-02-29 " in the file is a valid date
    // even though CalendarDate::parse itself rejects surrounding whitespace.
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(source);

    let headers = reader.headers()?.clone();
    let column = |name: &'static str| {
        headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(name))
            .ok_or(DaysError::MissingColumn(name))
    };
    let date_idx = column(DATE_COLUMN)?;
    let category_idx = column(CATEGORY_COLUMN)?;
    let description_idx = column(DESCRIPTION_COLUMN)?;

    let mut columns = EventColumns::default();
    for record in reader.records() {
        let record = record?;
        let field = |idx: usize| record.get(idx).unwrap_or_default().to_string();
        columns.push_row(field(date_idx), field(category_idx), field(description_idx));
    }

    Ok(columns)
}

/// Write an events file holding only the header row.
pub fn write_events_template(path: &Path) -> DaysResult<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record([DATE_COLUMN, CATEGORY_COLUMN, DESCRIPTION_COLUMN])?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_bad_row_is_skipped_not_fatal() {
        let columns: EventColumns = [
            ("1989-11-09", "history", "Fall of the Berlin wall"),
            ("bad-date", "x", "y"),
        ]
        .into_iter()
        .collect();

        let loaded = load_events(&columns);

        assert_eq!(loaded.events.len(), 1);
        assert_eq!(loaded.events[0].to_string(), "1989-11-09: Fall of the Berlin wall (history)");
        assert_eq!(loaded.skipped.len(), 1);
        assert_eq!(loaded.skipped[0].index, 1);
        assert_eq!(loaded.skipped[0].raw, "bad-date");
        assert!(matches!(loaded.skipped[0].error, DateParseError::MalformedDateText(_)));
    }

    #[test]
    fn test_load_preserves_input_order() {
        let columns: EventColumns = [
            ("2024-05-01", "b", "second"),
            ("2023-02-29", "bad", "not a leap year"),
            ("1969-07-20", "a", "first"),
        ]
        .into_iter()
        .collect();

        let loaded = load_events(&columns);
        let descriptions: Vec<_> = loaded.events.iter().map(|e| e.description()).collect();

        assert_eq!(descriptions, ["second", "first"]);
        assert!(matches!(loaded.skipped[0].error, DateParseError::InvalidCalendarDate(_)));
    }

    #[test]
    fn test_columns_must_match_in_length() {
        let result = EventColumns::new(
            vec!["2024-01-01".into(), "2024-01-02".into()],
            vec!["a".into()],
            vec!["x".into(), "y".into()],
        );
        assert!(matches!(
            result,
            Err(DaysError::ColumnLengthMismatch { dates: 2, categories: 1, descriptions: 2 })
        ));
    }

    #[test]
    fn test_read_events_by_column_name() {
        let csv = "description,date,category,notes\n\
                   Moon landing,1969-07-20,history,extra\n\
                   \"Launch, delayed\", 2024-02-29 ,work,\n";

        let columns = read_events(csv.as_bytes()).unwrap();
        let rows: Vec<_> = columns.rows().collect();

        assert_eq!(
            rows,
            [
                ("1969-07-20", "history", "Moon landing"),
                ("2024-02-29", "work", "Launch, delayed"),
            ]
        );
    }

    #[test]
    fn test_padded_date_field_loads_after_trimming() {
        let csv = "date,category,description\n 2024-02-29 , leap , Extra day \n";
        let loaded = load_events(&read_events(csv.as_bytes()).unwrap());

        assert!(loaded.skipped.is_empty());
        assert_eq!(loaded.events[0].to_string(), "2024-02-29: Extra day (leap)");
    }

    #[test]
    fn test_read_events_short_row_has_empty_fields() {
        let csv = "date,category,description\n2024-01-01\n";
        let columns = read_events(csv.as_bytes()).unwrap();
        assert_eq!(columns.rows().collect::<Vec<_>>(), [("2024-01-01", "", "")]);
    }

    #[test]
    fn test_read_events_missing_column() {
        let csv = "date,description\n2024-01-01,New year\n";
        assert!(matches!(
            read_events(csv.as_bytes()),
            Err(DaysError::MissingColumn("category"))
        ));
    }

    #[test]
    fn test_read_events_file_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "date,category,description").unwrap();
        writeln!(file, "1989-11-09,history,Fall of the Berlin wall").unwrap();

        let columns = read_events_file(file.path()).unwrap();
        let loaded = load_events(&columns);

        assert_eq!(loaded.events.len(), 1);
        assert!(loaded.skipped.is_empty());
    }

    #[test]
    fn test_read_events_file_missing_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_events_file(&dir.path().join("nope.csv"));
        assert!(matches!(result, Err(DaysError::Io(_))));
    }

    #[test]
    fn test_template_reads_back_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.csv");

        write_events_template(&path).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "date,category,description\n");
        assert!(read_events_file(&path).unwrap().is_empty());
    }
}
