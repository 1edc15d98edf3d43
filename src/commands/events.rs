use anyhow::{Context, Result};
use days_core::{CalendarDate, Event, report_lines};

use super::{RunContext, load_event_list};

pub fn run(ctx: &RunContext, json: bool) -> Result<()> {
    let loaded = load_event_list(&ctx.settings.events_file)?;

    if json {
        let out = serde_json::to_string_pretty(&loaded.events).context("Failed to serialize events")?;
        println!("{}", out);
        return Ok(());
    }

    for line in lines(&loaded.events, ctx.today) {
        println!("{}", line);
    }

    Ok(())
}

pub fn lines(events: &[Event], today: CalendarDate) -> Vec<String> {
    if events.is_empty() {
        return vec!["No events found".to_string()];
    }
    report_lines(events, today)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_for_events() {
        let today = CalendarDate::parse("2024-11-09").unwrap();
        let events = vec![Event::new(
            CalendarDate::parse("1989-11-09").unwrap(),
            "history",
            "Fall of the Berlin wall",
        )];

        assert_eq!(
            lines(&events, today),
            ["1989-11-09: Fall of the Berlin wall (history) - 12784 days ago"]
        );
    }

    #[test]
    fn test_lines_without_events() {
        let today = CalendarDate::parse("2024-11-09").unwrap();
        assert_eq!(lines(&[], today), ["No events found"]);
    }
}
