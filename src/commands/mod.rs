pub mod birthday;
pub mod events;
pub mod init;
pub mod show;

use std::path::Path;

use anyhow::{Context, Result};
use days_core::{CalendarDate, LoadedEvents, load_events, read_events_file};
use tracing::warn;

use crate::config::Settings;

/// Everything a command needs, resolved once per run.
pub struct RunContext {
    pub today: CalendarDate,
    pub settings: Settings,
}

pub fn current_date_line(today: CalendarDate) -> String {
    format!("Current date = {}", today)
}

/// Load and validate the events file.
///
/// The directory holding the file must exist (`days init` creates it). A
/// missing file inside an existing directory just means there are no events.
pub fn load_event_list(path: &Path) -> Result<LoadedEvents> {
    let dir = path.parent().filter(|p| !p.as_os_str().is_empty());

    if let Some(dir) = dir
        && !dir.is_dir()
    {
        anyhow::bail!(
            "Events directory not found at {}\n\n\
            Create it with:\n  \
            days init",
            dir.display()
        );
    }

    if !path.exists() {
        warn!("No events file at {}", path.display());
        return Ok(LoadedEvents::default());
    }

    let columns = read_events_file(path)
        .with_context(|| format!("Failed to read events file at {}", path.display()))?;

    Ok(load_events(&columns))
}
