use std::path::Path;

use anyhow::{Context, Result};
use days_core::events_file::write_events_template;

/// What `init` had to do.
#[derive(Debug, PartialEq, Eq)]
pub enum InitOutcome {
    Created,
    AlreadyExists,
}

pub fn run(events_file: &Path) -> Result<()> {
    match init_events_file(events_file)? {
        InitOutcome::Created => println!("Created events file at {}", events_file.display()),
        InitOutcome::AlreadyExists => println!("Events file already exists at {}", events_file.display()),
    }
    Ok(())
}

/// Create the events directory and a header-only events file.
///
/// An existing file is left untouched.
pub fn init_events_file(path: &Path) -> Result<InitOutcome> {
    if path.exists() {
        return Ok(InitOutcome::AlreadyExists);
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create events directory at {}", parent.display()))?;
    }

    write_events_template(path)
        .with_context(|| format!("Failed to write events file at {}", path.display()))?;

    Ok(InitOutcome::Created)
}
