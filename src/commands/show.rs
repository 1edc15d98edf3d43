use anyhow::Result;

use super::{RunContext, birthday, events, load_event_list};

/// Date, birthday greeting and the event listing, in that order.
pub fn run(ctx: &RunContext) -> Result<()> {
    let loaded = load_event_list(&ctx.settings.events_file)?;

    let mut lines = birthday::lines(ctx);
    lines.push(String::new());
    lines.extend(events::lines(&loaded.events, ctx.today));

    for line in lines {
        println!("{}", line);
    }

    Ok(())
}
