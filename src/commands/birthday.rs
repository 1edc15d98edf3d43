use anyhow::Result;
use days_core::BirthdayReport;
use tracing::debug;

use super::{RunContext, current_date_line};

pub fn run(ctx: &RunContext) -> Result<()> {
    for line in lines(ctx) {
        println!("{}", line);
    }
    Ok(())
}

/// Current date, then the greeting/age line when there is one.
pub fn lines(ctx: &RunContext) -> Vec<String> {
    let mut lines = vec![current_date_line(ctx.today)];
    lines.extend(greeting(ctx));
    lines
}

pub fn greeting(ctx: &RunContext) -> Option<String> {
    let report = BirthdayReport::evaluate(
        ctx.settings.birthdate.as_deref(),
        ctx.settings.user_name.as_deref(),
        ctx.today,
    );

    if report == BirthdayReport::NotConfigured {
        debug!("No birthdate configured");
    }

    report.message()
}
