//! Birthday greeting and age in days.

use tracing::warn;

use crate::date::{CalendarDate, days_between};
use crate::error::DateParseError;

/// Ages that are a multiple of this get a celebratory note.
pub const ROUND_AGE_DAYS: i64 = 1000;

const ROUND_NUMBER_NOTE: &str = "That's a nice round number!";

/// What to tell the user about their birthdate, evaluated once per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BirthdayReport {
    /// No birthdate configured.
    NotConfigured,
    /// A birthdate was configured but did not parse.
    Unparsable { raw: String, error: DateParseError },
    /// The birthdate parsed: age is always reported.
    Age {
        age_days: i64,
        is_birthday: bool,
        user_name: Option<String>,
    },
}

impl BirthdayReport {
    /// Work out the report for `birthdate` as seen from `today`.
    ///
    /// An unparsable birthdate is logged and otherwise ignored.
    pub fn evaluate(birthdate: Option<&str>, user_name: Option<&str>, today: CalendarDate) -> Self {
        let Some(raw) = birthdate else {
            return BirthdayReport::NotConfigured;
        };

        match CalendarDate::parse(raw) {
            Ok(born) => BirthdayReport::Age {
                age_days: days_between(born, today),
                is_birthday: born.same_day_of_year(&today),
                user_name: user_name.filter(|n| !n.is_empty()).map(str::to_string),
            },
            Err(error) => {
                warn!("Ignoring birthdate '{}': {}", raw, error);
                BirthdayReport::Unparsable {
                    raw: raw.to_string(),
                    error,
                }
            }
        }
    }

    /// Age in days, when the birthdate parsed.
    pub fn age_days(&self) -> Option<i64> {
        match self {
            BirthdayReport::Age { age_days, .. } => Some(*age_days),
            _ => None,
        }
    }

    pub fn is_birthday(&self) -> bool {
        matches!(self, BirthdayReport::Age { is_birthday: true, .. })
    }

    /// The line to print, if any.
    pub fn message(&self) -> Option<String> {
        let BirthdayReport::Age {
            age_days,
            is_birthday,
            user_name,
        } = self
        else {
            return None;
        };

        let mut message = String::new();
        if *is_birthday {
            match user_name {
                Some(name) => message.push_str(&format!("Happy birthday, {}! ", name)),
                None => message.push_str("Happy birthday! "),
            }
        }
        message.push_str(&format!("You are {} days old.", age_days));

        if is_round_age(*age_days) {
            message.push(' ');
            message.push_str(ROUND_NUMBER_NOTE);
        }

        Some(message)
    }
}

/// Positive multiples of `ROUND_AGE_DAYS`. Day zero is not a milestone.
fn is_round_age(age_days: i64) -> bool {
    age_days > 0 && age_days % ROUND_AGE_DAYS == 0
}
