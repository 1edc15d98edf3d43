use anyhow::{Context, Result};
use days_core::CalendarDate;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable holding the user's birthdate (YYYY-MM-DD)
pub const BIRTHDATE_ENV: &str = "BIRTHDATE";

/// Environment variables holding the user's name, in lookup order
pub const USER_NAME_ENVS: [&str; 2] = ["USER", "USERNAME"];

static DEFAULT_EVENTS_FILE: &str = "~/.days/events.csv";

fn default_events_file() -> String {
    DEFAULT_EVENTS_FILE.to_string()
}

/// Configuration at ~/.config/days/config.toml
///
/// Every field is optional; a missing file is the same as an empty one.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// CSV file with date, category and description columns
    #[serde(default = "default_events_file")]
    pub events_file: String,

    /// Birthdate (YYYY-MM-DD), overridden by BIRTHDATE
    pub birthdate: Option<String>,

    /// Name to greet, overridden by USER / USERNAME
    pub name: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            events_file: default_events_file(),
            birthdate: None,
            name: None,
        }
    }
}

/// Values given on the command line, which win over everything else
#[derive(Debug, Default)]
pub struct Overrides {
    pub events_file: Option<PathBuf>,
    /// Already validated by the argument parser
    pub birthdate: Option<CalendarDate>,
}

/// Fully resolved settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub events_file: PathBuf,
    pub birthdate: Option<String>,
    pub user_name: Option<String>,
}

impl Settings {
    /// Combine command line, environment and config file, in that order of precedence.
    ///
    /// `env` looks up an environment variable; empty values count as unset.
    pub fn resolve(config: Config, overrides: Overrides, env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let env = |key: &str| env(key).filter(|v| !v.is_empty());

        let events_file = match overrides.events_file {
            Some(path) => path,
            None => expand_path(&config.events_file)?,
        };

        let birthdate = overrides
            .birthdate
            .map(|date| date.to_string())
            .or_else(|| env(BIRTHDATE_ENV))
            .or(config.birthdate);

        let user_name = USER_NAME_ENVS
            .iter()
            .find_map(|key| env(key))
            .or(config.name);

        let settings = Settings {
            events_file,
            birthdate,
            user_name,
        };
        debug!(?settings, "Resolved settings");
        Ok(settings)
    }
}

/// Get the config directory path (~/.config/days)
pub fn config_dir() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .context("Could not determine config directory")?
        .join("days");
    Ok(config_dir)
}

/// Get the config file path (~/.config/days/config.toml)
pub fn config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

/// Load config from ~/.config/days/config.toml, falling back to defaults
pub fn load_config() -> Result<Config> {
    load_config_from(&config_path()?)
}

pub fn load_config_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        debug!(path = %path.display(), "No config file, using defaults");
        return Ok(Config::default());
    }

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file at {}", path.display()))?;

    let config: Config = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file at {}", path.display()))?;

    Ok(config)
}

/// Expand ~ in paths to the home directory
pub fn expand_path(path: &str) -> Result<PathBuf> {
    match path.strip_prefix("~/") {
        Some(rest) => {
            let home = dirs::home_dir().context("Could not determine home directory")?;
            Ok(home.join(rest))
        }
        None => Ok(PathBuf::from(path)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn fake_env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_missing_config_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.events_file, "~/.days/events.csv");
        assert_eq!(config.birthdate, None);
        assert_eq!(config.name, None);
    }

    #[test]
    fn test_load_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "events_file = \"/tmp/events.csv\"\nbirthdate = \"2000-06-15\"\nname = \"Ada\"\n",
        )
        .unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.events_file, "/tmp/events.csv");
        assert_eq!(config.birthdate.as_deref(), Some("2000-06-15"));
        assert_eq!(config.name.as_deref(), Some("Ada"));
    }

    #[test]
    fn test_invalid_config_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "birthdate = 2000-06-15-oops\n").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_unknown_config_key_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "birthday = \"2000-06-15\"\n").unwrap();

        assert!(load_config_from(&path).is_err());
    }

    #[test]
    fn test_expand_path() {
        assert_eq!(expand_path("/var/events.csv").unwrap(), PathBuf::from("/var/events.csv"));
        assert_eq!(expand_path("events.csv").unwrap(), PathBuf::from("events.csv"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_path("~/.days/events.csv").unwrap(), home.join(".days/events.csv"));
        }
    }

    #[test]
    fn test_env_wins_over_config() {
        let config = Config {
            events_file: "/data/events.csv".to_string(),
            birthdate: Some("1990-01-01".to_string()),
            name: Some("Config Name".to_string()),
        };
        let env = fake_env(&[("BIRTHDATE", "2000-06-15"), ("USERNAME", "winuser")]);

        let settings = Settings::resolve(config, Overrides::default(), env).unwrap();

        assert_eq!(settings.events_file, PathBuf::from("/data/events.csv"));
        assert_eq!(settings.birthdate.as_deref(), Some("2000-06-15"));
        assert_eq!(settings.user_name.as_deref(), Some("winuser"));
    }

    #[test]
    fn test_user_is_preferred_over_username() {
        let env = fake_env(&[("USER", "ada"), ("USERNAME", "ADA")]);
        let settings = Settings::resolve(
            Config {
                events_file: "/e.csv".to_string(),
                ..Config::default()
            },
            Overrides::default(),
            env,
        )
        .unwrap();
        assert_eq!(settings.user_name.as_deref(), Some("ada"));
    }

    #[test]
    fn test_overrides_win_over_env() {
        let overrides = Overrides {
            events_file: Some(PathBuf::from("/cli/events.csv")),
            birthdate: Some(CalendarDate::from_ymd(1985, 10, 26).unwrap()),
        };
        let env = fake_env(&[("BIRTHDATE", "2000-06-15")]);

        let settings = Settings::resolve(Config::default(), overrides, env).unwrap();

        assert_eq!(settings.events_file, PathBuf::from("/cli/events.csv"));
        assert_eq!(settings.birthdate.as_deref(), Some("1985-10-26"));
    }

    #[test]
    fn test_empty_env_values_are_unset() {
        let config = Config {
            events_file: "/e.csv".to_string(),
            birthdate: Some("1990-01-01".to_string()),
            name: None,
        };
        let env = fake_env(&[("BIRTHDATE", ""), ("USER", "")]);

        let settings = Settings::resolve(config, Overrides::default(), env).unwrap();

        assert_eq!(settings.birthdate.as_deref(), Some("1990-01-01"));
        assert_eq!(settings.user_name, None);
    }
}
