//! Chooses the log level for a run of `apollo-comps`.
//!
//! A run logs nothing unless something needs attention. `--verbose` and
//! `--quiet` take precedence over `LOG_LEVEL`.

use std::str::FromStr;

pub(crate) const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::WARN;
pub(crate) const LOG_LEVEL_ENV_VAR: &str = "LOG_LEVEL";

#[derive(Debug, PartialEq)]
pub(crate) struct LogLevelChoice {
    pub level: tracing::Level,

    /// Set when `LOG_LEVEL` held something that is not a level. Reported once
    /// the subscriber is installed.
    pub rejected_env_value: Option<String>,
}

pub(crate) fn choose_log_level(
    verbose: bool,
    quiet: bool,
    env_val: Option<&str>,
) -> LogLevelChoice {
    let from_flags =
        if verbose {
            Some(tracing::Level::DEBUG)
        } else if quiet {
            Some(tracing::Level::ERROR)
        } else {
            None
        };
    if let Some(level) = from_flags {
        return LogLevelChoice { level, rejected_env_value: None };
    }

    match env_val.map(str::trim) {
        None | Some("") => LogLevelChoice {
            level: DEFAULT_LOG_LEVEL,
            rejected_env_value: None,
        },
        Some(val) if val.eq_ignore_ascii_case("verbose") => LogLevelChoice {
            level: tracing::Level::DEBUG,
            rejected_env_value: None,
        },
        Some(val) => match tracing::Level::from_str(val) {
            Ok(level) => LogLevelChoice { level, rejected_env_value: None },
            Err(_) => LogLevelChoice {
                level: DEFAULT_LOG_LEVEL,
                rejected_env_value: Some(val.to_string()),
            },
        },
    }
}
