//! Installs the global `tracing` subscriber used by the `ionic-*` commands.
//!
//! Diagnostics go to `stderr`, leaving `stdout` and the terminal to the
//! wrapped Slurm tools. Event targets are printed so that regions opened with
//! [`crate::region!`] show the module they were timed in.

use std::{env, str::FromStr, sync::OnceLock};

use thiserror::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Selects [`LogFormat`]; `human` unless set
pub const LOG_FORMAT_ENV: &str = "LIPSUTILS_LOG_FORMAT";

static INSTALLED: OnceLock<()> = OnceLock::new();

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("`LIPSUTILS_LOG_FORMAT` is not valid unicode: {0}")]
    InvalidUnicode(#[source] env::VarError),
    #[error("unknown log format {0:?}; expected `human` or `json`")]
    UnknownFormat(String),
    #[error("failed to install tracing subscriber: {0}")]
    Install(#[source] tracing_subscriber::util::TryInitError),
}

/// Output format of log lines
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Human,
    /// One JSON object per event
    Json,
}

impl FromStr for LogFormat {
    type Err = LoggingError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "human" | "" => Ok(LogFormat::Human),
            "json" => Ok(LogFormat::Json),
            _ => Err(LoggingError::UnknownFormat(value.to_string())),
        }
    }
}

impl LogFormat {
    /// Reads the format from [`LOG_FORMAT_ENV`]
    pub fn from_env() -> Result<Self, LoggingError> {
        match env::var(LOG_FORMAT_ENV) {
            Ok(value) => value.parse(),
            Err(env::VarError::NotPresent) => Ok(LogFormat::Human),
            Err(err) => Err(LoggingError::InvalidUnicode(err)),
        }
    }
}

/// Filter used when `RUST_LOG` is unset; `--verbose` also shows the
/// generated Slurm command lines, which are logged at DEBUG
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "info"
    }
}

/// Installs logging for a command; repeated calls are no-ops.
///
/// A subscriber installed by someone else is left in place.
pub fn init_logging(verbose: bool) -> Result<(), LoggingError> {
    if INSTALLED.get().is_some() {
        return Ok(());
    }

    let format = LogFormat::from_env()?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    let layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
    let layer = match format {
        LogFormat::Human => layer.boxed(),
        LogFormat::Json => layer.json().boxed(),
    };

    if let Err(err) = tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
    {
        tracing::debug!("keeping existing subscriber: {}", LoggingError::Install(err));
    }

    let _ = INSTALLED.set(());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case("human", LogFormat::Human)]
    #[case("", LogFormat::Human)]
    #[case("JSON", LogFormat::Json)]
    #[case(" json\n", LogFormat::Json)]
    fn test_log_format_from_str(#[case] value: &str, #[case] expected: LogFormat) {
        assert_eq!(value.parse::<LogFormat>().unwrap(), expected);
    }

    #[test]
    fn test_log_format_rejects_unknown() {
        match "logfmt".parse::<LogFormat>() {
            Err(LoggingError::UnknownFormat(value)) => assert_eq!(value, "logfmt"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_default_filter() {
        assert_eq!(default_filter(false), "info");
        assert_eq!(default_filter(true), "debug");
    }

    #[test]
    fn test_init_logging_twice() {
        init_logging(false).unwrap();
        init_logging(true).unwrap();
    }
}
