use std::env;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the cluster wrappers and the blob helpers.
#[derive(Debug, Error)]
pub enum Error {
    /// The external Slurm binary is not installed where it is expected.
    #[error("did not find {} binary at {}", .name, .path.display())]
    BinaryNotFound {
        /// Short name of the tool, e.g. `sinfo`
        name: &'static str,
        /// Location that was checked
        path: PathBuf,
    },
    /// A numeric request fell outside of what the cluster accepts.
    #[error(
        "must request a number of {field} between {min} and {max} inclusive, but asked for {value}"
    )]
    OutOfRange {
        /// Name of the offending option, e.g. `cpus`
        field: &'static str,
        /// Value that was requested
        value: i64,
        /// Advertised lower bound
        min: i64,
        /// Advertised upper bound; the check itself rejects it
        max: i64,
    },
    /// A required environment variable is unset or not valid unicode.
    #[error("environment variable `{name}` is not available: {source}")]
    MissingEnv {
        /// Name of the variable, e.g. `SHELL`
        name: &'static str,
        #[source]
        source: env::VarError,
    },
    /// The child process could not be started.
    #[error("failed to execute `{program}`: {source}")]
    Spawn {
        /// Program as passed to `Command::new`
        program: String,
        #[source]
        source: io::Error,
    },
    /// Reading or writing a blob failed.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// Blob location
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// A blob could not be encoded, or did not decode into the requested type.
    #[error("(de)serialization error on {}: {source}", .path.display())]
    Serde {
        /// Blob location
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
