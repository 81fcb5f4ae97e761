/// Command-line arguments
pub mod args;
/// Error types
pub mod error;
/// Human readable units and timestamps
pub mod fmt;
/// Saving and loading of serialized values
pub mod io;
/// Structured logging setup
pub mod logging;
/// Timing of code regions
pub mod profiling;
/// Wrappers around Slurm commands
pub mod slurm;

pub use error::{Error, Result};

#[doc(hidden)]
pub mod __private {
    pub use tracing;
}
