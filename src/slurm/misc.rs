use std::process::{Command, ExitStatus, Stdio};

use crate::error::{Error, Result};

/// A `--Format` field with an optional column width
pub type Field = (&'static str, Option<usize>);

/// Converts fields to an `sinfo` `--Format` argument
pub fn format_string(fields: &[Field]) -> String {
    fields
        .iter()
        .map(|(name, width)| match width {
            Some(width) => format!("{}:{}", name, width),
            // sinfo picks the default width (20)
            None => name.to_string(),
        })
        .collect::<Vec<_>>()
        .join(",")
}

/// Renders a command line for logging
pub fn display_command(command: &Command) -> String {
    std::iter::once(command.get_program())
        .chain(command.get_args())
        .map(|arg| arg.to_string_lossy())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Runs `command` with inherited standard streams, blocking until it exits
pub fn run_inherited(mut command: Command) -> Result<ExitStatus> {
    tracing::debug!(command = %display_command(&command), "executing");

    command
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|source| Error::Spawn {
            program: command.get_program().to_string_lossy().into_owned(),
            source,
        })
}

/// Maps a child's exit status to the exit code of this process
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;

        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}
