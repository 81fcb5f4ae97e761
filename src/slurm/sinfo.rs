use std::path::PathBuf;
use std::process::{Command, ExitStatus};

use crate::error::{Error, Result};

use super::misc::{format_string, run_inherited, Field};

/// Location of `sinfo` on Ionic (valid as of 2024-12-12)
pub const SINFO_BIN: &str = "/usr/bin/sinfo";

/// Nodes available to the LIPS partition
pub const LIPS_NODESPEC: &str = "node009,node01[0-6]";

/// Columns shown by [`NodeQuery`]
const COLUMNS: &[Field] = &[
    ("NodeHost", Some(10)),
    ("StateLong", Some(10)),
    ("Partition", Some(10)),
    ("FreeMem", None),
    ("Memory", None),
    ("Cpus", None),
    ("Cores", None),
    ("AllocMem", None),
    ("Available", None),
    ("GresUsed", Some(30)),
    ("CPUsState", None),
];

/// Generates parameter for the `--Format` command-line option for `sinfo`
pub fn sinfo_format() -> String {
    format_string(COLUMNS)
}

/// Per-node summary of a partition as reported by `sinfo`
#[derive(Clone, Debug, PartialEq)]
pub struct NodeQuery {
    /// Partition to report on
    pub partition: String,
    /// Slurm node range, e.g. `node01[0-6]`
    pub nodespec: String,
    /// Location of `sinfo` executable
    pub sinfo: PathBuf,
}

impl Default for NodeQuery {
    fn default() -> Self {
        Self {
            partition: "lips".to_string(),
            nodespec: LIPS_NODESPEC.to_string(),
            sinfo: PathBuf::from(SINFO_BIN),
        }
    }
}

impl NodeQuery {
    /// Arguments passed to `sinfo`
    pub fn args(&self) -> Vec<String> {
        vec![
            format!("--partition={}", self.partition),
            format!("--nodes={}", self.nodespec),
            "--exact".to_string(),
            format!("--Format={}", sinfo_format()),
        ]
    }

    /// Builds the `sinfo` invocation, failing if the binary is missing
    pub fn command(&self) -> Result<Command> {
        if !self.sinfo.exists() {
            return Err(Error::BinaryNotFound {
                name: "sinfo",
                path: self.sinfo.clone(),
            });
        }

        let mut command = Command::new(&self.sinfo);
        command.args(self.args());

        Ok(command)
    }

    /// Runs `sinfo`; its table is written straight to the terminal
    pub fn run(&self) -> Result<ExitStatus> {
        run_inherited(self.command()?)
    }
}
