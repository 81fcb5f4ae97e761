use std::env;
use std::ops::Range;
use std::process::{Command, ExitStatus};

use crate::error::{Error, Result};

use super::misc::run_inherited;

/// Accepted CPU counts; 64 is advertised but rejected
const CPUS: Range<i64> = 1..64;
/// Accepted GPU counts; 8 is advertised but rejected
const GPUS: Range<i64> = 0..8;

/// Interactive allocation on a single node via `salloc`/`srun`
#[derive(Clone, Debug, PartialEq)]
pub struct Allocation {
    /// Node to allocate, e.g. `node010`
    pub node: String,
    /// CPUs per task (`-c`)
    pub cpus: i64,
    /// Memory in Slurm notation, e.g. `32G`
    pub memory: String,
    /// GPUs requested through `--gres=gpu:N`
    pub gpus: i64,
    /// Account charged for the allocation (`-A`)
    pub account: String,
    /// Reservation to allocate from
    pub reservation: String,
}

impl Allocation {
    /// Allocation of `node` using the LIPS defaults
    pub fn new(node: impl Into<String>) -> Self {
        Self {
            node: node.into(),
            cpus: 1,
            memory: "32G".to_string(),
            gpus: 0,
            account: "lips".to_string(),
            reservation: "lips-interactive".to_string(),
        }
    }

    /// Checks CPU and GPU counts against what the reservation allows
    pub fn validate(&self) -> Result<()> {
        check_range("cpus", self.cpus, CPUS)?;
        check_range("gpus", self.gpus, GPUS)
    }

    /// Arguments for `salloc`, ending in an `srun` of `shell` as login shell
    pub fn args(&self, shell: &str) -> Vec<String> {
        vec![
            format!("--gres=gpu:{}", self.gpus),
            "-c".to_string(),
            self.cpus.to_string(),
            "-A".to_string(),
            self.account.clone(),
            format!("--reservation={}", self.reservation),
            format!("--nodelist={}", self.node),
            format!("--mem={}", self.memory),
            "srun".to_string(),
            "--pty".to_string(),
            shell.to_string(),
            "-l".to_string(),
        ]
    }

    /// Validates the request and builds the `salloc` invocation using `$SHELL`
    pub fn command(&self) -> Result<Command> {
        self.validate()?;
        let shell = env::var("SHELL").map_err(|source| Error::MissingEnv {
            name: "SHELL",
            source,
        })?;

        let mut command = Command::new("salloc");
        command.args(self.args(&shell));

        Ok(command)
    }

    /// Blocks until the interactive session ends
    pub fn run(&self) -> Result<ExitStatus> {
        run_inherited(self.command()?)
    }
}

fn check_range(field: &'static str, value: i64, range: Range<i64>) -> Result<()> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(Error::OutOfRange {
            field,
            value,
            min: range.start,
            max: range.end,
        })
    }
}
