use argh::FromArgs;

use crate::slurm::{Allocation, NodeQuery};

/// Shows the state of the LIPS nodes on Ionic
#[derive(FromArgs, Debug, PartialEq)]
pub struct InfoArgs {
    /// partition to query
    #[argh(option, default = "\"lips\".to_string()")]
    pub partition: String,

    /// node range to query
    #[argh(option, default = "crate::slurm::LIPS_NODESPEC.to_string()")]
    pub nodespec: String,

    /// location of `sinfo` executable
    #[argh(option, default = "crate::slurm::SINFO_BIN.to_string()")]
    pub sinfo: String,

    /// log the generated command line
    #[argh(switch, short = 'v')]
    pub verbose: bool,
}

impl From<InfoArgs> for NodeQuery {
    fn from(args: InfoArgs) -> Self {
        NodeQuery {
            partition: args.partition,
            nodespec: args.nodespec,
            sinfo: args.sinfo.into(),
        }
    }
}

/// Opens an interactive shell on an Ionic node
#[derive(FromArgs, Debug, PartialEq)]
pub struct LaunchArgs {
    /// node to allocate, e.g. node010
    #[argh(option)]
    pub node: String,

    /// number of CPUs, 1 to 64
    #[argh(option, default = "1")]
    pub cpus: i64,

    /// memory to allocate, e.g. 32G
    #[argh(option, default = "\"32G\".to_string()")]
    pub memory: String,

    /// number of GPUs, 0 to 8
    #[argh(option, default = "0")]
    pub gpus: i64,

    /// account to charge
    #[argh(option, default = "\"lips\".to_string()")]
    pub account: String,

    /// reservation to allocate from
    #[argh(option, default = "\"lips-interactive\".to_string()")]
    pub reservation: String,

    /// log the generated command line
    #[argh(switch, short = 'v')]
    pub verbose: bool,
}

impl From<LaunchArgs> for Allocation {
    fn from(args: LaunchArgs) -> Self {
        Allocation {
            node: args.node,
            cpus: args.cpus,
            memory: args.memory,
            gpus: args.gpus,
            account: args.account,
            reservation: args.reservation,
        }
    }
}

/// Splits `--key=value` into `--key value`; argh only accepts the latter
pub fn split_equals<I, S>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut split = Vec::new();
    for arg in args.into_iter().map(Into::into) {
        match arg.split_once('=') {
            Some((key, value)) if key.starts_with("--") && key.len() > 2 => {
                split.push(key.to_string());
                split.push(value.to_string());
            }
            _ => split.push(arg),
        }
    }

    split
}

/// Parses `T` from the process arguments, exiting on `--help` or errors
pub fn from_env<T: FromArgs>() -> T {
    let mut args = std::env::args();
    let command = args.next().unwrap_or_default();
    let command = std::path::Path::new(&command)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(&command)
        .to_string();

    let args = split_equals(args);
    let args = args.iter().map(String::as_str).collect::<Vec<_>>();

    match T::from_args(&[command.as_str()], &args) {
        Ok(parsed) => parsed,
        Err(early_exit) => std::process::exit(match early_exit.status {
            Ok(()) => {
                println!("{}", early_exit.output);
                0
            }
            Err(()) => {
                eprintln!(
                    "{}\nRun {} --help for more information.",
                    early_exit.output, command
                );
                1
            }
        }),
    }
}
