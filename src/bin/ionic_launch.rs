use color_eyre::Result;

use lipsutils::args::{self, LaunchArgs};
use lipsutils::logging::init_logging;
use lipsutils::region;
use lipsutils::slurm::{exit_code, Allocation};

fn main() -> Result<()> {
    color_eyre::install()?;

    let args: LaunchArgs = args::from_env();
    init_logging(args.verbose)?;

    let allocation = Allocation::from(args);
    let status = {
        let _session = region!(format!("{} session", allocation.node));
        allocation.run()?
    };

    std::process::exit(exit_code(status));
}
