use color_eyre::Result;

use lipsutils::args::{self, InfoArgs};
use lipsutils::logging::init_logging;
use lipsutils::slurm::{exit_code, NodeQuery};

fn main() -> Result<()> {
    color_eyre::install()?;

    let args: InfoArgs = args::from_env();
    init_logging(args.verbose)?;

    let status = NodeQuery::from(args).run()?;
    std::process::exit(exit_code(status));
}
