mod commands;
mod terminal;

use std::process::ExitCode;

use anyhow::Context;
use commands::CommandLine;
use gip_common::check::Checker;
use gip_core::{CHECK_NAME, SystemInterfaces, SystemResolver, run_check};
use terminal::{logging, print};
use tracing::debug;

/// Exit status for arguments that do not yield a complete set of options.
const ARGUMENT_ERROR: u8 = 1;

fn main() -> ExitCode {
    let commands = match CommandLine::try_parse_args(std::env::args_os()) {
        Ok(commands) => commands,
        Err(err) => {
            let _ = err.print();
            return ExitCode::from(ARGUMENT_ERROR);
        }
    };

    logging::init_logging(commands.verbose);

    let checker = match execute(&commands) {
        Ok(checker) => checker,
        Err(err) => Checker::unknown(format!("{err:#}")).with_name(CHECK_NAME),
    };

    print::result(&checker);
    ExitCode::from(checker.exit_code())
}

fn execute(commands: &CommandLine) -> anyhow::Result<Checker> {
    let opts = commands.options();
    debug!("checking {} against interface {}", opts.host, opts.interface);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start runtime")?;

    Ok(runtime.block_on(run_check(&opts, &SystemResolver, &SystemInterfaces)))
}
