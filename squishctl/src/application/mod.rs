pub mod handlers;

use crate::presentation::cli::Cli;
use clap::Parser;
use squish_core::error::Result;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let _guard = crate::logging::init(cli.verbose, cli.log_file.as_deref());
    handlers::handle_sweep(cli)
}
