//! filepick - Random file retrieval from a flat directory
//!
//! Entry point for the filepick CLI.

use clap::Parser;

use filepick::cli::Cli;
use filepick::logging::init_logging;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    if let Err(err) = filepick::run_app(&cli) {
        eprintln!("Error: {err:#}");
        std::process::exit(filepick::exit_code_for(&err));
    }
}
