//! Main entry point for the vhost-gen CLI.
//!
//! Generates one Nginx, Apache 2.2 or Apache 2.4 vhost per invocation and
//! prints it to stdout or saves it to the configured `conf_dir`.

mod cli;
mod commands;
mod error;

use clap::Parser;
use cli::Cli;

fn main() {
    // Parse CLI arguments (exits with 2 on unusable input)
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let logger = vhostgen::init_logger(cli.verbose);

    match cli.generate.execute(&logger) {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            if e.is_argument_error() {
                eprintln!("Type --help for help");
            }
            std::process::exit(e.exit_code());
        }
    }
}
