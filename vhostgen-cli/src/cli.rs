//! CLI structure and argument definitions.
//!
//! This module defines the command line using clap's derive macros. The
//! tool has no subcommands: every invocation generates one vhost.

use crate::commands::GenerateCommand;
use clap::Parser;

/// Generate Nginx and Apache virtual host configuration from templates.
#[derive(Parser)]
#[command(name = "vhost-gen")]
#[command(
    version,
    about = "Generate Nginx, Apache 2.2 or Apache 2.4 vhost configuration",
    long_about = "vhost-gen dynamically generates vhost configuration for Nginx, Apache 2.2 \
                  or Apache 2.4, depending on the server set in the configuration file. \
                  The vhost is printed to stdout unless --save is given."
)]
pub struct Cli {
    /// Be verbose; the "Adding" notice is written to stderr
    #[arg(short, long)]
    pub verbose: bool,

    #[command(flatten)]
    pub generate: GenerateCommand,
}
