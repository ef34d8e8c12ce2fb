//! Build script for vhostgen-cli.
//!
//! This script generates the man page at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

fn value_arg(id: &'static str, short: char, value_name: &'static str, help: &'static str) -> Arg {
    Arg::new(id)
        .short(short)
        .long(id)
        .value_name(value_name)
        .help(help)
}

fn flag_arg(id: &'static str, short: char, help: &'static str) -> Arg {
    Arg::new(id)
        .short(short)
        .long(id)
        .help(help)
        .action(ArgAction::SetTrue)
}

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs and
/// src/commands/generate.rs.
fn build_cli() -> Command {
    Command::new("vhost-gen")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generate Nginx, Apache 2.2 or Apache 2.4 vhost configuration")
        .long_about(
            "vhost-gen dynamically generates vhost configuration for Nginx, Apache 2.2 \
             or Apache 2.4, depending on the server set in the configuration file. \
             The vhost is printed to stdout unless --save is given.",
        )
        .arg(flag_arg("verbose", 'v', "Be verbose"))
        .arg(value_arg("docroot", 'p', "PATH", "Path to the document root"))
        .arg(value_arg("proxy", 'r', "URL", "Reverse proxy backend as http(s)://HOST:PORT"))
        .arg(value_arg("location", 'l', "PATH", "Location path to proxy (required with --proxy)"))
        .arg(value_arg("name", 'n', "NAME", "Name of the vhost"))
        .arg(value_arg("mode", 'm', "MODE", "Generation mode: plain, ssl, both, redir or let"))
        .arg(
            value_arg("config", 'c', "FILE", "Configuration file")
                .env("VHOSTGEN_CONFIG")
                .default_value("/etc/vhost-gen/conf.yml"),
        )
        .arg(
            value_arg("template-dir", 't', "DIR", "Global template directory")
                .env("VHOSTGEN_TEMPLATE_DIR")
                .default_value("/etc/vhost-gen/templates"),
        )
        .arg(value_arg("override-dir", 'o', "DIR", "Override template directory"))
        .arg(flag_arg("default", 'd', "Make this the default vhost"))
        .arg(flag_arg("save", 's', "Save to <conf_dir>/<name>.conf instead of printing"))
}

fn main() {
    // Generate man page at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("vhost-gen.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
