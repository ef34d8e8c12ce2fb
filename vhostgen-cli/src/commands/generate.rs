//! Command to generate a vhost.

use crate::error::CliError;
use clap::Args;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use vhostgen::config::{DEFAULT_CONFIG_PATH, DEFAULT_TEMPLATE_DIR};
use vhostgen::logging::adding_notice;
use vhostgen::{
    apply_log_settings, fields, save_vhost, ConfigLoader, ConfigValidator, Logger, RequestArgs,
    TemplateLoader, VhostComposer, VhostRequest,
};

/// Arguments describing the vhost to generate.
#[derive(Args)]
pub struct GenerateCommand {
    /// Path to the document root (suffixed with `vhost.docroot.suffix` from the configuration)
    #[arg(short = 'p', long, value_name = "PATH")]
    pub docroot: Option<String>,

    /// Reverse proxy backend as http(s)://HOST:PORT
    #[arg(short = 'r', long, value_name = "URL")]
    pub proxy: Option<String>,

    /// Location path to proxy (required with --proxy)
    #[arg(short, long, value_name = "PATH")]
    pub location: Option<String>,

    /// Name of the vhost (decorated with the configured prefix and suffix)
    #[arg(short, long, value_name = "NAME")]
    pub name: Option<String>,

    /// Generation mode: plain, ssl, both, redir or let
    #[arg(short, long, value_name = "MODE")]
    pub mode: Option<String>,

    /// Configuration file
    #[arg(
        short,
        long,
        value_name = "FILE",
        env = "VHOSTGEN_CONFIG",
        default_value = DEFAULT_CONFIG_PATH
    )]
    pub config: PathBuf,

    /// Global template directory
    #[arg(
        short,
        long,
        value_name = "DIR",
        env = "VHOSTGEN_TEMPLATE_DIR",
        default_value = DEFAULT_TEMPLATE_DIR
    )]
    pub template_dir: PathBuf,

    /// Override template directory; its templates take precedence per top-level key
    #[arg(short, long, value_name = "DIR")]
    pub override_dir: Option<PathBuf>,

    /// Make this the default vhost
    #[arg(short, long)]
    pub default: bool,

    /// Save to <conf_dir>/<name>.conf instead of printing
    #[arg(short, long)]
    pub save: bool,
}

impl GenerateCommand {
    pub fn execute(self, logger: &Logger) -> Result<(), CliError> {
        // 1. Validate the request before touching any file
        let args = self.request_args();
        let request = VhostRequest::validate(&args)?;
        if args.location_ignored() {
            logger.warn("-l is ignored when using a document root (-p)");
        }

        // 2. Load configuration and templates
        TemplateLoader::verify_global_dir(&self.template_dir)?;
        let config = ConfigLoader::load(&self.config, logger)?;
        let server = ConfigValidator::validate(&config)?;
        let template = TemplateLoader::load(
            &self.template_dir,
            self.override_dir.as_deref(),
            server,
            logger,
        )?;

        // 3. Compose
        let vhost = VhostComposer::new(&config, server, &template, &request).compose();
        logger.info(&adding_notice(&fields::decorated_name(&config, &request.name)));

        // 4. Print or save
        if self.save {
            save_vhost(Path::new(&config.conf_dir), &request.name, &vhost)?;
            apply_log_settings(&config)?;
        } else {
            write_vhost(&mut io::stdout().lock(), &vhost)?;
        }

        Ok(())
    }

    fn request_args(&self) -> RequestArgs {
        RequestArgs {
            docroot: self.docroot.clone(),
            proxy: self.proxy.clone(),
            location: self.location.clone(),
            name: self.name.clone(),
            mode: self.mode.clone(),
            default: self.default,
        }
    }
}

/// Writes the vhost followed by a newline, flushing so a closed pipe is
/// reported here instead of when stdout is dropped.
fn write_vhost(out: &mut impl Write, vhost: &str) -> io::Result<()> {
    writeln!(out, "{vhost}")?;
    out.flush()
}
