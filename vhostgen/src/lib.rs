#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # vhostgen
//!
//! A library for generating Nginx and Apache virtual host configurations.
//!
//! A vhost is produced by filling `__TOKEN__` placeholders in YAML templates
//! with values derived from a configuration file and a validated request.
//!
//! ## Core Types
//!
//! - [`VhostRequest`] and [`RequestArgs`]: Validated invocation parameters
//! - [`Config`], [`ServerKind`] and [`Mode`]: What to generate and for which server
//! - [`Template`]: The fragments a vhost is assembled from
//! - [`VhostComposer`]: Fills the templates for a request
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use vhostgen::{Mode, ProxyTarget, ServerKind};
//!
//! let target = ProxyTarget::parse("https://10.0.0.5:8443").unwrap();
//! assert_eq!(target.host(), "10.0.0.5");
//! assert_eq!(target.port(), 8443);
//!
//! let server: ServerKind = "apache24".parse().unwrap();
//! assert_eq!(server.template_file_name(), "apache24.yml");
//! assert_eq!(Mode::default(), Mode::Plain);
//! ```

pub mod assemble;
pub mod compose;
pub mod config;
pub mod error;
pub mod fields;
pub mod fragment;
pub mod logging;
pub mod mode;
pub mod output;
pub mod request;
pub mod server;
pub mod template;

#[cfg(test)]
mod proptests;

// Re-export key types at crate root for convenience
pub use compose::VhostComposer;
pub use config::{Config, ConfigLoader, ConfigValidator};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use mode::Mode;
pub use output::{apply_log_settings, save_vhost};
pub use request::{Backend, ProxyTarget, RequestArgs, VhostRequest};
pub use server::ServerKind;
pub use template::{Template, TemplateLoader};
