//! Error types for the vhostgen library.
//!
//! This module provides the error hierarchy for every stage of vhost
//! generation (argument validation, configuration and template loading,
//! and writing the result), using `thiserror` for ergonomic error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a vhostgen error.
///
/// # Examples
///
/// ```
/// use vhostgen::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("server_name example.com;".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the vhostgen library.
#[derive(Debug, Error)]
pub enum Error {
    /// Neither a document root nor a reverse proxy was requested.
    #[error("either a document root (-p) or a reverse proxy (-r) is required")]
    MissingBackend,

    /// Both a document root and a reverse proxy were requested.
    #[error("document root (-p) and reverse proxy (-r) are mutually exclusive")]
    ConflictingBackend,

    /// A reverse proxy was requested without a location.
    #[error("a location (-l) is required when using a reverse proxy (-r)")]
    MissingLocation,

    /// The reverse proxy URL does not match `http(s)://HOST:PORT`.
    #[error("invalid proxy argument string: '{value}', should be: http(s)://HOST:PORT or http(s)://IP:PORT")]
    InvalidProxy {
        /// The rejected proxy URL.
        value: String,
    },

    /// The reverse proxy port is outside 1-65535.
    #[error("invalid reverse proxy port range: '{port}', should be between 1 and 65535")]
    InvalidProxyPort {
        /// The port text as given.
        port: String,
    },

    /// The generation mode is not recognized.
    #[error("invalid mode string: '{value}', should be: plain, ssl, both, redir or let")]
    InvalidMode {
        /// The rejected mode string.
        value: String,
    },

    /// No vhost name was given.
    #[error("a vhost name (-n) is required")]
    MissingName,

    /// The vhost name contains characters outside `[-_.A-Za-z0-9]`.
    #[error("invalid name: '{name}'")]
    InvalidName {
        /// The rejected name.
        name: String,
    },

    /// The configuration file exists but could not be read or parsed.
    #[error("error loading config {}: {message}", path.display())]
    ConfigParse {
        /// The configuration file.
        path: PathBuf,
        /// The underlying reader or YAML error message.
        message: String,
    },

    /// The configured server type is not supported.
    #[error("server must be 'apache22', 'apache24' or 'nginx', your configuration is: '{value}'")]
    InvalidServer {
        /// The configured server value.
        value: String,
    },

    /// The global template directory does not exist.
    #[error("template path does not exist: {}", path.display())]
    TemplateDirNotFound {
        /// The missing directory.
        path: PathBuf,
    },

    /// A required global template file does not exist.
    #[error("{server} template file does not exist: {}", path.display())]
    TemplateNotFound {
        /// Display name of the server the template belongs to.
        server: String,
        /// The missing file.
        path: PathBuf,
    },

    /// A template file could not be read or parsed.
    #[error("error loading template ({origin} template: {}): {message}", path.display())]
    TemplateParse {
        /// Which template failed (`global` or `override`).
        origin: &'static str,
        /// The template file.
        path: PathBuf,
        /// The underlying reader or YAML error message.
        message: String,
    },

    /// The output configuration directory does not exist.
    #[error("output conf_dir does not exist: {}", path.display())]
    OutputDirNotFound {
        /// The configured output directory.
        path: PathBuf,
    },

    /// A log symlink would replace a directory.
    #[error("destination is a directory: {}", path.display())]
    DestinationIsDirectory {
        /// The directory in the way.
        path: PathBuf,
    },

    /// A filesystem operation on a specific path failed.
    #[error("{action} {}: {source}", path.display())]
    Filesystem {
        /// What was being attempted.
        action: &'static str,
        /// The path involved.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// A YAML (de)serialization error outside of file loading.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl Error {
    /// Check if the error was caused by invalid invocation parameters.
    ///
    /// # Examples
    ///
    /// ```
    /// use vhostgen::Error;
    ///
    /// assert!(Error::MissingName.is_argument_error());
    /// assert!(!Error::InvalidServer { value: "iis".into() }.is_argument_error());
    /// ```
    #[must_use]
    pub fn is_argument_error(&self) -> bool {
        matches!(
            self,
            Self::MissingBackend
                | Self::ConflictingBackend
                | Self::MissingLocation
                | Self::InvalidProxy { .. }
                | Self::InvalidProxyPort { .. }
                | Self::InvalidMode { .. }
                | Self::MissingName
                | Self::InvalidName { .. }
        )
    }
}
