//! Logging infrastructure for vhostgen.
//!
//! Diagnostics (warnings about missing optional files, verbose progress
//! notices) go to stderr so that a vhost printed to stdout stays clean.

use std::env;
use std::fmt;

use chrono::Local;

/// Environment variable consulted when no verbosity flag is given.
pub const LOG_MODE_ENV: &str = "VHOSTGEN_LOG_MODE";

/// Logging level for controlling output verbosity.
///
/// Log levels are ordered from least verbose (Quiet) to most verbose (Verbose).
///
/// # Examples
///
/// ```
/// use vhostgen::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// assert!(LogLevel::Normal < LogLevel::Verbose);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Suppress warnings and notices. Fatal errors are still reported by the
    /// caller.
    Quiet,
    /// Warnings only.
    Normal,
    /// Warnings and progress notices.
    Verbose,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quiet => write!(f, "quiet"),
            Self::Normal => write!(f, "normal"),
            Self::Verbose => write!(f, "verbose"),
        }
    }
}

impl LogLevel {
    /// Parses a log level from a string (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not `quiet`, `normal` or `verbose`.
    ///
    /// # Examples
    ///
    /// ```
    /// use vhostgen::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse("VERBOSE").unwrap(), LogLevel::Verbose);
    /// assert!(LogLevel::parse("loud").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            _ => Err(format!("invalid log level: {s}")),
        }
    }
}

/// A simple stderr-based logger.
///
/// # Examples
///
/// ```
/// use vhostgen::{Logger, LogLevel};
///
/// let logger = Logger::new(LogLevel::Normal);
/// logger.warn("config file not found: /etc/vhost-gen/conf.yml");
/// logger.info("not printed below Verbose");
/// ```
#[derive(Debug)]
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// Creates a new logger with the specified log level.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Returns the current log level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Logs a warning message (suppressed only at Quiet).
    pub fn warn(&self, message: &str) {
        if self.level >= LogLevel::Normal {
            eprintln!("[WARN] {message}");
        }
    }

    /// Logs an informational message. Only shown at Verbose.
    pub fn info(&self, message: &str) {
        if self.level >= LogLevel::Verbose {
            eprintln!("{message}");
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Normal)
    }
}

/// Initializes a logger from CLI flags and the environment.
///
/// The priority order is:
/// 1. The `--verbose` flag
/// 2. `VHOSTGEN_LOG_MODE` environment variable (`quiet`, `normal`, `verbose`)
/// 3. Default (Normal)
///
/// # Examples
///
/// ```
/// use vhostgen::{init_logger, LogLevel};
///
/// assert_eq!(init_logger(true).level(), LogLevel::Verbose);
/// ```
#[must_use]
pub fn init_logger(verbose: bool) -> Logger {
    if verbose {
        return Logger::new(LogLevel::Verbose);
    }

    if let Ok(env_value) = env::var(LOG_MODE_ENV) {
        if let Ok(level) = LogLevel::parse(&env_value) {
            return Logger::new(level);
        }
    }

    Logger::new(LogLevel::Normal)
}

/// Builds the timestamped progress notice emitted in verbose mode.
///
/// ```text
/// vhostgen: [2024-03-01 12:00:00] Adding: dev.example.loc
/// ```
#[must_use]
pub fn adding_notice(server_name: &str) -> String {
    format!(
        "vhostgen: [{}] Adding: {server_name}",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    )
}
