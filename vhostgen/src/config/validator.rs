//! Configuration validation.

use crate::config::schema::Config;
use crate::error::Result;
use crate::server::ServerKind;

/// Validates a loaded configuration.
///
/// # Examples
///
/// ```
/// use vhostgen::config::{Config, ConfigValidator};
/// use vhostgen::ServerKind;
///
/// let kind = ConfigValidator::validate(&Config::default()).unwrap();
/// assert_eq!(kind, ServerKind::Nginx);
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration and resolve its server flavour.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidServer`] when `server` is not one of
    /// `apache22`, `apache24` or `nginx`.
    pub fn validate(config: &Config) -> Result<ServerKind> {
        config.server.parse()
    }
}
