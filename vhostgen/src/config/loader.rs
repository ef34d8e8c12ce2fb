//! Configuration file loading.
//!
//! The user file is optional. Whatever it contains is merged over the
//! built-in defaults by top-level key (see [`ConfigMerger`]) and the result
//! is deserialized into the typed [`Config`].

use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::logging::Logger;
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Loads `conf.yml`.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use vhostgen::config::ConfigLoader;
/// use vhostgen::Logger;
///
/// let config = ConfigLoader::load(Path::new("/etc/vhost-gen/conf.yml"), &Logger::default()).unwrap();
/// println!("generating for {}", config.server);
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load the configuration at `path`, falling back to defaults.
    ///
    /// A missing file is not an error: a warning is logged and the built-in
    /// defaults are returned.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigParse`] if the file exists but cannot be read,
    /// is not valid YAML, is not a mapping, or (after merging) is missing a
    /// field or holds a value of the wrong type.
    pub fn load(path: &Path, logger: &Logger) -> Result<Config> {
        let user = if path.is_file() {
            Self::load_file(path)?
        } else {
            logger.warn(&format!("config file not found: {}", path.display()));
            Mapping::new()
        };

        Self::from_mapping(user).map_err(|e| Error::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Read and parse a YAML file into a top-level mapping.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigParse`] if the file cannot be read, is invalid
    /// YAML, or its top level is not a mapping.
    pub fn load_file(path: &Path) -> Result<Mapping> {
        let parse_error = |message: String| Error::ConfigParse {
            path: path.to_path_buf(),
            message,
        };

        let contents = fs::read_to_string(path).map_err(|e| parse_error(e.to_string()))?;
        let document: Value =
            serde_yaml::from_str(&contents).map_err(|e| parse_error(e.to_string()))?;

        ConfigMerger::as_mapping(document)
            .ok_or_else(|| parse_error("top level must be a mapping".to_string()))
    }

    /// Merge a user mapping over the defaults and deserialize the result.
    ///
    /// # Errors
    ///
    /// Returns a YAML error if the merged document does not fit the schema.
    ///
    /// # Examples
    ///
    /// ```
    /// use vhostgen::config::ConfigLoader;
    ///
    /// let user = serde_yaml::from_str("server: apache24\nconf_dir: /etc/httpd/conf.d\n").unwrap();
    /// let config = ConfigLoader::from_mapping(user).unwrap();
    /// assert_eq!(config.server, "apache24");
    /// assert_eq!(config.vhost.ssl_port, "443");
    /// ```
    pub fn from_mapping(user: Mapping) -> Result<Config> {
        let defaults = match serde_yaml::to_value(Config::default())? {
            Value::Mapping(mapping) => mapping,
            _ => Mapping::new(),
        };

        let merged = ConfigMerger::merge(defaults, user);
        log::debug!("merged configuration keys: {}", merged.len());

        Ok(serde_yaml::from_value(Value::Mapping(merged))?)
    }
}
