//! Top-level (shallow) merging of YAML documents.
//!
//! Both the configuration file and override templates are merged with the
//! same rule: every top-level key present in the overlay replaces the base
//! value for that key entirely. Nested mappings are NOT merged recursively,
//! so overriding a single field of `vhost.ssl` in a user config means the
//! user config has to spell out the whole `vhost` mapping. Existing configs
//! rely on this, so it is kept as is.

use serde_yaml::{Mapping, Value};

/// Merges YAML mappings by top-level key.
///
/// # Examples
///
/// ```
/// use serde_yaml::Mapping;
/// use vhostgen::config::ConfigMerger;
///
/// let base: Mapping = serde_yaml::from_str("server: nginx\nvhost: {port: 80, ssl_port: 443}").unwrap();
/// let overlay: Mapping = serde_yaml::from_str("vhost: {port: 8080}").unwrap();
///
/// let merged = ConfigMerger::merge(base, overlay);
/// assert_eq!(merged["server"], "nginx");
/// // `vhost` was replaced wholesale: `ssl_port` is gone.
/// assert!(merged["vhost"].get("ssl_port").is_none());
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Returns `base` with every top-level key of `overlay` replacing it.
    #[must_use]
    pub fn merge(mut base: Mapping, overlay: Mapping) -> Mapping {
        for (key, value) in overlay {
            base.insert(key, value);
        }
        base
    }

    /// Turns a parsed YAML document into a mapping.
    ///
    /// An empty document (`null`) is treated as an empty mapping. Any other
    /// non-mapping document yields `None`.
    #[must_use]
    pub fn as_mapping(document: Value) -> Option<Mapping> {
        match document {
            Value::Null => Some(Mapping::new()),
            Value::Mapping(mapping) => Some(mapping),
            _ => None,
        }
    }
}
