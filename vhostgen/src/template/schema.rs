//! Template file schema.
//!
//! A template file holds the text fragments for one server flavour. Each
//! fragment contains `__TOKEN__` placeholders that are substituted during
//! composition.

use serde::{Deserialize, Serialize};

/// All fragments for one server flavour.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Template {
    /// The outer vhost skeleton.
    pub vhost: String,
    /// What the vhost serves.
    pub vhost_type: VhostTypeTemplates,
    /// Optional feature blocks.
    pub features: FeatureTemplates,
}

/// Backend-specific blocks.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct VhostTypeTemplates {
    /// Document root block (`__DOCUMENT_ROOT__`, `__INDEX__`).
    pub docroot: String,
    /// Reverse proxy block (`__LOCATION__`, `__PROXY_PROTO__`,
    /// `__PROXY_ADDR__`, `__PROXY_PORT__`).
    pub rproxy: String,
}

/// Feature blocks.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct FeatureTemplates {
    /// TLS block.
    pub ssl: String,
    /// Redirect-to-HTTPS block.
    pub redirect: String,
    /// PHP-FPM handler block.
    pub php_fpm: String,
    /// One alias location.
    pub alias: String,
    /// Cross-domain request block embedded in an alias.
    pub xdomain_request: String,
    /// One denied location.
    pub deny: String,
    /// Server status page block.
    pub server_status: String,
}
