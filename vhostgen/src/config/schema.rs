//! Configuration schema definitions.
//!
//! This module defines the complete `conf.yml` structure together with the
//! built-in defaults applied to every key the user file leaves out.

use serde::{Deserialize, Deserializer, Serialize};
use serde_yaml::Value;

/// Default location of the configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "/etc/vhost-gen/conf.yml";

/// Default global template directory.
pub const DEFAULT_TEMPLATE_DIR: &str = "/etc/vhost-gen/templates";

/// Index files used when the configuration lists none.
pub const DEFAULT_INDEX: [&str; 3] = ["index.php", "index.html", "index.htm"];

/// Complete configuration structure.
///
/// # Examples
///
/// ```
/// use vhostgen::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.server, "nginx");
/// assert_eq!(config.vhost.port, "80");
/// assert_eq!(config.vhost.ssl.ciphers, "HIGH:!aNULL:!MD5");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Config {
    /// Server flavour: `apache22`, `apache24` or `nginx`.
    #[serde(deserialize_with = "text")]
    pub server: String,

    /// Directory generated vhosts are saved to.
    #[serde(deserialize_with = "text")]
    pub conf_dir: String,

    /// Verbatim text appended inside every full vhost.
    #[serde(deserialize_with = "text")]
    pub custom: String,

    /// Per-vhost settings.
    pub vhost: VhostConfig,
}

/// Settings applied to each generated vhost.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct VhostConfig {
    /// Plain HTTP listen port.
    #[serde(deserialize_with = "text")]
    pub port: String,

    /// HTTPS listen port.
    #[serde(deserialize_with = "text")]
    pub ssl_port: String,

    /// Server name decoration.
    pub name: NameConfig,

    /// Document root settings.
    pub docroot: DocrootConfig,

    /// Directory index files; empty or absent means [`DEFAULT_INDEX`].
    #[serde(default, deserialize_with = "nullable_seq")]
    pub index: Vec<String>,

    /// TLS settings.
    pub ssl: SslConfig,

    /// Access/error log settings.
    pub log: LogConfig,

    /// PHP-FPM handler settings.
    pub php_fpm: PhpFpmConfig,

    /// Alias locations.
    #[serde(deserialize_with = "nullable_seq")]
    pub alias: Vec<AliasEntry>,

    /// Denied locations.
    #[serde(deserialize_with = "nullable_seq")]
    pub deny: Vec<DenyEntry>,

    /// Server status page.
    pub server_status: ServerStatusConfig,
}

/// Prefix and suffix wrapped around the vhost name.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq, Default)]
pub struct NameConfig {
    /// Prepended to the vhost name.
    #[serde(deserialize_with = "text")]
    pub prefix: String,
    /// Appended to the vhost name.
    #[serde(deserialize_with = "text")]
    pub suffix: String,
}

/// Document root settings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq, Default)]
pub struct DocrootConfig {
    /// Sub-directory joined onto the document root given on the command line.
    #[serde(deserialize_with = "text")]
    pub suffix: String,
}

/// TLS settings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct SslConfig {
    /// Advertise HTTP/2 on the TLS listener.
    #[serde(deserialize_with = "flag")]
    pub http2: bool,
    /// Directory holding certificates (and, in practice, keys).
    #[serde(deserialize_with = "text")]
    pub dir_crt: String,
    /// Directory holding keys. Kept for compatibility; keys are resolved under
    /// `dir_crt`.
    #[serde(deserialize_with = "text")]
    pub dir_key: String,
    /// Apache `SSLHonorCipherOrder` / nginx `ssl_prefer_server_ciphers` value.
    #[serde(deserialize_with = "text")]
    pub honor_cipher_order: String,
    /// Cipher list.
    #[serde(deserialize_with = "text")]
    pub ciphers: String,
    /// Enabled protocol list.
    #[serde(deserialize_with = "text")]
    pub protocols: String,
}

/// Access and error log settings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct LogConfig {
    /// Access log settings.
    pub access: AccessLogConfig,
    /// Error log settings.
    pub error: ErrorLogConfig,
    /// Log directory settings.
    pub dir: LogDirConfig,
}

/// Access log settings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq, Default)]
pub struct AccessLogConfig {
    /// Prepended to the access log file name.
    #[serde(deserialize_with = "text")]
    pub prefix: String,
    /// Log to `/tmp/www-access.log`, linked to stdout when saving.
    #[serde(deserialize_with = "flag")]
    pub stdout: bool,
}

/// Error log settings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq, Default)]
pub struct ErrorLogConfig {
    /// Prepended to the error log file name.
    #[serde(deserialize_with = "text")]
    pub prefix: String,
    /// Log to `/tmp/www-error.log`, linked to stderr when saving.
    #[serde(deserialize_with = "flag")]
    pub stderr: bool,
}

/// Log directory settings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct LogDirConfig {
    /// Create the directory when saving if it does not exist.
    #[serde(deserialize_with = "flag")]
    pub create: bool,
    /// The directory log files are placed in.
    #[serde(deserialize_with = "text")]
    pub path: String,
}

/// PHP-FPM handler settings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct PhpFpmConfig {
    /// Emit the PHP-FPM block.
    #[serde(deserialize_with = "flag")]
    pub enable: bool,
    /// FPM listen address.
    #[serde(deserialize_with = "text")]
    pub address: String,
    /// FPM listen port.
    #[serde(deserialize_with = "text")]
    pub port: String,
    /// Request timeout in seconds.
    #[serde(deserialize_with = "text")]
    pub timeout: String,
}

/// An alias location, optionally allowing cross-domain requests.
///
/// # Examples
///
/// ```
/// use vhostgen::config::AliasEntry;
///
/// let entry: AliasEntry = serde_yaml::from_str(
///     "alias: /devilbox-api/\npath: /var/www/default/api\nxdomain_request:\n  enable: true\n  origin: '.*'\n",
/// ).unwrap();
/// assert_eq!(entry.cross_origin(), Some(".*"));
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct AliasEntry {
    /// URL path (or regex, depending on the template) being aliased.
    #[serde(deserialize_with = "text")]
    pub alias: String,
    /// Filesystem path served for the alias.
    #[serde(deserialize_with = "text")]
    pub path: String,
    /// Cross-domain request settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xdomain_request: Option<XdomainRequest>,
}

impl AliasEntry {
    /// The allowed origin regex if cross-domain requests are enabled.
    #[must_use]
    pub fn cross_origin(&self) -> Option<&str> {
        self.xdomain_request
            .as_ref()
            .filter(|x| x.enable)
            .map(|x| x.origin.as_str())
    }
}

/// Cross-domain request settings for an alias.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct XdomainRequest {
    /// Emit the cross-domain block.
    #[serde(deserialize_with = "flag")]
    pub enable: bool,
    /// Regex matched against the request origin.
    #[serde(default, deserialize_with = "text")]
    pub origin: String,
}

/// A denied location.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct DenyEntry {
    /// Regex of the location to deny.
    #[serde(deserialize_with = "text")]
    pub alias: String,
}

/// Server status page settings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ServerStatusConfig {
    /// Emit the status block.
    #[serde(deserialize_with = "flag")]
    pub enable: bool,
    /// Location the status page is served at.
    #[serde(deserialize_with = "text")]
    pub alias: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: "nginx".to_string(),
            conf_dir: "/etc/nginx/conf.d".to_string(),
            custom: String::new(),
            vhost: VhostConfig::default(),
        }
    }
}

impl Default for VhostConfig {
    fn default() -> Self {
        Self {
            port: "80".to_string(),
            ssl_port: "443".to_string(),
            name: NameConfig::default(),
            docroot: DocrootConfig::default(),
            index: DEFAULT_INDEX.iter().map(ToString::to_string).collect(),
            ssl: SslConfig::default(),
            log: LogConfig::default(),
            php_fpm: PhpFpmConfig::default(),
            alias: Vec::new(),
            deny: Vec::new(),
            server_status: ServerStatusConfig::default(),
        }
    }
}

impl Default for SslConfig {
    fn default() -> Self {
        Self {
            http2: true,
            dir_crt: String::new(),
            dir_key: String::new(),
            honor_cipher_order: "on".to_string(),
            ciphers: "HIGH:!aNULL:!MD5".to_string(),
            protocols: "TLSv1 TLSv1.1 TLSv1.2".to_string(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            access: AccessLogConfig::default(),
            error: ErrorLogConfig::default(),
            dir: LogDirConfig {
                create: false,
                path: "/var/log/nginx".to_string(),
            },
        }
    }
}

impl Default for PhpFpmConfig {
    fn default() -> Self {
        Self {
            enable: false,
            address: String::new(),
            port: "9000".to_string(),
            timeout: "180".to_string(),
        }
    }
}

impl Default for ServerStatusConfig {
    fn default() -> Self {
        Self {
            enable: false,
            alias: "/server-status".to_string(),
        }
    }
}

/// Accepts any YAML scalar and renders it as text; `null` becomes `""`.
fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match Value::deserialize(deserializer)? {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!(
            "expected a scalar value, found {other:?}"
        ))),
    }
}

/// Accepts YAML 1.1 style booleans (`yes`, `off`, ...), numbers (non-zero
/// is true) and `null` (false).
fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match Value::deserialize(deserializer)? {
        Value::Null => Ok(false),
        Value::Bool(b) => Ok(b),
        Value::Number(n) => Ok(n.as_f64().is_some_and(|v| v != 0.0)),
        Value::String(s) => match s.to_ascii_lowercase().as_str() {
            "yes" | "y" | "on" | "true" => Ok(true),
            "no" | "n" | "off" | "false" => Ok(false),
            _ => Err(D::Error::custom(format!("expected a boolean, found {s:?}"))),
        },
        other => Err(D::Error::custom(format!(
            "expected a boolean, found {other:?}"
        ))),
    }
}

/// Accepts a list or `null` (an empty list).
fn nullable_seq<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
