//! Configuration system for vhostgen.
//!
//! A single YAML file (`/etc/vhost-gen/conf.yml` unless overridden) is
//! merged over built-in defaults. The merge is shallow: a top-level key
//! present in the file replaces the default for that key wholesale.
//!
//! # Examples
//!
//! ```
//! use vhostgen::config::{ConfigLoader, ConfigValidator};
//! use vhostgen::ServerKind;
//!
//! let user = serde_yaml::from_str("server: apache24").unwrap();
//! let config = ConfigLoader::from_mapping(user).unwrap();
//! assert_eq!(ConfigValidator::validate(&config).unwrap(), ServerKind::Apache24);
//! ```

pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use loader::ConfigLoader;
pub use merger::ConfigMerger;
pub use schema::{
    AccessLogConfig, AliasEntry, Config, DenyEntry, DocrootConfig, ErrorLogConfig, LogConfig,
    LogDirConfig, NameConfig, PhpFpmConfig, ServerStatusConfig, SslConfig, VhostConfig,
    XdomainRequest, DEFAULT_CONFIG_PATH, DEFAULT_INDEX, DEFAULT_TEMPLATE_DIR,
};
pub use validator::ConfigValidator;
