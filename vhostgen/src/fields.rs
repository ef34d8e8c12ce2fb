//! Placeholder values derived from the configuration and the request.
//!
//! Every function here is pure: it looks only at its arguments and returns
//! the text for exactly one placeholder.

use crate::config::schema::{Config, DEFAULT_INDEX};
use crate::server::ServerKind;

/// Access log path used when access logs go to stdout.
pub const STDOUT_ACCESS_LOG: &str = "/tmp/www-access.log";

/// Error log path used when error logs go to stderr.
pub const STDERR_ERROR_LOG: &str = "/tmp/www-error.log";

/// Suffix appended to the vhost name when naming the SSL vhost's log files.
pub const SSL_LOG_SUFFIX: &str = "_ssl";

/// Join two path strings the way POSIX `join` does.
///
/// An absolute `part` replaces `base`; otherwise exactly one `/` separates
/// them (an empty `part` therefore yields `base` with a trailing slash).
///
/// # Examples
///
/// ```
/// use vhostgen::fields::join_path;
///
/// assert_eq!(join_path("/var/www", "htdocs"), "/var/www/htdocs");
/// assert_eq!(join_path("/var/www/", "htdocs"), "/var/www/htdocs");
/// assert_eq!(join_path("/var/www", ""), "/var/www/");
/// assert_eq!(join_path("/var/www", "/srv"), "/srv");
/// assert_eq!(join_path("", "site.crt"), "site.crt");
/// ```
#[must_use]
pub fn join_path(base: &str, part: &str) -> String {
    if part.starts_with('/') || base.is_empty() {
        part.to_string()
    } else if base.ends_with('/') {
        format!("{base}{part}")
    } else {
        format!("{base}/{part}")
    }
}

/// The `listen` port.
///
/// Nginx marks TLS listeners inline (`443 ssl`); Apache enables TLS through
/// its own directives in the SSL fragment.
#[must_use]
pub fn listen_port(config: &Config, server: ServerKind, ssl: bool) -> String {
    if !ssl {
        return config.vhost.port.clone();
    }
    if server.is_apache() {
        config.vhost.ssl_port.clone()
    } else {
        format!("{} ssl", config.vhost.ssl_port)
    }
}

/// The HTTP protocol tag.
#[must_use]
pub fn http_proto(config: &Config, server: ServerKind, ssl: bool) -> String {
    let http2 = ssl && config.vhost.ssl.http2;
    match server {
        ServerKind::Apache24 if http2 => "h2 http/1.1".to_string(),
        ServerKind::Apache24 => "http/1.1".to_string(),
        ServerKind::Nginx if http2 => " http2".to_string(),
        ServerKind::Nginx | ServerKind::Apache22 => String::new(),
    }
}

/// The default-server marker.
///
/// Nginx's goes right after the port, hence the leading space. Apache uses it
/// as the `<VirtualHost>` address.
#[must_use]
pub fn default_server(server: ServerKind, default: bool) -> String {
    match (server.is_apache(), default) {
        (true, true) => "_default_".to_string(),
        (true, false) => "*".to_string(),
        (false, true) => " default_server".to_string(),
        (false, false) => String::new(),
    }
}

/// `prefix + name + suffix` from the configuration.
#[must_use]
pub fn decorated_name(config: &Config, name: &str) -> String {
    format!(
        "{}{name}{}",
        config.vhost.name.prefix, config.vhost.name.suffix
    )
}

/// The server name.
///
/// The nginx default vhost catches everything with `_`; otherwise the
/// decorated name is used.
#[must_use]
pub fn server_name(config: &Config, server: ServerKind, name: &str, default: bool) -> String {
    if default && server == ServerKind::Nginx {
        return "_".to_string();
    }
    decorated_name(config, name)
}

/// The access log path for the vhost called `log_name`.
#[must_use]
pub fn access_log(config: &Config, log_name: &str) -> String {
    let access = &config.vhost.log.access;
    if access.stdout {
        return STDOUT_ACCESS_LOG.to_string();
    }
    join_path(
        &config.vhost.log.dir.path,
        &format!("{}{log_name}-access.log", access.prefix),
    )
}

/// The error log path for the vhost called `log_name`.
#[must_use]
pub fn error_log(config: &Config, log_name: &str) -> String {
    let error = &config.vhost.log.error;
    if error.stderr {
        return STDERR_ERROR_LOG.to_string();
    }
    join_path(
        &config.vhost.log.dir.path,
        &format!("{}{log_name}-error.log", error.prefix),
    )
}

/// The document root path; empty for reverse proxies.
#[must_use]
pub fn docroot_path(config: &Config, docroot: Option<&str>) -> String {
    docroot.map_or_else(String::new, |path| {
        join_path(path, &config.vhost.docroot.suffix)
    })
}

/// The certificate path.
///
/// With `letsencrypt` the decorated name is a directory holding
/// `fullchain.pem`; otherwise the file is `<name>.crt`.
#[must_use]
pub fn ssl_crt_path(config: &Config, name: &str, letsencrypt: bool) -> String {
    ssl_file_path(config, name, letsencrypt, "fullchain.pem", "crt")
}

/// The private key path.
///
/// With `letsencrypt` the decorated name is a directory holding
/// `privkey.pem`; otherwise the file is `<name>.key`. Keys live under
/// `dir_crt` as well.
#[must_use]
pub fn ssl_key_path(config: &Config, name: &str, letsencrypt: bool) -> String {
    ssl_file_path(config, name, letsencrypt, "privkey.pem", "key")
}

fn ssl_file_path(
    config: &Config,
    name: &str,
    letsencrypt: bool,
    le_file: &str,
    extension: &str,
) -> String {
    let decorated = decorated_name(config, name);
    let file = if letsencrypt {
        join_path(&decorated, le_file)
    } else {
        format!("{decorated}.{extension}")
    };
    join_path(&config.vhost.ssl.dir_crt, &file)
}

/// Space-separated index files, falling back to the built-in list.
#[must_use]
pub fn index(config: &Config) -> String {
    if config.vhost.index.is_empty() {
        DEFAULT_INDEX.join(" ")
    } else {
        config.vhost.index.join(" ")
    }
}
