//! Invocation parameters and their validation.
//!
//! Everything here is checked before any configuration or template file is
//! touched, so a malformed request never causes file I/O.

use crate::error::{Error, Result};
use crate::mode::Mode;

/// Raw, unvalidated invocation parameters as collected from the command line.
#[derive(Debug, Clone, Default)]
pub struct RequestArgs {
    /// Document root path (`-p`).
    pub docroot: Option<String>,
    /// Reverse proxy URL (`-r`).
    pub proxy: Option<String>,
    /// Location path for the reverse proxy (`-l`).
    pub location: Option<String>,
    /// Vhost name (`-n`).
    pub name: Option<String>,
    /// Generation mode (`-m`).
    pub mode: Option<String>,
    /// Make this the default vhost (`-d`).
    pub default: bool,
}

impl RequestArgs {
    /// Whether a location was given that a document-root vhost will ignore.
    #[must_use]
    pub fn location_ignored(&self) -> bool {
        self.docroot.is_some() && self.proxy.is_none() && self.location.is_some()
    }
}

/// A validated reverse proxy backend of the form `http(s)://HOST:PORT`.
///
/// # Examples
///
/// ```
/// use vhostgen::ProxyTarget;
///
/// let target = ProxyTarget::parse("https://10.0.0.5:8443").unwrap();
/// assert_eq!(target.scheme(), "https");
/// assert_eq!(target.host(), "10.0.0.5");
/// assert_eq!(target.port(), 8443);
///
/// assert!(ProxyTarget::parse("ftp://host:80").is_err());
/// assert!(ProxyTarget::parse("http://host:0").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyTarget {
    scheme: String,
    host: String,
    port: u16,
    port_text: String,
}

impl ProxyTarget {
    /// Parses and validates a proxy URL.
    ///
    /// The scheme is matched case-insensitively but kept as written.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidProxy`] when the URL does not have the shape
    /// `http(s)://HOST:PORT`, and [`Error::InvalidProxyPort`] when the port is
    /// outside 1-65535.
    pub fn parse(url: &str) -> Result<Self> {
        let invalid = || Error::InvalidProxy {
            value: url.to_string(),
        };

        let (scheme, rest) = url.split_once("://").ok_or_else(invalid)?;
        if !scheme.eq_ignore_ascii_case("http") && !scheme.eq_ignore_ascii_case("https") {
            return Err(invalid());
        }

        let (host, port_text) = rest.rsplit_once(':').ok_or_else(invalid)?;
        if host.is_empty() || !host.chars().all(is_host_char) {
            return Err(invalid());
        }
        if port_text.is_empty() || !port_text.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }

        let port = port_text
            .parse::<u16>()
            .ok()
            .filter(|port| *port >= 1)
            .ok_or_else(|| Error::InvalidProxyPort {
                port: port_text.to_string(),
            })?;

        Ok(Self {
            scheme: scheme.to_string(),
            host: host.to_string(),
            port,
            port_text: port_text.to_string(),
        })
    }

    /// The URL scheme as written (`http` or `https`, any case).
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// The backend host name or IP address.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// The backend port.
    #[must_use]
    pub const fn port(&self) -> u16 {
        self.port
    }

    /// The port exactly as written in the URL, leading zeros included.
    #[must_use]
    pub fn port_text(&self) -> &str {
        &self.port_text
    }
}

/// What the vhost serves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Backend {
    /// Serve files from a local document root.
    Docroot(String),
    /// Forward requests under `location` to a backend.
    Proxy {
        /// The backend URL.
        target: ProxyTarget,
        /// The location path forwarded to the backend.
        location: String,
    },
}

/// A fully validated generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VhostRequest {
    /// The bare vhost name (without configured prefix/suffix).
    pub name: String,
    /// Document root or reverse proxy.
    pub backend: Backend,
    /// Which blocks to generate.
    pub mode: Mode,
    /// Whether this is the default vhost.
    pub default: bool,
}

impl VhostRequest {
    /// Validates raw invocation parameters.
    ///
    /// # Errors
    ///
    /// Returns an argument error (see [`Error::is_argument_error`]) for the
    /// first problem found: a missing or conflicting backend, a proxy without
    /// location, a malformed proxy URL, an unknown mode, or a missing or
    /// malformed name.
    pub fn validate(args: &RequestArgs) -> Result<Self> {
        let backend = match (&args.docroot, &args.proxy) {
            (None, None) => return Err(Error::MissingBackend),
            (Some(_), Some(_)) => return Err(Error::ConflictingBackend),
            (Some(docroot), None) => Backend::Docroot(docroot.clone()),
            (None, Some(proxy)) => {
                let location = args.location.clone().ok_or(Error::MissingLocation)?;
                Backend::Proxy {
                    target: ProxyTarget::parse(proxy)?,
                    location,
                }
            }
        };

        let mode = Mode::from_arg(args.mode.as_deref())?;

        let name = args.name.clone().ok_or(Error::MissingName)?;
        validate_name(&name)?;

        Ok(Self {
            name,
            backend,
            mode,
            default: args.default,
        })
    }

    /// The document root, if this is not a reverse proxy.
    #[must_use]
    pub fn docroot(&self) -> Option<&str> {
        match &self.backend {
            Backend::Docroot(path) => Some(path),
            Backend::Proxy { .. } => None,
        }
    }
}

/// Checks that a vhost name only uses `[-_.A-Za-z0-9]` and is non-empty.
///
/// # Errors
///
/// Returns [`Error::InvalidName`] otherwise.
pub fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() || !name.chars().all(is_host_char) {
        return Err(Error::InvalidName {
            name: name.to_string(),
        });
    }
    Ok(())
}

fn is_host_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')
}
