//! Supported web server flavours.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// The web server a vhost is generated for.
///
/// Each kind owns exactly one template file in the global template
/// directory.
///
/// # Examples
///
/// ```
/// use vhostgen::ServerKind;
///
/// let kind: ServerKind = "apache24".parse().unwrap();
/// assert_eq!(kind, ServerKind::Apache24);
/// assert_eq!(kind.template_file_name(), "apache24.yml");
/// assert!("lighttpd".parse::<ServerKind>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServerKind {
    /// Apache HTTP Server 2.2.
    Apache22,
    /// Apache HTTP Server 2.4.
    Apache24,
    /// Nginx.
    Nginx,
}

impl ServerKind {
    /// Every supported server, in the order their templates are checked.
    pub const ALL: [Self; 3] = [Self::Apache22, Self::Apache24, Self::Nginx];

    /// The configuration value naming this server.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Apache22 => "apache22",
            Self::Apache24 => "apache24",
            Self::Nginx => "nginx",
        }
    }

    /// Human-readable name used in diagnostics.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Apache22 => "Apache 2.2",
            Self::Apache24 => "Apache 2.4",
            Self::Nginx => "Nginx",
        }
    }

    /// File name of this server's template.
    #[must_use]
    pub const fn template_file_name(self) -> &'static str {
        match self {
            Self::Apache22 => "apache22.yml",
            Self::Apache24 => "apache24.yml",
            Self::Nginx => "nginx.yml",
        }
    }

    /// Whether this is one of the Apache flavours.
    #[must_use]
    pub const fn is_apache(self) -> bool {
        matches!(self, Self::Apache22 | Self::Apache24)
    }
}

impl fmt::Display for ServerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServerKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| Error::InvalidServer {
                value: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!("nginx".parse::<ServerKind>().unwrap(), ServerKind::Nginx);
        assert!("Nginx".parse::<ServerKind>().is_err());
        assert!("".parse::<ServerKind>().is_err());
    }

    #[test]
    fn test_template_file_names_are_distinct() {
        let names: Vec<_> = ServerKind::ALL
            .iter()
            .map(|k| k.template_file_name())
            .collect();
        assert_eq!(names, ["apache22.yml", "apache24.yml", "nginx.yml"]);
    }

    #[test]
    fn test_display_matches_config_value() {
        for kind in ServerKind::ALL {
            assert_eq!(kind.to_string().parse::<ServerKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_is_apache() {
        assert!(ServerKind::Apache22.is_apache());
        assert!(ServerKind::Apache24.is_apache());
        assert!(!ServerKind::Nginx.is_apache());
    }
}
