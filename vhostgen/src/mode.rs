//! Vhost generation modes.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Which vhost blocks to generate.
///
/// | mode  | output                                         |
/// |-------|------------------------------------------------|
/// | plain | plain vhost                                    |
/// | ssl   | SSL vhost                                      |
/// | both  | SSL vhost, then plain vhost                    |
/// | redir | SSL vhost, then redirect-to-SSL vhost          |
/// | let   | SSL vhost (Let's Encrypt layout), then redirect |
///
/// # Examples
///
/// ```
/// use vhostgen::Mode;
///
/// assert_eq!(Mode::default(), Mode::Plain);
/// assert_eq!("redir".parse::<Mode>().unwrap(), Mode::Redir);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Plain HTTP vhost only.
    #[default]
    Plain,
    /// HTTPS vhost only.
    Ssl,
    /// HTTPS vhost followed by the plain HTTP vhost.
    Both,
    /// HTTPS vhost followed by an HTTP vhost redirecting to it.
    Redir,
    /// Like [`Mode::Redir`], with certificates in the Let's Encrypt layout.
    Let,
}

impl Mode {
    /// Every mode, in documentation order.
    pub const ALL: [Self; 5] = [Self::Plain, Self::Ssl, Self::Both, Self::Redir, Self::Let];

    /// The command-line spelling of this mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Ssl => "ssl",
            Self::Both => "both",
            Self::Redir => "redir",
            Self::Let => "let",
        }
    }

    /// Parses an optional mode argument, defaulting to [`Mode::Plain`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMode`] for an unrecognized string.
    pub fn from_arg(arg: Option<&str>) -> Result<Self> {
        arg.map_or(Ok(Self::Plain), str::parse)
    }

    /// Whether certificate paths use the Let's Encrypt layout.
    #[must_use]
    pub const fn uses_letsencrypt(self) -> bool {
        matches!(self, Self::Let)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| Error::InvalidMode {
                value: s.to_string(),
            })
    }
}
