//! Placeholder substitution and indentation for template fragments.
//!
//! A fragment is plain text containing `__TOKEN__` placeholders. Substitution
//! is one left-to-right pass over the fragment: every occurrence of every
//! token is replaced, and inserted values are never rescanned, so the order
//! of the replacement table does not matter.

/// Placeholder tokens understood by the shipped templates.
pub mod token {
    /// Listen port (`80`, `443`, `443 ssl`).
    pub const PORT: &str = "__PORT__";
    /// ALPN / `http2` listen suffix.
    pub const HTTP_PROTO: &str = "__HTTP_PROTO__";
    /// Default-server marker.
    pub const DEFAULT_VHOST: &str = "__DEFAULT_VHOST__";
    /// Document root path.
    pub const DOCUMENT_ROOT: &str = "__DOCUMENT_ROOT__";
    /// Server name.
    pub const VHOST_NAME: &str = "__VHOST_NAME__";
    /// Embedded document root block.
    pub const VHOST_DOCROOT: &str = "__VHOST_DOCROOT__";
    /// Embedded reverse proxy block.
    pub const VHOST_RPROXY: &str = "__VHOST_RPROXY__";
    /// Embedded redirect block.
    pub const REDIRECT: &str = "__REDIRECT__";
    /// Embedded TLS block.
    pub const SSL: &str = "__SSL__";
    /// Space-separated index files.
    pub const INDEX: &str = "__INDEX__";
    /// Access log path.
    pub const ACCESS_LOG: &str = "__ACCESS_LOG__";
    /// Error log path.
    pub const ERROR_LOG: &str = "__ERROR_LOG__";
    /// Embedded PHP-FPM block.
    pub const PHP_FPM: &str = "__PHP_FPM__";
    /// Embedded alias blocks.
    pub const ALIASES: &str = "__ALIASES__";
    /// Embedded deny blocks.
    pub const DENIES: &str = "__DENIES__";
    /// Embedded server status block.
    pub const SERVER_STATUS: &str = "__SERVER_STATUS__";
    /// Embedded custom text.
    pub const CUSTOM: &str = "__CUSTOM__";

    /// Reverse proxy location.
    pub const LOCATION: &str = "__LOCATION__";
    /// Reverse proxy scheme.
    pub const PROXY_PROTO: &str = "__PROXY_PROTO__";
    /// Reverse proxy host.
    pub const PROXY_ADDR: &str = "__PROXY_ADDR__";
    /// Reverse proxy port.
    pub const PROXY_PORT: &str = "__PROXY_PORT__";

    /// Certificate path.
    pub const SSL_PATH_CRT: &str = "__SSL_PATH_CRT__";
    /// Key path.
    pub const SSL_PATH_KEY: &str = "__SSL_PATH_KEY__";
    /// TLS protocols.
    pub const SSL_PROTOCOLS: &str = "__SSL_PROTOCOLS__";
    /// Honor cipher order switch.
    pub const SSL_HONOR_CIPHER_ORDER: &str = "__SSL_HONOR_CIPHER_ORDER__";
    /// Cipher list.
    pub const SSL_CIPHERS: &str = "__SSL_CIPHERS__";
    /// HTTPS port in the redirect block.
    pub const SSL_PORT: &str = "__SSL_PORT__";

    /// PHP-FPM address.
    pub const PHP_ADDR: &str = "__PHP_ADDR__";
    /// PHP-FPM port.
    pub const PHP_PORT: &str = "__PHP_PORT__";
    /// PHP-FPM timeout.
    pub const PHP_TIMEOUT: &str = "__PHP_TIMEOUT__";

    /// Alias location.
    pub const ALIAS: &str = "__ALIAS__";
    /// Alias target path.
    pub const PATH: &str = "__PATH__";
    /// Embedded cross-domain request block.
    pub const XDOMAIN_REQ: &str = "__XDOMAIN_REQ__";
    /// Regex in deny, status and cross-domain blocks.
    pub const REGEX: &str = "__REGEX__";

    /// Every token above.
    pub const ALL: [&str; 34] = [
        PORT,
        HTTP_PROTO,
        DEFAULT_VHOST,
        DOCUMENT_ROOT,
        VHOST_NAME,
        VHOST_DOCROOT,
        VHOST_RPROXY,
        REDIRECT,
        SSL,
        INDEX,
        ACCESS_LOG,
        ERROR_LOG,
        PHP_FPM,
        ALIASES,
        DENIES,
        SERVER_STATUS,
        CUSTOM,
        LOCATION,
        PROXY_PROTO,
        PROXY_ADDR,
        PROXY_PORT,
        SSL_PATH_CRT,
        SSL_PATH_KEY,
        SSL_PROTOCOLS,
        SSL_HONOR_CIPHER_ORDER,
        SSL_CIPHERS,
        SSL_PORT,
        PHP_ADDR,
        PHP_PORT,
        PHP_TIMEOUT,
        ALIAS,
        PATH,
        XDOMAIN_REQ,
        REGEX,
    ];
}

/// Indentation applied to fragments embedded in another fragment.
pub const EMBED_INDENT: usize = 4;

/// Line separator used when joining repeated blocks.
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
/// Line separator used when joining repeated blocks.
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// Replace every occurrence of each token in `fragment` with its value.
///
/// When two tokens match at the same position the longer one wins.
///
/// # Examples
///
/// ```
/// use vhostgen::fragment::substitute;
///
/// let out = substitute(
///     "root __DOCROOT__; # __DOCROOT__",
///     &[("__DOCROOT__", "/var/www")],
/// );
/// assert_eq!(out, "root /var/www; # /var/www");
/// ```
#[must_use]
pub fn substitute(fragment: &str, replacements: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(fragment.len());
    let mut rest = fragment;

    while let Some(c) = rest.chars().next() {
        let hit = replacements
            .iter()
            .filter(|(token, _)| !token.is_empty() && rest.starts_with(token))
            .max_by_key(|(token, _)| token.len());

        match hit {
            Some((token, value)) => {
                out.push_str(value);
                rest = &rest[token.len()..];
            }
            None => {
                out.push(c);
                rest = &rest[c.len_utf8()..];
            }
        }
    }

    out
}

/// Prefix every line of `text` with `amount` spaces.
///
/// Blank lines are indented too, a trailing newline is kept without adding
/// padding after it, and the empty string stays empty.
///
/// # Examples
///
/// ```
/// use vhostgen::fragment::indent;
///
/// assert_eq!(indent("a\n\nb\n", 2), "  a\n  \n  b\n");
/// assert_eq!(indent("", 4), "");
/// ```
#[must_use]
pub fn indent(text: &str, amount: usize) -> String {
    let padding = " ".repeat(amount);
    text.split_inclusive('\n')
        .map(|line| format!("{padding}{line}"))
        .collect()
}

/// Indent a fragment for embedding in its parent.
#[must_use]
pub fn embed(text: &str) -> String {
    indent(text, EMBED_INDENT)
}

/// Join repeated blocks with [`LINE_ENDING`].
#[must_use]
pub fn join_blocks(blocks: &[String]) -> String {
    blocks.join(LINE_ENDING)
}

/// Tokens from [`token::ALL`] still present in `text`.
#[must_use]
pub fn remaining_tokens(text: &str) -> Vec<&'static str> {
    token::ALL
        .iter()
        .copied()
        .filter(|t| text.contains(t))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitute_replaces_all_occurrences() {
        let out = substitute("__A__-__A__-__B__", &[("__A__", "x"), ("__B__", "y")]);
        assert_eq!(out, "x-x-y");
    }

    #[test]
    fn test_substitute_does_not_rescan_values() {
        let out = substitute("__A__ __B__", &[("__A__", "__B__"), ("__B__", "b")]);
        assert_eq!(out, "__B__ b");

        let reversed = substitute("__A__ __B__", &[("__B__", "b"), ("__A__", "__B__")]);
        assert_eq!(reversed, out);
    }

    #[test]
    fn test_substitute_prefers_longest_token() {
        let out = substitute("__X__Y__ __X__", &[("__X__", "1"), ("__X__Y__", "2")]);
        assert_eq!(out, "2 1");
    }

    #[test]
    fn test_substitute_leaves_unknown_tokens() {
        assert_eq!(substitute("__X__ é", &[("__Y__", "y")]), "__X__ é");
    }

    #[test]
    fn test_substitute_empty_value_removes_token() {
        let out = substitute("listen 80__DEFAULT_VHOST__;", &[(token::DEFAULT_VHOST, "")]);
        assert_eq!(out, "listen 80;");
    }

    #[test]
    fn test_indent_without_trailing_newline() {
        assert_eq!(indent("a\nb", 4), "    a\n    b");
    }

    #[test]
    fn test_indent_keeps_crlf_lines_together() {
        assert_eq!(indent("a\r\nb\r\n", 1), " a\r\n b\r\n");
    }

    #[test]
    fn test_join_blocks() {
        assert_eq!(join_blocks(&[]), "");
        assert_eq!(
            join_blocks(&["a".to_string(), "b".to_string()]),
            format!("a{LINE_ENDING}b")
        );
    }

    #[test]
    fn test_remaining_tokens() {
        let left = remaining_tokens("listen __PORT__; root __DOCUMENT_ROOT__;");
        assert_eq!(left, [token::PORT, token::DOCUMENT_ROOT]);
        assert!(remaining_tokens("listen 80;").is_empty());
    }
}
