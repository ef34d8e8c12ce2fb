//! Sub-fragment assembly.
//!
//! Each function fills one template fragment. The results are embedded in
//! the outer `vhost` skeleton by [`crate::compose`], which indents them
//! first.

use crate::config::schema::Config;
use crate::fields;
use crate::fragment::{embed, join_blocks, substitute, token};
use crate::request::Backend;
use crate::server::ServerKind;
use crate::template::Template;

/// The document root block; empty for reverse proxies.
#[must_use]
pub fn docroot_block(config: &Config, template: &Template, docroot: Option<&str>) -> String {
    if docroot.is_none() {
        return String::new();
    }
    substitute(
        &template.vhost_type.docroot,
        &[
            (token::DOCUMENT_ROOT, &fields::docroot_path(config, docroot)),
            (token::INDEX, &fields::index(config)),
        ],
    )
}

/// The reverse proxy block; empty for document-root vhosts.
#[must_use]
pub fn rproxy_block(template: &Template, backend: &Backend) -> String {
    let Backend::Proxy { target, location } = backend else {
        return String::new();
    };
    substitute(
        &template.vhost_type.rproxy,
        &[
            (token::LOCATION, location),
            (token::PROXY_PROTO, target.scheme()),
            (token::PROXY_ADDR, target.host()),
            (token::PROXY_PORT, target.port_text()),
        ],
    )
}

/// The TLS block.
#[must_use]
pub fn ssl_block(config: &Config, template: &Template, name: &str, letsencrypt: bool) -> String {
    let ssl = &config.vhost.ssl;
    substitute(
        &template.features.ssl,
        &[
            (token::SSL_PATH_CRT, &fields::ssl_crt_path(config, name, letsencrypt)),
            (token::SSL_PATH_KEY, &fields::ssl_key_path(config, name, letsencrypt)),
            (token::SSL_PROTOCOLS, &ssl.protocols),
            (token::SSL_HONOR_CIPHER_ORDER, &ssl.honor_cipher_order),
            (token::SSL_CIPHERS, &ssl.ciphers),
        ],
    )
}

/// The redirect-to-HTTPS block.
///
/// Always targets the decorated name, even for the nginx default vhost.
#[must_use]
pub fn redirect_block(config: &Config, server: ServerKind, template: &Template, name: &str) -> String {
    substitute(
        &template.features.redirect,
        &[
            (token::VHOST_NAME, &fields::server_name(config, server, name, false)),
            (token::SSL_PORT, &config.vhost.ssl_port),
        ],
    )
}

/// The PHP-FPM block; empty for reverse proxies or when disabled.
#[must_use]
pub fn php_fpm_block(config: &Config, template: &Template, docroot: Option<&str>) -> String {
    let php = &config.vhost.php_fpm;
    if docroot.is_none() || !php.enable {
        return String::new();
    }
    substitute(
        &template.features.php_fpm,
        &[
            (token::PHP_ADDR, &php.address),
            (token::PHP_PORT, &php.port),
            (token::PHP_TIMEOUT, &php.timeout),
            (token::DOCUMENT_ROOT, &fields::docroot_path(config, docroot)),
        ],
    )
}

/// One alias block per configured alias, joined by newlines.
///
/// An alias with cross-domain requests enabled embeds the indented
/// cross-domain block (trailing whitespace trimmed) in place of
/// `__XDOMAIN_REQ__`.
#[must_use]
pub fn alias_blocks(config: &Config, template: &Template) -> String {
    let blocks: Vec<String> = config
        .vhost
        .alias
        .iter()
        .map(|entry| {
            let xdomain = entry.cross_origin().map_or_else(String::new, |origin| {
                let block = substitute(
                    &template.features.xdomain_request,
                    &[(token::REGEX, origin)],
                );
                embed(&block).trim_end().to_string()
            });
            substitute(
                &template.features.alias,
                &[
                    (token::ALIAS, &entry.alias),
                    (token::PATH, &entry.path),
                    (token::XDOMAIN_REQ, &xdomain),
                ],
            )
        })
        .collect();

    join_blocks(&blocks)
}

/// One deny block per configured deny entry, joined by newlines.
#[must_use]
pub fn deny_blocks(config: &Config, template: &Template) -> String {
    let blocks: Vec<String> = config
        .vhost
        .deny
        .iter()
        .map(|entry| substitute(&template.features.deny, &[(token::REGEX, &entry.alias)]))
        .collect();

    join_blocks(&blocks)
}

/// The server status block; empty unless enabled.
#[must_use]
pub fn server_status_block(config: &Config, template: &Template) -> String {
    let status = &config.vhost.server_status;
    if !status.enable {
        return String::new();
    }
    substitute(&template.features.server_status, &[(token::REGEX, &status.alias)])
}

/// The custom text, verbatim.
#[must_use]
pub fn custom_block(config: &Config) -> String {
    config.custom.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::{AliasEntry, DenyEntry, XdomainRequest};
    use crate::request::ProxyTarget;
    use crate::template::{FeatureTemplates, VhostTypeTemplates};

    fn test_template() -> Template {
        Template {
            vhost: "vhost\n".to_string(),
            vhost_type: VhostTypeTemplates {
                docroot: "root __DOCUMENT_ROOT__;\nindex __INDEX__;\n".to_string(),
                rproxy: "location __LOCATION__ {\n    proxy_pass __PROXY_PROTO__://__PROXY_ADDR__:__PROXY_PORT__;\n}\n".to_string(),
            },
            features: FeatureTemplates {
                ssl: "ssl_certificate __SSL_PATH_CRT__;\nssl_certificate_key __SSL_PATH_KEY__;\nssl_protocols __SSL_PROTOCOLS__;\nssl_prefer_server_ciphers __SSL_HONOR_CIPHER_ORDER__;\nssl_ciphers __SSL_CIPHERS__;\n".to_string(),
                redirect: "return 301 https://__VHOST_NAME__:__SSL_PORT__$request_uri;\n".to_string(),
                php_fpm: "fastcgi_pass __PHP_ADDR__:__PHP_PORT__;\nfastcgi_read_timeout __PHP_TIMEOUT__;\nroot __DOCUMENT_ROOT__;\n".to_string(),
                alias: "location ~ __ALIAS__ {\n    root __PATH__;\n__XDOMAIN_REQ__\n}\n".to_string(),
                xdomain_request: "if ($http_origin ~* (__REGEX__)) {\n    set $cors \"true\";\n}\n".to_string(),
                deny: "location ~ __REGEX__ {\n    deny all;\n}\n".to_string(),
                server_status: "location __REGEX__ {\n    stub_status on;\n}\n".to_string(),
            },
        }
    }

    #[test]
    fn test_docroot_block() {
        let config = Config::default();
        let template = test_template();
        assert_eq!(docroot_block(&config, &template, None), "");
        assert_eq!(
            docroot_block(&config, &template, Some("/var/www/site")),
            "root /var/www/site/;\nindex index.php index.html index.htm;\n"
        );
    }

    #[test]
    fn test_rproxy_block_fills_url_parts() {
        let template = test_template();
        let backend = Backend::Proxy {
            target: ProxyTarget::parse("https://10.0.0.5:8443").unwrap(),
            location: "/api".to_string(),
        };
        assert_eq!(
            rproxy_block(&template, &backend),
            "location /api {\n    proxy_pass https://10.0.0.5:8443;\n}\n"
        );
        assert_eq!(rproxy_block(&template, &Backend::Docroot("/x".into())), "");
    }

    #[test]
    fn test_rproxy_block_keeps_port_as_written() {
        let backend = Backend::Proxy {
            target: ProxyTarget::parse("http://h:08080").unwrap(),
            location: "/".to_string(),
        };
        assert_eq!(
            rproxy_block(&test_template(), &backend),
            "location / {\n    proxy_pass http://h:08080;\n}\n"
        );
    }

    #[test]
    fn test_ssl_block() {
        let mut config = Config::default();
        config.vhost.ssl.dir_crt = "/etc/ssl".to_string();
        let block = ssl_block(&config, &test_template(), "site", false);
        assert!(block.contains("ssl_certificate /etc/ssl/site.crt;"));
        assert!(block.contains("ssl_certificate_key /etc/ssl/site.key;"));
        assert!(block.contains("ssl_protocols TLSv1 TLSv1.1 TLSv1.2;"));
        assert!(block.contains("ssl_prefer_server_ciphers on;"));
        assert!(block.contains("ssl_ciphers HIGH:!aNULL:!MD5;"));
    }

    #[test]
    fn test_redirect_block_ignores_default_name() {
        let mut config = Config::default();
        config.vhost.name.suffix = ".loc".to_string();
        let block = redirect_block(&config, ServerKind::Nginx, &test_template(), "site");
        assert_eq!(block, "return 301 https://site.loc:443$request_uri;\n");
    }

    #[test]
    fn test_php_fpm_block() {
        let mut config = Config::default();
        let template = test_template();
        assert_eq!(php_fpm_block(&config, &template, Some("/var/www")), "");

        config.vhost.php_fpm.enable = true;
        config.vhost.php_fpm.address = "php".to_string();
        assert_eq!(php_fpm_block(&config, &template, None), "");
        assert_eq!(
            php_fpm_block(&config, &template, Some("/var/www")),
            "fastcgi_pass php:9000;\nfastcgi_read_timeout 180;\nroot /var/www/;\n"
        );
    }

    #[test]
    fn test_alias_blocks_with_cross_origin() {
        let mut config = Config::default();
        config.vhost.alias = vec![
            AliasEntry {
                alias: "/api/".to_string(),
                path: "/var/www/api".to_string(),
                xdomain_request: Some(XdomainRequest {
                    enable: true,
                    origin: ".*".to_string(),
                }),
            },
            AliasEntry {
                alias: "/static/".to_string(),
                path: "/var/www/static".to_string(),
                xdomain_request: None,
            },
        ];

        let blocks = alias_blocks(&config, &test_template());
        let expected_first = "location ~ /api/ {\n    root /var/www/api;\n    if ($http_origin ~* (.*)) {\n        set $cors \"true\";\n    }\n}\n";
        let expected_second = "location ~ /static/ {\n    root /var/www/static;\n\n}\n";
        assert_eq!(
            blocks,
            format!("{expected_first}{}{expected_second}", crate::fragment::LINE_ENDING)
        );
    }

    #[test]
    fn test_alias_and_deny_blocks_empty_lists() {
        let config = Config::default();
        assert_eq!(alias_blocks(&config, &test_template()), "");
        assert_eq!(deny_blocks(&config, &test_template()), "");
    }

    #[test]
    fn test_deny_blocks_use_alias_as_regex() {
        let mut config = Config::default();
        config.vhost.deny = vec![
            DenyEntry {
                alias: "/\\.git".to_string(),
            },
            DenyEntry {
                alias: "/\\.ht.*".to_string(),
            },
        ];
        let blocks = deny_blocks(&config, &test_template());
        assert_eq!(blocks.matches("deny all;").count(), 2);
        assert!(blocks.contains("location ~ /\\.git {"));
        assert!(blocks.contains("location ~ /\\.ht.* {"));
    }

    #[test]
    fn test_server_status_block() {
        let mut config = Config::default();
        assert_eq!(server_status_block(&config, &test_template()), "");
        config.vhost.server_status.enable = true;
        assert_eq!(
            server_status_block(&config, &test_template()),
            "location /server-status {\n    stub_status on;\n}\n"
        );
    }

    #[test]
    fn test_custom_block_is_verbatim() {
        let config = Config {
            custom: "client_max_body_size 0;\n".to_string(),
            ..Config::default()
        };
        assert_eq!(custom_block(&config), "client_max_body_size 0;\n");
    }
}
