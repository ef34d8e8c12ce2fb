//! Vhost composition.
//!
//! The composer fills the outer `vhost` skeleton once per generated server
//! block. The requested [`Mode`] decides which blocks are generated:
//!
//! | mode    | output                                   |
//! |---------|------------------------------------------|
//! | `plain` | plain vhost                              |
//! | `ssl`   | SSL vhost                                |
//! | `both`  | SSL vhost, then plain vhost              |
//! | `redir` | SSL vhost, then redirect-only vhost      |
//! | `let`   | Let's Encrypt SSL vhost, then redirect   |

use crate::assemble;
use crate::config::schema::Config;
use crate::fields;
use crate::fragment::{embed, substitute, token};
use crate::mode::Mode;
use crate::request::VhostRequest;
use crate::server::ServerKind;
use crate::template::Template;

/// Builds vhost configuration text for one validated request.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use vhostgen::template::TemplateLoader;
/// use vhostgen::{Config, Logger, RequestArgs, ServerKind, VhostComposer, VhostRequest};
///
/// let config = Config::default();
/// let template = TemplateLoader::load(
///     Path::new("/etc/vhost-gen/templates"),
///     None,
///     ServerKind::Nginx,
///     &Logger::default(),
/// )
/// .unwrap();
/// let request = VhostRequest::validate(&RequestArgs {
///     docroot: Some("/shared/httpd/site".to_string()),
///     name: Some("site".to_string()),
///     ..RequestArgs::default()
/// })
/// .unwrap();
///
/// let vhost = VhostComposer::new(&config, ServerKind::Nginx, &template, &request).compose();
/// println!("{vhost}");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct VhostComposer<'a> {
    config: &'a Config,
    server: ServerKind,
    template: &'a Template,
    request: &'a VhostRequest,
}

impl<'a> VhostComposer<'a> {
    /// Creates a composer for `request`.
    #[must_use]
    pub const fn new(
        config: &'a Config,
        server: ServerKind,
        template: &'a Template,
        request: &'a VhostRequest,
    ) -> Self {
        Self {
            config,
            server,
            template,
            request,
        }
    }

    /// Generates the complete output for the request's mode.
    #[must_use]
    pub fn compose(&self) -> String {
        log::debug!(
            "composing {} vhost '{}' for {}",
            self.request.mode,
            self.request.name,
            self.server
        );

        let letsencrypt = self.request.mode.uses_letsencrypt();
        match self.request.mode {
            Mode::Plain => self.plain(),
            Mode::Ssl => self.ssl(letsencrypt),
            Mode::Both => self.ssl(letsencrypt) + &self.plain(),
            Mode::Redir | Mode::Let => self.ssl(letsencrypt) + &self.redirect(),
        }
    }

    /// The plain HTTP vhost.
    #[must_use]
    pub fn plain(&self) -> String {
        self.full_vhost(false, false)
    }

    /// The HTTPS vhost.
    ///
    /// With `letsencrypt` the certificate and key are taken from the
    /// Let's Encrypt `live/<name>/` layout.
    #[must_use]
    pub fn ssl(&self, letsencrypt: bool) -> String {
        self.full_vhost(true, letsencrypt)
    }

    /// The HTTP vhost that only redirects to HTTPS.
    #[must_use]
    pub fn redirect(&self) -> String {
        let (config, server, template) = (self.config, self.server, self.template);
        let name = self.request.name.as_str();

        substitute(
            &template.vhost,
            &[
                (token::PORT, &fields::listen_port(config, server, false)),
                (token::HTTP_PROTO, &fields::http_proto(config, server, false)),
                (token::DEFAULT_VHOST, &fields::default_server(server, self.request.default)),
                (token::DOCUMENT_ROOT, &fields::docroot_path(config, self.request.docroot())),
                (token::VHOST_NAME, &self.server_name()),
                (token::VHOST_DOCROOT, ""),
                (token::VHOST_RPROXY, ""),
                (
                    token::REDIRECT,
                    &embed(&assemble::redirect_block(config, server, template, name)),
                ),
                (token::SSL, ""),
                (token::INDEX, ""),
                (token::ACCESS_LOG, &fields::access_log(config, name)),
                (token::ERROR_LOG, &fields::error_log(config, name)),
                (token::PHP_FPM, ""),
                (token::ALIASES, ""),
                (token::DENIES, ""),
                (token::SERVER_STATUS, ""),
                (token::CUSTOM, ""),
            ],
        )
    }

    fn full_vhost(&self, ssl: bool, letsencrypt: bool) -> String {
        let (config, server, template) = (self.config, self.server, self.template);
        let name = self.request.name.as_str();
        let docroot = self.request.docroot();

        let log_name = if ssl {
            format!("{name}{}", fields::SSL_LOG_SUFFIX)
        } else {
            name.to_string()
        };
        let ssl_block = if ssl {
            embed(&assemble::ssl_block(config, template, name, letsencrypt))
        } else {
            String::new()
        };

        substitute(
            &template.vhost,
            &[
                (token::PORT, &fields::listen_port(config, server, ssl)),
                (token::HTTP_PROTO, &fields::http_proto(config, server, ssl)),
                (token::DEFAULT_VHOST, &fields::default_server(server, self.request.default)),
                (token::DOCUMENT_ROOT, &fields::docroot_path(config, docroot)),
                (token::VHOST_NAME, &self.server_name()),
                (
                    token::VHOST_DOCROOT,
                    &embed(&assemble::docroot_block(config, template, docroot)),
                ),
                (
                    token::VHOST_RPROXY,
                    &embed(&assemble::rproxy_block(template, &self.request.backend)),
                ),
                (token::REDIRECT, ""),
                (token::SSL, &ssl_block),
                (token::INDEX, &fields::index(config)),
                (token::ACCESS_LOG, &fields::access_log(config, &log_name)),
                (token::ERROR_LOG, &fields::error_log(config, &log_name)),
                (
                    token::PHP_FPM,
                    &embed(&assemble::php_fpm_block(config, template, docroot)),
                ),
                (token::ALIASES, &embed(&assemble::alias_blocks(config, template))),
                (token::DENIES, &embed(&assemble::deny_blocks(config, template))),
                (
                    token::SERVER_STATUS,
                    &embed(&assemble::server_status_block(config, template)),
                ),
                (token::CUSTOM, &embed(&assemble::custom_block(config))),
            ],
        )
    }

    fn server_name(&self) -> String {
        fields::server_name(self.config, self.server, &self.request.name, self.request.default)
    }
}
