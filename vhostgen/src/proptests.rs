//! Property-based tests for vhost assembly.
//!
//! These tests focus on substitution and composition invariants that must
//! hold for any name, decoration, mode and backend.

use crate::assemble::alias_blocks;
use crate::config::schema::{AliasEntry, Config};
use crate::fields::server_name;
use crate::fragment::{indent, remaining_tokens, substitute, LINE_ENDING};
use crate::request::{Backend, ProxyTarget, VhostRequest};
use crate::template::Template;
use crate::{Mode, ServerKind, VhostComposer};
use proptest::prelude::*;

fn shipped_template(server: ServerKind) -> Template {
    let text = match server {
        ServerKind::Apache22 => include_str!("../../templates/apache22.yml"),
        ServerKind::Apache24 => include_str!("../../templates/apache24.yml"),
        ServerKind::Nginx => include_str!("../../templates/nginx.yml"),
    };
    serde_yaml::from_str(text).unwrap()
}

// Strategy for vhost names
fn name_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9.-]{0,15}"
}

// Strategy for name prefixes and suffixes
fn decoration_strategy() -> impl Strategy<Value = String> {
    "[a-z.-]{0,8}"
}

fn server_strategy() -> impl Strategy<Value = ServerKind> {
    prop::sample::select(ServerKind::ALL.to_vec())
}

fn mode_strategy() -> impl Strategy<Value = Mode> {
    prop::sample::select(Mode::ALL.to_vec())
}

fn backend_strategy() -> impl Strategy<Value = Backend> {
    prop_oneof![
        "/[a-z]{1,8}(/[a-z]{1,8}){0,3}".prop_map(Backend::Docroot),
        ("(http|https|HTTP)", "[a-z0-9.-]{1,12}", 1u16..=65535, "/[a-z]{0,8}").prop_map(
            |(scheme, host, port, location)| Backend::Proxy {
                target: ProxyTarget::parse(&format!("{scheme}://{host}:{port}")).unwrap(),
                location,
            }
        ),
    ]
}

fn alias_strategy() -> impl Strategy<Value = AliasEntry> {
    ("/[a-z]{1,8}/", "/var/www/[a-z]{1,8}").prop_map(|(alias, path)| AliasEntry {
        alias,
        path,
        xdomain_request: None,
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        .. ProptestConfig::default()
    })]

    // The nginx default vhost catches every name
    #[test]
    fn nginx_default_server_name_is_catch_all(
        name in name_strategy(),
        prefix in decoration_strategy(),
        suffix in decoration_strategy()
    ) {
        let mut config = Config::default();
        config.vhost.name.prefix = prefix.clone();
        config.vhost.name.suffix = suffix.clone();

        prop_assert_eq!(server_name(&config, ServerKind::Nginx, &name, true), "_");
        prop_assert_eq!(
            server_name(&config, ServerKind::Apache24, &name, true),
            format!("{prefix}{name}{suffix}")
        );
    }

    // Indentation pads every line and nothing else
    #[test]
    fn indent_pads_every_line(text in "[a-z \n]{0,64}", amount in 0usize..8) {
        let padded = indent(&text, amount);
        let padding = " ".repeat(amount);

        prop_assert_eq!(padded.lines().count(), text.lines().count());
        let unpadded: String = padded
            .split_inclusive('\n')
            .map(|line| line.strip_prefix(padding.as_str()).unwrap_or(line))
            .collect();
        prop_assert_eq!(unpadded, text);
    }

    // Substituted values are never rescanned
    #[test]
    fn substitute_inserts_values_verbatim(value in "[a-zA-Z_ ]{0,20}") {
        let out = substitute("<__A__|__B__>", &[("__A__", value.as_str()), ("__B__", "b")]);
        prop_assert_eq!(out, format!("<{value}|b>"));
    }

    // Text without tokens passes through untouched
    #[test]
    fn substitute_without_tokens_is_identity(text in "[a-z {};\n]{0,64}") {
        prop_assert_eq!(substitute(&text, &[("__A__", "x")]), text);
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 200,
        .. ProptestConfig::default()
    })]

    // One alias block per configured alias
    #[test]
    fn alias_list_yields_one_block_each(
        aliases in prop::collection::vec(alias_strategy(), 0..6),
        server in server_strategy()
    ) {
        let template = shipped_template(server);
        let mut config = Config::default();
        config.vhost.alias = aliases.clone();

        let blocks = alias_blocks(&config, &template);
        prop_assert_eq!(blocks.matches("# Alias Definition").count(), aliases.len());
        let separators = blocks.matches(&format!("\n{LINE_ENDING}# Alias Definition")).count();
        prop_assert_eq!(separators, aliases.len().saturating_sub(1));
        for alias in &aliases {
            prop_assert!(blocks.contains(&alias.path));
        }
    }

    // Composition leaves no known placeholder behind
    #[test]
    fn composed_vhost_has_no_tokens(
        name in name_strategy(),
        server in server_strategy(),
        mode in mode_strategy(),
        backend in backend_strategy(),
        default in any::<bool>(),
        aliases in prop::collection::vec(alias_strategy(), 0..3)
    ) {
        let template = shipped_template(server);
        let mut config = Config::default();
        config.vhost.php_fpm.enable = true;
        config.vhost.server_status.enable = true;
        config.vhost.alias = aliases;
        let request = VhostRequest { name, backend, mode, default };

        let vhost = VhostComposer::new(&config, server, &template, &request).compose();
        prop_assert!(remaining_tokens(&vhost).is_empty(), "{}", vhost);
    }

    // `both` is the SSL vhost immediately followed by the plain one
    #[test]
    fn both_is_ssl_then_plain(
        name in name_strategy(),
        server in server_strategy(),
        backend in backend_strategy()
    ) {
        let template = shipped_template(server);
        let config = Config::default();
        let request = VhostRequest { name, backend, mode: Mode::Both, default: false };
        let composer = VhostComposer::new(&config, server, &template, &request);

        prop_assert_eq!(composer.compose(), composer.ssl(false) + &composer.plain());
    }
}
