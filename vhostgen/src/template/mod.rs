//! Vhost templates.
//!
//! One YAML file per server flavour (`apache22.yml`, `apache24.yml`,
//! `nginx.yml`) lives in the global template directory. A second, optional
//! directory may hold same-named files whose top-level keys take precedence.

pub mod loader;
pub mod schema;

pub use loader::TemplateLoader;
pub use schema::{FeatureTemplates, Template, VhostTypeTemplates};
