//! Template discovery and loading.

use crate::config::merger::ConfigMerger;
use crate::error::{Error, Result};
use crate::logging::Logger;
use crate::server::ServerKind;
use crate::template::schema::Template;
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Loads the global template for a server flavour and applies an optional
/// override template on top of it.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use vhostgen::template::TemplateLoader;
/// use vhostgen::{Logger, ServerKind};
///
/// let dir = Path::new("/etc/vhost-gen/templates");
/// TemplateLoader::verify_global_dir(dir).unwrap();
/// let template = TemplateLoader::load(dir, None, ServerKind::Nginx, &Logger::default()).unwrap();
/// assert!(template.vhost.contains("__VHOST_NAME__"));
/// ```
pub struct TemplateLoader;

impl TemplateLoader {
    /// Check that the global template directory holds a template for every
    /// supported server, not just the configured one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TemplateDirNotFound`] if `dir` is not a directory and
    /// [`Error::TemplateNotFound`] for the first missing template file.
    pub fn verify_global_dir(dir: &Path) -> Result<()> {
        if !dir.is_dir() {
            return Err(Error::TemplateDirNotFound {
                path: dir.to_path_buf(),
            });
        }

        for kind in ServerKind::ALL {
            let path = dir.join(kind.template_file_name());
            if !path.is_file() {
                return Err(Error::TemplateNotFound {
                    server: kind.display_name().to_string(),
                    path,
                });
            }
        }

        Ok(())
    }

    /// Load the template for `server`.
    ///
    /// If `override_dir` holds a same-named file, each of its top-level keys
    /// replaces the global one. A missing override file only logs a warning.
    ///
    /// The global template must fit the schema on its own, so a schema error
    /// is only blamed on the override file when the override introduced it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TemplateParse`] naming the global or override file
    /// that could not be read, parsed, or does not fit the template schema.
    pub fn load(
        dir: &Path,
        override_dir: Option<&Path>,
        server: ServerKind,
        logger: &Logger,
    ) -> Result<Template> {
        let file_name = server.template_file_name();
        let global_path = dir.join(file_name);
        let mapping = Self::load_mapping(&global_path, "global")?;
        let global = Self::parse(mapping.clone(), "global", &global_path)?;
        log::debug!("loaded global template for {server}: {}", global_path.display());

        let Some(override_path) = override_dir.map(|d| d.join(file_name)) else {
            return Ok(global);
        };
        if !override_path.is_file() {
            logger.warn(&format!(
                "override template not found: {}",
                override_path.display()
            ));
            return Ok(global);
        }

        let overlay = Self::load_mapping(&override_path, "override")?;
        log::debug!("applying override template: {}", override_path.display());
        Self::parse(ConfigMerger::merge(mapping, overlay), "override", &override_path)
    }

    fn parse(mapping: Mapping, origin: &'static str, path: &Path) -> Result<Template> {
        serde_yaml::from_value(Value::Mapping(mapping)).map_err(|e| Error::TemplateParse {
            origin,
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    fn load_mapping(path: &Path, origin: &'static str) -> Result<Mapping> {
        let parse_error = |message: String| Error::TemplateParse {
            origin,
            path: path.to_path_buf(),
            message,
        };

        let contents = fs::read_to_string(path).map_err(|e| parse_error(e.to_string()))?;
        let document: Value =
            serde_yaml::from_str(&contents).map_err(|e| parse_error(e.to_string()))?;

        ConfigMerger::as_mapping(document)
            .ok_or_else(|| parse_error("top level must be a mapping".to_string()))
    }
}
