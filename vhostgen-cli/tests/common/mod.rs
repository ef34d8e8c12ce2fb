//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - A copy of the shipped templates and a writable `conf_dir`
//! - Command builder helpers for common patterns

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Template files shipped with the repository.
pub const TEMPLATE_FILES: [&str; 3] = ["apache22.yml", "apache24.yml", "nginx.yml"];

/// Test environment with isolated templates, configuration and output.
///
/// This struct provides an isolated test environment with:
/// - A temporary directory for test files
/// - A copy of the shipped templates
/// - A configuration file pointing `conf_dir` into the temporary directory
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Global template directory
    pub template_dir: PathBuf,
    /// Configuration file passed with -c
    pub config_path: PathBuf,
    /// Output directory for --save
    pub conf_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment for the given server.
    ///
    /// This creates:
    /// - `templates/` holding the shipped templates
    /// - `conf.d/` as the output directory
    /// - `conf.yml` selecting `server`
    pub fn new(server: &str) -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();

        let template_dir = temp_path.join("templates");
        fs::create_dir_all(&template_dir).expect("Failed to create template dir");
        let shipped = Path::new(env!("CARGO_MANIFEST_DIR")).join("../templates");
        for file in TEMPLATE_FILES {
            fs::copy(shipped.join(file), template_dir.join(file)).expect("Failed to copy template");
        }

        let conf_dir = temp_path.join("conf.d");
        fs::create_dir_all(&conf_dir).expect("Failed to create conf dir");

        let config_path = temp_path.join("conf.yml");
        let env = Self {
            temp_dir,
            temp_path,
            template_dir,
            config_path,
            conf_dir,
        };
        env.write_config(&format!("server: {server}\n"));
        env
    }

    /// Overwrite the configuration file.
    ///
    /// `conf_dir` is always appended so that --save stays inside the
    /// temporary directory.
    pub fn write_config(&self, content: &str) {
        let full = format!("{content}conf_dir: {}\n", self.conf_dir.display());
        fs::write(&self.config_path, full).expect("Failed to write config");
    }

    /// Overwrite the configuration file verbatim.
    pub fn write_raw_config(&self, content: &str) {
        fs::write(&self.config_path, content).expect("Failed to write config");
    }

    /// Get a bare command builder without pre-configured flags.
    ///
    /// Environment overrides are cleared so the host cannot leak into tests.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("vhost-gen").expect("Failed to find vhost-gen binary");
        cmd.env_remove("VHOSTGEN_CONFIG")
            .env_remove("VHOSTGEN_TEMPLATE_DIR")
            .env_remove("VHOSTGEN_LOG_MODE");
        cmd
    }

    /// Get a command builder with -c and -t pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("-c")
            .arg(&self.config_path)
            .arg("-t")
            .arg(&self.template_dir);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Create a subdirectory in the test environment.
    pub fn create_dir(&self, name: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Run a successful generation and return stdout.
    ///
    /// # Panics
    /// Panics if the command fails.
    pub fn generate(&self, args: &[&str]) -> String {
        let output = self
            .command()
            .args(args)
            .output()
            .expect("Failed to run vhost-gen");

        assert!(
            output.status.success(),
            "vhost-gen failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }
}
