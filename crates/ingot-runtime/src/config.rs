//! Configuration for the Ingot runtime.
//!
//! Layered loading via figment, lowest to highest priority:
//!
//! 1. Built-in defaults
//! 2. `ingot.toml` (or a caller-supplied file)
//! 3. Environment variables (`INGOT_*`, `__` as section separator)
//!
//! ```toml
//! [discovery]
//! artifact = "."
//! package_prefix = "ingot."
//!
//! [logging]
//! level = "info"
//! diagnostics = "info"
//! ```
//!
//! `INGOT_DISCOVERY__PACKAGE_PREFIX=demo.` overrides `discovery.package_prefix`.

use std::path::PathBuf;

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use tracing::warn;

use ingot_core::Severity;

use crate::error::ConfigResult;

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct IngotConfig {
    /// Where and what to scan at startup.
    #[serde(default)]
    pub discovery: DiscoveryConfig,

    /// Logging and diagnostics settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Discovery settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoveryConfig {
    /// Artifact location: a directory containing `extensions.json`, or the
    /// manifest file itself. Defaults to the working directory.
    #[serde(default = "default_artifact")]
    pub artifact: PathBuf,

    /// Namespace filter applied to manifest entries. Must be non-empty.
    #[serde(default = "default_package_prefix")]
    pub package_prefix: String,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            artifact: default_artifact(),
            package_prefix: default_package_prefix(),
        }
    }
}

fn default_artifact() -> PathBuf {
    PathBuf::from(".")
}

fn default_package_prefix() -> String {
    "ingot.".to_string()
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Base log level for the tracing subscriber
    /// (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Minimum severity forwarded by the diagnostics sink.
    #[serde(default = "default_log_level")]
    pub diagnostics: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            diagnostics: default_log_level(),
        }
    }
}

impl LoggingConfig {
    /// Parses the diagnostics threshold, falling back to `Info` on an
    /// unknown value.
    pub fn diagnostics_severity(&self) -> Severity {
        self.diagnostics.parse().unwrap_or_else(|err: String| {
            warn!(error = %err, "Invalid diagnostics severity — falling back to 'info'");
            Severity::Info
        })
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Layered configuration loader.
///
/// # Example
///
/// ```rust,ignore
/// use ingot_runtime::config::ConfigLoader;
///
/// let config = ConfigLoader::new().load()?;
/// let config = ConfigLoader::new().file("./conf/ingot.toml").load()?;
/// ```
pub struct ConfigLoader {
    file: PathBuf,
    env: bool,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self {
            file: PathBuf::from("ingot.toml"),
            env: true,
        }
    }

    /// Reads the given file instead of `ingot.toml`.
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = path.into();
        self
    }

    /// Disables the `INGOT_*` environment layer.
    pub fn without_env(mut self) -> Self {
        self.env = false;
        self
    }

    pub fn load(self) -> ConfigResult<IngotConfig> {
        let mut figment = Figment::from(Serialized::defaults(IngotConfig::default()))
            .merge(Toml::file(&self.file));
        if self.env {
            figment = figment.merge(Env::prefixed("INGOT_").split("__"));
        }
        Ok(figment.extract()?)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_usable() {
        let config = IngotConfig::default();
        assert_eq!(config.discovery.package_prefix, "ingot.");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.diagnostics_severity(), Severity::Info);
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ingot.toml");
        std::fs::write(
            &path,
            "[discovery]\nartifact = \"pkg\"\npackage_prefix = \"demo.\"\n\n[logging]\ndiagnostics = \"warn\"\n",
        )
        .unwrap();

        let config = ConfigLoader::new().file(&path).without_env().load().unwrap();
        assert_eq!(config.discovery.artifact, PathBuf::from("pkg"));
        assert_eq!(config.discovery.package_prefix, "demo.");
        assert_eq!(config.logging.diagnostics_severity(), Severity::Warn);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = ConfigLoader::new()
            .file("/does/not/exist/ingot.toml")
            .without_env()
            .load()
            .unwrap();
        assert_eq!(config.discovery.package_prefix, "ingot.");
    }

    #[test]
    fn unknown_diagnostics_severity_falls_back_to_info() {
        let config = LoggingConfig {
            level: "info".into(),
            diagnostics: "loud".into(),
        };
        assert_eq!(config.diagnostics_severity(), Severity::Info);
    }
}
