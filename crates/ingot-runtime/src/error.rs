//! Runtime error types.

use std::path::PathBuf;

use thiserror::Error;

/// A discovery pass could not read the packaged artifact at all.
///
/// Fatal to the single scan invocation that raised it; the caller decides
/// whether startup continues. Per-entry problems are never represented here;
/// those are isolated and reported as diagnostics while the scan continues.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// The artifact (or its embedded manifest) is missing or unreadable.
    #[error("cannot read extension manifest at '{}'", path.display())]
    ArtifactUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The embedded manifest is not valid JSON of the expected shape.
    #[error("extension manifest at '{}' is malformed", path.display())]
    ManifestMalformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The caller passed an empty namespace filter.
    #[error("package prefix must not be empty")]
    EmptyPrefix,
}

/// Result type for discovery operations.
pub type DiscoveryResult<T> = Result<T, DiscoveryError>;

/// Configuration loading failed.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration")]
    Load(#[from] figment::Error),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
