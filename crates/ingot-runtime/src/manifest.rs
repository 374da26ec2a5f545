//! The artifact's embedded extension manifest.
//!
//! A packaged artifact announces its extensions through an `extensions.json`
//! index: a flat list of qualified names with their declared capability
//! strings. The scanner reads this index instead of introspecting the
//! package contents.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{DiscoveryError, DiscoveryResult};

/// File name of the manifest inside an artifact directory.
pub const MANIFEST_FILE: &str = "extensions.json";

/// One manifest line: an extension's qualified name plus its declared
/// capability string (see `Capability::as_str`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub name: String,
    pub capability: String,
}

/// The parsed manifest of a packaged artifact.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArtifactManifest {
    #[serde(default)]
    pub extensions: Vec<ManifestEntry>,
}

impl ArtifactManifest {
    /// Loads the manifest from an artifact location.
    ///
    /// `artifact` is either a directory containing [`MANIFEST_FILE`] or a
    /// direct path to the manifest file. An unreadable or malformed manifest
    /// is fatal to the scan.
    pub fn load(artifact: &Path) -> DiscoveryResult<Self> {
        let path = manifest_path(artifact);
        let bytes = fs::read(&path).map_err(|source| DiscoveryError::ArtifactUnreadable {
            path: path.clone(),
            source,
        })?;
        serde_json::from_slice(&bytes)
            .map_err(|source| DiscoveryError::ManifestMalformed { path, source })
    }
}

fn manifest_path(artifact: &Path) -> PathBuf {
    if artifact.is_dir() {
        artifact.join(MANIFEST_FILE)
    } else {
        artifact.to_path_buf()
    }
}
