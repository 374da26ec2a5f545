//! # Ingot Runtime
//!
//! Startup-time discovery and registration for the Ingot extension
//! framework:
//!
//! - [`ArtifactScanner`] reads a packaged artifact's embedded manifest and
//!   resolves entries against the compiled-in extension inventory.
//! - [`ExtensionRegistrar`] constructs each candidate through its factory and
//!   registers it with the host, isolating per-candidate failures.
//! - [`Bootstrap`] wires both together from an [`IngotConfig`].
//!
//! Both phases run once, synchronously, on the host's initialization thread;
//! after that the runtime holds no state of its own.

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod registrar;
pub mod scanner;

pub use bootstrap::{Bootstrap, DiscoveryReport};
pub use config::{ConfigLoader, DiscoveryConfig, IngotConfig, LoggingConfig};
pub use error::{ConfigError, ConfigResult, DiscoveryError, DiscoveryResult};
pub use manifest::{ArtifactManifest, ManifestEntry};
pub use registrar::ExtensionRegistrar;
pub use scanner::{ArtifactScanner, ExtensionCandidate};
