//! Startup orchestration: one scan and registration pass per capability.

use std::sync::Arc;

use tracing::info;

use ingot_core::Capability;
use ingot_framework::RuntimeContext;

use crate::config::IngotConfig;
use crate::error::DiscoveryResult;
use crate::registrar::ExtensionRegistrar;
use crate::scanner::ArtifactScanner;

/// Outcome of one bootstrap pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiscoveryReport {
    /// Event listeners registered with the host.
    pub listeners: usize,
    /// Parameter converters installed into the registry.
    pub converters: usize,
    /// Candidates whose construction failed and were skipped.
    pub skipped: usize,
}

impl DiscoveryReport {
    pub fn registered(&self) -> usize {
        self.listeners + self.converters
    }
}

/// Drives extension discovery at host startup.
///
/// Runs synchronously on the host's initialization thread. Parameter parsers
/// are registered before listeners so a listener factory can already resolve
/// converters supplied by the same artifact.
///
/// # Example
///
/// ```rust,ignore
/// use ingot_runtime::{Bootstrap, config::ConfigLoader, logging};
///
/// let config = ConfigLoader::new().load()?;
/// logging::init_from_config(&config.logging);
/// let report = Bootstrap::new(config, ctx).run()?;
/// ```
pub struct Bootstrap {
    config: IngotConfig,
    ctx: Arc<RuntimeContext>,
}

impl Bootstrap {
    pub fn new(config: IngotConfig, ctx: Arc<RuntimeContext>) -> Self {
        Self { config, ctx }
    }

    /// Scans the configured artifact and registers everything it yields.
    ///
    /// Consumes the bootstrap: registration must run at most once per
    /// startup, since the host does not de-duplicate repeated registrations.
    /// A scan failure propagates to the caller with zero registrations
    /// performed.
    pub fn run(self) -> DiscoveryResult<DiscoveryReport> {
        let discovery = &self.config.discovery;
        let scanner = ArtifactScanner::new(Arc::clone(self.ctx.diagnostics()));

        // Scan both capabilities up front so a manifest problem surfaces
        // before any registration side effect happens.
        let parser_candidates = scanner.scan(
            &discovery.artifact,
            &discovery.package_prefix,
            Capability::ParamParser,
        )?;
        let listener_candidates = scanner.scan(
            &discovery.artifact,
            &discovery.package_prefix,
            Capability::Listener,
        )?;

        let converters = ExtensionRegistrar::register_all(&parser_candidates, &self.ctx);
        let listeners = ExtensionRegistrar::register_all(&listener_candidates, &self.ctx);
        let skipped =
            parser_candidates.len() + listener_candidates.len() - converters - listeners;

        info!(listeners, converters, skipped, "Extension discovery complete");
        Ok(DiscoveryReport {
            listeners,
            converters,
            skipped,
        })
    }
}
