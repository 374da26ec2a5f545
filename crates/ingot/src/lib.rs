//! # Ingot
//!
//! A helper framework embedded inside a game-server plugin runtime. Ingot
//! lets extension authors register behaviors (event listeners and
//! command-parameter converters) without hand-wiring them into the host's
//! registration APIs:
//!
//! - Extensions declare themselves with [`define_extension!`] and appear in
//!   the packaged artifact's manifest; at startup the runtime scans the
//!   manifest, constructs each extension with the shared [`RuntimeContext`],
//!   and registers it with the host, isolating and reporting per-extension
//!   failures.
//! - The [`ConverterRegistry`] resolves raw textual command arguments into
//!   strongly typed values and supplies bounded tab-completion suggestions;
//!   third parties plug in custom [`ParamConverter`]s, including
//!   catalog-backed ones.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use ingot::prelude::*;
//!
//! let config = ConfigLoader::new().load()?;
//! logging::init_from_config(&config.logging);
//!
//! let ctx = Arc::new(
//!     RuntimeContext::builder(host)
//!         .catalog(Arc::new(item_catalog))
//!         .build(),
//! );
//! let report = Bootstrap::new(config, ctx.clone()).run()?;
//! tracing::info!(registered = report.registered(), "startup complete");
//! ```

pub use ingot_core::{
    Capability, CatalogEntry, CatalogLookup, DataStore, DiagnosticEvent, DiagnosticsSink,
    EventListener, Host, HostEvent, MemoryCatalog, MemorySink, MemoryStore, NullSink, Severity,
    TracingSink,
};
pub use ingot_framework::{
    ConstructionError, ConversionError, ConverterRegistry, DynParamConverter, ExtensionDescriptor,
    ExtensionInstance, ParamConverter, RegistryError, Requester, ResolveError, RuntimeContext,
    SUGGESTION_LIMIT, define_extension, find_descriptor,
};
pub use ingot_runtime::{
    ArtifactManifest, ArtifactScanner, Bootstrap, ConfigLoader, DiscoveryError, DiscoveryReport,
    ExtensionCandidate, ExtensionRegistrar, IngotConfig, logging,
};

/// Prelude for common imports.
pub mod prelude {
    pub use ingot_core::{
        Capability, CatalogEntry, CatalogLookup, DiagnosticsSink, EventListener, Host, HostEvent,
        Severity,
    };
    pub use ingot_framework::{
        ConversionError, ExtensionInstance, ParamConverter, Requester, RuntimeContext,
        define_extension,
    };
    pub use ingot_runtime::{Bootstrap, ConfigLoader, DiscoveryReport, logging};
}
