//! The shared runtime context handed to every extension and converter.
//!
//! One [`RuntimeContext`] is built at startup by the embedding application
//! and lives until shutdown. It is passed **by reference** into every
//! extension factory and every converter call, never stored in a global.
//! Extensions may keep the `Arc` handles it exposes, but must not retain the
//! context past the process lifetime.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use ingot_framework::RuntimeContext;
//!
//! let ctx = RuntimeContext::builder(host)
//!     .catalog(Arc::new(item_catalog))
//!     .build();
//!
//! let converter = ctx.converters().lookup("catalog-entry")?;
//! let suggestions = converter.complete("sword", &requester, &ctx);
//! ```

use std::sync::Arc;

use ingot_core::{
    CatalogLookup, DataStore, DiagnosticEvent, DiagnosticsSink, Host, MemoryCatalog, MemoryStore,
    TracingSink,
};

use crate::convert::registry::ConverterRegistry;

/// Aggregate of the shared services available to extensions.
///
/// Owned by the embedding process for its entire lifetime; constructed once
/// at startup, torn down at shutdown. All service handles are read-only from
/// the core's point of view; the only post-startup mutation this type allows
/// is converter registration, which the registry synchronizes internally.
pub struct RuntimeContext {
    host: Arc<dyn Host>,
    catalog: Arc<dyn CatalogLookup>,
    diagnostics: Arc<dyn DiagnosticsSink>,
    store: Arc<dyn DataStore>,
    converters: ConverterRegistry,
}

impl RuntimeContext {
    /// Starts building a context around the given host handle.
    pub fn builder(host: Arc<dyn Host>) -> RuntimeContextBuilder {
        RuntimeContextBuilder {
            host,
            catalog: None,
            diagnostics: None,
            store: None,
            builtin_converters: true,
        }
    }

    /// Handle to the host's registration API.
    pub fn host(&self) -> &Arc<dyn Host> {
        &self.host
    }

    /// The shared domain-object catalog.
    pub fn catalog(&self) -> &dyn CatalogLookup {
        self.catalog.as_ref()
    }

    /// The diagnostics sink consumed by the scanner and registrar.
    pub fn diagnostics(&self) -> &Arc<dyn DiagnosticsSink> {
        &self.diagnostics
    }

    /// The persisted key/value store shared with extensions.
    pub fn store(&self) -> &dyn DataStore {
        self.store.as_ref()
    }

    /// The single lookup point for parameter converters.
    pub fn converters(&self) -> &ConverterRegistry {
        &self.converters
    }

    /// Emits a diagnostic through the configured sink.
    pub fn emit(&self, event: DiagnosticEvent) {
        self.diagnostics.emit(event);
    }
}

impl std::fmt::Debug for RuntimeContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuntimeContext")
            .field("converters", &self.converters.type_keys())
            .finish_non_exhaustive()
    }
}

/// Builder for [`RuntimeContext`].
///
/// Unset services fall back to in-memory defaults, which keeps embedding and
/// testing cheap; the built-in converters are registered unless explicitly
/// disabled.
pub struct RuntimeContextBuilder {
    host: Arc<dyn Host>,
    catalog: Option<Arc<dyn CatalogLookup>>,
    diagnostics: Option<Arc<dyn DiagnosticsSink>>,
    store: Option<Arc<dyn DataStore>>,
    builtin_converters: bool,
}

impl RuntimeContextBuilder {
    pub fn catalog(mut self, catalog: Arc<dyn CatalogLookup>) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn diagnostics(mut self, sink: Arc<dyn DiagnosticsSink>) -> Self {
        self.diagnostics = Some(sink);
        self
    }

    pub fn store(mut self, store: Arc<dyn DataStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Builds a context whose registry starts empty.
    pub fn without_builtin_converters(mut self) -> Self {
        self.builtin_converters = false;
        self
    }

    pub fn build(self) -> RuntimeContext {
        let converters = if self.builtin_converters {
            ConverterRegistry::with_builtins()
        } else {
            ConverterRegistry::new()
        };
        RuntimeContext {
            host: self.host,
            catalog: self
                .catalog
                .unwrap_or_else(|| Arc::new(MemoryCatalog::new())),
            diagnostics: self
                .diagnostics
                .unwrap_or_else(|| Arc::new(TracingSink::new())),
            store: self.store.unwrap_or_else(|| Arc::new(MemoryStore::new())),
            converters,
        }
    }
}
