//! Extension descriptors and the compiled-in inventory.
//!
//! # Architecture
//!
//! A packaged extension is represented by a static [`ExtensionDescriptor`]:
//! a `Copy` handle carrying the extension's qualified name, its declared
//! [`Capability`], the API version it was compiled against, and a factory
//! function. The registrar calls the factory with a shared
//! [`RuntimeContext`] to create the live [`ExtensionInstance`]; nothing in
//! the framework ever constructs an extension any other way.
//!
//! Descriptors announce themselves by being present in the artifact: the
//! [`define_extension!`] macro places each descriptor into the
//! [`EXTENSION_INVENTORY`] distributed slice, and the scanner resolves
//! manifest entries against that slice. A manifest entry with no inventory
//! counterpart is reported and skipped, exactly like a class that fails to
//! load.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use ingot_framework::{define_extension, ExtensionInstance, RuntimeContext};
//! use ingot_framework::error::ConstructionError;
//!
//! fn create_join_alert(ctx: &RuntimeContext) -> Result<ExtensionInstance, ConstructionError> {
//!     Ok(ExtensionInstance::Listener(Box::new(JoinAlert::new(ctx))))
//! }
//!
//! define_extension! {
//!     /// Greets players as they join.
//!     pub static JOIN_ALERT: "demo.listeners.JoinAlert", listener, create_join_alert
//! }
//! ```

use std::sync::Arc;

use linkme::distributed_slice;

use ingot_core::{Capability, EventListener};

use crate::context::RuntimeContext;
use crate::convert::registry::DynParamConverter;
use crate::error::ConstructionError;

// ─── API versioning ──────────────────────────────────────────────────────────

/// Current Ingot extension API version (1.0), packed as `major << 16 | minor`.
pub const INGOT_EXTENSION_API_VERSION: u32 = 0x0001_0000;

// ─── ExtensionInstance ───────────────────────────────────────────────────────

/// A live extension produced by a descriptor factory.
///
/// One variant per capability; the registrar routes each variant to the
/// matching host registration call.
pub enum ExtensionInstance {
    /// An event handler to attach via the host's registration API.
    Listener(Box<dyn EventListener>),
    /// A parameter converter to install into the converter registry.
    Converter(Arc<dyn DynParamConverter>),
}

impl ExtensionInstance {
    /// The capability this instance actually implements.
    pub fn capability(&self) -> Capability {
        match self {
            ExtensionInstance::Listener(_) => Capability::Listener,
            ExtensionInstance::Converter(_) => Capability::ParamParser,
        }
    }
}

impl std::fmt::Debug for ExtensionInstance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExtensionInstance::Listener(listener) => {
                f.debug_tuple("Listener").field(&listener.name()).finish()
            }
            ExtensionInstance::Converter(converter) => {
                f.debug_tuple("Converter").field(&converter.type_key()).finish()
            }
        }
    }
}

/// Factory signature every extension registers: a single-argument constructor
/// taking the shared runtime context.
pub type ExtensionFactory = fn(&RuntimeContext) -> Result<ExtensionInstance, ConstructionError>;

// ─── ExtensionDescriptor ─────────────────────────────────────────────────────

/// A static, `Copy` descriptor that identifies and instantiates an extension.
///
/// Create descriptors with the [`define_extension!`] macro, which also adds
/// them to the [`EXTENSION_INVENTORY`].
#[derive(Debug, Clone, Copy)]
pub struct ExtensionDescriptor {
    /// Fully qualified extension name; the manifest key and namespace-filter
    /// subject, e.g. `"demo.listeners.JoinAlert"`.
    pub qualified_name: &'static str,

    /// Capability this extension declares.
    pub capability: Capability,

    /// Extension API version this descriptor was compiled against.
    pub api_version: u32,

    /// Factory that creates the live [`ExtensionInstance`].
    pub create: ExtensionFactory,
}

impl ExtensionDescriptor {
    /// Returns `true` if this descriptor's API version is compatible with
    /// the running framework.
    ///
    /// The major part must match exactly; the descriptor's minor part must be
    /// ≤ the host's minor part.
    pub fn is_compatible(&self) -> bool {
        let host_major = INGOT_EXTENSION_API_VERSION >> 16;
        let host_minor = INGOT_EXTENSION_API_VERSION & 0xFFFF;
        let desc_major = self.api_version >> 16;
        let desc_minor = self.api_version & 0xFFFF;
        desc_major == host_major && desc_minor <= host_minor
    }

    /// Calls the factory. Prefer going through the registrar, which also
    /// emits the per-candidate diagnostics.
    #[inline]
    pub fn instantiate(
        &self,
        ctx: &RuntimeContext,
    ) -> Result<ExtensionInstance, ConstructionError> {
        (self.create)(ctx)
    }
}

// ─── Inventory ───────────────────────────────────────────────────────────────

/// Every extension descriptor compiled into this artifact.
///
/// Populated at link time by [`define_extension!`]; iteration order is
/// unspecified, so consumers sort by qualified name when order matters.
#[distributed_slice]
pub static EXTENSION_INVENTORY: [ExtensionDescriptor];

/// Finds the compiled-in descriptor for a qualified name, if any.
pub fn find_descriptor(qualified_name: &str) -> Option<&'static ExtensionDescriptor> {
    EXTENSION_INVENTORY
        .iter()
        .find(|descriptor| descriptor.qualified_name == qualified_name)
}

// ─── define_extension! ───────────────────────────────────────────────────────

#[doc(hidden)]
#[macro_export]
macro_rules! __ingot_capability {
    (listener) => {
        $crate::Capability::Listener
    };
    (param_parser) => {
        $crate::Capability::ParamParser
    };
}

/// Declares an extension descriptor and registers it in the
/// [`EXTENSION_INVENTORY`].
///
/// # Syntax
///
/// ```rust,ignore
/// define_extension! {
///     pub static JOIN_ALERT: "demo.listeners.JoinAlert", listener, create_join_alert
/// }
/// define_extension! {
///     static RUNE_PARSER: "demo.parsers.Rune", param_parser, create_rune_parser
/// }
/// ```
///
/// The capability is `listener` or `param_parser`; the factory is any
/// `fn(&RuntimeContext) -> Result<ExtensionInstance, ConstructionError>`.
#[macro_export]
macro_rules! define_extension {
    (
        $(#[$meta:meta])*
        $vis:vis static $ident:ident : $name:literal, $capability:ident, $factory:path $(,)?
    ) => {
        $(#[$meta])*
        #[$crate::linkme::distributed_slice($crate::extension::EXTENSION_INVENTORY)]
        #[linkme(crate = $crate::linkme)]
        $vis static $ident: $crate::extension::ExtensionDescriptor =
            $crate::extension::ExtensionDescriptor {
                qualified_name: $name,
                capability: $crate::__ingot_capability!($capability),
                api_version: $crate::extension::INGOT_EXTENSION_API_VERSION,
                create: $factory,
            };
    };
}
