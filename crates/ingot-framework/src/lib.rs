//! # Ingot Framework
//!
//! Mid-level building blocks of the Ingot extension framework:
//!
//! - [`RuntimeContext`] — the shared aggregate of services handed to every
//!   extension factory and converter call.
//! - [`ParamConverter`] and the [`ConverterRegistry`] — typed parameter
//!   resolution for command arguments, with tab completion.
//! - [`ExtensionDescriptor`] and [`define_extension!`] — the factory-based
//!   registration point through which extensions become discoverable.
//!
//! The discovery pipeline itself (artifact scanning and registration) lives
//! in `ingot-runtime`; the contracts it consumes live in `ingot-core`.

pub mod context;
pub mod convert;
pub mod error;
pub mod extension;

pub use context::{RuntimeContext, RuntimeContextBuilder};
pub use convert::registry::{ConverterRegistry, DynParamConverter};
pub use convert::{ParamConverter, Requester, SUGGESTION_LIMIT};
pub use error::{
    ConstructionError, ConversionError, ConversionResult, RegistryError, ResolveError,
};
pub use extension::{
    EXTENSION_INVENTORY, ExtensionDescriptor, ExtensionFactory, ExtensionInstance,
    INGOT_EXTENSION_API_VERSION, find_descriptor,
};

// Capability is part of this crate's public surface (descriptors carry it)
// and is also referenced by define_extension! expansions via $crate.
pub use ingot_core::Capability;

// Re-exported for define_extension! expansions at third-party call sites.
#[doc(hidden)]
pub use linkme;
