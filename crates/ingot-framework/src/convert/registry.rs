//! The converter registry: single lookup point for parameter resolution.
//!
//! Maps a type identifier to its registered converter. Built-ins are
//! installed at construction; extensions add their own converters during
//! their initialization. After startup the registry is read-mostly: `lookup`
//! runs concurrently from completion threads, while the rare post-startup
//! `register`/`unregister` (dynamic extension loading) synchronizes against
//! readers through the interior `RwLock`, so no reader ever observes a
//! partially written entry.

use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, warn};

use crate::context::RuntimeContext;
use crate::convert::{ParamConverter, Requester};
use crate::error::{ConversionResult, RegistryError, ResolveError};

/// Object-safe mirror of [`ParamConverter`], with the typed value erased.
///
/// Blanket-implemented for every `ParamConverter`; user code implements the
/// typed trait and the registry stores this one.
pub trait DynParamConverter: Send + Sync {
    fn type_key(&self) -> &'static str;

    fn can_convert(&self, raw: &str, ctx: &RuntimeContext) -> bool;

    /// Converts `raw`, boxing the typed value. Use
    /// [`ConverterRegistry::convert_as`] to get it back as a concrete type.
    fn convert_erased(&self, raw: &str, ctx: &RuntimeContext)
    -> ConversionResult<Box<dyn Any + Send>>;

    fn complete(&self, partial: &str, requester: &Requester, ctx: &RuntimeContext) -> Vec<String>;
}

impl std::fmt::Debug for dyn DynParamConverter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DynParamConverter")
            .field("type_key", &self.type_key())
            .finish()
    }
}

impl<C: ParamConverter> DynParamConverter for C {
    fn type_key(&self) -> &'static str {
        ParamConverter::type_key(self)
    }

    fn can_convert(&self, raw: &str, ctx: &RuntimeContext) -> bool {
        ParamConverter::can_convert(self, raw, ctx)
    }

    fn convert_erased(
        &self,
        raw: &str,
        ctx: &RuntimeContext,
    ) -> ConversionResult<Box<dyn Any + Send>> {
        ParamConverter::convert(self, raw, ctx).map(|value| Box::new(value) as Box<dyn Any + Send>)
    }

    fn complete(&self, partial: &str, requester: &Requester, ctx: &RuntimeContext) -> Vec<String> {
        ParamConverter::complete(self, partial, requester, ctx)
    }
}

/// Registry mapping type identifiers to converters.
///
/// Keys are unique; registering a type identifier that is already occupied
/// replaces the previous converter (last write wins), which is how extensions
/// deliberately override a built-in.
#[derive(Default)]
pub struct ConverterRegistry {
    converters: RwLock<HashMap<&'static str, Arc<dyn DynParamConverter>>>,
}

impl ConverterRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry pre-loaded with the built-in converters.
    pub fn with_builtins() -> Self {
        let registry = Self::new();
        for converter in super::builtin::all() {
            registry.register(converter);
        }
        registry
    }

    /// Registers `converter` under its own type key.
    ///
    /// Replaces any existing converter for the same key and logs the
    /// override, so deliberate replacements remain visible in the logs.
    pub fn register(&self, converter: Arc<dyn DynParamConverter>) {
        let key = converter.type_key();
        let previous = self.converters.write().insert(key, converter);
        if previous.is_some() {
            warn!(
                type_key = key,
                "Converter replaced — last registration wins"
            );
        } else {
            debug!(type_key = key, "Converter registered");
        }
    }

    /// Removes the converter for `type_key`, if any. Returns whether one was
    /// removed. Used when a dynamically loaded extension is torn down.
    pub fn unregister(&self, type_key: &str) -> bool {
        self.converters.write().remove(type_key).is_some()
    }

    /// Looks up the converter for `type_key`.
    ///
    /// A miss means "this parameter type is not supported" and is reported to
    /// the command issuer as a usage error by the calling layer.
    pub fn lookup(&self, type_key: &str) -> Result<Arc<dyn DynParamConverter>, RegistryError> {
        self.converters
            .read()
            .get(type_key)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound {
                type_key: type_key.to_string(),
            })
    }

    pub fn contains(&self, type_key: &str) -> bool {
        self.converters.read().contains_key(type_key)
    }

    /// Registered type keys, sorted for stable output.
    pub fn type_keys(&self) -> Vec<&'static str> {
        let mut keys: Vec<&'static str> = self.converters.read().keys().copied().collect();
        keys.sort_unstable();
        keys
    }

    /// Looks up and converts in one step, downcasting to the requested type.
    ///
    /// The converter `Arc` is cloned out of the lock before the conversion
    /// runs, so a slow converter never holds readers up.
    pub fn convert_as<T: Any + Send>(
        &self,
        type_key: &str,
        raw: &str,
        ctx: &RuntimeContext,
    ) -> Result<T, ResolveError> {
        let converter = self.lookup(type_key)?;
        let value = converter.convert_erased(raw, ctx)?;
        value
            .downcast::<T>()
            .map(|boxed| *boxed)
            .map_err(|_| ResolveError::TypeMismatch {
                type_key: type_key.to_string(),
                requested: std::any::type_name::<T>(),
            })
    }
}
