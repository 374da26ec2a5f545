//! Built-in parameter converters.
//!
//! Installed by [`ConverterRegistry::with_builtins`]; any of them can be
//! overridden by a later registration under the same type key.
//!
//! [`ConverterRegistry::with_builtins`]: crate::convert::registry::ConverterRegistry::with_builtins

mod catalog;
mod numeric;

use std::sync::Arc;

use crate::convert::registry::DynParamConverter;

pub use catalog::CatalogEntryConverter;
pub use numeric::{BoolConverter, DoubleConverter, IntConverter, LongConverter, ShortConverter};

/// All built-in converters, in registration order.
pub(crate) fn all() -> Vec<Arc<dyn DynParamConverter>> {
    vec![
        Arc::new(ShortConverter),
        Arc::new(IntConverter),
        Arc::new(LongConverter),
        Arc::new(DoubleConverter),
        Arc::new(BoolConverter),
        Arc::new(CatalogEntryConverter),
    ]
}
