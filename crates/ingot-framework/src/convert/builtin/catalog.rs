//! Catalog-backed converter resolving textual keys to domain objects.

use ingot_core::CatalogEntry;

use crate::context::RuntimeContext;
use crate::convert::{ParamConverter, Requester, SUGGESTION_LIMIT};
use crate::error::{ConversionError, ConversionResult};

/// Resolves a textual key (e.g. `"sword:diamond"`) to a [`CatalogEntry`] by
/// exact lookup in the context's shared catalog.
///
/// Completion matches case-insensitively against the whole key and against
/// the sub-key after the `:` separator, so `"diamond"` suggests
/// `"sword:diamond"`. Suggestions follow the catalog's key iteration order
/// and are capped at [`SUGGESTION_LIMIT`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogEntryConverter;

impl CatalogEntryConverter {
    fn matches(key: &str, needle: &str) -> bool {
        let key = key.to_ascii_lowercase();
        if key.starts_with(needle) {
            return true;
        }
        key.split_once(':')
            .is_some_and(|(_, sub_key)| sub_key.starts_with(needle))
    }
}

impl ParamConverter for CatalogEntryConverter {
    type Value = CatalogEntry;

    fn type_key(&self) -> &'static str {
        "catalog-entry"
    }

    fn can_convert(&self, raw: &str, ctx: &RuntimeContext) -> bool {
        ctx.catalog().contains_key(raw)
    }

    fn convert(&self, raw: &str, ctx: &RuntimeContext) -> ConversionResult<CatalogEntry> {
        ctx.catalog()
            .get(raw)
            .ok_or_else(|| ConversionError::unknown_key(raw))
    }

    fn complete(&self, partial: &str, _requester: &Requester, ctx: &RuntimeContext) -> Vec<String> {
        let needle = partial.to_ascii_lowercase();
        ctx.catalog()
            .keys()
            .into_iter()
            .filter(|key| Self::matches(key, &needle))
            .take(SUGGESTION_LIMIT)
            .collect()
    }
}
