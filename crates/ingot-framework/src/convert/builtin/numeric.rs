//! Primitive numeric and boolean converters.
//!
//! Validation is a trial parse: `can_convert` and `convert` run the exact
//! same parse, so the two can never disagree. Range checking comes from the
//! target type itself: `"32768"` fails for the 16-bit converter because
//! `i16::from_str` rejects it, not because of any extra bounds logic here.

use crate::context::RuntimeContext;
use crate::convert::{ParamConverter, Requester};
use crate::error::{ConversionError, ConversionResult};

macro_rules! numeric_converter {
    ($(#[$meta:meta])* $name:ident, $target:ty, $key:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $name;

        impl ParamConverter for $name {
            type Value = $target;

            fn type_key(&self) -> &'static str {
                $key
            }

            fn can_convert(&self, raw: &str, _ctx: &RuntimeContext) -> bool {
                raw.parse::<$target>().is_ok()
            }

            fn convert(&self, raw: &str, _ctx: &RuntimeContext) -> ConversionResult<$target> {
                raw.parse::<$target>()
                    .map_err(|e| ConversionError::invalid(raw, $key, e))
            }

            fn complete(
                &self,
                _partial: &str,
                _requester: &Requester,
                _ctx: &RuntimeContext,
            ) -> Vec<String> {
                // Free-form numbers have no useful suggestions.
                Vec::new()
            }
        }
    };
}

numeric_converter!(
    /// Converter for 16-bit signed integers (`"short"`).
    ShortConverter, i16, "short"
);
numeric_converter!(
    /// Converter for 32-bit signed integers (`"int"`).
    IntConverter, i32, "int"
);
numeric_converter!(
    /// Converter for 64-bit signed integers (`"long"`).
    LongConverter, i64, "long"
);
numeric_converter!(
    /// Converter for 64-bit floats (`"double"`).
    DoubleConverter, f64, "double"
);

/// Converter for booleans (`"bool"`); accepts `true`/`false` in any case.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoolConverter;

impl BoolConverter {
    fn parse(raw: &str) -> Option<bool> {
        match raw.to_ascii_lowercase().as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        }
    }
}

impl ParamConverter for BoolConverter {
    type Value = bool;

    fn type_key(&self) -> &'static str {
        "bool"
    }

    fn can_convert(&self, raw: &str, _ctx: &RuntimeContext) -> bool {
        Self::parse(raw).is_some()
    }

    fn convert(&self, raw: &str, _ctx: &RuntimeContext) -> ConversionResult<bool> {
        Self::parse(raw).ok_or_else(|| ConversionError::invalid(raw, "bool", "expected true or false"))
    }

    fn complete(&self, partial: &str, _requester: &Requester, _ctx: &RuntimeContext) -> Vec<String> {
        let needle = partial.to_ascii_lowercase();
        ["true", "false"]
            .iter()
            .filter(|candidate| candidate.starts_with(&needle))
            .map(|candidate| candidate.to_string())
            .collect()
    }
}
