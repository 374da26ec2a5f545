//! Typed parameter conversion for command arguments.
//!
//! A [`ParamConverter`] turns a raw textual command argument into a strongly
//! typed value and supplies tab-completion suggestions for that type. One
//! converter is registered per target type in the
//! [`ConverterRegistry`](registry::ConverterRegistry), which the command
//! layer consults when resolving a declared parameter.
//!
//! # Contract
//!
//! All three operations are pure with respect to the registry: they may read
//! the [`RuntimeContext`]'s catalogs but never mutate them, and they must be
//! fast and non-blocking, since completion runs on a per-keystroke path.
//!
//! The hard invariant between [`can_convert`](ParamConverter::can_convert)
//! and [`convert`](ParamConverter::convert): whenever `can_convert` returns
//! `true` for an input, `convert` must succeed on that same input and
//! context. Implementations must also guard `convert` explicitly: calling it
//! on input `can_convert` would reject returns a
//! [`ConversionError`](crate::ConversionError), never a panic.

pub mod builtin;
pub mod registry;

use crate::context::RuntimeContext;
use crate::error::ConversionResult;

/// Upper bound on the number of completion suggestions any converter returns.
///
/// Completion lists are rendered inline by the host client, so they are
/// always small; converters truncate to this cap after applying their
/// matching rule.
pub const SUGGESTION_LIMIT: usize = 30;

/// Identity of whoever asked for completion suggestions.
///
/// Converters may tailor suggestions to the requester (for example, hiding
/// entries the issuer cannot use); the built-ins ignore it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requester {
    name: String,
}

impl Requester {
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The server console requester.
    pub fn console() -> Self {
        Self::named("console")
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Converts raw command arguments into values of one target type.
///
/// Implementations are stateless strategy objects: pure functions of the
/// input and the context. The registry owns them for the process lifetime.
pub trait ParamConverter: Send + Sync + 'static {
    /// The strongly typed value this converter produces.
    type Value: Send + 'static;

    /// Stable identifier of the target type, e.g. `"int"` or
    /// `"catalog-entry"`. This is the converter's registry key.
    fn type_key(&self) -> &'static str;

    /// Returns `true` only if [`convert`](Self::convert) would succeed on the
    /// same input and context.
    fn can_convert(&self, raw: &str, ctx: &RuntimeContext) -> bool;

    /// Converts `raw` into a typed value.
    ///
    /// Defined whenever [`can_convert`](Self::can_convert) is `true`; on any
    /// other input this returns a `ConversionError` naming the offending
    /// token.
    fn convert(&self, raw: &str, ctx: &RuntimeContext) -> ConversionResult<Self::Value>;

    /// Returns completion suggestions for a partial token.
    ///
    /// The result is fully materialized, never more than
    /// [`SUGGESTION_LIMIT`] entries, and every entry matches `partial` as a
    /// prefix under this converter's normalization rule. An empty vector
    /// means "no suggestions".
    fn complete(&self, partial: &str, requester: &Requester, ctx: &RuntimeContext) -> Vec<String>;
}
