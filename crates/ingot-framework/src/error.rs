//! Error types for the Ingot framework.

use thiserror::Error;

/// A raw command argument could not be converted to its declared type.
///
/// Surfaced to the command layer as "this argument could not be parsed as
/// type T"; never a process-level failure. The message references the
/// offending token so the command issuer sees a usable rejection.
#[derive(Debug, Clone, Error)]
pub enum ConversionError {
    /// The raw token does not parse as the target type.
    #[error("'{raw}' is not a valid {type_key}: {reason}")]
    InvalidValue {
        raw: String,
        type_key: &'static str,
        reason: String,
    },

    /// The raw token names no entry in the shared catalog.
    #[error("no catalog entry named '{raw}'")]
    UnknownKey { raw: String },
}

impl ConversionError {
    pub fn invalid(raw: &str, type_key: &'static str, reason: impl std::fmt::Display) -> Self {
        Self::InvalidValue {
            raw: raw.to_string(),
            type_key,
            reason: reason.to_string(),
        }
    }

    pub fn unknown_key(raw: &str) -> Self {
        Self::UnknownKey {
            raw: raw.to_string(),
        }
    }
}

/// Result type for conversion operations.
pub type ConversionResult<T> = Result<T, ConversionError>;

/// A converter registry lookup named a parameter type nobody registered.
///
/// Calling code must treat this as "unsupported parameter type", not a crash.
#[derive(Debug, Clone, Error)]
pub enum RegistryError {
    #[error("no converter registered for parameter type '{type_key}'")]
    NotFound { type_key: String },
}

/// Errors from the combined lookup-then-convert path.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error(transparent)]
    NotFound(#[from] RegistryError),

    #[error(transparent)]
    Conversion(#[from] ConversionError),

    /// The registered converter produces a different Rust type than the
    /// caller requested.
    #[error("converter '{type_key}' does not produce a {requested}")]
    TypeMismatch {
        type_key: String,
        requested: &'static str,
    },
}

/// An extension factory failed; the candidate is skipped and reported.
///
/// Always isolated per candidate by the registrar, never propagated past it.
#[derive(Debug, Clone, Error)]
#[error("extension '{qualified_name}' could not be constructed: {reason}")]
pub struct ConstructionError {
    pub qualified_name: &'static str,
    pub reason: String,
}

impl ConstructionError {
    pub fn new(qualified_name: &'static str, reason: impl std::fmt::Display) -> Self {
        Self {
            qualified_name,
            reason: reason.to_string(),
        }
    }
}
