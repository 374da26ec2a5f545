//! Extension capabilities: the marker contracts used as scan filters.

use std::fmt;
use std::str::FromStr;

/// Describes which kind of registration an extension is eligible for.
///
/// Capabilities are disjoint: a packaged extension declares exactly one, and a
/// discovery pass scans for exactly one. The string forms are the values
/// accepted in an artifact manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// The extension handles host events and is attached via
    /// [`Host::register_event_handler`](crate::Host::register_event_handler).
    Listener,
    /// The extension supplies a typed parameter converter for the command
    /// layer and is installed into the converter registry.
    ParamParser,
}

impl Capability {
    /// Returns the manifest string for this capability.
    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::Listener => "listener",
            Capability::ParamParser => "param-parser",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a manifest names a capability this framework does not define.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCapability(pub String);

impl fmt::Display for UnknownCapability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown capability '{}'", self.0)
    }
}

impl std::error::Error for UnknownCapability {}

impl FromStr for Capability {
    type Err = UnknownCapability;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "listener" => Ok(Capability::Listener),
            "param-parser" => Ok(Capability::ParamParser),
            other => Err(UnknownCapability(other.to_string())),
        }
    }
}
