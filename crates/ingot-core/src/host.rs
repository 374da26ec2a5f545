//! The seam to the embedding host's registration API.
//!
//! The host owns event dispatch and command invocation; this crate only needs
//! a way to hand a constructed listener over. Registration is fire-and-forget:
//! the host begins routing relevant events to the instance and the core keeps
//! no reference to it afterwards.

use serde_json::Value;

/// An event routed by the host to registered listeners.
///
/// The payload shape is owned by the host; the core treats it as opaque JSON.
#[derive(Debug, Clone)]
pub struct HostEvent {
    name: String,
    payload: Value,
}

impl HostEvent {
    /// Creates an event with the given name and payload.
    pub fn new(name: impl Into<String>, payload: Value) -> Self {
        Self {
            name: name.into(),
            payload,
        }
    }

    /// Returns the event name (e.g. `"player_join"`).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the raw event payload.
    pub fn payload(&self) -> &Value {
        &self.payload
    }
}

/// A discovered extension that reacts to host events.
///
/// Implementations are constructed once at startup with a shared
/// `RuntimeContext` and then owned by the host for the process lifetime.
pub trait EventListener: Send + Sync {
    /// Stable name used in registration diagnostics.
    fn name(&self) -> &str;

    /// Called by the host for every event routed to this listener.
    fn on_event(&self, event: &HostEvent);
}

/// Handle to the host's registration API.
pub trait Host: Send + Sync {
    /// Attaches a listener to the host's event routing.
    ///
    /// Fire-and-forget: the host takes ownership and there is no confirmation.
    /// De-duplication is the host's concern, not the caller's.
    fn register_event_handler(&self, listener: Box<dyn EventListener>);
}
