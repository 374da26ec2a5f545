//! Test doubles shared by the workspace's test suites.

use parking_lot::Mutex;

use crate::host::{EventListener, Host};

/// A [`Host`] that records the names of registered listeners.
#[derive(Debug, Default)]
pub struct RecordingHost {
    registered: Mutex<Vec<String>>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Names of all listeners registered so far, in registration order.
    pub fn registered(&self) -> Vec<String> {
        self.registered.lock().clone()
    }

    pub fn registration_count(&self) -> usize {
        self.registered.lock().len()
    }
}

impl Host for RecordingHost {
    fn register_event_handler(&self, listener: Box<dyn EventListener>) {
        self.registered.lock().push(listener.name().to_string());
    }
}
