//! Leveled diagnostics for scan and registration outcomes.
//!
//! The scanner and registrar report every outcome, successes and isolated
//! failures alike, through a [`DiagnosticsSink`]. Events are ephemeral: the
//! core builds one, emits it, and keeps nothing. Sinks must therefore not
//! block; the production sink ([`TracingSink`]) forwards to `tracing` and the
//! in-memory sink ([`MemorySink`]) is for assertions in tests.

use parking_lot::Mutex;
use tracing::{debug, error, info, warn};

/// Severity of a diagnostic event, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Debug,
    Info,
    Warn,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Warn => "warn",
            Severity::Error => "error",
        }
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Ok(Severity::Debug),
            "info" => Ok(Severity::Info),
            "warn" | "warning" => Ok(Severity::Warn),
            "error" => Ok(Severity::Error),
            other => Err(format!("unknown severity '{other}'")),
        }
    }
}

/// A single scan/registration outcome.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// Subsystem that produced the event (e.g. `"discovery"`, `"registration"`).
    pub category: &'static str,
    pub severity: Severity,
    /// Human-readable description naming the affected extension or input.
    pub message: String,
    /// Underlying failure, when there is one.
    pub cause: Option<String>,
}

impl DiagnosticEvent {
    pub fn new(category: &'static str, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            category,
            severity,
            message: message.into(),
            cause: None,
        }
    }

    /// Attaches the underlying failure.
    pub fn with_cause(mut self, cause: impl std::fmt::Display) -> Self {
        self.cause = Some(cause.to_string());
        self
    }
}

/// Receives diagnostic events from the discovery and registration core.
///
/// Implementations must be cheap and non-blocking; they are called inline
/// from the startup path.
pub trait DiagnosticsSink: Send + Sync {
    fn emit(&self, event: DiagnosticEvent);
}

// ─── TracingSink ─────────────────────────────────────────────────────────────

/// Production sink that forwards events to `tracing` at the matching level.
///
/// Events below the configured minimum severity are dropped, which is the
/// "toggleable" knob: a sink constructed with [`Severity::Error`] silences
/// everything but hard failures.
#[derive(Debug, Clone)]
pub struct TracingSink {
    min_severity: Severity,
}

impl TracingSink {
    /// Creates a sink that forwards everything at `Info` and above.
    pub fn new() -> Self {
        Self {
            min_severity: Severity::Info,
        }
    }

    /// Creates a sink that drops events below `min`.
    pub fn with_min_severity(min: Severity) -> Self {
        Self { min_severity: min }
    }
}

impl Default for TracingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticsSink for TracingSink {
    fn emit(&self, event: DiagnosticEvent) {
        if event.severity < self.min_severity {
            return;
        }
        let cause = event.cause.as_deref().unwrap_or("");
        match event.severity {
            Severity::Debug => {
                debug!(category = event.category, cause = %cause, "{}", event.message);
            }
            Severity::Info => {
                info!(category = event.category, cause = %cause, "{}", event.message);
            }
            Severity::Warn => {
                warn!(category = event.category, cause = %cause, "{}", event.message);
            }
            Severity::Error => {
                error!(category = event.category, cause = %cause, "{}", event.message);
            }
        }
    }
}

// ─── NullSink ────────────────────────────────────────────────────────────────

/// A sink that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticsSink for NullSink {
    fn emit(&self, _event: DiagnosticEvent) {}
}

// ─── MemorySink ──────────────────────────────────────────────────────────────

/// A sink that buffers every event in memory.
///
/// Used by tests to assert on exactly which diagnostics a scan or
/// registration pass produced.
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Mutex<Vec<DiagnosticEvent>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all buffered events, in emission order.
    pub fn events(&self) -> Vec<DiagnosticEvent> {
        self.events.lock().clone()
    }

    /// Returns how many buffered events have the given severity.
    pub fn count_at(&self, severity: Severity) -> usize {
        self.events
            .lock()
            .iter()
            .filter(|e| e.severity == severity)
            .count()
    }

    /// Drops all buffered events.
    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

impl DiagnosticsSink for MemorySink {
    fn emit(&self, event: DiagnosticEvent) {
        self.events.lock().push(event);
    }
}
