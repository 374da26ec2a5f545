//! # Ingot Core
//!
//! Leaf contracts for the Ingot extension framework.
//!
//! This crate defines the narrow interfaces the discovery and parameter
//! resolution core consumes but does not implement:
//!
//! - **Capabilities**: the marker contracts that make a packaged extension
//!   eligible for a specific kind of registration ([`Capability`]).
//! - **Host seam**: the registration entry point of the embedding game server
//!   ([`Host`], [`EventListener`]).
//! - **Diagnostics**: a leveled, toggleable sink for scan and registration
//!   outcomes ([`DiagnosticsSink`]).
//! - **Catalog**: the keyed collection of domain objects that catalog-backed
//!   converters resolve against ([`CatalogLookup`]).
//! - **Data store**: the persisted key/value surface shared with extensions
//!   ([`DataStore`]).
//!
//! Everything here is synchronous and object-safe; the host runtime calls
//! into these traits from its own threads and the core never blocks on them.

pub mod capability;
pub mod catalog;
pub mod diagnostics;
pub mod host;
pub mod store;
pub mod testing;

pub use capability::Capability;
pub use catalog::{CatalogEntry, CatalogLookup, MemoryCatalog};
pub use diagnostics::{DiagnosticEvent, DiagnosticsSink, MemorySink, NullSink, Severity, TracingSink};
pub use host::{EventListener, Host, HostEvent};
pub use store::{DataStore, MemoryStore};
