//! # doseguard-audit
//!
//! Immutable, append-only, SHA-256 hash-chained governance trail for the
//! doseguard medication safety subsystem.
//!
//! ## Overview
//!
//! Every governance event the pipeline or override handler emits is
//! wrapped in a `ChainedEvent` that links to the previous entry via its
//! SHA-256 hash. Tampering with any entry — even a single byte — breaks
//! the chain and is detected by `verify_chain`.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use doseguard_audit::InMemoryGovernanceSink;
//! use doseguard_core::GovernanceLogger;
//!
//! let sink = Arc::new(InMemoryGovernanceSink::new());
//! let logger = GovernanceLogger::new(Arc::clone(&sink) as _);
//! // ... emit events through the logger ...
//! assert!(sink.verify_integrity());
//! let log = sink.export_log();
//! ```

pub mod chain;
pub mod memory;
pub mod record;

pub use chain::{hash_event, verify_chain};
pub use memory::InMemoryGovernanceSink;
pub use record::{ChainedEvent, GovernanceLog};

// ── Tests ─────────────────────────────────────────────────────────────────────
