//! Chained governance records and the sealed log.
//!
//! `ChainedEvent` is a single entry in the hash chain — it wraps a
//! `GovernanceEvent` with sequence numbering and the SHA-256 hashes that
//! make tampering detectable. `GovernanceLog` is the sealed record
//! exported for compliance reporting.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use doseguard_contracts::governance::GovernanceEvent;

/// A single entry in the SHA-256 hash chain.
///
/// Each entry commits to the previous one via `prev_hash`, forming an
/// append-only chain. Modifying any field — including those of the
/// embedded `event` — invalidates `this_hash` and every subsequent
/// `prev_hash`, which `verify_chain` detects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainedEvent {
    /// Monotonically increasing position in the chain, starting at 0.
    pub sequence: u64,

    /// The immutable governance event.
    pub event: GovernanceEvent,

    /// SHA-256 hash (hex) of the previous entry, or `GENESIS_HASH` for
    /// the first.
    pub prev_hash: String,

    /// SHA-256 hash (hex) of this entry's canonical content.
    ///
    /// Computed by `hash_event()` over (sequence, prev_hash, canonical
    /// JSON of event).
    pub this_hash: String,
}

impl ChainedEvent {
    /// The sentinel `prev_hash` used for the first entry in every chain.
    ///
    /// 64 hex zeros — a value that can never be the SHA-256 of real
    /// data, making genesis detection unambiguous.
    pub const GENESIS_HASH: &'static str =
        "0000000000000000000000000000000000000000000000000000000000000000";
}

/// A sealed export of the governance chain.
///
/// Produced by `InMemoryGovernanceSink::export_log()`. The
/// `terminal_hash` is the `this_hash` of the last entry and can be used
/// as a compact commitment to the entire log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GovernanceLog {
    /// All chained events in order (sequence 0 first).
    pub events: Vec<ChainedEvent>,

    /// Wall-clock time (UTC) the log was exported.
    pub exported_at: DateTime<Utc>,

    /// The `this_hash` of the last entry. Empty string if the log is empty.
    pub terminal_hash: String,
}
