//! In-memory implementation of `GovernanceSink`.
//!
//! `InMemoryGovernanceSink` is the reference implementation of the
//! append-only sink. It keeps all entries in a `Vec` protected by a
//! `Mutex`, making it safe to share behind an `Arc` while the pipeline
//! and override handler append concurrently.
//!
//! Use `export_log()` to obtain a sealed `GovernanceLog` for compliance
//! reporting, and `verify_integrity()` at any time to confirm the chain
//! has not been tampered with in memory.

use std::sync::{Arc, Mutex};

use chrono::Utc;
use tracing::info;

use doseguard_contracts::{
    error::{SafetyError, SafetyResult},
    governance::GovernanceEvent,
};
use doseguard_core::traits::GovernanceSink;

use crate::{
    chain::{hash_event, verify_chain},
    record::{ChainedEvent, GovernanceLog},
};

// ── Internal mutable state ────────────────────────────────────────────────────

/// The mutable interior of an `InMemoryGovernanceSink`.
pub(crate) struct ChainState {
    /// All entries written so far, in append order.
    pub(crate) events: Vec<ChainedEvent>,

    /// The next sequence number to assign (starts at 0).
    pub(crate) sequence: u64,

    /// The `this_hash` of the last written entry, or `GENESIS_HASH`
    /// before any entry has been written.
    pub(crate) last_hash: String,
}

// ── Public sink ───────────────────────────────────────────────────────────────

/// An in-memory, append-only governance sink backed by a SHA-256 hash
/// chain.
///
/// # Thread safety
///
/// `append()` acquires a `Mutex` internally. Multiple threads may hold
/// clones of the surrounding `Arc` without additional synchronization.
pub struct InMemoryGovernanceSink {
    pub(crate) state: Arc<Mutex<ChainState>>,
}

impl InMemoryGovernanceSink {
    /// Create an empty sink.
    ///
    /// The internal `last_hash` is initialized to
    /// `ChainedEvent::GENESIS_HASH` so the first entry's `prev_hash` is
    /// automatically correct.
    pub fn new() -> Self {
        let state = ChainState {
            events: Vec::new(),
            sequence: 0,
            last_hash: ChainedEvent::GENESIS_HASH.to_string(),
        };
        Self {
            state: Arc::new(Mutex::new(state)),
        }
    }

    /// Export a sealed `GovernanceLog` containing all entries written so
    /// far.
    ///
    /// The `terminal_hash` is the `this_hash` of the last entry, or an
    /// empty string when no entries have been written.
    pub fn export_log(&self) -> GovernanceLog {
        let state = self.state.lock().expect("governance state lock poisoned");
        let terminal_hash = state
            .events
            .last()
            .map(|e| e.this_hash.clone())
            .unwrap_or_default();

        info!(
            event_count = state.events.len(),
            terminal_hash = %terminal_hash,
            "governance log exported"
        );

        GovernanceLog {
            events: state.events.clone(),
            exported_at: Utc::now(),
            terminal_hash,
        }
    }

    /// Verify that the in-memory chain has not been tampered with.
    ///
    /// Delegates to `verify_chain`, which checks both prev-hash linkage
    /// and hash correctness for every entry.
    pub fn verify_integrity(&self) -> bool {
        let state = self.state.lock().expect("governance state lock poisoned");
        verify_chain(&state.events)
    }

    /// Number of entries written so far.
    pub fn len(&self) -> usize {
        self.state
            .lock()
            .expect("governance state lock poisoned")
            .events
            .len()
    }

    /// True when no entries have been written.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryGovernanceSink {
    fn default() -> Self {
        Self::new()
    }
}

// ── GovernanceSink impl ───────────────────────────────────────────────────────

impl GovernanceSink for InMemoryGovernanceSink {
    /// Append one governance event to the hash chain.
    ///
    /// Computes `this_hash` from (sequence, prev_hash, event), wraps the
    /// event in a `ChainedEvent`, appends it, then advances the sequence
    /// counter and `last_hash`. A pure insert — previously written
    /// entries are never touched.
    ///
    /// Returns `Err(AuditWriteFailed)` only if the internal mutex is
    /// poisoned, which cannot happen under normal operation.
    fn append(&self, event: &GovernanceEvent) -> SafetyResult<()> {
        let mut state = self.state.lock().map_err(|e| SafetyError::AuditWriteFailed {
            reason: format!("governance state lock poisoned: {}", e),
        })?;

        let prev_hash = state.last_hash.clone();
        let sequence = state.sequence;

        let this_hash = hash_event(sequence, event, &prev_hash);

        let entry = ChainedEvent {
            sequence,
            event: event.clone(),
            prev_hash,
            this_hash: this_hash.clone(),
        };

        state.events.push(entry);
        state.sequence += 1;
        state.last_hash = this_hash;

        Ok(())
    }
}
