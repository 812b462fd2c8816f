//! Core trait definitions for the doseguard safety pipeline.
//!
//! Two traits define the trust boundary:
//!
//! - `SafetyEvaluator` — the rule engine (pure, deterministic)
//! - `GovernanceSink`  — the append-only audit boundary
//!
//! The pipeline wires them together in the correct order: no verdict
//! leaves the subsystem unless its governance trail was durably written.

use doseguard_contracts::{
    context::EvaluationRequest,
    error::SafetyResult,
    evaluation::EvaluationResult,
    governance::GovernanceEvent,
};

/// A rule engine that turns an evaluation request into a verdict.
///
/// Implementations must be pure and deterministic: identical requests
/// yield identical results, with no hidden state and no I/O. Evaluation
/// is CPU-bound and safe to call concurrently.
pub trait SafetyEvaluator: Send + Sync {
    /// Evaluate one proposed prescription against the safety rules.
    ///
    /// Never fails: an unresolvable situation (unknown medication,
    /// missing inputs) is expressed as a fail-closed verdict, not an
    /// error.
    fn evaluate(&self, request: &EvaluationRequest) -> EvaluationResult;
}

/// The append-only governance boundary.
///
/// Implementations accept events as pure inserts. There is deliberately
/// no update or delete surface on this trait — records written here are
/// never modified by the subsystem, and the backing store is expected to
/// reject mutation of audit rows at its own layer.
pub trait GovernanceSink: Send + Sync {
    /// Durably append one governance event.
    ///
    /// Must return only after the write is accepted. A failure is fatal
    /// to the operation that produced the event.
    fn append(&self, event: &GovernanceEvent) -> SafetyResult<()>;
}
