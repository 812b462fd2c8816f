//! Demo scenarios for the doseguard safety pipeline.
//!
//! Each scenario wires real components — formulary, rule engine,
//! governance logger, hash-chained sink — around mock clinical data and
//! prints every pipeline decision, then verifies chain integrity.

pub mod override_flow;
pub mod renal_cutoff;
pub mod stale_labs;

use std::sync::Arc;

use doseguard_audit::InMemoryGovernanceSink;
use doseguard_contracts::error::SafetyResult;
use doseguard_core::{GovernanceLogger, SafetyPipeline};
use doseguard_rules::{DoacRuleEngine, Formulary};

/// The formulary TOML shipped with the demo.
const DEMO_FORMULARY: &str = include_str!("../../formulary/doac.toml");

/// Build a pipeline over the demo formulary and a fresh chained sink.
///
/// Returns the sink handle alongside the pipeline so scenarios can
/// inspect and verify the chain after the run.
pub fn build_pipeline() -> SafetyResult<(SafetyPipeline, Arc<InMemoryGovernanceSink>)> {
    let formulary = Formulary::from_toml_str(DEMO_FORMULARY)?;
    let engine = DoacRuleEngine::new(formulary);

    let sink = Arc::new(InMemoryGovernanceSink::new());
    let logger = GovernanceLogger::new(sink.clone());

    Ok((SafetyPipeline::new(Box::new(engine), logger), sink))
}

/// Print the closing chain-integrity check every scenario ends with.
pub fn print_chain_summary(sink: &InMemoryGovernanceSink) {
    let integrity_ok = sink.verify_integrity();
    let log = sink.export_log();

    println!(
        "  Governance chain:       {} ({} event(s), terminal hash {}…)",
        if integrity_ok { "VERIFIED" } else { "FAILED" },
        log.events.len(),
        &log.terminal_hash[..12.min(log.terminal_hash.len())],
    );
}
