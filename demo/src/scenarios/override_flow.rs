//! Scenario 3: Override workflow.
//!
//! A dabigatran prescription blocked on the 30 mL/min cutoff, followed
//! by two override attempts: one missing its reason code (rejected, no
//! event emitted) and one complete (recorded with an event id). Ends by
//! listing the reason-code catalog and verifying the chain.

use doseguard_contracts::{
    context::EvaluationRequest,
    error::SafetyResult,
    overrides::{OverrideRequest, ReasonCode},
};
use doseguard_core::GovernanceLogger;
use doseguard_override::{available_reason_codes, OverrideHandler};

use crate::mock_data::{demo_context, moderate_impairment_patient};
use crate::scenarios::{build_pipeline, print_chain_summary};

/// Run Scenario 3: Override workflow.
pub fn run_scenario() -> SafetyResult<()> {
    println!("=== Scenario 3: Override workflow ===");
    println!();

    let (pipeline, sink) = build_pipeline()?;
    let ctx = demo_context();

    let request = EvaluationRequest {
        medication: "dabigatran".to_string(),
        patient: moderate_impairment_patient(),
    };

    println!("  Medication:             dabigatran");
    println!("  CrCl:                   25 ml/min (cutoff 30 ml/min)");
    println!();

    let result = pipeline.evaluate(&request, &ctx)?;

    println!("  Severity:               {}", result.severity);
    println!("  Rationale:              {}", result.rationale);
    println!();

    let handler = OverrideHandler::new(GovernanceLogger::new(sink.clone()));

    // ── Attempt 1: missing reason code ────────────────────────────────────────

    let incomplete = OverrideRequest {
        rule_id: result.rule_id.clone(),
        severity: result.severity,
        reason_code: None,
        actor: ctx.actor.clone(),
        patient_id: ctx.patient_id.clone(),
        notes: None,
        trace_id: ctx.trace_id.clone(),
    };

    match handler.handle(&incomplete) {
        Err(e) => println!("  Override attempt 1:     REJECTED ({})", e),
        Ok(_) => println!("  Override attempt 1:     unexpectedly accepted"),
    }

    // ── Attempt 2: complete request ───────────────────────────────────────────

    let complete = OverrideRequest {
        reason_code: Some(ReasonCode::ContraindicationUnavoidable),
        notes: Some("heparin contraindicated by HIT history".to_string()),
        ..incomplete
    };

    let validation = handler.validate(&complete);
    for warning in &validation.warnings {
        println!("  Warning:                {}", warning);
    }

    let event_id = handler.handle(&complete)?;
    println!("  Override attempt 2:     RECORDED (event {})", event_id);
    println!();

    // ── Reason-code catalog ───────────────────────────────────────────────────

    println!("  Available reason codes:");
    for info in available_reason_codes() {
        println!(
            "    {:<37} {}{}",
            info.code,
            info.label,
            if info.requires_documentation { " [notes required]" } else { "" },
        );
    }
    println!();

    print_chain_summary(&sink);
    println!();
    println!("  Scenario 3 complete.");
    println!();

    Ok(())
}
