//! Scenario 2: Stale renal labs.
//!
//! An apixaban prescription backed by labs drawn 73 hours ago — one
//! hour past the freshness window. The attestation gate fires before
//! any drug rule is consulted; the chain records DOAC_EVALUATION plus
//! ATTESTATION_REQUIRED.

use doseguard_contracts::{context::EvaluationRequest, error::SafetyResult};

use crate::mock_data::{demo_context, stale_labs_patient};
use crate::scenarios::{build_pipeline, print_chain_summary};

/// Run Scenario 2: Stale renal labs.
pub fn run_scenario() -> SafetyResult<()> {
    println!("=== Scenario 2: Stale renal labs ===");
    println!();

    let (pipeline, sink) = build_pipeline()?;
    let ctx = demo_context();

    let request = EvaluationRequest {
        medication: "apixaban".to_string(),
        patient: stale_labs_patient(),
    };

    println!("  Medication:             apixaban");
    println!("  Renal labs drawn:       73 h ago (window 72 h)");
    println!();

    let result = pipeline.evaluate(&request, &ctx)?;

    println!("  Severity:               {}", result.severity);
    println!("  Rationale:              {}", result.rationale);
    if let Some(stale_since) = result.stale_since {
        println!("  Lab age:                {:.0} h", stale_since);
    }
    if let Some(threshold) = result.threshold {
        println!("  Freshness window:       {:.0} h", threshold);
    }
    println!();

    print_chain_summary(&sink);
    println!();
    println!("  Scenario 2 complete.");
    println!();

    Ok(())
}
