//! Scenario 1: Renal cutoff block.
//!
//! A rivaroxaban prescription for a patient with CrCl 12 mL/min — below
//! the 15 mL/min label cutoff. The pipeline blocks the prescription and
//! records DOAC_EVALUATION plus SAFETY_RULE_FIRED on the governance
//! chain.

use doseguard_contracts::{context::EvaluationRequest, error::SafetyResult};

use crate::mock_data::{demo_context, renal_impaired_patient};
use crate::scenarios::{build_pipeline, print_chain_summary};

/// Run Scenario 1: Renal cutoff block.
pub fn run_scenario() -> SafetyResult<()> {
    println!("=== Scenario 1: Renal cutoff block ===");
    println!();

    let (pipeline, sink) = build_pipeline()?;
    let ctx = demo_context();

    let request = EvaluationRequest {
        medication: "rivaroxaban".to_string(),
        patient: renal_impaired_patient(),
    };

    println!("  Medication:             rivaroxaban");
    println!("  CrCl:                   12 ml/min (cutoff 15 ml/min)");
    println!();

    let result = pipeline.evaluate(&request, &ctx)?;

    println!("  Severity:               {}", result.severity);
    println!("  Rule:                   {}", result.rule_id);
    println!("  Rationale:              {}", result.rationale);
    if let Some(citation) = &result.citation_url {
        println!("  Citation:               {}", citation);
    }
    println!();

    print_chain_summary(&sink);
    println!();
    println!("  Scenario 1 complete.");
    println!();

    Ok(())
}
