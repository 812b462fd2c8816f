//! The DOAC rule engine.
//!
//! Evaluation algorithm:
//!
//! 1. Attestation gate first — missing or stale inputs short-circuit to
//!    `ATTESTATION_REQUIRED` before any drug rule is consulted.
//! 2. Formulary lookup, case-insensitive. Unknown medications fail
//!    closed to `BLOCK` — never silently through to `PASS`.
//! 3. CrCl below the drug's cutoff → `BLOCK`. Equality passes.
//! 4. Secondary cautions (`FLAG`, never blocking): elderly patients
//!    with borderline renal function, low body weight. When several
//!    fire, their rationales are composed with "; " and the first
//!    caution's rule id is reported.
//! 5. Otherwise `PASS`.

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use doseguard_contracts::{
    context::EvaluationRequest,
    evaluation::{AttestationVerdict, EvaluationResult, Severity},
};
use doseguard_core::traits::SafetyEvaluator;

use crate::{attestation::check_attestation_at, formulary::Formulary};

/// Rule id reported when the attestation gate fired on failing fields.
pub const RULE_ATTESTATION: &str = "DOAC-Attestation-001";
/// Rule id reported when the attestation gate fired on stale labs.
pub const RULE_STALE_LABS: &str = "DOAC-RenalLabs-Stale-001";
/// Rule id for the fail-closed unknown-medication block.
pub const RULE_UNKNOWN_MEDICATION: &str = "DOAC-Formulary-Unknown-001";
/// Rule id for the elderly borderline-renal caution.
pub const RULE_ELDERLY_CAUTION: &str = "DOAC-Caution-Elderly-001";
/// Rule id for the low-body-weight exposure caution.
pub const RULE_LOW_WEIGHT_CAUTION: &str = "DOAC-Caution-LowWeight-001";

/// Age above which borderline renal function earns a caution flag.
const ELDERLY_AGE_YEARS: f64 = 75.0;
/// How far above the block cutoff still counts as borderline, mL/min.
const BORDERLINE_CRCL_MARGIN: f64 = 5.0;
/// Weight below which exposure is expected to be increased, kg.
const LOW_WEIGHT_KG: f64 = 50.0;

/// The DOAC safety rule engine.
///
/// Holds an immutable formulary; evaluation is pure and deterministic,
/// safe to share across threads.
pub struct DoacRuleEngine {
    formulary: Formulary,
}

impl DoacRuleEngine {
    /// Create an engine over the given formulary.
    pub fn new(formulary: Formulary) -> Self {
        Self { formulary }
    }

    /// Create an engine over the built-in standard formulary.
    pub fn standard() -> Self {
        Self::new(Formulary::standard())
    }

    /// Evaluate against an explicit `now` (pinned by tests).
    pub fn evaluate_at(&self, request: &EvaluationRequest, now: DateTime<Utc>) -> EvaluationResult {
        // ── Step 1: attestation gate ─────────────────────────────────────────
        let attestation = check_attestation_at(&request.patient, now);
        if attestation.required {
            return attestation_result(attestation);
        }

        // ── Step 2: formulary lookup ─────────────────────────────────────────
        let Some(drug) = self.formulary.lookup(&request.medication) else {
            warn!(medication = %request.medication, "medication not in formulary, blocking");
            return EvaluationResult {
                severity: Severity::Block,
                rationale: format!(
                    "'{}' is not in the anticoagulant formulary; prescribing is blocked pending clinical review",
                    request.medication
                ),
                rule_id: RULE_UNKNOWN_MEDICATION.to_string(),
                citation_url: None,
                missing_fields: vec![],
                reason: None,
                stale_since: None,
                threshold: None,
            };
        };

        // The gate only passes contexts where all three values are present
        // and in range; an absent value here cannot occur.
        let (Some(crcl), Some(weight), Some(age)) = (
            request.patient.creatinine_clearance,
            request.patient.weight,
            request.patient.age,
        ) else {
            return attestation_result(check_attestation_at(&request.patient, now));
        };

        // ── Step 3: renal cutoff ─────────────────────────────────────────────
        if crcl < drug.crcl_cutoff {
            debug!(
                medication = %drug.name,
                crcl,
                cutoff = drug.crcl_cutoff,
                "renal cutoff rule fired"
            );
            return EvaluationResult {
                severity: Severity::Block,
                rationale: format!(
                    "{} is contraindicated: creatinine clearance {:.0} ml/min is below the {:.0} ml/min minimum for safe use",
                    drug.display_name, crcl, drug.crcl_cutoff
                ),
                rule_id: drug.rule_id.clone(),
                citation_url: Some(drug.citation_url.clone()),
                missing_fields: vec![],
                reason: None,
                stale_since: None,
                threshold: Some(drug.crcl_cutoff),
            };
        }

        // ── Step 4: secondary cautions ───────────────────────────────────────
        let mut cautions: Vec<(&'static str, String)> = Vec::new();

        if age > ELDERLY_AGE_YEARS && crcl <= drug.crcl_cutoff + BORDERLINE_CRCL_MARGIN {
            cautions.push((
                RULE_ELDERLY_CAUTION,
                format!(
                    "age {:.0} y with creatinine clearance {:.0} ml/min within {:.0} ml/min of the {:.0} ml/min cutoff; consider dose reduction and closer renal monitoring",
                    age, crcl, BORDERLINE_CRCL_MARGIN, drug.crcl_cutoff
                ),
            ));
        }

        if weight < LOW_WEIGHT_KG {
            cautions.push((
                RULE_LOW_WEIGHT_CAUTION,
                format!(
                    "low body weight {:.0} kg (below {:.0} kg) may increase drug exposure",
                    weight, LOW_WEIGHT_KG
                ),
            ));
        }

        if let Some((first_rule_id, _)) = cautions.first() {
            let rule_id = first_rule_id.to_string();
            let rationale = cautions
                .iter()
                .map(|(_, text)| text.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            debug!(medication = %drug.name, rule_id = %rule_id, "caution rule fired");
            return EvaluationResult {
                severity: Severity::Flag,
                rationale,
                rule_id,
                citation_url: Some(drug.citation_url.clone()),
                missing_fields: vec![],
                reason: None,
                stale_since: None,
                threshold: None,
            };
        }

        // ── Step 5: pass ─────────────────────────────────────────────────────
        EvaluationResult {
            severity: Severity::Pass,
            rationale: format!(
                "{} is appropriate: creatinine clearance {:.0} ml/min, weight {:.0} kg and age {:.0} y support standard dosing",
                drug.display_name, crcl, weight, age
            ),
            rule_id: drug.rule_id.clone(),
            citation_url: Some(drug.citation_url.clone()),
            missing_fields: vec![],
            reason: None,
            stale_since: None,
            threshold: None,
        }
    }
}

impl SafetyEvaluator for DoacRuleEngine {
    /// Evaluate one proposed prescription against the wall clock.
    fn evaluate(&self, request: &EvaluationRequest) -> EvaluationResult {
        self.evaluate_at(request, Utc::now())
    }
}

/// Convert an attestation gate verdict into a terminal evaluation result.
fn attestation_result(attestation: AttestationVerdict) -> EvaluationResult {
    let (rule_id, rationale) = if attestation.missing_fields.is_empty() {
        let age = attestation
            .stale_since
            .map(|h| format!("{:.0} h old", h))
            .unwrap_or_else(|| "of unknown age".to_string());
        (
            RULE_STALE_LABS,
            format!(
                "clinician attestation required: renal labs are {}, beyond the {:.0} h freshness window",
                age,
                attestation.threshold.unwrap_or(0.0)
            ),
        )
    } else {
        (
            RULE_ATTESTATION,
            format!(
                "clinician attestation required: missing or invalid {}",
                attestation.missing_fields.join(", ")
            ),
        )
    };

    EvaluationResult {
        severity: Severity::AttestationRequired,
        rationale,
        rule_id: rule_id.to_string(),
        citation_url: None,
        missing_fields: attestation.missing_fields,
        reason: attestation.reason,
        stale_since: attestation.stale_since,
        threshold: attestation.threshold,
    }
}
