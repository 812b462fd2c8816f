//! Evaluation verdict types.
//!
//! The rule engine consumes an `EvaluationRequest` and produces an
//! `EvaluationResult`. Severity is a closed enum so every consumer — the
//! override handler, the governance logger, the rendering layer — is
//! forced through an exhaustive match when a new severity is added.

use serde::{Deserialize, Serialize};

/// The decision emitted for a single DOAC evaluation.
///
/// Ordered from least to most restrictive. Anything other than `Pass`
/// is surfaced to the clinician with a plain-language rationale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    /// The regimen is safe for the given renal/weight/age profile.
    Pass,
    /// A secondary caution applies. Prescribing may proceed with care.
    Flag,
    /// The regimen is contraindicated. Prescribing is stopped.
    Block,
    /// Safety-critical inputs are missing or stale; a clinician must
    /// attest before an evaluation verdict can be produced.
    AttestationRequired,
}

impl Severity {
    /// The wire-format name, as it appears in JSON and error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Pass => "PASS",
            Severity::Flag => "FLAG",
            Severity::Block => "BLOCK",
            Severity::AttestationRequired => "ATTESTATION_REQUIRED",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why the attestation gate fired, when it fired for a non-absence reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttestationReason {
    /// The renal labs backing the evaluation are older than the
    /// freshness window.
    StaleRenalLabs,
}

/// The attestation gate's verdict for one patient context.
///
/// `required = true` carries either a non-empty `missing_fields` list
/// (invalid/absent critical inputs) or a `reason` (stale labs) — never
/// neither.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttestationVerdict {
    /// Whether a human attestation is needed before evaluation proceeds.
    pub required: bool,
    /// Human-readable labels of every failing critical field.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub missing_fields: Vec<String>,
    /// Set when the gate fired on staleness rather than absence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<AttestationReason>,
    /// Lab age in hours, rounded. Absent when no timestamp exists at all.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stale_since: Option<f64>,
    /// The freshness window the labs exceeded, in hours.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,
}

impl AttestationVerdict {
    /// A passing verdict: no attestation needed.
    pub fn not_required() -> Self {
        Self {
            required: false,
            missing_fields: Vec::new(),
            reason: None,
            stale_since: None,
            threshold: None,
        }
    }
}

/// The full outcome of one DOAC evaluation.
///
/// `rationale` and `missing_fields` are written for direct display to a
/// clinician. `rule_id` and `citation_url` identify which safety rule
/// fired and the regulatory source behind it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResult {
    /// The severity verdict.
    pub severity: Severity,
    /// Plain-language explanation of the verdict.
    pub rationale: String,
    /// Stable identifier of the rule that produced the verdict.
    pub rule_id: String,
    /// Peer-reviewed or regulatory source backing the rule, when one exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub citation_url: Option<String>,
    /// Human-readable labels of missing/invalid critical fields.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub missing_fields: Vec<String>,
    /// Attestation trigger code, when the gate fired on staleness.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<AttestationReason>,
    /// Lab age in hours, rounded, when staleness triggered attestation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stale_since: Option<f64>,
    /// The violated limit: the freshness window in hours for attestation
    /// verdicts, the renal cutoff in mL/min for blocks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,
}
