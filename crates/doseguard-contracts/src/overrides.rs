//! Override request types.
//!
//! An override is a clinician's documented decision to proceed despite a
//! BLOCK/FLAG/ATTESTATION_REQUIRED verdict. The reason-code taxonomy is
//! closed; the catalog describing each code (labels, documentation
//! requirements) lives in the override crate.

use serde::{Deserialize, Serialize};

use crate::evaluation::Severity;

/// The closed taxonomy of override justifications.
///
/// Every override must cite exactly one of these. Codes are closed so
/// compliance reporting can aggregate them without free-text parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReasonCode {
    /// Goals-of-care decision in a palliative context.
    ClinicalJudgmentPalliativeCare,
    /// The patient declined the safer alternative regimen.
    PatientDeclinedAlternative,
    /// Every alternative carries its own contraindication.
    ContraindicationUnavoidable,
    /// Emergency treatment where delay is the greater risk.
    TimeCriticalEmergency,
    /// The patient has documented tolerance of this regimen.
    DocumentedTolerance,
    /// Another documented clinical justification.
    OtherDocumented,
}

impl ReasonCode {
    /// The wire-format name, as it appears in JSON and error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReasonCode::ClinicalJudgmentPalliativeCare => "CLINICAL_JUDGMENT_PALLIATIVE_CARE",
            ReasonCode::PatientDeclinedAlternative => "PATIENT_DECLINED_ALTERNATIVE",
            ReasonCode::ContraindicationUnavoidable => "CONTRAINDICATION_UNAVOIDABLE",
            ReasonCode::TimeCriticalEmergency => "TIME_CRITICAL_EMERGENCY",
            ReasonCode::DocumentedTolerance => "DOCUMENTED_TOLERANCE",
            ReasonCode::OtherDocumented => "OTHER_DOCUMENTED",
        }
    }
}

impl std::fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A clinician's request to proceed despite a safety verdict.
///
/// Must reference the exact `rule_id`/`severity` pair that was issued —
/// there is no overriding a verdict that never happened. `reason_code`
/// is optional at the type level so a missing code surfaces as a
/// validation error rather than a deserialization failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverrideRequest {
    /// The rule whose verdict is being overridden.
    pub rule_id: String,
    /// The severity of the verdict being overridden.
    pub severity: Severity,
    /// The justification code. Required; validated by the handler.
    pub reason_code: Option<ReasonCode>,
    /// Identifier of the accountable clinician.
    pub actor: String,
    /// Identifier of the patient the verdict concerns.
    pub patient_id: String,
    /// Free-text clinical documentation. Required for some reason codes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Distributed trace correlation id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
}
