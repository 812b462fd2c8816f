//! Governance event types — the audit system of record.
//!
//! A `GovernanceEvent` is created exactly once at the moment of the
//! triggering decision and never mutated or deleted afterwards. The
//! append-only guarantee is enforced at the sink boundary; this module
//! only defines the record shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The closed set of auditable decision points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GovernanceEventKind {
    /// A DOAC evaluation completed (any severity).
    DoacEvaluation,
    /// The attestation gate fired: inputs missing or stale.
    AttestationRequired,
    /// A clinician submitted an override against a verdict.
    OverrideSubmitted,
    /// Patient clinical data was read for an evaluation.
    PatientDataAccess,
    /// A blocking or cautionary safety rule fired.
    SafetyRuleFired,
}

impl GovernanceEventKind {
    /// The regulatory basis under which records of this kind are created.
    ///
    /// Fixed per kind and always non-empty; stamped onto every event at
    /// emission time.
    pub fn legal_basis(&self) -> &'static str {
        match self {
            GovernanceEventKind::DoacEvaluation => {
                "HIPAA 45 CFR 164.312(b); LGPD art. 37 — medication safety decision record"
            }
            GovernanceEventKind::AttestationRequired => {
                "HIPAA 45 CFR 164.312(b); LGPD art. 37 — clinical data completeness attestation"
            }
            GovernanceEventKind::OverrideSubmitted => {
                "HIPAA 45 CFR 164.308(a)(1); LGPD art. 37 — documented clinical override"
            }
            GovernanceEventKind::PatientDataAccess => {
                "HIPAA 45 CFR 164.312(b); LGPD art. 37 — access accounting"
            }
            GovernanceEventKind::SafetyRuleFired => {
                "HIPAA 45 CFR 164.312(b); LGPD art. 37 — safety rule audit record"
            }
        }
    }

    /// The wire-format name of this event kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            GovernanceEventKind::DoacEvaluation => "DOAC_EVALUATION",
            GovernanceEventKind::AttestationRequired => "ATTESTATION_REQUIRED",
            GovernanceEventKind::OverrideSubmitted => "OVERRIDE_SUBMITTED",
            GovernanceEventKind::PatientDataAccess => "PATIENT_DATA_ACCESS",
            GovernanceEventKind::SafetyRuleFired => "SAFETY_RULE_FIRED",
        }
    }
}

impl std::fmt::Display for GovernanceEventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One immutable governance record.
///
/// `timestamp` and `legal_basis` are machine-stamped at emission — never
/// caller-supplied. `metadata` nests the event-specific detail fields
/// (rule id, reason code, staleness, …) consistently per kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GovernanceEvent {
    /// Unique id of this record, returned to callers for correlation.
    pub event_id: Uuid,
    /// Which decision point produced the record.
    pub event: GovernanceEventKind,
    /// The accountable actor (clinician identifier, or "system").
    pub actor: String,
    /// The resource the decision concerns — a patient identifier.
    pub resource: String,
    /// Wall-clock emission time (UTC), machine-generated.
    pub timestamp: DateTime<Utc>,
    /// The regulatory basis for creating this record. Never empty.
    pub legal_basis: String,
    /// Distributed trace correlation id, when the request was traced.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
    /// Event-specific detail fields.
    pub metadata: serde_json::Value,
}
