//! Patient safety context and evaluation request types.
//!
//! These are the inputs to every evaluation: a snapshot of the clinical
//! values the upstream data source supplies for one patient, plus the
//! medication under consideration. All of it is ephemeral — constructed
//! per request, never persisted by this subsystem.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A renal lab timestamp as the upstream source delivers it.
///
/// Clinical integrations send either a native datetime or an ISO-8601 /
/// RFC 3339 string; both deserialize transparently. `resolve()` yields
/// the parsed instant, or `None` when the string form is unparseable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LabTimestamp {
    /// A native UTC datetime.
    Instant(DateTime<Utc>),
    /// An ISO-8601 / RFC 3339 string, parsed lazily at evaluation time.
    Text(String),
}

impl LabTimestamp {
    /// Resolve to a concrete UTC instant.
    ///
    /// Returns `None` when the text form does not parse as RFC 3339 —
    /// the freshness checker treats that the same as no timestamp at all.
    pub fn resolve(&self) -> Option<DateTime<Utc>> {
        match self {
            LabTimestamp::Instant(t) => Some(*t),
            LabTimestamp::Text(s) => DateTime::parse_from_rfc3339(s)
                .ok()
                .map(|t| t.with_timezone(&Utc)),
        }
    }
}

impl From<DateTime<Utc>> for LabTimestamp {
    fn from(t: DateTime<Utc>) -> Self {
        LabTimestamp::Instant(t)
    }
}

/// The clinical values a DOAC safety evaluation depends on.
///
/// Every field is optional: the upstream record may simply not contain a
/// value. Absence is meaningful — the attestation gate converts it into
/// a human attestation requirement rather than guessing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientSafetyContext {
    /// Creatinine clearance in mL/min, the primary renal safety input.
    pub creatinine_clearance: Option<f64>,
    /// Patient weight in kilograms.
    pub weight: Option<f64>,
    /// Patient age in years.
    pub age: Option<f64>,
    /// When the renal labs backing `creatinine_clearance` were drawn.
    pub lab_timestamp: Option<LabTimestamp>,
}

/// A request to evaluate one proposed DOAC prescription.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationRequest {
    /// Drug identifier. Matched case-insensitively against the formulary.
    pub medication: String,
    /// The patient's safety context at the time of the request.
    pub patient: PatientSafetyContext,
}

/// Who is asking, and for whom — the accountability fields every
/// governance record carries.
///
/// Built by the caller-facing web layer from session data and passed
/// alongside the evaluation request; this subsystem only records it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestContext {
    /// Identifier of the accountable clinician.
    pub actor: String,
    /// Identifier of the patient whose data is being evaluated.
    pub patient_id: String,
    /// Distributed trace correlation id, when the request is traced.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
}
