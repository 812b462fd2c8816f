//! The attestation gate.
//!
//! Composes critical-field validation and lab freshness into a single
//! verdict: does this evaluation need a human attestation before a rule
//! verdict can be produced?
//!
//! Ordering is deliberate — presence and validity of the core inputs is
//! a harder failure than staleness. A clinician must first supply the
//! numbers before the staleness of those numbers becomes meaningful, so
//! failing fields short-circuit the freshness check entirely.

use chrono::{DateTime, Utc};
use tracing::debug;

use doseguard_contracts::{
    context::PatientSafetyContext,
    evaluation::{AttestationReason, AttestationVerdict},
};

use crate::{
    fields::failing_critical_fields,
    freshness::{check_lab_freshness_at, LAB_FRESHNESS_LIMIT_HOURS},
};

/// Run the attestation gate against the current wall clock.
pub fn check_attestation(patient: &PatientSafetyContext) -> AttestationVerdict {
    check_attestation_at(patient, Utc::now())
}

/// Run the attestation gate against an explicit `now`.
///
/// First match wins:
/// 1. Any critical field failing → attestation required with the
///    human-readable labels of every failing field.
/// 2. Stale renal labs → attestation required with
///    `STALE_RENAL_LABS`, the rounded lab age, and the window.
/// 3. Otherwise → not required.
pub fn check_attestation_at(
    patient: &PatientSafetyContext,
    now: DateTime<Utc>,
) -> AttestationVerdict {
    let failing = failing_critical_fields(patient);
    if !failing.is_empty() {
        debug!(failing = failing.len(), "attestation gate: critical fields failing");
        return AttestationVerdict {
            required: true,
            missing_fields: failing.iter().map(|f| f.label().to_string()).collect(),
            reason: None,
            stale_since: None,
            threshold: None,
        };
    }

    let freshness = check_lab_freshness_at(patient.lab_timestamp.as_ref(), now);
    if freshness.is_stale {
        debug!(age_hours = freshness.age_hours, "attestation gate: renal labs stale");
        return AttestationVerdict {
            required: true,
            missing_fields: Vec::new(),
            reason: Some(AttestationReason::StaleRenalLabs),
            // Infinite age means there was no timestamp to measure from.
            stale_since: freshness.age_hours.is_finite().then(|| freshness.age_hours.round()),
            threshold: Some(LAB_FRESHNESS_LIMIT_HOURS),
        };
    }

    AttestationVerdict::not_required()
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use doseguard_contracts::{
        context::{LabTimestamp, PatientSafetyContext},
        evaluation::AttestationReason,
    };

    use super::check_attestation_at;

    fn now() -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, 12, 0, 0).unwrap()
    }

    fn valid_patient() -> PatientSafetyContext {
        PatientSafetyContext {
            creatinine_clearance: Some(60.0),
            weight: Some(70.0),
            age: Some(64.0),
            lab_timestamp: Some(LabTimestamp::from(now() - Duration::hours(2))),
        }
    }

    /// Valid fields and fresh labs: no attestation needed.
    #[test]
    fn test_complete_context_passes() {
        let verdict = check_attestation_at(&valid_patient(), now());
        assert!(!verdict.required);
        assert!(verdict.missing_fields.is_empty());
        assert!(verdict.reason.is_none());
    }

    /// A missing CrCl is reported under its human-readable label.
    #[test]
    fn test_missing_crcl_requires_attestation() {
        let patient = PatientSafetyContext {
            creatinine_clearance: None,
            ..valid_patient()
        };
        let verdict = check_attestation_at(&patient, now());
        assert!(verdict.required);
        assert_eq!(verdict.missing_fields, vec!["Serum creatinine / CrCl"]);
        assert!(verdict.reason.is_none());
    }

    /// Every failing field appears in the verdict.
    #[test]
    fn test_all_failing_fields_listed() {
        let patient = PatientSafetyContext {
            creatinine_clearance: Some(0.0),
            weight: Some(20.0),
            age: None,
            lab_timestamp: None,
        };
        let verdict = check_attestation_at(&patient, now());
        assert!(verdict.required);
        assert_eq!(
            verdict.missing_fields,
            vec!["Serum creatinine / CrCl", "Patient weight", "Patient age"]
        );
    }

    /// Failing fields win over staleness: the labs here are also stale,
    /// but staleness is not consulted until the fields are supplied.
    #[test]
    fn test_failing_fields_shadow_staleness() {
        let patient = PatientSafetyContext {
            weight: None,
            lab_timestamp: Some(LabTimestamp::from(now() - Duration::hours(100))),
            ..valid_patient()
        };
        let verdict = check_attestation_at(&patient, now());
        assert!(verdict.required);
        assert_eq!(verdict.missing_fields, vec!["Patient weight"]);
        assert!(verdict.reason.is_none());
        assert!(verdict.stale_since.is_none());
    }

    /// Stale labs with valid fields trigger STALE_RENAL_LABS with the
    /// rounded age and the freshness window.
    #[test]
    fn test_stale_labs_require_attestation() {
        let patient = PatientSafetyContext {
            lab_timestamp: Some(LabTimestamp::from(now() - Duration::hours(73))),
            ..valid_patient()
        };
        let verdict = check_attestation_at(&patient, now());
        assert!(verdict.required);
        assert_eq!(verdict.reason, Some(AttestationReason::StaleRenalLabs));
        assert_eq!(verdict.stale_since, Some(73.0));
        assert_eq!(verdict.threshold, Some(72.0));
    }

    /// A context with valid fields but no lab timestamp at all is stale
    /// with no measurable age.
    #[test]
    fn test_absent_timestamp_has_no_stale_since() {
        let patient = PatientSafetyContext {
            lab_timestamp: None,
            ..valid_patient()
        };
        let verdict = check_attestation_at(&patient, now());
        assert!(verdict.required);
        assert_eq!(verdict.reason, Some(AttestationReason::StaleRenalLabs));
        assert!(verdict.stale_since.is_none());
        assert_eq!(verdict.threshold, Some(72.0));
    }

    /// Labs exactly at the window boundary do not trigger the gate.
    #[test]
    fn test_boundary_labs_pass() {
        let patient = PatientSafetyContext {
            lab_timestamp: Some(LabTimestamp::from(now() - Duration::hours(72))),
            ..valid_patient()
        };
        let verdict = check_attestation_at(&patient, now());
        assert!(!verdict.required);
    }
}
