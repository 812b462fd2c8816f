//! # doseguard-contracts
//!
//! Shared types and contracts for the doseguard medication safety
//! subsystem.
//!
//! All crates in the workspace import from here. No business logic lives
//! in this crate — only data definitions and error types.

pub mod context;
pub mod error;
pub mod evaluation;
pub mod governance;
pub mod overrides;

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    use super::context::{LabTimestamp, PatientSafetyContext};
    use super::error::SafetyError;
    use super::evaluation::{AttestationReason, EvaluationResult, Severity};
    use super::governance::GovernanceEventKind;
    use super::overrides::{OverrideRequest, ReasonCode};

    // ── Severity ─────────────────────────────────────────────────────────────

    #[test]
    fn severity_serializes_to_wire_names() {
        assert_eq!(serde_json::to_value(Severity::Pass).unwrap(), json!("PASS"));
        assert_eq!(serde_json::to_value(Severity::Flag).unwrap(), json!("FLAG"));
        assert_eq!(serde_json::to_value(Severity::Block).unwrap(), json!("BLOCK"));
        assert_eq!(
            serde_json::to_value(Severity::AttestationRequired).unwrap(),
            json!("ATTESTATION_REQUIRED")
        );
    }

    #[test]
    fn severity_round_trips() {
        for severity in [
            Severity::Pass,
            Severity::Flag,
            Severity::Block,
            Severity::AttestationRequired,
        ] {
            let encoded = serde_json::to_string(&severity).unwrap();
            let decoded: Severity = serde_json::from_str(&encoded).unwrap();
            assert_eq!(severity, decoded);
        }
    }

    #[test]
    fn severity_display_matches_wire_name() {
        assert_eq!(Severity::AttestationRequired.to_string(), "ATTESTATION_REQUIRED");
        assert_eq!(Severity::Block.to_string(), "BLOCK");
    }

    // ── LabTimestamp ─────────────────────────────────────────────────────────

    #[test]
    fn lab_timestamp_accepts_native_datetime() {
        let t = Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 0).unwrap();
        let ts = LabTimestamp::from(t);
        assert_eq!(ts.resolve(), Some(t));
    }

    #[test]
    fn lab_timestamp_parses_iso_string() {
        let ts = LabTimestamp::Text("2026-03-14T09:30:00Z".to_string());
        let resolved = ts.resolve().unwrap();
        assert_eq!(resolved, Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 0).unwrap());
    }

    #[test]
    fn lab_timestamp_unparseable_string_resolves_to_none() {
        let ts = LabTimestamp::Text("not-a-timestamp".to_string());
        assert_eq!(ts.resolve(), None);
    }

    #[test]
    fn patient_context_deserializes_string_timestamp() {
        let ctx: PatientSafetyContext = serde_json::from_value(json!({
            "creatinineClearance": 50.0,
            "weight": 70.0,
            "age": 65.0,
            "labTimestamp": "2026-03-14T09:30:00Z"
        }))
        .unwrap();
        assert!(matches!(ctx.lab_timestamp, Some(LabTimestamp::Text(_))));
        assert!(ctx.lab_timestamp.unwrap().resolve().is_some());
    }

    // ── EvaluationResult wire shape ──────────────────────────────────────────

    #[test]
    fn evaluation_result_uses_camel_case_keys() {
        let result = EvaluationResult {
            severity: Severity::AttestationRequired,
            rationale: "renal labs are stale".to_string(),
            rule_id: "DOAC-RenalLabs-Stale-001".to_string(),
            citation_url: None,
            missing_fields: vec![],
            reason: Some(AttestationReason::StaleRenalLabs),
            stale_since: Some(73.0),
            threshold: Some(72.0),
        };

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["ruleId"], json!("DOAC-RenalLabs-Stale-001"));
        assert_eq!(value["reason"], json!("STALE_RENAL_LABS"));
        assert_eq!(value["staleSince"], json!(73.0));
        // Options that are None are omitted from the wire form entirely.
        assert!(value.get("citationUrl").is_none());
        assert!(value.get("missingFields").is_none());
    }

    // ── ReasonCode ───────────────────────────────────────────────────────────

    #[test]
    fn reason_code_round_trips() {
        for code in [
            ReasonCode::ClinicalJudgmentPalliativeCare,
            ReasonCode::PatientDeclinedAlternative,
            ReasonCode::ContraindicationUnavoidable,
            ReasonCode::TimeCriticalEmergency,
            ReasonCode::DocumentedTolerance,
            ReasonCode::OtherDocumented,
        ] {
            let encoded = serde_json::to_string(&code).unwrap();
            let decoded: ReasonCode = serde_json::from_str(&encoded).unwrap();
            assert_eq!(code, decoded);
            assert_eq!(encoded.trim_matches('"'), code.as_str());
        }
    }

    #[test]
    fn override_request_missing_reason_code_deserializes() {
        // A missing reasonCode must surface as a validation error later,
        // not as a deserialization failure here.
        let req: OverrideRequest = serde_json::from_value(json!({
            "ruleId": "DOAC-CrCl-Rivaroxaban-001",
            "severity": "BLOCK",
            "reasonCode": null,
            "actor": "dr.alves",
            "patientId": "patient-001"
        }))
        .unwrap();
        assert!(req.reason_code.is_none());
        assert_eq!(req.severity, Severity::Block);
    }

    // ── GovernanceEventKind ──────────────────────────────────────────────────

    #[test]
    fn every_event_kind_has_a_non_empty_legal_basis() {
        for kind in [
            GovernanceEventKind::DoacEvaluation,
            GovernanceEventKind::AttestationRequired,
            GovernanceEventKind::OverrideSubmitted,
            GovernanceEventKind::PatientDataAccess,
            GovernanceEventKind::SafetyRuleFired,
        ] {
            assert!(!kind.legal_basis().is_empty());
            assert!(kind.legal_basis().contains("LGPD"));
        }
    }

    #[test]
    fn event_kind_serializes_to_wire_names() {
        assert_eq!(
            serde_json::to_value(GovernanceEventKind::DoacEvaluation).unwrap(),
            json!("DOAC_EVALUATION")
        );
        assert_eq!(
            serde_json::to_value(GovernanceEventKind::OverrideSubmitted).unwrap(),
            json!("OVERRIDE_SUBMITTED")
        );
        assert_eq!(
            serde_json::to_value(GovernanceEventKind::PatientDataAccess).unwrap(),
            json!("PATIENT_DATA_ACCESS")
        );
    }

    // ── SafetyError display messages ─────────────────────────────────────────

    #[test]
    fn error_config_display() {
        let err = SafetyError::ConfigError {
            reason: "drug 'rivaroxaban' has non-positive cutoff".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("configuration error"));
        assert!(msg.contains("rivaroxaban"));
    }

    #[test]
    fn error_audit_write_failed_display() {
        let err = SafetyError::AuditWriteFailed {
            reason: "sink unavailable".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("governance write failed"));
        assert!(msg.contains("sink unavailable"));
    }

    #[test]
    fn error_override_rejected_joins_all_errors() {
        let err = SafetyError::OverrideRejected {
            errors: vec![
                "reasonCode is required".to_string(),
                "actor is required".to_string(),
            ],
        };
        let msg = err.to_string();
        assert!(msg.contains("override rejected"));
        assert!(msg.contains("reasonCode is required"));
        assert!(msg.contains("actor is required"));
    }
}
