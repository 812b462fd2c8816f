//! # doseguard-override
//!
//! The override workflow of the doseguard medication safety subsystem:
//! a clinician's documented decision to proceed despite a BLOCK, FLAG,
//! or ATTESTATION_REQUIRED verdict.
//!
//! Validation is pure and collects every error; submission emits one
//! `OVERRIDE_SUBMITTED` governance event through the append-only sink
//! and returns the event id. The reason-code taxonomy is closed and
//! enumerable via [`available_reason_codes`].

pub mod catalog;
pub mod handler;

pub use catalog::{available_reason_codes, ReasonCodeCatalog, ReasonCodeInfo};
pub use handler::{OverrideHandler, OverrideValidation};

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use doseguard_contracts::{
        error::{SafetyError, SafetyResult},
        evaluation::Severity,
        governance::{GovernanceEvent, GovernanceEventKind},
        overrides::{OverrideRequest, ReasonCode},
    };
    use doseguard_core::{logger::GovernanceLogger, traits::GovernanceSink};

    use crate::OverrideHandler;

    // ── Helpers ───────────────────────────────────────────────────────────────

    /// A sink that records every appended event for later inspection.
    struct RecordingSink {
        events: Mutex<Vec<GovernanceEvent>>,
    }

    impl RecordingSink {
        fn new() -> Arc<Self> {
            Arc::new(Self { events: Mutex::new(vec![]) })
        }
    }

    impl GovernanceSink for RecordingSink {
        fn append(&self, event: &GovernanceEvent) -> SafetyResult<()> {
            self.events.lock().unwrap().push(event.clone());
            Ok(())
        }
    }

    fn handler(sink: Arc<RecordingSink>) -> OverrideHandler {
        OverrideHandler::new(GovernanceLogger::new(sink))
    }

    /// A structurally valid override request. Tests mutate fields.
    fn valid_request() -> OverrideRequest {
        OverrideRequest {
            rule_id: "DOAC-CrCl-Rivaroxaban-001".to_string(),
            severity: Severity::Block,
            reason_code: Some(ReasonCode::ContraindicationUnavoidable),
            actor: "dr.alves".to_string(),
            patient_id: "patient-001".to_string(),
            notes: None,
            trace_id: Some("trace-42".to_string()),
        }
    }

    // ── 1. structural validation ──────────────────────────────────────────────

    /// A complete request validates cleanly.
    #[test]
    fn test_valid_request_passes() {
        let validation = handler(RecordingSink::new()).validate(&valid_request());
        assert!(validation.valid);
        assert!(validation.errors.is_empty());
    }

    /// Every missing identity field produces its own error.
    #[test]
    fn test_missing_identity_fields_collected() {
        let request = OverrideRequest {
            rule_id: "".to_string(),
            actor: "  ".to_string(),
            patient_id: "".to_string(),
            ..valid_request()
        };

        let validation = handler(RecordingSink::new()).validate(&request);

        assert!(!validation.valid);
        assert!(validation.errors.contains(&"ruleId is required".to_string()));
        assert!(validation.errors.contains(&"actor is required".to_string()));
        assert!(validation.errors.contains(&"patientId is required".to_string()));
    }

    /// PASS verdicts have nothing to override.
    #[test]
    fn test_pass_severity_is_not_overridable() {
        let request = OverrideRequest {
            severity: Severity::Pass,
            ..valid_request()
        };

        let validation = handler(RecordingSink::new()).validate(&request);

        assert!(!validation.valid);
        assert!(validation
            .errors
            .iter()
            .any(|e| e.contains("not overridable")));
    }

    /// Each overridable severity validates.
    #[test]
    fn test_overridable_severities() {
        for severity in [Severity::Block, Severity::Flag, Severity::AttestationRequired] {
            let request = OverrideRequest { severity, ..valid_request() };
            assert!(handler(RecordingSink::new()).validate(&request).valid);
        }
    }

    /// A missing reason code is an error, phrased for direct display.
    #[test]
    fn test_missing_reason_code() {
        let request = OverrideRequest {
            reason_code: None,
            ..valid_request()
        };

        let validation = handler(RecordingSink::new()).validate(&request);

        assert!(!validation.valid);
        assert!(validation.errors.contains(&"reasonCode is required".to_string()));
    }

    // ── 2. documentation requirements ─────────────────────────────────────────

    /// Palliative-care judgment without notes is rejected.
    #[test]
    fn test_palliative_care_requires_documentation() {
        let request = OverrideRequest {
            reason_code: Some(ReasonCode::ClinicalJudgmentPalliativeCare),
            notes: None,
            ..valid_request()
        };

        let validation = handler(RecordingSink::new()).validate(&request);

        assert!(!validation.valid);
        assert!(validation
            .errors
            .iter()
            .any(|e| e.contains("requires documentation")));
    }

    /// Whitespace-only notes do not satisfy the documentation requirement.
    #[test]
    fn test_whitespace_notes_are_not_documentation() {
        let request = OverrideRequest {
            reason_code: Some(ReasonCode::OtherDocumented),
            notes: Some("   ".to_string()),
            ..valid_request()
        };

        assert!(!handler(RecordingSink::new()).validate(&request).valid);
    }

    /// With notes supplied, the palliative-care code validates but still
    /// carries the CMO-review warning.
    #[test]
    fn test_palliative_care_with_notes_warns() {
        let request = OverrideRequest {
            reason_code: Some(ReasonCode::ClinicalJudgmentPalliativeCare),
            notes: Some("goals-of-care discussion documented in chart".to_string()),
            ..valid_request()
        };

        let validation = handler(RecordingSink::new()).validate(&request);

        assert!(validation.valid);
        assert!(validation
            .warnings
            .iter()
            .any(|w| w.contains("chief medical officer")));
    }

    /// Documented tolerance warns no one.
    #[test]
    fn test_documented_tolerance_has_no_warning() {
        let request = OverrideRequest {
            reason_code: Some(ReasonCode::DocumentedTolerance),
            ..valid_request()
        };

        let validation = handler(RecordingSink::new()).validate(&request);

        assert!(validation.valid);
        assert!(validation.warnings.is_empty());
    }

    // ── 3. submission ─────────────────────────────────────────────────────────

    /// A valid override emits exactly one OVERRIDE_SUBMITTED event whose
    /// fields match the request.
    #[test]
    fn test_handle_emits_one_matching_event() {
        let sink = RecordingSink::new();
        let request = valid_request();

        let event_id = handler(Arc::clone(&sink)).handle(&request).unwrap();

        let events = sink.events.lock().unwrap();
        assert_eq!(events.len(), 1);

        let event = &events[0];
        assert_eq!(event.event_id, event_id);
        assert_eq!(event.event, GovernanceEventKind::OverrideSubmitted);
        assert_eq!(event.actor, "dr.alves");
        assert_eq!(event.resource, "patient-001");
        assert_eq!(event.trace_id.as_deref(), Some("trace-42"));
        assert_eq!(event.metadata["ruleId"], "DOAC-CrCl-Rivaroxaban-001");
        assert_eq!(event.metadata["originalSeverity"], "BLOCK");
        assert_eq!(event.metadata["reasonCode"], "CONTRAINDICATION_UNAVOIDABLE");
        assert!(!event.legal_basis.is_empty());
    }

    /// An invalid override fails hard with every collected error and
    /// emits nothing.
    #[test]
    fn test_handle_invalid_emits_nothing() {
        let sink = RecordingSink::new();
        let request = OverrideRequest {
            reason_code: None,
            ..valid_request()
        };

        let outcome = handler(Arc::clone(&sink)).handle(&request);

        match outcome {
            Err(SafetyError::OverrideRejected { errors }) => {
                assert!(errors.contains(&"reasonCode is required".to_string()));
            }
            other => panic!("expected OverrideRejected, got {:?}", other),
        }
        assert!(sink.events.lock().unwrap().is_empty());
    }

    /// The round-trip property: validate(req).valid ⇔ handle(req) succeeds.
    #[test]
    fn test_validate_handle_round_trip() {
        let valid = valid_request();
        let invalid = OverrideRequest { actor: "".to_string(), ..valid_request() };

        let sink = RecordingSink::new();
        let h = handler(Arc::clone(&sink));

        assert!(h.validate(&valid).valid);
        assert!(h.handle(&valid).is_ok());

        assert!(!h.validate(&invalid).valid);
        assert!(h.handle(&invalid).is_err());

        // Only the valid request reached the sink.
        assert_eq!(sink.events.lock().unwrap().len(), 1);
    }
}
