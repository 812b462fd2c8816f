//! Override validation and submission.
//!
//! `validate()` is pure and collects every structural error in one pass
//! so the clinician sees the full picture. `handle()` converts a failed
//! validation into a hard error with no side effects; a valid request
//! emits exactly one `OVERRIDE_SUBMITTED` governance event and returns
//! the generated event id.

use tracing::{info, warn};
use uuid::Uuid;

use doseguard_contracts::{
    error::{SafetyError, SafetyResult},
    evaluation::Severity,
    overrides::OverrideRequest,
};
use doseguard_core::logger::GovernanceLogger;

use crate::catalog::ReasonCodeCatalog;

/// The outcome of validating one override request.
///
/// `warnings` are advisory — they recommend review but never affect
/// `valid`.
#[derive(Debug, Clone, PartialEq)]
pub struct OverrideValidation {
    /// True when the request may be submitted.
    pub valid: bool,
    /// Every structural error found, display-ready.
    pub errors: Vec<String>,
    /// Advisory notices (e.g. chief-medical-officer review recommended).
    pub warnings: Vec<String>,
}

/// Validates and records clinician overrides.
pub struct OverrideHandler {
    catalog: ReasonCodeCatalog,
    logger: GovernanceLogger,
}

impl OverrideHandler {
    /// Create a handler over the standard catalog.
    pub fn new(logger: GovernanceLogger) -> Self {
        Self {
            catalog: ReasonCodeCatalog::standard(),
            logger,
        }
    }

    /// Validate an override request without side effects.
    ///
    /// All rules are checked and all errors collected:
    /// - `ruleId`, `actor`, `patientId` must be non-empty;
    /// - `severity` must be one of BLOCK, FLAG, ATTESTATION_REQUIRED;
    /// - `reasonCode` must be present;
    /// - codes tagged as requiring documentation must carry non-empty notes.
    ///
    /// Clinical-judgment codes add a warning recommending chief medical
    /// officer review.
    pub fn validate(&self, request: &OverrideRequest) -> OverrideValidation {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        if request.rule_id.trim().is_empty() {
            errors.push("ruleId is required".to_string());
        }
        if request.actor.trim().is_empty() {
            errors.push("actor is required".to_string());
        }
        if request.patient_id.trim().is_empty() {
            errors.push("patientId is required".to_string());
        }

        if request.severity == Severity::Pass {
            errors.push(format!(
                "severity {} is not overridable",
                request.severity
            ));
        }

        match request.reason_code {
            None => errors.push("reasonCode is required".to_string()),
            Some(code) => {
                // The enum is closed, so an entry always exists; the
                // catalog carries the per-code policy flags.
                if let Some(info) = self.catalog.get(code) {
                    let notes_empty = request
                        .notes
                        .as_deref()
                        .map(|n| n.trim().is_empty())
                        .unwrap_or(true);

                    if info.requires_documentation && notes_empty {
                        errors.push(format!(
                            "reason code {} requires documentation in notes",
                            code
                        ));
                    }
                    if info.cmo_review {
                        warnings.push(format!(
                            "reason code {} is recommended for chief medical officer review",
                            code
                        ));
                    }
                }
            }
        }

        OverrideValidation {
            valid: errors.is_empty(),
            errors,
            warnings,
        }
    }

    /// Validate and record an override.
    ///
    /// On success, emits exactly one `OVERRIDE_SUBMITTED` governance
    /// event and returns its id for correlation.
    ///
    /// # Errors
    ///
    /// Returns `SafetyError::OverrideRejected` when validation fails —
    /// no event is emitted and no partial state exists — or
    /// `SafetyError::AuditWriteFailed` when the governance write fails.
    pub fn handle(&self, request: &OverrideRequest) -> SafetyResult<Uuid> {
        let validation = self.validate(request);
        if !validation.valid {
            warn!(
                rule_id = %request.rule_id,
                errors = validation.errors.len(),
                "override rejected"
            );
            return Err(SafetyError::OverrideRejected {
                errors: validation.errors,
            });
        }

        let event_id = self.logger.log_override_submitted(request)?;

        info!(
            event_id = %event_id,
            rule_id = %request.rule_id,
            actor = %request.actor,
            "override recorded"
        );

        Ok(event_id)
    }
}
