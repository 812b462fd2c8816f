//! The safety pipeline: evaluation plus mandatory governance logging.
//!
//! The pipeline enforces the subsystem's auditability contract:
//!
//!   evaluate → log DOAC_EVALUATION → log companion event by severity
//!
//! A verdict is returned to the caller only after its governance trail
//! was durably written. An audit failure aborts the operation — the
//! caller never sees an unrecorded safety decision.

use tracing::{debug, warn};

use doseguard_contracts::{
    context::{EvaluationRequest, RequestContext},
    error::SafetyResult,
    evaluation::{EvaluationResult, Severity},
};

use crate::{logger::GovernanceLogger, traits::SafetyEvaluator};

/// Runs evaluations with their governance obligations in one place.
///
/// Construct once at startup with the configured rule engine and a
/// logger over the deployment's audit sink; safe to share across
/// threads.
pub struct SafetyPipeline {
    evaluator: Box<dyn SafetyEvaluator>,
    logger: GovernanceLogger,
}

impl SafetyPipeline {
    /// Create a pipeline from a rule engine and a governance logger.
    pub fn new(evaluator: Box<dyn SafetyEvaluator>, logger: GovernanceLogger) -> Self {
        Self { evaluator, logger }
    }

    /// Evaluate one proposed prescription and record the outcome.
    ///
    /// Emits exactly one `DOAC_EVALUATION` event per call, plus an
    /// `ATTESTATION_REQUIRED` event when the gate fired or a
    /// `SAFETY_RULE_FIRED` event for BLOCK/FLAG verdicts.
    ///
    /// # Errors
    ///
    /// Returns `SafetyError::AuditWriteFailed` when any governance write
    /// fails; the verdict is withheld in that case.
    pub fn evaluate(
        &self,
        request: &EvaluationRequest,
        ctx: &RequestContext,
    ) -> SafetyResult<EvaluationResult> {
        debug!(
            actor = %ctx.actor,
            patient_id = %ctx.patient_id,
            medication = %request.medication,
            "safety evaluation starting"
        );

        let result = self.evaluator.evaluate(request);

        self.logger
            .log_doac_evaluation(ctx, &request.medication, &result)?;

        match result.severity {
            Severity::AttestationRequired => {
                warn!(
                    patient_id = %ctx.patient_id,
                    rule_id = %result.rule_id,
                    "attestation required before evaluation can proceed"
                );
                self.logger.log_attestation_required(ctx, &result)?;
            }
            Severity::Block | Severity::Flag => {
                warn!(
                    patient_id = %ctx.patient_id,
                    rule_id = %result.rule_id,
                    severity = %result.severity,
                    "safety rule fired"
                );
                self.logger
                    .log_safety_rule_fired(ctx, &request.medication, &result)?;
            }
            Severity::Pass => {
                debug!(
                    patient_id = %ctx.patient_id,
                    rule_id = %result.rule_id,
                    "evaluation passed"
                );
            }
        }

        Ok(result)
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
