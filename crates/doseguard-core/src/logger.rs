//! The governance event logger.
//!
//! One emitter per event kind, each a thin, non-branching constructor
//! over the common `emit()` primitive. `emit()` stamps the timestamp and
//! legal basis at call time — callers never supply either — and writes
//! through the append-only sink before returning the event id.

use std::sync::Arc;

use chrono::Utc;
use serde_json::json;
use tracing::info;
use uuid::Uuid;

use doseguard_contracts::{
    context::RequestContext,
    error::SafetyResult,
    evaluation::EvaluationResult,
    governance::{GovernanceEvent, GovernanceEventKind},
    overrides::OverrideRequest,
};

use crate::traits::GovernanceSink;

/// Emits governance events through an append-only sink.
///
/// Cheap to clone; clones share the sink. Every emitter returns the
/// generated event id so callers can correlate downstream records.
#[derive(Clone)]
pub struct GovernanceLogger {
    sink: Arc<dyn GovernanceSink>,
}

impl GovernanceLogger {
    /// Create a logger writing through the given sink.
    pub fn new(sink: Arc<dyn GovernanceSink>) -> Self {
        Self { sink }
    }

    /// The common emission primitive.
    ///
    /// Stamps `timestamp` (UTC, machine-generated) and `legal_basis`
    /// (fixed per event kind), appends via the sink, and returns the
    /// event id. A sink failure propagates — the caller must not treat
    /// the decision as recorded.
    fn emit(
        &self,
        kind: GovernanceEventKind,
        actor: &str,
        resource: &str,
        trace_id: Option<&str>,
        metadata: serde_json::Value,
    ) -> SafetyResult<Uuid> {
        let event = GovernanceEvent {
            event_id: Uuid::new_v4(),
            event: kind,
            actor: actor.to_string(),
            resource: resource.to_string(),
            timestamp: Utc::now(),
            legal_basis: kind.legal_basis().to_string(),
            trace_id: trace_id.map(str::to_string),
            metadata,
        };

        self.sink.append(&event)?;

        info!(
            event_id = %event.event_id,
            kind = %kind,
            actor = %actor,
            resource = %resource,
            "governance event emitted"
        );

        Ok(event.event_id)
    }

    /// Record a completed DOAC evaluation, whatever its severity.
    pub fn log_doac_evaluation(
        &self,
        ctx: &RequestContext,
        medication: &str,
        result: &EvaluationResult,
    ) -> SafetyResult<Uuid> {
        self.emit(
            GovernanceEventKind::DoacEvaluation,
            &ctx.actor,
            &ctx.patient_id,
            ctx.trace_id.as_deref(),
            json!({
                "medication": medication,
                "severity": result.severity,
                "ruleId": result.rule_id,
                "rationale": result.rationale,
            }),
        )
    }

    /// Record that the attestation gate fired for an evaluation.
    pub fn log_attestation_required(
        &self,
        ctx: &RequestContext,
        result: &EvaluationResult,
    ) -> SafetyResult<Uuid> {
        self.emit(
            GovernanceEventKind::AttestationRequired,
            &ctx.actor,
            &ctx.patient_id,
            ctx.trace_id.as_deref(),
            json!({
                "missingFields": result.missing_fields,
                "reason": result.reason,
                "staleSince": result.stale_since,
                "thresholdHours": result.threshold,
            }),
        )
    }

    /// Record a clinician override. Call only after validation passed.
    pub fn log_override_submitted(&self, request: &OverrideRequest) -> SafetyResult<Uuid> {
        self.emit(
            GovernanceEventKind::OverrideSubmitted,
            &request.actor,
            &request.patient_id,
            request.trace_id.as_deref(),
            json!({
                "ruleId": request.rule_id,
                "originalSeverity": request.severity,
                "reasonCode": request.reason_code,
                "notes": request.notes,
            }),
        )
    }

    /// Record that patient clinical data was read.
    pub fn log_patient_data_access(
        &self,
        ctx: &RequestContext,
        purpose: &str,
        fields: &[&str],
    ) -> SafetyResult<Uuid> {
        self.emit(
            GovernanceEventKind::PatientDataAccess,
            &ctx.actor,
            &ctx.patient_id,
            ctx.trace_id.as_deref(),
            json!({
                "purpose": purpose,
                "fields": fields,
            }),
        )
    }

    /// Record that a blocking or cautionary safety rule fired.
    pub fn log_safety_rule_fired(
        &self,
        ctx: &RequestContext,
        medication: &str,
        result: &EvaluationResult,
    ) -> SafetyResult<Uuid> {
        self.emit(
            GovernanceEventKind::SafetyRuleFired,
            &ctx.actor,
            &ctx.patient_id,
            ctx.trace_id.as_deref(),
            json!({
                "medication": medication,
                "ruleId": result.rule_id,
                "severity": result.severity,
                "rationale": result.rationale,
            }),
        )
    }
}
