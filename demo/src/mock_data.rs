//! Mock clinical data for the demo scenarios.
//!
//! All data is hardcoded and fictional. No external calls are made.

use chrono::{Duration, Utc};

use doseguard_contracts::context::{LabTimestamp, PatientSafetyContext, RequestContext};

/// A dialysis-borderline patient: CrCl 12 mL/min, elderly.
pub fn renal_impaired_patient() -> PatientSafetyContext {
    PatientSafetyContext {
        creatinine_clearance: Some(12.0),
        weight: Some(65.0),
        age: Some(78.0),
        lab_timestamp: Some(LabTimestamp::from(Utc::now() - Duration::hours(4))),
    }
}

/// A healthy-kidney patient whose renal labs are three days old.
pub fn stale_labs_patient() -> PatientSafetyContext {
    PatientSafetyContext {
        creatinine_clearance: Some(50.0),
        weight: Some(70.0),
        age: Some(65.0),
        lab_timestamp: Some(LabTimestamp::from(Utc::now() - Duration::hours(73))),
    }
}

/// Moderate renal impairment: below dabigatran's cutoff, above the others'.
pub fn moderate_impairment_patient() -> PatientSafetyContext {
    PatientSafetyContext {
        creatinine_clearance: Some(25.0),
        weight: Some(68.0),
        age: Some(78.0),
        lab_timestamp: Some(LabTimestamp::from(Utc::now() - Duration::hours(12))),
    }
}

/// The requesting clinician and patient for the demo runs.
pub fn demo_context() -> RequestContext {
    RequestContext {
        actor: "dr.moreira".to_string(),
        patient_id: "patient-0042".to_string(),
        trace_id: Some("demo-trace-001".to_string()),
    }
}
