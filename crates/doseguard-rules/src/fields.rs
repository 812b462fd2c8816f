//! Critical field validation.
//!
//! The three inputs every DOAC evaluation depends on, each with a
//! clinically plausible range. Values outside the range — and absent
//! values — are invalid and route the evaluation to the attestation
//! gate.

use doseguard_contracts::context::PatientSafetyContext;

/// The safety-critical patient inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CriticalField {
    /// Creatinine clearance, mL/min. Must be strictly positive.
    CreatinineClearance,
    /// Patient weight, kg. Accepted range 30–300 inclusive.
    Weight,
    /// Patient age, years. Accepted range 1–130 inclusive.
    Age,
}

impl CriticalField {
    /// All critical fields, in the order they are validated and reported.
    pub const ALL: [CriticalField; 3] = [
        CriticalField::CreatinineClearance,
        CriticalField::Weight,
        CriticalField::Age,
    ];

    /// The wire-format field name, matching `PatientSafetyContext`.
    pub fn field_name(&self) -> &'static str {
        match self {
            CriticalField::CreatinineClearance => "creatinineClearance",
            CriticalField::Weight => "weight",
            CriticalField::Age => "age",
        }
    }

    /// The human-readable label shown to clinicians in attestation
    /// prompts and missing-field lists.
    pub fn label(&self) -> &'static str {
        match self {
            CriticalField::CreatinineClearance => "Serum creatinine / CrCl",
            CriticalField::Weight => "Patient weight",
            CriticalField::Age => "Patient age",
        }
    }

    /// Whether `value` is a usable input for this field.
    ///
    /// `None` is never valid; NaN fails every range check.
    pub fn accepts(&self, value: Option<f64>) -> bool {
        let Some(v) = value else { return false };
        match self {
            CriticalField::CreatinineClearance => v > 0.0,
            CriticalField::Weight => (30.0..=300.0).contains(&v),
            CriticalField::Age => (1.0..=130.0).contains(&v),
        }
    }

    fn value_in(&self, patient: &PatientSafetyContext) -> Option<f64> {
        match self {
            CriticalField::CreatinineClearance => patient.creatinine_clearance,
            CriticalField::Weight => patient.weight,
            CriticalField::Age => patient.age,
        }
    }
}

/// Validate a field by its wire name.
///
/// Unrecognized field names impose no constraint and are always valid —
/// callers may pass through fields this subsystem does not govern.
pub fn validate_critical_field(field_name: &str, value: Option<f64>) -> bool {
    CriticalField::ALL
        .iter()
        .find(|f| f.field_name() == field_name)
        .map(|f| f.accepts(value))
        .unwrap_or(true)
}

/// The subset of critical fields failing validation for this patient.
///
/// Deterministic: always reported in `CriticalField::ALL` order.
pub fn failing_critical_fields(patient: &PatientSafetyContext) -> Vec<CriticalField> {
    CriticalField::ALL
        .into_iter()
        .filter(|f| !f.accepts(f.value_in(patient)))
        .collect()
}

// ── Tests ────────────────────────────────────────────────────────────────────
