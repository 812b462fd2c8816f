//! # doseguard-rules
//!
//! The rule-engine crate of the doseguard medication safety subsystem:
//! lab freshness, critical field validation, the attestation gate, the
//! DOAC formulary, and the [`DoacRuleEngine`] evaluator.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use doseguard_rules::{DoacRuleEngine, Formulary};
//!
//! let engine = DoacRuleEngine::new(Formulary::standard());
//! let result = engine.evaluate(&request);
//! ```
//!
//! ## Evaluation order
//!
//! The attestation gate runs first: missing or stale inputs terminate
//! the evaluation before any drug rule is consulted. Only complete,
//! fresh contexts reach the renal cutoff and caution rules.

pub mod attestation;
pub mod evaluator;
pub mod fields;
pub mod formulary;
pub mod freshness;

pub use attestation::check_attestation;
pub use evaluator::DoacRuleEngine;
pub use fields::{failing_critical_fields, validate_critical_field, CriticalField};
pub use formulary::{DrugRule, Formulary, FormularyConfig};
pub use freshness::{check_lab_freshness, LabFreshness, LAB_FRESHNESS_LIMIT_HOURS};

// ── Tests ─────────────────────────────────────────────────────────────────────
