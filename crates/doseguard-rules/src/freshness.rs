//! Lab freshness checking.
//!
//! Renal labs older than the freshness window cannot back a DOAC
//! evaluation — the attestation gate converts staleness into a human
//! attestation requirement. Absence of a timestamp is treated as
//! maximally stale, not as unknown.

use chrono::{DateTime, Utc};

use doseguard_contracts::context::LabTimestamp;

/// The freshness window for renal labs, in hours.
///
/// Strictly-greater comparison: labs exactly this old are still fresh —
/// the tie-break favors availability.
pub const LAB_FRESHNESS_LIMIT_HOURS: f64 = 72.0;

/// The freshness verdict for one lab timestamp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabFreshness {
    /// Whether the labs are too old to back an evaluation.
    pub is_stale: bool,
    /// Lab age in hours. `f64::INFINITY` when no timestamp exists or the
    /// supplied string form does not parse.
    pub age_hours: f64,
}

/// Check lab freshness against the current wall clock.
pub fn check_lab_freshness(timestamp: Option<&LabTimestamp>) -> LabFreshness {
    check_lab_freshness_at(timestamp, Utc::now())
}

/// Check lab freshness against an explicit `now`.
///
/// Split out so tests can pin the clock; production callers use
/// `check_lab_freshness`.
pub fn check_lab_freshness_at(
    timestamp: Option<&LabTimestamp>,
    now: DateTime<Utc>,
) -> LabFreshness {
    let Some(drawn_at) = timestamp.and_then(LabTimestamp::resolve) else {
        return LabFreshness {
            is_stale: true,
            age_hours: f64::INFINITY,
        };
    };

    let age_hours = (now - drawn_at).num_milliseconds() as f64 / 3_600_000.0;

    LabFreshness {
        is_stale: age_hours > LAB_FRESHNESS_LIMIT_HOURS,
        age_hours,
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
