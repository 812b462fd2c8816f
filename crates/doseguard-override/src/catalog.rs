//! The reason-code catalog.
//!
//! A public, enumerable description of the closed override taxonomy so
//! any caller — UI, CLI, another service — can render the choice set
//! without hard-coding it twice. Constructed once at process start and
//! passed by reference.

use serde::Serialize;

use doseguard_contracts::overrides::ReasonCode;

/// Everything a caller needs to render and enforce one reason code.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReasonCodeInfo {
    /// The code itself.
    pub code: ReasonCode,
    /// Short display label.
    pub label: &'static str,
    /// One-sentence description for pickers and tooltips.
    pub description: &'static str,
    /// Whether free-text clinical notes are mandatory for this code.
    pub requires_documentation: bool,
    /// Whether submitting under this code should be routed to the chief
    /// medical officer for review. Advisory — never blocks validity.
    pub cmo_review: bool,
}

/// The immutable catalog of override reason codes.
#[derive(Debug, Clone)]
pub struct ReasonCodeCatalog {
    entries: Vec<ReasonCodeInfo>,
}

impl ReasonCodeCatalog {
    /// The standard clinical catalog.
    pub fn standard() -> Self {
        Self {
            entries: vec![
                ReasonCodeInfo {
                    code: ReasonCode::ClinicalJudgmentPalliativeCare,
                    label: "Clinical judgment — palliative care",
                    description:
                        "Goals-of-care decision in a palliative context outweighs the rule",
                    requires_documentation: true,
                    cmo_review: true,
                },
                ReasonCodeInfo {
                    code: ReasonCode::PatientDeclinedAlternative,
                    label: "Patient declined alternative",
                    description: "The patient declined the safer alternative regimen",
                    requires_documentation: false,
                    cmo_review: false,
                },
                ReasonCodeInfo {
                    code: ReasonCode::ContraindicationUnavoidable,
                    label: "Contraindication unavoidable",
                    description: "Every alternative regimen carries its own contraindication",
                    requires_documentation: false,
                    cmo_review: false,
                },
                ReasonCodeInfo {
                    code: ReasonCode::TimeCriticalEmergency,
                    label: "Time-critical emergency",
                    description: "Emergency treatment where delay is the greater risk",
                    requires_documentation: false,
                    cmo_review: false,
                },
                ReasonCodeInfo {
                    code: ReasonCode::DocumentedTolerance,
                    label: "Documented tolerance",
                    description: "The patient has documented tolerance of this regimen",
                    requires_documentation: false,
                    cmo_review: false,
                },
                ReasonCodeInfo {
                    code: ReasonCode::OtherDocumented,
                    label: "Other (documented)",
                    description: "Another clinical justification, documented in notes",
                    requires_documentation: true,
                    cmo_review: false,
                },
            ],
        }
    }

    /// Look up the catalog entry for a code.
    pub fn get(&self, code: ReasonCode) -> Option<&ReasonCodeInfo> {
        self.entries.iter().find(|info| info.code == code)
    }

    /// All entries, in presentation order.
    pub fn all(&self) -> &[ReasonCodeInfo] {
        &self.entries
    }
}

impl Default for ReasonCodeCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

/// The enumerable catalog interface for callers rendering the choice set.
pub fn available_reason_codes() -> Vec<ReasonCodeInfo> {
    ReasonCodeCatalog::standard().all().to_vec()
}

// ── Tests ────────────────────────────────────────────────────────────────────
