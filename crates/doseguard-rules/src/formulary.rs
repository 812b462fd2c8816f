//! The DOAC formulary: per-drug renal safety thresholds.
//!
//! An immutable table constructed once at process start — either the
//! built-in `Formulary::standard()` or a TOML document loaded via
//! `from_toml_str`/`from_file` — and passed by reference into the
//! evaluator. Lookup is case-insensitive and O(1).

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use doseguard_contracts::error::{SafetyError, SafetyResult};

/// One drug's renal safety rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrugRule {
    /// Canonical drug name, lowercase.
    pub name: String,
    /// Display name used in rationales (e.g. "Rivaroxaban").
    pub display_name: String,
    /// Creatinine clearance below which the drug is contraindicated, mL/min.
    pub crcl_cutoff: f64,
    /// Stable rule identifier used in verdicts, overrides, and audit records.
    pub rule_id: String,
    /// Regulatory or peer-reviewed source behind the cutoff.
    pub citation_url: String,
}

/// The top-level structure deserialized from a formulary TOML file.
///
/// Example:
/// ```toml
/// [[drugs]]
/// name = "rivaroxaban"
/// display_name = "Rivaroxaban"
/// crcl_cutoff = 15.0
/// rule_id = "DOAC-CrCl-Rivaroxaban-001"
/// citation_url = "https://www.accessdata.fda.gov/drugsatfda_docs/label/2022/022406s036lbl.pdf"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormularyConfig {
    /// The drug entries. Names must be unique case-insensitively.
    pub drugs: Vec<DrugRule>,
}

/// The immutable per-drug threshold table the evaluator consults.
#[derive(Debug, Clone)]
pub struct Formulary {
    drugs: HashMap<String, DrugRule>,
}

impl Formulary {
    /// The built-in DOAC formulary.
    ///
    /// Rivaroxaban, apixaban, and edoxaban share the 15 mL/min cutoff;
    /// dabigatran is renally cleared more heavily and carries a stricter
    /// 30 mL/min cutoff.
    pub fn standard() -> Self {
        let entries = [
            DrugRule {
                name: "rivaroxaban".to_string(),
                display_name: "Rivaroxaban".to_string(),
                crcl_cutoff: 15.0,
                rule_id: "DOAC-CrCl-Rivaroxaban-001".to_string(),
                citation_url:
                    "https://www.accessdata.fda.gov/drugsatfda_docs/label/2022/022406s036lbl.pdf"
                        .to_string(),
            },
            DrugRule {
                name: "apixaban".to_string(),
                display_name: "Apixaban".to_string(),
                crcl_cutoff: 15.0,
                rule_id: "DOAC-CrCl-Apixaban-001".to_string(),
                citation_url:
                    "https://www.accessdata.fda.gov/drugsatfda_docs/label/2021/202155s032lbl.pdf"
                        .to_string(),
            },
            DrugRule {
                name: "edoxaban".to_string(),
                display_name: "Edoxaban".to_string(),
                crcl_cutoff: 15.0,
                rule_id: "DOAC-CrCl-Edoxaban-001".to_string(),
                citation_url:
                    "https://www.accessdata.fda.gov/drugsatfda_docs/label/2015/206316lbl.pdf"
                        .to_string(),
            },
            DrugRule {
                name: "dabigatran".to_string(),
                display_name: "Dabigatran".to_string(),
                crcl_cutoff: 30.0,
                rule_id: "DOAC-CrCl-Dabigatran-001".to_string(),
                citation_url:
                    "https://www.accessdata.fda.gov/drugsatfda_docs/label/2021/022512s041lbl.pdf"
                        .to_string(),
            },
        ];

        Self {
            drugs: entries
                .into_iter()
                .map(|rule| (rule.name.clone(), rule))
                .collect(),
        }
    }

    /// Parse `s` as TOML and build a `Formulary`.
    ///
    /// Returns `SafetyError::ConfigError` if the TOML is malformed, an
    /// entry carries a non-positive cutoff, or two entries share a name.
    pub fn from_toml_str(s: &str) -> SafetyResult<Self> {
        let config: FormularyConfig = toml::from_str(s).map_err(|e| SafetyError::ConfigError {
            reason: format!("failed to parse formulary TOML: {}", e),
        })?;
        Self::from_config(config)
    }

    /// Read the file at `path` and parse it as a formulary TOML document.
    pub fn from_file(path: &Path) -> SafetyResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| SafetyError::ConfigError {
            reason: format!("failed to read formulary file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    fn from_config(config: FormularyConfig) -> SafetyResult<Self> {
        let mut drugs = HashMap::new();
        for rule in config.drugs {
            if rule.crcl_cutoff.is_nan() || rule.crcl_cutoff <= 0.0 {
                return Err(SafetyError::ConfigError {
                    reason: format!(
                        "drug '{}' has non-positive CrCl cutoff {}",
                        rule.name, rule.crcl_cutoff
                    ),
                });
            }
            let key = rule.name.to_lowercase();
            if drugs.insert(key, rule.clone()).is_some() {
                return Err(SafetyError::ConfigError {
                    reason: format!("duplicate formulary entry for '{}'", rule.name),
                });
            }
        }
        Ok(Self { drugs })
    }

    /// Look up a medication, case-insensitively.
    pub fn lookup(&self, medication: &str) -> Option<&DrugRule> {
        self.drugs.get(&medication.trim().to_lowercase())
    }

    /// Number of drugs in the table.
    pub fn len(&self) -> usize {
        self.drugs.len()
    }

    /// True when the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.drugs.is_empty()
    }
}
