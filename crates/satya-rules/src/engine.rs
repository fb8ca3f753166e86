//! The requirement rules table.
//!
//! `RequirementRules` holds the immutable purpose → slot mapping and
//! implements the `RequirementResolver` trait from satya-core.
//!
//! Resolution algorithm:
//!
//! 1. Look the purpose up by exact string key, in declaration order.
//! 2. On a hit, return that purpose's slots.
//! 3. On a miss, fall back to the baseline KYC pair — a mandatory PAN slot
//!    and a mandatory Aadhaar slot. Unknown purposes never error.
//!
//! The table is constructed once (built-in or from TOML) and never mutated
//! afterwards.

use std::path::Path;

use tracing::{debug, warn};

use satya_contracts::{
    decision::DecisionPolicy,
    document::DocumentTypeId,
    error::{SatyaError, SatyaResult},
    requirement::RequirementSlot,
};
use satya_core::traits::RequirementResolver;

use crate::catalog::RulesConfig;

/// One fully validated purpose entry.
#[derive(Debug, Clone)]
struct PurposeRules {
    id: String,
    label: String,
    slots: Vec<RequirementSlot>,
}

/// The immutable purpose → requirement table.
///
/// Construct via `builtin`, `from_toml_str`, or `from_file`, then pass to
/// the pipeline as its `RequirementResolver`.
///
/// ```rust,ignore
/// use satya_rules::RequirementRules;
///
/// let rules = RequirementRules::builtin();
/// let slots = rules.resolve("account_opening_savings");
/// ```
#[derive(Debug)]
pub struct RequirementRules {
    purposes: Vec<PurposeRules>,
    policy: DecisionPolicy,
}

impl RequirementRules {
    /// The built-in banking requirement table with default thresholds.
    pub fn builtin() -> Self {
        use DocumentTypeId::*;

        let purpose = |id: &str, label: &str, slots: Vec<RequirementSlot>| PurposeRules {
            id: id.to_string(),
            label: label.to_string(),
            slots,
        };
        let mandatory = RequirementSlot::mandatory_of;
        let optional = RequirementSlot::optional_of;

        let purposes = vec![
            purpose(
                "account_opening_savings",
                "Open Savings Account",
                vec![
                    mandatory(&[Pan]),
                    mandatory(&[Aadhaar]),
                    mandatory(&[Photograph]),
                    mandatory(&[Utility, BankStatement]),
                ],
            ),
            purpose(
                "account_opening_salary",
                "Open Salary Account",
                vec![
                    mandatory(&[Pan]),
                    mandatory(&[Aadhaar]),
                    mandatory(&[Photograph]),
                    mandatory(&[SalarySlip]),
                    mandatory(&[Utility, BankStatement]),
                ],
            ),
            purpose(
                "address_update",
                "Update Address",
                vec![
                    mandatory(&[Aadhaar, Pan]),
                    mandatory(&[Utility, BankStatement]),
                ],
            ),
            purpose(
                "loan_application",
                "Loan Application",
                vec![
                    mandatory(&[Pan]),
                    mandatory(&[Aadhaar]),
                    mandatory(&[SalarySlip, Form16, Itr]),
                ],
            ),
            purpose(
                "credit_card_kyc",
                "Credit Card KYC",
                vec![
                    mandatory(&[Pan]),
                    mandatory(&[Aadhaar]),
                    // Income proof is only required above an amount threshold
                    // the core does not see; counted when present.
                    optional(&[SalarySlip, Form16]),
                ],
            ),
            purpose(
                "business_account",
                "Open Business Account",
                vec![
                    mandatory(&[Pan]),
                    mandatory(&[GstCertificate]),
                    mandatory(&[IncorporationCertificate]),
                    mandatory(&[Aadhaar]),
                ],
            ),
        ];

        Self {
            purposes,
            policy: DecisionPolicy::default(),
        }
    }

    /// Parse `s` as TOML and build a validated `RequirementRules`.
    ///
    /// Returns `SatyaError::ConfigError` if the TOML is malformed, names an
    /// unknown document type, contains an empty slot, or violates the
    /// duplicate-mandatory-type invariant.
    pub fn from_toml_str(s: &str) -> SatyaResult<Self> {
        let config: RulesConfig = toml::from_str(s).map_err(|e| SatyaError::ConfigError {
            reason: format!("failed to parse rules TOML: {}", e),
        })?;

        let mut purposes = Vec::with_capacity(config.purposes.len());
        for spec in &config.purposes {
            purposes.push(PurposeRules {
                id: spec.id.clone(),
                label: spec.label.clone(),
                slots: spec.to_slots()?,
            });
        }

        Ok(Self {
            purposes,
            policy: config.policy,
        })
    }

    /// Read the file at `path` and parse it as a rules TOML document.
    pub fn from_file(path: &Path) -> SatyaResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| SatyaError::ConfigError {
            reason: format!("failed to read rules file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    /// The decision thresholds configured alongside the table.
    pub fn policy(&self) -> DecisionPolicy {
        self.policy
    }

    /// All configured purpose keys, in declaration order.
    pub fn known_purposes(&self) -> impl Iterator<Item = &str> {
        self.purposes.iter().map(|p| p.id.as_str())
    }

    /// The baseline KYC fallback for unknown purposes.
    fn fallback_slots() -> Vec<RequirementSlot> {
        vec![
            RequirementSlot::mandatory_of(&[DocumentTypeId::Pan]),
            RequirementSlot::mandatory_of(&[DocumentTypeId::Aadhaar]),
        ]
    }
}

impl Default for RequirementRules {
    fn default() -> Self {
        Self::builtin()
    }
}

impl RequirementResolver for RequirementRules {
    /// Resolve the slots for `purpose` by exact key, falling back to the
    /// baseline KYC pair for unknown purposes. Never fails.
    fn resolve(&self, purpose: &str) -> Vec<RequirementSlot> {
        if let Some(entry) = self.purposes.iter().find(|p| p.id == purpose) {
            debug!(purpose, slots = entry.slots.len(), "requirements resolved");
            return entry.slots.clone();
        }

        warn!(purpose, "unknown purpose; falling back to baseline KYC requirements");
        Self::fallback_slots()
    }

    /// Fixed label for known purposes; separator-to-space title-casing for
    /// everything else. Never fails.
    fn display_label(&self, purpose: &str) -> String {
        if let Some(entry) = self.purposes.iter().find(|p| p.id == purpose) {
            return entry.label.clone();
        }

        purpose
            .split(['_', '-', ' '])
            .filter(|word| !word.is_empty())
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => {
                        first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                    }
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
