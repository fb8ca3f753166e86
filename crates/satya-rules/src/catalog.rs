//! Rules configuration schema.
//!
//! A `RulesConfig` is deserialized from TOML and holds an ordered list of
//! purposes, each with its ordered requirement slots, plus optional decision
//! thresholds. Document types are written as their wire labels; a label the
//! catalog does not know is a configuration error, not a silent `Other` —
//! only runtime classifier output degrades.
//!
//! Example:
//! ```toml
//! [policy]
//! low_confidence_threshold = 50
//! face_match_threshold = 60
//!
//! [[purposes]]
//! id = "account_opening_savings"
//! label = "Open Savings Account"
//!
//! [[purposes.slots]]
//! alternatives = ["PAN"]
//!
//! [[purposes.slots]]
//! alternatives = ["Utility", "BankStatement"]
//! ```

use serde::{Deserialize, Serialize};

use satya_contracts::{
    decision::DecisionPolicy,
    document::DocumentTypeId,
    error::{SatyaError, SatyaResult},
    requirement::RequirementSlot,
};

/// The top-level structure deserialized from a rules TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Decision thresholds; defaults apply when the table is omitted.
    #[serde(default)]
    pub policy: DecisionPolicy,

    /// Ordered purpose definitions.
    #[serde(default)]
    pub purposes: Vec<PurposeSpec>,
}

/// One purpose definition in the rules file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurposeSpec {
    /// Exact lookup key, e.g. `account_opening_savings`.
    pub id: String,

    /// Fixed human-readable label for the purpose.
    pub label: String,

    /// Ordered requirement slots.
    pub slots: Vec<SlotSpec>,
}

/// One requirement slot in the rules file.
///
/// `alternatives` holds document-type wire labels; more than one entry makes
/// the slot an OR-group. Slots are mandatory unless marked otherwise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotSpec {
    /// Document-type labels, any one of which fulfills the slot.
    pub alternatives: Vec<String>,

    /// Defaults to true; set false for soft slots.
    #[serde(default = "default_mandatory")]
    pub mandatory: bool,
}

fn default_mandatory() -> bool {
    true
}

impl SlotSpec {
    /// Convert to a typed slot, validating every label against the catalog.
    pub fn to_slot(&self, purpose_id: &str) -> SatyaResult<RequirementSlot> {
        if self.alternatives.is_empty() {
            return Err(SatyaError::ConfigError {
                reason: format!("purpose '{purpose_id}' has a slot with no alternatives"),
            });
        }

        let mut alternatives = Vec::with_capacity(self.alternatives.len());
        for label in &self.alternatives {
            let doc_type = DocumentTypeId::try_from_label(label).ok_or_else(|| {
                SatyaError::ConfigError {
                    reason: format!("unknown document type '{label}' in purpose '{purpose_id}'"),
                }
            })?;
            if alternatives.contains(&doc_type) {
                return Err(SatyaError::ConfigError {
                    reason: format!(
                        "duplicate alternative '{label}' in a slot of purpose '{purpose_id}'"
                    ),
                });
            }
            alternatives.push(doc_type);
        }

        Ok(RequirementSlot {
            alternatives,
            mandatory: self.mandatory,
        })
    }
}

impl PurposeSpec {
    /// Convert every slot, then check the cross-slot invariant: no document
    /// type may appear in more than one mandatory slot of the same purpose.
    pub fn to_slots(&self) -> SatyaResult<Vec<RequirementSlot>> {
        let slots: Vec<RequirementSlot> = self
            .slots
            .iter()
            .map(|s| s.to_slot(&self.id))
            .collect::<SatyaResult<_>>()?;

        let mut seen_mandatory: Vec<DocumentTypeId> = Vec::new();
        for slot in slots.iter().filter(|s| s.mandatory) {
            for doc_type in &slot.alternatives {
                if seen_mandatory.contains(doc_type) {
                    return Err(SatyaError::ConfigError {
                        reason: format!(
                            "document type '{}' appears in more than one mandatory slot of purpose '{}'",
                            doc_type, self.id
                        ),
                    });
                }
                seen_mandatory.push(*doc_type);
            }
        }

        Ok(slots)
    }
}
