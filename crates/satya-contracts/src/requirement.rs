//! Requirement slots: one checklist entry in a purpose's document list.

use serde::{Deserialize, Serialize};

use crate::document::DocumentTypeId;

/// One verification requirement for a purpose.
///
/// A slot with a single alternative is a plain "this document" requirement;
/// a slot with several alternatives is an OR-group satisfied by any one of
/// them. The alternatives list is never empty — rules loading enforces this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementSlot {
    /// Acceptable document types, any one of which fulfills the slot.
    pub alternatives: Vec<DocumentTypeId>,
    /// If true, at least one alternative must be present among the uploads.
    pub mandatory: bool,
}

impl RequirementSlot {
    /// A mandatory slot over the given alternatives.
    pub fn mandatory_of(alternatives: &[DocumentTypeId]) -> Self {
        Self {
            alternatives: alternatives.to_vec(),
            mandatory: true,
        }
    }

    /// A soft slot: counted when present, never blocking when absent.
    pub fn optional_of(alternatives: &[DocumentTypeId]) -> Self {
        Self {
            alternatives: alternatives.to_vec(),
            mandatory: false,
        }
    }

    /// True if a document of type `t` fulfills this slot.
    pub fn accepts(&self, t: DocumentTypeId) -> bool {
        self.alternatives.contains(&t)
    }

    /// Human-readable description: "PAN" or "one of Utility/BankStatement".
    pub fn describe(&self) -> String {
        match self.alternatives.as_slice() {
            [single] => single.as_label().to_string(),
            many => format!(
                "one of {}",
                many.iter()
                    .map(|t| t.as_label())
                    .collect::<Vec<_>>()
                    .join("/")
            ),
        }
    }
}
