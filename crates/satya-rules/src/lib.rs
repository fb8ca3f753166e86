//! # satya-rules
//!
//! The TOML-driven purpose → requirement table for the SATYA runtime.
//!
//! ## Overview
//!
//! This crate provides [`RequirementRules`], which implements the
//! [`RequirementResolver`](satya_core::traits::RequirementResolver) trait.
//! The table maps a purpose key to its ordered requirement slots; OR-groups
//! are single slots with several alternatives. Lookup is by exact string
//! key, and an unknown purpose falls back to the baseline KYC pair (PAN +
//! Aadhaar) rather than failing.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use satya_rules::RequirementRules;
//!
//! // The built-in banking table:
//! let rules = RequirementRules::builtin();
//!
//! // Or an operator-supplied table:
//! let rules = RequirementRules::from_file(Path::new("rules/banking.toml"))?;
//! ```

pub mod catalog;
pub mod engine;

pub use catalog::{PurposeSpec, RulesConfig, SlotSpec};
pub use engine::RequirementRules;

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use satya_contracts::{
        document::DocumentTypeId, error::SatyaError, requirement::RequirementSlot,
    };
    use satya_core::traits::RequirementResolver;

    use crate::RequirementRules;

    // ── 1. built-in table invariants ──────────────────────────────────────────

    /// Every known purpose resolves to a non-empty slot list, and no document
    /// type appears in more than one mandatory slot of the same purpose.
    #[test]
    fn test_builtin_table_invariants() {
        let rules = RequirementRules::builtin();
        let purposes: Vec<String> = rules.known_purposes().map(str::to_string).collect();
        assert_eq!(purposes.len(), 6);

        for purpose in &purposes {
            let slots = rules.resolve(purpose);
            assert!(!slots.is_empty(), "purpose '{purpose}' has no slots");

            let mut seen_mandatory: HashSet<DocumentTypeId> = HashSet::new();
            for slot in slots.iter().filter(|s| s.mandatory) {
                assert!(!slot.alternatives.is_empty());
                for doc_type in &slot.alternatives {
                    assert!(
                        seen_mandatory.insert(*doc_type),
                        "'{doc_type}' duplicated across mandatory slots of '{purpose}'"
                    );
                }
            }
        }
    }

    // ── 2. known purpose resolution ───────────────────────────────────────────

    /// The savings purpose resolves to its exact slot list, in order.
    #[test]
    fn test_savings_purpose_slots() {
        let rules = RequirementRules::builtin();
        let slots = rules.resolve("account_opening_savings");

        assert_eq!(
            slots,
            vec![
                RequirementSlot::mandatory_of(&[DocumentTypeId::Pan]),
                RequirementSlot::mandatory_of(&[DocumentTypeId::Aadhaar]),
                RequirementSlot::mandatory_of(&[DocumentTypeId::Photograph]),
                RequirementSlot::mandatory_of(&[
                    DocumentTypeId::Utility,
                    DocumentTypeId::BankStatement,
                ]),
            ]
        );
    }

    /// The income-proof slot of credit_card_kyc is soft, not blocking.
    #[test]
    fn test_credit_card_income_proof_is_soft() {
        let rules = RequirementRules::builtin();
        let slots = rules.resolve("credit_card_kyc");

        let income = slots
            .iter()
            .find(|s| s.accepts(DocumentTypeId::SalarySlip))
            .expect("credit_card_kyc must list an income-proof slot");
        assert!(!income.mandatory);
    }

    // ── 3. unknown purpose fallback ───────────────────────────────────────────

    /// An unknown purpose resolves to exactly the two-slot PAN + Aadhaar
    /// fallback and never fails.
    #[test]
    fn test_unknown_purpose_falls_back_to_baseline_kyc() {
        let rules = RequirementRules::builtin();
        let slots = rules.resolve("crypto_custody_onboarding");

        assert_eq!(
            slots,
            vec![
                RequirementSlot::mandatory_of(&[DocumentTypeId::Pan]),
                RequirementSlot::mandatory_of(&[DocumentTypeId::Aadhaar]),
            ]
        );
    }

    // ── 4. display labels ─────────────────────────────────────────────────────

    /// Known purposes map to their fixed phrases.
    #[test]
    fn test_known_purpose_labels() {
        let rules = RequirementRules::builtin();
        assert_eq!(rules.display_label("account_opening_savings"), "Open Savings Account");
        assert_eq!(rules.display_label("address_update"), "Update Address");
        assert_eq!(rules.display_label("business_account"), "Open Business Account");
    }

    /// Unknown purposes derive a title-cased label from the key.
    #[test]
    fn test_unknown_purpose_label_derivation() {
        let rules = RequirementRules::builtin();
        assert_eq!(rules.display_label("new_home_loan"), "New Home Loan");
        assert_eq!(rules.display_label("fixed-deposit_renewal"), "Fixed Deposit Renewal");
        assert_eq!(rules.display_label("NRI_account"), "Nri Account");
        assert_eq!(rules.display_label(""), "");
    }

    // ── 5. TOML loading ───────────────────────────────────────────────────────

    /// A valid TOML table resolves its purposes and carries its thresholds.
    #[test]
    fn test_toml_table_loads() {
        let toml = r#"
            [policy]
            low_confidence_threshold = 65
            face_match_threshold = 75

            [[purposes]]
            id = "locker_allocation"
            label = "Allocate Safe Deposit Locker"

            [[purposes.slots]]
            alternatives = ["Aadhaar", "Passport"]

            [[purposes.slots]]
            alternatives = ["Photograph"]
            mandatory = false
        "#;

        let rules = RequirementRules::from_toml_str(toml).unwrap();

        assert_eq!(rules.policy().low_confidence_threshold, 65);
        assert_eq!(rules.policy().face_match_threshold, 75);

        let slots = rules.resolve("locker_allocation");
        assert_eq!(slots.len(), 2);
        assert!(slots[0].mandatory);
        assert!(slots[0].accepts(DocumentTypeId::Passport));
        assert!(!slots[1].mandatory);

        assert_eq!(rules.display_label("locker_allocation"), "Allocate Safe Deposit Locker");
    }

    /// Omitting the policy table leaves the default thresholds in place.
    #[test]
    fn test_toml_policy_defaults() {
        let rules = RequirementRules::from_toml_str("purposes = []").unwrap();
        assert_eq!(rules.policy().low_confidence_threshold, 50);
        assert_eq!(rules.policy().face_match_threshold, 60);
    }

    // ── 6. TOML validation errors ─────────────────────────────────────────────

    /// Malformed TOML must produce a `SatyaError::ConfigError`.
    #[test]
    fn test_toml_parse_error() {
        let bad_toml = r#"
            this is not valid toml ][[[
        "#;

        match RequirementRules::from_toml_str(bad_toml) {
            Err(SatyaError::ConfigError { reason }) => {
                assert!(
                    reason.contains("failed to parse rules TOML"),
                    "expected parse error message, got: {reason}"
                );
            }
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }

    /// A document label outside the catalog is a configuration error.
    #[test]
    fn test_toml_unknown_document_type() {
        let toml = r#"
            [[purposes]]
            id = "p"
            label = "P"

            [[purposes.slots]]
            alternatives = ["RationCard"]
        "#;

        match RequirementRules::from_toml_str(toml) {
            Err(SatyaError::ConfigError { reason }) => {
                assert!(reason.contains("RationCard"), "unexpected reason: {reason}");
            }
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }

    /// A slot with no alternatives violates the non-empty invariant.
    #[test]
    fn test_toml_empty_alternatives() {
        let toml = r#"
            [[purposes]]
            id = "p"
            label = "P"

            [[purposes.slots]]
            alternatives = []
        "#;

        match RequirementRules::from_toml_str(toml) {
            Err(SatyaError::ConfigError { reason }) => {
                assert!(reason.contains("no alternatives"), "unexpected reason: {reason}");
            }
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }

    /// A type repeated across two mandatory slots of one purpose is rejected.
    #[test]
    fn test_toml_duplicate_mandatory_type() {
        let toml = r#"
            [[purposes]]
            id = "p"
            label = "P"

            [[purposes.slots]]
            alternatives = ["PAN"]

            [[purposes.slots]]
            alternatives = ["PAN", "Aadhaar"]
        "#;

        match RequirementRules::from_toml_str(toml) {
            Err(SatyaError::ConfigError { reason }) => {
                assert!(
                    reason.contains("more than one mandatory slot"),
                    "unexpected reason: {reason}"
                );
            }
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }

    /// The same type in a mandatory and a soft slot is allowed — the
    /// invariant binds mandatory slots only.
    #[test]
    fn test_toml_soft_slot_may_repeat_a_type() {
        let toml = r#"
            [[purposes]]
            id = "p"
            label = "P"

            [[purposes.slots]]
            alternatives = ["PAN"]

            [[purposes.slots]]
            alternatives = ["PAN"]
            mandatory = false
        "#;

        assert!(RequirementRules::from_toml_str(toml).is_ok());
    }
}
