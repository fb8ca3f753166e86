//! Scenario 1: Savings Account Opening
//!
//! The happy path: a complete, consistent upload set for
//! `account_opening_savings` is classified, cross-checked, and APPROVED.
//!
//! Pipeline walk-through for the demo run:
//!   1. Requirement rules resolve four slots (PAN, Aadhaar, Photograph,
//!      Utility|BankStatement) from the embedded banking rules TOML
//!   2. All four uploads classify concurrently against the mock classifier
//!   3. Cross-check: names agree after normalization ("ASHA  KUMAR." on the
//!      bill ≡ "Asha Kumar" on the cards), face match requested because a
//!      photograph and an identity document are both present
//!   4. Decision engine: every mandatory slot satisfied, no tamper, no
//!      quality concern → APPROVED
//!   5. Sub-case B repeats the request without consent: the assembled result
//!      carries only redacted field values
//!
//! Sub-case A also prints the full result JSON, showing the external output
//! contract end to end.

use satya_contracts::{error::SatyaResult, record::DocumentSource, result::consent_guard};
use satya_core::pipeline::VerificationPipeline;
use satya_rules::RequirementRules;

use crate::mock_data::MockVisionClassifier;

// ── Rules TOML ────────────────────────────────────────────────────────────────

/// Embedded banking rules covering all demo purposes.
const BANKING_RULES: &str = include_str!("../../rules/banking.toml");

fn sources() -> Vec<DocumentSource> {
    ["pan.jpg", "aadhaar.jpg", "photo.jpg", "utility_bill.pdf"]
        .into_iter()
        .map(|filename| DocumentSource {
            filename: filename.to_string(),
            bytes: vec![0u8; 16],
        })
        .collect()
}

// ── Scenario runner ───────────────────────────────────────────────────────────

/// Run Scenario 1: Savings Account Opening — approved, then redacted.
pub fn run_scenario() -> SatyaResult<()> {
    println!("=== Scenario 1: Savings Account Opening ===");
    println!();

    let rules = RequirementRules::from_toml_str(BANKING_RULES)?;
    let policy = rules.policy();
    let pipeline = VerificationPipeline::new(
        Box::new(MockVisionClassifier),
        Box::new(rules),
        policy,
    );

    // ── Sub-case A: full upload set, consent granted ─────────────────────────

    {
        println!("  Sub-case A: PAN + Aadhaar + Photograph + Utility bill, consent granted");

        let result = pipeline.run("account_opening_savings", sources(), true);

        println!("  Required slots:         {}", result.required_documents.len());
        for slot in &result.required_documents {
            let marker = if slot.mandatory { "MANDATORY" } else { "OPTIONAL" };
            println!("    - {:<32} {}", slot.describe(), marker);
        }
        println!("  Uploads classified:     {}", result.uploads.len());
        println!(
            "  Cross-checks:           name={} dob={} face={:?}",
            result.cross_checks.name_consistency.as_str(),
            result.cross_checks.dob_consistency.as_str(),
            result.cross_checks.face_match_score
        );
        println!("  Decision:               {}", result.decision.as_str());
        println!("  Reasons:                {}", result.decision_reasons.join("; "));
        println!("  Escalate to human:      {}", result.escalate_to_human);
        println!("  Audit log lines:        {}", result.audit.logs.len());
        println!();
        println!("  Result JSON:");
        match serde_json::to_string_pretty(&result) {
            Ok(json) => {
                for line in json.lines() {
                    println!("    {line}");
                }
            }
            Err(e) => println!("    <serialization error: {e}>"),
        }
        println!();
        println!("  RESULT: APPROVED (expected)");
        println!();
    }

    // ── Sub-case B: same uploads, consent withheld ───────────────────────────

    {
        println!("  Sub-case B: identical uploads, consent withheld");

        let result = pipeline.run("account_opening_savings", sources(), false);

        let pan = result
            .uploads
            .iter()
            .find(|u| u.filename == "pan.jpg")
            .expect("pan.jpg must be in the result");

        println!("  Decision:               {}", result.decision.as_str());
        println!(
            "  PAN name field:         {:?}",
            pan.extracted_fields.name.as_deref()
        );
        println!(
            "  Consent guard:          {}",
            if consent_guard(&result).is_ok() { "PASS" } else { "FAIL" }
        );
        println!("  RESULT: redacted result (expected)");
        println!();
    }

    println!("  Scenario 1 complete.");
    println!();

    Ok(())
}
