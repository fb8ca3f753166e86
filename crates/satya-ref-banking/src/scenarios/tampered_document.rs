//! Scenario 3: Tampered Document
//!
//! A complete upload set where the Aadhaar card carries tamper indicators
//! (font inconsistency near the date of birth). Every mandatory slot is
//! satisfied, yet the request is REJECTED: the tamper gate outranks
//! everything except missing documents, so a fraudulent upload can never be
//! approved by also uploading the rest of the checklist.

use satya_contracts::{decision::Decision, error::SatyaResult, record::DocumentSource};
use satya_core::pipeline::VerificationPipeline;
use satya_rules::RequirementRules;

use crate::mock_data::MockVisionClassifier;

fn sources() -> Vec<DocumentSource> {
    [
        "pan.jpg",
        "aadhaar_tampered.jpg",
        "photo.jpg",
        "utility_bill.pdf",
    ]
    .into_iter()
    .map(|filename| DocumentSource {
        filename: filename.to_string(),
        bytes: vec![0u8; 16],
    })
    .collect()
}

// ── Scenario runner ───────────────────────────────────────────────────────────

/// Run Scenario 3: Tampered Document — rejected despite a full slot set.
pub fn run_scenario() -> SatyaResult<()> {
    println!("=== Scenario 3: Tampered Document ===");
    println!();
    println!("  Uploads: PAN + tampered Aadhaar + Photograph + Utility bill");
    println!("  Every mandatory slot is satisfied; only the tamper flag differs");
    println!();

    let rules = RequirementRules::builtin();
    let policy = rules.policy();
    let pipeline = VerificationPipeline::new(
        Box::new(MockVisionClassifier),
        Box::new(rules),
        policy,
    );

    let result = pipeline.run("account_opening_savings", sources(), true);

    let tampered = result
        .uploads
        .iter()
        .find(|u| u.tamper_flag)
        .map(|u| u.filename.as_str())
        .unwrap_or("<none>");

    println!("  Tamper flagged upload:  {tampered}");
    println!("  Decision:               {}", result.decision.as_str());
    for reason in &result.decision_reasons {
        println!("  Reason:                 {reason}");
    }
    for action in &result.next_actions {
        println!("  Next action:            {action}");
    }

    if result.decision == Decision::Rejected {
        println!("  RESULT: REJECTED on tamper indicators (expected)");
    } else {
        println!("  Unexpected decision — tamper gate did not fire");
    }
    println!();
    println!("  Scenario 3 complete.");
    println!();

    Ok(())
}
