//! Result assembly: the final packaging stage.
//!
//! The assembler copies everything upstream components produced into one
//! immutable `VerificationResult`. Its only business rule is the consent
//! gate: without consent, extracted field values must not leave the runtime
//! — records degrade to redacted placeholders before the result is built.

use chrono::Utc;
use tracing::{debug, warn};

use satya_audit::{AuditStage, AuditTrail};
use satya_contracts::{
    checks::CrossCheckResult,
    decision::DecisionOutcome,
    fields::REDACTED_PLACEHOLDER,
    record::DocumentRecord,
    requirement::RequirementSlot,
    result::{consent_guard, RequestId, VerificationResult},
};

/// Version identifier written into every result's audit block.
pub const AGENT_VERSION: &str = concat!("satya/", env!("CARGO_PKG_VERSION"));

/// Assemble the immutable result for one verification request.
///
/// The timestamp is captured here; together with the request id minted at
/// intake it is the only non-deterministic input of the pipeline. When
/// `consent_received` is false and any upload carries extracted field
/// values, those values are degraded to redacted placeholders — the consent
/// gate governs exposure, not collection.
#[allow(clippy::too_many_arguments)]
pub fn assemble(
    request_id: RequestId,
    purpose: &str,
    required_documents: Vec<RequirementSlot>,
    mut uploads: Vec<DocumentRecord>,
    cross_checks: CrossCheckResult,
    outcome: DecisionOutcome,
    consent_received: bool,
    trail: &AuditTrail,
) -> VerificationResult {
    if !consent_received && uploads.iter().any(|u| u.extracted_fields.has_pii()) {
        for upload in &mut uploads {
            upload.extracted_fields = upload.extracted_fields.redacted();
            if !upload.text_snippet.is_empty() {
                upload.text_snippet = REDACTED_PLACEHOLDER.to_string();
            }
        }
        record_or_warn(
            trail,
            "consent absent; extracted fields redacted before assembly",
        );
    }

    record_or_warn(trail, "verification result assembled");

    let DecisionOutcome {
        decision,
        reasons,
        next_actions,
        escalate_to_human,
        human_escalation_reason,
    } = outcome;

    let result = VerificationResult {
        request_id,
        timestamp: Utc::now(),
        purpose: purpose.to_string(),
        required_documents,
        uploads,
        cross_checks,
        decision,
        decision_reasons: reasons,
        next_actions,
        audit: trail.to_audit(AGENT_VERSION, consent_received),
        escalate_to_human,
        human_escalation_reason,
    };

    debug_assert!(
        consent_guard(&result).is_ok(),
        "assembled result must pass the consent guard"
    );
    debug!(
        request_id = %result.request_id.0,
        decision = result.decision.as_str(),
        "result assembled"
    );

    result
}

fn record_or_warn(trail: &AuditTrail, message: &str) {
    if let Err(e) = trail.record(AuditStage::Assembly, message) {
        warn!(error = %e, "audit record failed during assembly");
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
