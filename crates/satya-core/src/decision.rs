//! The decision engine: fold slot satisfaction, quality signals, and
//! cross-check results into one verdict.
//!
//! Priority order, first terminal branch wins:
//!
//!   1. missing mandatory slot  → REJECTED
//!   2. tamper flag on a relevant upload → REJECTED
//!   3. identity mismatch across documents → REVIEW_REQUIRED + escalation
//!   4. quality concern (low confidence / low face score) → REVIEW_REQUIRED
//!   5. otherwise → APPROVED
//!
//! Once a branch fires, lower-priority branches are not reported. The
//! function is pure and deterministic: identical inputs yield an identical
//! decision, reason order, and escalation outcome.

use tracing::debug;

use satya_contracts::{
    checks::{ConsistencyStatus, CrossCheckResult},
    decision::{Decision, DecisionOutcome, DecisionPolicy},
    record::{DocumentRecord, UploadId},
    requirement::RequirementSlot,
};

/// Per-slot satisfaction: which upload, if any, fulfills the slot.
#[derive(Debug, Clone)]
pub struct SlotSatisfaction {
    /// The requirement slot being tracked.
    pub slot: RequirementSlot,
    /// The first upload (in upload order) whose detected type the slot
    /// accepts, or `None` when the slot is unfulfilled.
    pub satisfied_by: Option<UploadId>,
}

/// Match every slot against the uploads, in slot order.
pub fn satisfaction(
    slots: &[RequirementSlot],
    uploads: &[DocumentRecord],
) -> Vec<SlotSatisfaction> {
    slots
        .iter()
        .map(|slot| SlotSatisfaction {
            slot: slot.clone(),
            satisfied_by: uploads
                .iter()
                .find(|u| slot.accepts(u.detected_type))
                .map(|u| u.upload_id),
        })
        .collect()
}

/// Decide the verdict for one verification request.
pub fn decide(
    slots: &[RequirementSlot],
    uploads: &[DocumentRecord],
    cross_checks: &CrossCheckResult,
    policy: &DecisionPolicy,
) -> DecisionOutcome {
    let satisfied = satisfaction(slots, uploads);

    let missing: Vec<&RequirementSlot> = satisfied
        .iter()
        .filter(|s| s.slot.mandatory && s.satisfied_by.is_none())
        .map(|s| &s.slot)
        .collect();

    // Uploads that fulfill at least one slot; quality gates apply to these.
    let relevant: Vec<&DocumentRecord> = uploads
        .iter()
        .filter(|u| slots.iter().any(|s| s.accepts(u.detected_type)))
        .collect();

    let tampered: Vec<&DocumentRecord> =
        relevant.iter().copied().filter(|u| u.tamper_flag).collect();

    let low_confidence: Vec<&DocumentRecord> = relevant
        .iter()
        .copied()
        .filter(|u| u.confidence < policy.low_confidence_threshold)
        .collect();

    let low_face_score = cross_checks
        .face_match_score
        .filter(|score| *score < policy.face_match_threshold);

    // The mismatch gate only fires for identity documents: at least two must
    // be present for the contradiction to concern identity.
    let identity_uploads = uploads
        .iter()
        .filter(|u| u.detected_type.is_identity())
        .count();
    let field_mismatch = cross_checks.name_consistency == ConsistencyStatus::Mismatch
        || cross_checks.dob_consistency == ConsistencyStatus::Mismatch;
    let identity_mismatch = field_mismatch && identity_uploads >= 2;

    debug!(
        missing = missing.len(),
        tampered = tampered.len(),
        low_confidence = low_confidence.len(),
        identity_mismatch,
        "decision gates evaluated"
    );

    if !missing.is_empty() {
        let listed = missing
            .iter()
            .map(|s| s.describe())
            .collect::<Vec<_>>()
            .join(", ");
        return DecisionOutcome {
            decision: Decision::Rejected,
            reasons: vec![format!("missing mandatory document(s): {listed}")],
            next_actions: missing
                .iter()
                .map(|s| format!("upload {}", s.describe()))
                .collect(),
            escalate_to_human: false,
            human_escalation_reason: None,
        };
    }

    if !tampered.is_empty() {
        return DecisionOutcome {
            decision: Decision::Rejected,
            reasons: tampered
                .iter()
                .map(|u| format!("tamper indicators detected in '{}'", u.filename))
                .collect(),
            next_actions: tampered
                .iter()
                .map(|u| format!("re-upload '{}' from the original document", u.filename))
                .collect(),
            escalate_to_human: false,
            human_escalation_reason: None,
        };
    }

    if identity_mismatch {
        let mut reasons = Vec::new();
        if cross_checks.name_consistency == ConsistencyStatus::Mismatch {
            reasons.push("name differs across identity documents".to_string());
        }
        if cross_checks.dob_consistency == ConsistencyStatus::Mismatch {
            reasons.push("date of birth differs across identity documents".to_string());
        }
        return DecisionOutcome {
            decision: Decision::ReviewRequired,
            reasons,
            next_actions: vec!["await manual review of identity documents".to_string()],
            escalate_to_human: true,
            human_escalation_reason: Some("cross-document identity mismatch".to_string()),
        };
    }

    if !low_confidence.is_empty() || low_face_score.is_some() {
        let mut reasons = Vec::new();
        let mut next_actions = Vec::new();
        for upload in &low_confidence {
            reasons.push(format!(
                "low classification confidence ({}) for '{}'",
                upload.confidence, upload.filename
            ));
            next_actions.push(format!("re-upload a clearer copy of '{}'", upload.filename));
        }
        if let Some(score) = low_face_score {
            reasons.push(format!(
                "face match score {score} below threshold {}",
                policy.face_match_threshold
            ));
            next_actions.push("re-upload a recent passport-size photograph".to_string());
        }
        return DecisionOutcome {
            decision: Decision::ReviewRequired,
            reasons,
            next_actions,
            escalate_to_human: false,
            human_escalation_reason: None,
        };
    }

    DecisionOutcome {
        decision: Decision::Approved,
        reasons: vec!["all mandatory documents present and verified".to_string()],
        next_actions: vec![],
        escalate_to_human: false,
        human_escalation_reason: None,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
