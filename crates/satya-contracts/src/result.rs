//! The assembled verification result — the single immutable output record.
//!
//! Serialization of this type is the external output contract: JSON keys
//! are exactly the snake_case field names below, enumerations render as
//! their wire strings, timestamps as ISO-8601 UTC.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    checks::CrossCheckResult,
    decision::Decision,
    error::{SatyaError, SatyaResult},
    record::DocumentRecord,
    requirement::RequirementSlot,
};

/// Unique identifier for a single verification request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestId(pub uuid::Uuid);

impl RequestId {
    /// Create a new, unique request ID.
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

/// Audit trail block embedded in the result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Audit {
    /// Version identifier of the deciding runtime.
    pub agent_version: String,
    /// Rendered step-by-step verification log lines, in order.
    pub logs: Vec<String>,
    /// Whether the uploader consented to field exposure.
    pub consent_received: bool,
}

/// The complete, immutable output of one verification request.
///
/// Created exactly once per request after every upload is classified;
/// a new request yields a new result, never an update in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationResult {
    /// Unique request identifier.
    pub request_id: RequestId,
    /// Assembly time, UTC.
    pub timestamp: DateTime<Utc>,
    /// The declared purpose string.
    pub purpose: String,
    /// The requirement slots resolved for the purpose, in rule order.
    pub required_documents: Vec<RequirementSlot>,
    /// One record per uploaded artifact, in upload order.
    pub uploads: Vec<DocumentRecord>,
    /// Cross-document consistency results.
    pub cross_checks: CrossCheckResult,
    /// The verdict.
    pub decision: Decision,
    /// Human-readable reasons in rule-trigger order.
    pub decision_reasons: Vec<String>,
    /// User-facing next actions.
    pub next_actions: Vec<String>,
    /// Audit block.
    pub audit: Audit,
    /// True when routed to a human reviewer.
    pub escalate_to_human: bool,
    /// Escalation reason, when escalated.
    pub human_escalation_reason: Option<String>,
}

/// Verify that a result assembled without consent exposes no field values.
///
/// The assembler redacts before building the result; this guard is the
/// enforcement check behind that policy, usable by tests and by callers
/// that need the guarantee re-proven on an arbitrary result.
pub fn consent_guard(result: &VerificationResult) -> SatyaResult<()> {
    if result.audit.consent_received {
        return Ok(());
    }
    for upload in &result.uploads {
        if upload.extracted_fields.has_pii() && !upload.extracted_fields.is_redacted() {
            return Err(SatyaError::ConsentViolation {
                reason: format!(
                    "upload '{}' exposes extracted fields without consent",
                    upload.filename
                ),
            });
        }
    }
    Ok(())
}
