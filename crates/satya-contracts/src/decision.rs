//! Decision enumerations, outcomes, and policy thresholds.

use serde::{Deserialize, Serialize};

/// The terminal verdict of a verification request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Decision {
    Approved,
    ReviewRequired,
    Rejected,
}

impl Decision {
    /// The wire label, identical to the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::Approved => "APPROVED",
            Decision::ReviewRequired => "REVIEW_REQUIRED",
            Decision::Rejected => "REJECTED",
        }
    }
}

/// Everything the decision engine produces for one request.
///
/// Deterministic for identical inputs: same decision, same reason order,
/// same escalation outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionOutcome {
    /// The verdict.
    pub decision: Decision,
    /// Human-readable reasons, in the order the deciding rules fired.
    pub reasons: Vec<String>,
    /// User-facing next actions, aligned with the reasons.
    pub next_actions: Vec<String>,
    /// True when the request must be routed to a human reviewer.
    pub escalate_to_human: bool,
    /// Why the request is escalated, when it is.
    pub human_escalation_reason: Option<String>,
}

/// Policy thresholds for the decision engine.
///
/// These are operator configuration, not constants: the rules TOML may
/// override either value via its `[policy]` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionPolicy {
    /// Confidence below this value flags an upload as a quality concern.
    #[serde(default = "default_low_confidence")]
    pub low_confidence_threshold: u8,
    /// A face match score below this value flags a quality concern.
    #[serde(default = "default_face_match")]
    pub face_match_threshold: u8,
}

fn default_low_confidence() -> u8 {
    50
}

fn default_face_match() -> u8 {
    60
}

impl Default for DecisionPolicy {
    fn default() -> Self {
        Self {
            low_confidence_threshold: default_low_confidence(),
            face_match_threshold: default_face_match(),
        }
    }
}
