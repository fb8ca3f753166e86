//! Cross-document consistency results.

use serde::{Deserialize, Serialize};

/// Consistency of one extracted field across all uploads of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConsistencyStatus {
    /// Every upload agrees, or no upload carries the field.
    Match,
    /// A strict subset of uploads carries the field, and those agree.
    Partial,
    /// At least two uploads carry the field and disagree.
    Mismatch,
}

impl ConsistencyStatus {
    /// The wire label, identical to the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConsistencyStatus::Match => "MATCH",
            ConsistencyStatus::Partial => "PARTIAL",
            ConsistencyStatus::Mismatch => "MISMATCH",
        }
    }
}

/// The result of cross-checking extracted fields across a request's uploads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossCheckResult {
    /// Name agreement across uploads.
    pub name_consistency: ConsistencyStatus,
    /// Date-of-birth agreement across uploads.
    pub dob_consistency: ConsistencyStatus,
    /// Face match score 0–100, present only when a photograph and an
    /// identity document were both uploaded. The score itself comes from
    /// the external classifier.
    pub face_match_score: Option<u8>,
}
