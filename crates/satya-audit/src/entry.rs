//! Audit entry and log types.
//!
//! `AuditEntry` is a single entry in the hash chain — one verification stage
//! message wrapped with sequence numbering and the SHA-256 hashes that make
//! tampering detectable.  `AuditLog` is the sealed record produced when a
//! request finalizes.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The pipeline stage an audit entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AuditStage {
    /// Request received, uploads registered.
    Intake,
    /// Requirement slots resolved for the purpose.
    Requirements,
    /// One upload classified (or degraded).
    Classification,
    /// Cross-document consistency computed.
    CrossCheck,
    /// Decision engine verdict.
    Decision,
    /// Result assembled.
    Assembly,
}

impl AuditStage {
    /// The kebab-case label, identical to the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditStage::Intake => "intake",
            AuditStage::Requirements => "requirements",
            AuditStage::Classification => "classification",
            AuditStage::CrossCheck => "cross-check",
            AuditStage::Decision => "decision",
            AuditStage::Assembly => "assembly",
        }
    }
}

impl fmt::Display for AuditStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single entry in the SHA-256 hash chain for one verification request.
///
/// Each entry commits to the previous entry via `prev_hash`, forming an
/// append-only chain.  Modifying any field invalidates `this_hash` and every
/// subsequent `prev_hash`, which `verify_chain` detects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// Monotonically increasing position in the chain, starting at 0.
    pub sequence: u64,

    /// The verification request this entry belongs to.
    pub request_id: String,

    /// Which pipeline stage produced the entry.
    pub stage: AuditStage,

    /// Human-readable stage message; these lines feed `Audit.logs`.
    pub message: String,

    /// Wall-clock time the entry was recorded (UTC).
    pub timestamp: DateTime<Utc>,

    /// SHA-256 hash (hex) of the previous entry, or `GENESIS_HASH` for the
    /// first entry.
    pub prev_hash: String,

    /// SHA-256 hash (hex) of this entry's canonical content.
    pub this_hash: String,
}

impl AuditEntry {
    /// The sentinel `prev_hash` used for the first entry in every chain.
    ///
    /// 64 hex zeros — a value that can never be the SHA-256 of real data,
    /// making genesis detection unambiguous.
    pub const GENESIS_HASH: &'static str =
        "0000000000000000000000000000000000000000000000000000000000000000";

    /// Render this entry as the log line embedded in the result audit block.
    pub fn render(&self) -> String {
        format!("[{}] {}", self.stage, self.message)
    }
}

/// A sealed, finalized audit log for a single verification request.
///
/// Produced by `AuditTrail::export_log()` after the request completes.
/// The `terminal_hash` is the `this_hash` of the last entry and serves as a
/// compact commitment to the entire log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditLog {
    /// The request whose stages are recorded here.
    pub request_id: String,

    /// All audit entries in chain order (sequence 0 first).
    pub entries: Vec<AuditEntry>,

    /// Wall-clock time (UTC) the log was exported / finalized.
    pub finalized_at: DateTime<Utc>,

    /// The `this_hash` of the last entry.  Empty string if the log is empty.
    pub terminal_hash: String,
}
