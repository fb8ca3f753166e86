//! Hash-chain primitives: hashing and chain integrity verification.
//!
//! Every field that contributes to an entry's hash is fed to SHA-256 as an
//! explicit byte sequence so nothing is accidentally omitted.
//!
//! Hash input layout (bytes, in order):
//!   1. request_id as UTF-8 bytes
//!   2. sequence as 8-byte little-endian
//!   3. prev_hash as UTF-8 bytes (64 ASCII hex chars)
//!   4. stage label as UTF-8 bytes
//!   5. message as UTF-8 bytes
//!   6. timestamp as RFC 3339 UTF-8 bytes

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};

use crate::entry::{AuditEntry, AuditStage};

/// Compute the SHA-256 hash for a single audit entry.
///
/// The hash commits to every field that uniquely identifies an entry: its
/// position in the chain (`sequence`), the request it belongs to
/// (`request_id`), its link to the previous entry (`prev_hash`), and the
/// full stage content.
///
/// Returns a lowercase 64-character hex string.
pub fn hash_entry(
    request_id: &str,
    sequence: u64,
    stage: AuditStage,
    message: &str,
    timestamp: &DateTime<Utc>,
    prev_hash: &str,
) -> String {
    let mut hasher = Sha256::new();
    hasher.update(request_id.as_bytes());
    hasher.update(sequence.to_le_bytes());
    hasher.update(prev_hash.as_bytes());
    hasher.update(stage.as_str().as_bytes());
    hasher.update(message.as_bytes());
    hasher.update(timestamp.to_rfc3339().as_bytes());

    hex::encode(hasher.finalize())
}

/// Verify the integrity of a hash chain.
///
/// Returns `true` when the chain is valid according to both rules:
///
/// 1. **Prev-hash linkage** — each entry's `prev_hash` equals the
///    `this_hash` of the preceding entry (or `GENESIS_HASH` for entry 0).
/// 2. **Hash correctness** — each entry's `this_hash` matches the value
///    recomputed from its own fields.
///
/// Returns `false` the moment any mismatch is detected.  An empty chain
/// is defined as valid.
pub fn verify_chain(entries: &[AuditEntry]) -> bool {
    let mut expected_prev = AuditEntry::GENESIS_HASH.to_string();

    for entry in entries {
        if entry.prev_hash != expected_prev {
            return false;
        }

        let recomputed = hash_entry(
            &entry.request_id,
            entry.sequence,
            entry.stage,
            &entry.message,
            &entry.timestamp,
            &entry.prev_hash,
        );
        if entry.this_hash != recomputed {
            return false;
        }

        expected_prev = entry.this_hash.clone();
    }

    true
}
