//! # satya-audit
//!
//! Immutable, append-only, SHA-256 hash-chained audit trail for the SATYA
//! verification runtime.
//!
//! ## Overview
//!
//! Every stage the verification pipeline records is wrapped in an
//! `AuditEntry` that links to the previous entry via its SHA-256 hash.
//! Tampering with any entry — even a single byte — breaks the chain and is
//! detected by `verify_chain`.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use satya_audit::{AuditStage, AuditTrail};
//!
//! let trail = AuditTrail::new("req-001");
//! trail.record(AuditStage::Intake, "2 upload(s) received")?;
//!
//! assert!(trail.verify_integrity());
//! let audit = trail.to_audit("satya/0.1.0", true);
//! ```

pub mod chain;
pub mod entry;
pub mod trail;

pub use chain::{hash_entry, verify_chain};
pub use entry::{AuditEntry, AuditLog, AuditStage};
pub use trail::AuditTrail;

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::{AuditEntry, AuditStage, AuditTrail};

    // ── Tests ─────────────────────────────────────────────────────────────────

    /// Recording three entries and verifying produces a valid chain.
    #[test]
    fn test_hash_chain_integrity() {
        let trail = AuditTrail::new("req-integrity");
        trail.record(AuditStage::Intake, "first").unwrap();
        trail.record(AuditStage::Classification, "second").unwrap();
        trail.record(AuditStage::Decision, "third").unwrap();

        assert!(trail.verify_integrity(), "chain must be valid after sequential records");
    }

    /// Mutating any entry's message breaks the chain.
    #[test]
    fn test_tamper_detection() {
        let trail = AuditTrail::new("req-tamper");
        trail.record(AuditStage::Intake, "stage-a").unwrap();
        trail.record(AuditStage::CrossCheck, "stage-b").unwrap();
        trail.record(AuditStage::Decision, "stage-c").unwrap();

        // Directly mutate the internal state to simulate tampering.
        {
            let mut state = trail.state.lock().unwrap();
            state.entries[0].message = "TAMPERED".to_string();
        }

        assert!(
            !trail.verify_integrity(),
            "chain must detect tampering with a stored entry"
        );
    }

    /// The first entry's `prev_hash` must equal `AuditEntry::GENESIS_HASH`.
    #[test]
    fn test_genesis_hash() {
        let trail = AuditTrail::new("req-genesis");
        trail.record(AuditStage::Intake, "first").unwrap();

        let log = trail.export_log();
        assert_eq!(log.entries.len(), 1);
        assert_eq!(
            log.entries[0].prev_hash,
            AuditEntry::GENESIS_HASH,
            "first entry must link to the genesis sentinel hash"
        );
    }

    /// Sequence numbers must be 0, 1, 2, … with no gaps or skips.
    #[test]
    fn test_sequence_monotonic() {
        let trail = AuditTrail::new("req-seq");
        trail.record(AuditStage::Intake, "a").unwrap();
        trail.record(AuditStage::Requirements, "b").unwrap();
        trail.record(AuditStage::Assembly, "c").unwrap();

        let log = trail.export_log();
        for (idx, entry) in log.entries.iter().enumerate() {
            assert_eq!(
                entry.sequence, idx as u64,
                "sequence at position {} should be {}",
                idx, idx
            );
        }
    }

    /// `export_log()` contains every recorded entry in order, and the
    /// terminal hash equals the last entry's hash.
    #[test]
    fn test_export_log() {
        let trail = AuditTrail::new("req-export");
        trail.record(AuditStage::Intake, "alpha").unwrap();
        trail.record(AuditStage::Classification, "beta").unwrap();
        trail.record(AuditStage::Decision, "gamma").unwrap();

        let log = trail.export_log();

        assert_eq!(log.request_id, "req-export");
        assert_eq!(log.entries.len(), 3, "log must contain all recorded entries");
        assert_eq!(
            log.terminal_hash,
            log.entries.last().unwrap().this_hash,
            "terminal_hash must equal the last entry's this_hash"
        );
        assert!(
            super::verify_chain(&log.entries),
            "exported log must pass chain verification"
        );
    }

    /// An empty chain is trivially valid — there is nothing to verify.
    #[test]
    fn test_verify_empty() {
        let trail = AuditTrail::new("req-empty");
        assert!(
            trail.verify_integrity(),
            "an empty chain must be considered valid"
        );
        assert!(
            super::verify_chain(&[]),
            "verify_chain on empty slice must return true"
        );
    }

    /// Rendered lines carry the stage label prefix in chain order.
    #[test]
    fn test_render_lines_format() {
        let trail = AuditTrail::new("req-render");
        trail.record(AuditStage::Intake, "2 upload(s) received").unwrap();
        trail.record(AuditStage::CrossCheck, "name=MATCH dob=MATCH").unwrap();

        let lines = trail.render_lines();
        assert_eq!(
            lines,
            vec![
                "[intake] 2 upload(s) received".to_string(),
                "[cross-check] name=MATCH dob=MATCH".to_string(),
            ]
        );
    }

    /// `to_audit` packages the rendered lines with version and consent.
    #[test]
    fn test_to_audit_packaging() {
        let trail = AuditTrail::new("req-audit");
        trail.record(AuditStage::Decision, "APPROVED").unwrap();

        let audit = trail.to_audit("satya/0.1.0", true);
        assert_eq!(audit.agent_version, "satya/0.1.0");
        assert!(audit.consent_received);
        assert_eq!(audit.logs, vec!["[decision] APPROVED".to_string()]);
    }
}
