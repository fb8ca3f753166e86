//! In-memory, per-request audit trail.
//!
//! `AuditTrail` keeps all entries in a `Vec` protected by a `Mutex`, making
//! it safe to record from the classification threads of a single request.
//!
//! Use `render_lines()` to obtain the log lines embedded in the result's
//! audit block, `export_log()` for the sealed chained log, and
//! `verify_integrity()` at any time to confirm the chain has not been
//! tampered with in memory.

use std::sync::{Arc, Mutex};

use chrono::Utc;
use tracing::info;

use satya_contracts::{
    error::{SatyaError, SatyaResult},
    result::Audit,
};

use crate::{
    chain::{hash_entry, verify_chain},
    entry::{AuditEntry, AuditLog, AuditStage},
};

// ── Internal mutable state ────────────────────────────────────────────────────

/// The mutable interior of an `AuditTrail`.
pub(crate) struct TrailState {
    /// All entries recorded so far, in append order.
    pub(crate) entries: Vec<AuditEntry>,

    /// The next sequence number to assign (starts at 0).
    pub(crate) sequence: u64,

    /// The `this_hash` of the last recorded entry, or `GENESIS_HASH` before
    /// any entry has been recorded.
    pub(crate) last_hash: String,
}

// ── Public trail ──────────────────────────────────────────────────────────────

/// An in-memory, append-only audit trail backed by a SHA-256 hash chain.
///
/// One trail exists per verification request and is dropped with it; trails
/// are never shared across requests.
///
/// # Thread safety
///
/// `record()` acquires a `Mutex` internally, so the per-upload
/// classification threads of one request may record without additional
/// synchronization.
pub struct AuditTrail {
    request_id: String,
    pub(crate) state: Arc<Mutex<TrailState>>,
}

impl AuditTrail {
    /// Create a new trail for the given request.
    ///
    /// The internal `last_hash` is initialized to `AuditEntry::GENESIS_HASH`
    /// so the first entry's `prev_hash` is automatically correct.
    pub fn new(request_id: impl Into<String>) -> Self {
        let state = TrailState {
            entries: Vec::new(),
            sequence: 0,
            last_hash: AuditEntry::GENESIS_HASH.to_string(),
        };
        Self {
            request_id: request_id.into(),
            state: Arc::new(Mutex::new(state)),
        }
    }

    /// Append one stage message to the hash chain.
    ///
    /// Computes `this_hash` from the entry's canonical content, appends the
    /// entry, then advances the sequence counter and `last_hash`.
    ///
    /// Returns `Err(AuditWriteFailed)` only if the internal mutex is
    /// poisoned, which cannot happen under normal operation.
    pub fn record(&self, stage: AuditStage, message: impl Into<String>) -> SatyaResult<()> {
        let message = message.into();
        let mut state = self.state.lock().map_err(|e| SatyaError::AuditWriteFailed {
            reason: format!("audit state lock poisoned: {}", e),
        })?;

        let prev_hash = state.last_hash.clone();
        let sequence = state.sequence;
        let timestamp = Utc::now();

        let this_hash = hash_entry(
            &self.request_id,
            sequence,
            stage,
            &message,
            &timestamp,
            &prev_hash,
        );

        let entry = AuditEntry {
            sequence,
            request_id: self.request_id.clone(),
            stage,
            message,
            timestamp,
            prev_hash,
            this_hash: this_hash.clone(),
        };

        state.entries.push(entry);
        state.sequence += 1;
        state.last_hash = this_hash;

        Ok(())
    }

    /// Export a sealed `AuditLog` containing all entries recorded so far.
    ///
    /// The `terminal_hash` is the `this_hash` of the last entry, or an empty
    /// string when nothing has been recorded.
    pub fn export_log(&self) -> AuditLog {
        let state = self.state.lock().expect("audit state lock poisoned");
        let terminal_hash = state
            .entries
            .last()
            .map(|e| e.this_hash.clone())
            .unwrap_or_default();

        AuditLog {
            request_id: self.request_id.clone(),
            entries: state.entries.clone(),
            finalized_at: Utc::now(),
            terminal_hash,
        }
    }

    /// Render every entry as a `[stage] message` line, in chain order.
    pub fn render_lines(&self) -> Vec<String> {
        let state = self.state.lock().expect("audit state lock poisoned");
        state.entries.iter().map(AuditEntry::render).collect()
    }

    /// Build the result-embedded audit block from the recorded lines.
    ///
    /// Logs a structured finalization message, mirroring what a persistent
    /// trail would do when sealing.
    pub fn to_audit(&self, agent_version: impl Into<String>, consent_received: bool) -> Audit {
        let logs = self.render_lines();
        info!(
            request_id = %self.request_id,
            entry_count = logs.len(),
            "audit trail finalized"
        );
        Audit {
            agent_version: agent_version.into(),
            logs,
            consent_received,
        }
    }

    /// Verify that the in-memory chain has not been tampered with.
    ///
    /// Delegates to `verify_chain`, which checks both prev-hash linkage and
    /// hash correctness for every entry.
    pub fn verify_integrity(&self) -> bool {
        let state = self.state.lock().expect("audit state lock poisoned");
        verify_chain(&state.entries)
    }
}
