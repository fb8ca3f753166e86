//! Error types for the SATYA verification pipeline.
//!
//! Most failure modes in SATYA are *not* errors: an unknown purpose falls
//! back to baseline KYC, a failed classification degrades to a placeholder
//! record, and a missing mandatory document is a REJECTED decision. The
//! variants here cover the few places where the runtime itself can fail.

use thiserror::Error;

/// The unified error type for the SATYA runtime.
#[derive(Debug, Error)]
pub enum SatyaError {
    /// The external classification capability failed for one upload.
    ///
    /// Recovered at the pipeline level: the affected upload degrades to a
    /// failed placeholder record and the rest of the batch proceeds.
    #[error("classification failed: {reason}")]
    ClassificationFailed { reason: String },

    /// A required configuration value is missing or invalid.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    /// The audit trail could not persist an entry.
    #[error("audit write failed: {reason}")]
    AuditWriteFailed { reason: String },

    /// Personally identifiable fields would leave the runtime without consent.
    #[error("consent violation: {reason}")]
    ConsentViolation { reason: String },
}

/// Convenience alias used throughout the SATYA crates.
pub type SatyaResult<T> = Result<T, SatyaError>;
