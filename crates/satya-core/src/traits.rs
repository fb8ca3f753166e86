//! Core trait definitions for the SATYA verification pipeline.
//!
//! Two seams separate the pure core from its collaborators:
//!
//! - `DocumentClassifier`  — untrusted external capability (a vision model
//!   behind an adapter)
//! - `RequirementResolver` — trusted rules table (purpose → slots)
//!
//! The pipeline wires them together: classification completes and produces
//! typed records before any decision logic runs. Implementations of
//! `DocumentClassifier` never see requirement slots or decision state.

use satya_contracts::{
    error::SatyaResult,
    record::{Classification, DocumentRecord, DocumentSource},
    requirement::RequirementSlot,
};

/// The external document-classification capability.
///
/// Implementations of this trait are considered **untrusted** — they wrap a
/// vision model, an OCR service, or arbitrary adapter code. Whatever the
/// underlying capability returns, the adapter must reduce it to the
/// [`Classification`] contract; the core never parses free-form model text.
pub trait DocumentClassifier: Send + Sync {
    /// Classify one uploaded artifact.
    ///
    /// Errors are recovered by the pipeline: the upload degrades to a failed
    /// placeholder record and the rest of the batch proceeds. Implementations
    /// must be safe to call concurrently for uploads of the same request.
    fn classify(&self, source: &DocumentSource) -> SatyaResult<Classification>;

    /// Score how well the face in `photograph` matches the portrait printed
    /// on `identity`, 0–100.
    ///
    /// Only called when the request contains both a photograph and an
    /// identity document. An error degrades to an absent score, never a
    /// failed request.
    fn face_match_score(
        &self,
        photograph: &DocumentRecord,
        identity: &DocumentRecord,
    ) -> SatyaResult<u8>;
}

/// The requirement rules table: purpose → ordered requirement slots.
///
/// Implementations are **trusted** and must be total: every purpose string
/// resolves to a slot list (unknown purposes degrade to a baseline fallback,
/// they never error) and every purpose has a display label.
pub trait RequirementResolver: Send + Sync {
    /// Resolve the ordered requirement slots for `purpose`.
    ///
    /// Must never fail; unknown purposes return the baseline KYC fallback.
    fn resolve(&self, purpose: &str) -> Vec<RequirementSlot>;

    /// Human-readable label for `purpose`.
    ///
    /// Known purposes map to a fixed phrase; unknown purposes derive one by
    /// replacing separators with spaces and title-casing. Never fails.
    fn display_label(&self, purpose: &str) -> String;
}
