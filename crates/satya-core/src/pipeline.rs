//! The SATYA verification pipeline: the deterministic request runner.
//!
//! Stage order per request:
//!
//!   Intake → Requirements → [classify all uploads, concurrently] →
//!   barrier → Cross-check → Decide → Assemble
//!
//! Classification calls are independent and side-effect-free on shared
//! state, so uploads of one request run on their own scoped threads; the
//! consistency checker and decision engine only run after every
//! classification has joined. A classifier error or panic degrades that one
//! upload to a failed placeholder record — partial failure is surfaced, not
//! fatal. The caller always receives a complete `VerificationResult`; no
//! code path surfaces a bare error.

use std::thread;

use tracing::{debug, info, warn};

use satya_audit::{AuditStage, AuditTrail};
use satya_contracts::{
    decision::DecisionPolicy,
    document::DocumentTypeId,
    error::SatyaError,
    record::{DocumentRecord, DocumentSource, UploadId},
    result::{RequestId, VerificationResult},
};

use crate::{
    assemble::assemble,
    consistency,
    decision,
    traits::{DocumentClassifier, RequirementResolver},
};

/// The central pipeline that drives verification requests.
///
/// One pipeline may serve many requests: it holds no per-request state, and
/// each request's records are owned exclusively by that `run()` call.
pub struct VerificationPipeline {
    classifier: Box<dyn DocumentClassifier>,
    resolver: Box<dyn RequirementResolver>,
    policy: DecisionPolicy,
}

impl VerificationPipeline {
    /// Create a pipeline from its collaborators and decision thresholds.
    pub fn new(
        classifier: Box<dyn DocumentClassifier>,
        resolver: Box<dyn RequirementResolver>,
        policy: DecisionPolicy,
    ) -> Self {
        Self {
            classifier,
            resolver,
            policy,
        }
    }

    /// Run one verification request to completion.
    ///
    /// Infallible by contract: every failure mode is encoded in the result
    /// as a degraded record, a decision outcome, or an audit line.
    pub fn run(
        &self,
        purpose: &str,
        sources: Vec<DocumentSource>,
        consent_received: bool,
    ) -> VerificationResult {
        let request_id = RequestId::new();
        let trail = AuditTrail::new(request_id.0.to_string());

        info!(
            request_id = %request_id.0,
            purpose,
            uploads = sources.len(),
            "verification request started"
        );
        self.log(
            &trail,
            AuditStage::Intake,
            format!(
                "purpose '{}' ({}); {} upload(s) received",
                purpose,
                self.resolver.display_label(purpose),
                sources.len()
            ),
        );

        let slots = self.resolver.resolve(purpose);
        self.log(
            &trail,
            AuditStage::Requirements,
            format!(
                "{} requirement slot(s): {}",
                slots.len(),
                slots
                    .iter()
                    .map(|s| {
                        let marker = if s.mandatory { "" } else { " (optional)" };
                        format!("{}{marker}", s.describe())
                    })
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        );

        // Classify every upload on its own scoped thread. The scope is the
        // synchronization barrier: nothing below runs until all joins finish.
        let records: Vec<DocumentRecord> = thread::scope(|scope| {
            let handles: Vec<_> = sources
                .iter()
                .map(|source| {
                    let classifier = self.classifier.as_ref();
                    scope.spawn(move || classify_one(classifier, source))
                })
                .collect();

            handles
                .into_iter()
                .zip(sources.iter())
                .map(|(handle, source)| {
                    handle.join().unwrap_or_else(|_| {
                        warn!(filename = %source.filename, "classifier panicked");
                        DocumentRecord::failed(
                            UploadId::new(),
                            &source.filename,
                            "classifier panicked",
                        )
                    })
                })
                .collect()
        });

        for record in &records {
            let tamper = if record.tamper_flag {
                ", tamper flagged"
            } else {
                ""
            };
            self.log(
                &trail,
                AuditStage::Classification,
                format!(
                    "'{}' detected as {} (confidence {}{tamper})",
                    record.filename, record.detected_type, record.confidence
                ),
            );
        }

        let face_score = self.request_face_score(&records, &trail);
        let cross_checks = consistency::cross_check(&records, face_score);
        self.log(
            &trail,
            AuditStage::CrossCheck,
            format!(
                "name={} dob={} face={}",
                cross_checks.name_consistency.as_str(),
                cross_checks.dob_consistency.as_str(),
                cross_checks
                    .face_match_score
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "n/a".to_string())
            ),
        );

        let outcome = decision::decide(&slots, &records, &cross_checks, &self.policy);
        self.log(
            &trail,
            AuditStage::Decision,
            format!(
                "{} — {}",
                outcome.decision.as_str(),
                outcome.reasons.join("; ")
            ),
        );

        let result = assemble(
            request_id,
            purpose,
            slots,
            records,
            cross_checks,
            outcome,
            consent_received,
            &trail,
        );

        info!(
            request_id = %request_id.0,
            decision = result.decision.as_str(),
            escalate = result.escalate_to_human,
            "verification request complete"
        );

        result
    }

    /// Ask the classifier for a face match score when the upload set makes
    /// one meaningful. Classifier failure degrades to no score.
    fn request_face_score(&self, records: &[DocumentRecord], trail: &AuditTrail) -> Option<u8> {
        if !consistency::face_match_applicable(records) {
            return None;
        }
        let photograph = records
            .iter()
            .find(|r| r.detected_type == DocumentTypeId::Photograph)?;
        let identity = records.iter().find(|r| r.detected_type.is_identity())?;

        match self.classifier.face_match_score(photograph, identity) {
            Ok(score) => Some(score.min(100)),
            Err(e) => {
                self.log(
                    trail,
                    AuditStage::CrossCheck,
                    format!("face match unavailable: {e}"),
                );
                None
            }
        }
    }

    fn log(&self, trail: &AuditTrail, stage: AuditStage, message: String) {
        debug!(stage = %stage, %message, "pipeline stage");
        if let Err(e) = trail.record(stage, message) {
            warn!(error = %e, "audit record failed");
        }
    }
}

/// Classify one upload, degrading any failure to the placeholder record.
fn classify_one(classifier: &dyn DocumentClassifier, source: &DocumentSource) -> DocumentRecord {
    let upload_id = UploadId::new();
    match classifier.classify(source) {
        Ok(classification) => {
            DocumentRecord::from_classification(upload_id, &source.filename, classification)
        }
        Err(err) => {
            let cause = match err {
                SatyaError::ClassificationFailed { reason } => reason,
                other => other.to_string(),
            };
            warn!(filename = %source.filename, %cause, "classification degraded to placeholder");
            DocumentRecord::failed(upload_id, &source.filename, &cause)
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
