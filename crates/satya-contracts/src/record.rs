//! Upload sources, classifier output, and the immutable document record.
//!
//! `DocumentSource` is what the caller hands in; `Classification` is the
//! DocumentRecord-shaped contract the external classification adapter must
//! produce; `DocumentRecord` is the immutable per-upload result the rest of
//! the pipeline consumes. Records are owned exclusively by the request that
//! produced them and are never shared across requests.

use serde::{Deserialize, Serialize};

use crate::{document::DocumentTypeId, fields::ExtractedFields, mask};

/// Maximum length of the stored (masked) text snippet, in characters.
pub const TEXT_SNIPPET_MAX: usize = 120;

/// Unique identifier for one uploaded artifact, generated at ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UploadId(pub uuid::Uuid);

impl UploadId {
    /// Create a new, unique upload ID.
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for UploadId {
    fn default() -> Self {
        Self::new()
    }
}

/// One uploaded artifact as received from the caller.
#[derive(Debug, Clone)]
pub struct DocumentSource {
    /// Original filename, used in decision reasons and audit lines.
    pub filename: String,
    /// Raw image or PDF bytes handed to the classifier.
    pub bytes: Vec<u8>,
}

/// The structured output the external classification capability must reduce
/// its analysis to, before the core consumes it.
///
/// Free-text model output is the adapter's problem; the core only ever sees
/// this shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Classification {
    /// Detected document type; unrecognized labels are `Other`.
    pub detected_type: DocumentTypeId,
    /// Best-effort extracted fields.
    pub extracted_fields: ExtractedFields,
    /// Masked text excerpt from the document.
    pub text_snippet: String,
    /// Classifier confidence, 0–100.
    pub confidence: u8,
    /// True when the classifier saw tamper indicators.
    pub tamper_flag: bool,
    /// Free-form check notes from the classifier.
    pub notes: Vec<String>,
}

/// The immutable record of one classified upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentRecord {
    /// Unique per-upload identifier.
    pub upload_id: UploadId,
    /// Original filename.
    pub filename: String,
    /// Detected document type.
    pub detected_type: DocumentTypeId,
    /// Extracted fields after sanitation.
    pub extracted_fields: ExtractedFields,
    /// Masked text excerpt, at most [`TEXT_SNIPPET_MAX`] characters.
    pub text_snippet: String,
    /// Classifier confidence, 0–100.
    pub confidence: u8,
    /// True when tamper indicators were detected.
    pub tamper_flag: bool,
    /// Ordered notes: classifier checks, sanitation drops, masking fixes.
    pub notes: Vec<String>,
}

impl DocumentRecord {
    /// Build a record from the classifier's output.
    ///
    /// This is the classification boundary: dates are sanitized (malformed
    /// ones become notes), the snippet is bounded, confidence is clamped to
    /// 100, and a document number that still looks unmasked is re-masked
    /// here so nothing raw travels further.
    pub fn from_classification(
        upload_id: UploadId,
        filename: impl Into<String>,
        classification: Classification,
    ) -> Self {
        let Classification {
            detected_type,
            mut extracted_fields,
            text_snippet,
            confidence,
            tamper_flag,
            mut notes,
        } = classification;

        notes.extend(extracted_fields.sanitize());

        if let Some(number) = extracted_fields.document_number_masked.as_deref() {
            if mask::looks_unmasked(number) {
                extracted_fields.document_number_masked =
                    Some(mask::mask_document_number(detected_type, number));
                notes.push("document number re-masked at classification boundary".to_string());
            }
        }

        Self {
            upload_id,
            filename: filename.into(),
            detected_type,
            extracted_fields,
            text_snippet: text_snippet.chars().take(TEXT_SNIPPET_MAX).collect(),
            confidence: confidence.min(100),
            tamper_flag,
            notes,
        }
    }

    /// The degraded placeholder for an upload whose classification failed.
    ///
    /// The batch continues; the failure is carried as a note on this record.
    pub fn failed(upload_id: UploadId, filename: impl Into<String>, cause: &str) -> Self {
        Self {
            upload_id,
            filename: filename.into(),
            detected_type: DocumentTypeId::Other,
            extracted_fields: ExtractedFields::default(),
            text_snippet: String::new(),
            confidence: 0,
            tamper_flag: false,
            notes: vec![format!("classification failed: {cause}")],
        }
    }
}
