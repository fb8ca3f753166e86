//! Cross-document consistency checker.
//!
//! Pure and symmetric: reordering the uploads never changes the result.
//! Per-field rule — all present and equal, or none present → MATCH; a strict
//! subset present, all equal → PARTIAL; two or more present and differing →
//! MISMATCH. With zero or one upload there is nothing to contradict, so both
//! fields are vacuously MATCH.

use tracing::debug;

use satya_contracts::{
    checks::{ConsistencyStatus, CrossCheckResult},
    document::DocumentTypeId,
    record::DocumentRecord,
};

/// Normalize a name for comparison: case-fold, strip punctuation, collapse
/// whitespace. "A. KUMAR" and "A Kumar" normalize identically.
pub fn normalize_name(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Consistency of one field across all uploads, given its per-upload values.
fn status_for(values: &[Option<String>]) -> ConsistencyStatus {
    let present: Vec<&String> = values.iter().flatten().collect();

    if present.is_empty() {
        return ConsistencyStatus::Match;
    }
    if present.iter().any(|v| *v != present[0]) {
        return ConsistencyStatus::Mismatch;
    }
    if present.len() == values.len() {
        ConsistencyStatus::Match
    } else {
        ConsistencyStatus::Partial
    }
}

/// True when the request contains both a photograph and an identity
/// document, i.e. a face match is meaningful to request from the classifier.
pub fn face_match_applicable(uploads: &[DocumentRecord]) -> bool {
    let has_photograph = uploads
        .iter()
        .any(|u| u.detected_type == DocumentTypeId::Photograph);
    let has_identity = uploads.iter().any(|u| u.detected_type.is_identity());
    has_photograph && has_identity
}

/// Cross-check extracted fields across all uploads of one request.
///
/// The face match score is supplied by the external classifier; this
/// function only decides whether to report it — when no photograph/identity
/// pair exists the score is dropped even if one was passed in.
pub fn cross_check(uploads: &[DocumentRecord], face_match_score: Option<u8>) -> CrossCheckResult {
    let names: Vec<Option<String>> = uploads
        .iter()
        .map(|u| u.extracted_fields.name.as_deref().map(normalize_name))
        .collect();
    let dobs: Vec<Option<String>> = uploads
        .iter()
        .map(|u| u.extracted_fields.dob.as_deref().map(|d| d.trim().to_string()))
        .collect();

    let result = CrossCheckResult {
        name_consistency: status_for(&names),
        dob_consistency: status_for(&dobs),
        face_match_score: if face_match_applicable(uploads) {
            face_match_score.map(|s| s.min(100))
        } else {
            None
        },
    };

    debug!(
        uploads = uploads.len(),
        name = result.name_consistency.as_str(),
        dob = result.dob_consistency.as_str(),
        face = ?result.face_match_score,
        "cross-check complete"
    );

    result
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use satya_contracts::{
        checks::ConsistencyStatus, document::DocumentTypeId, fields::ExtractedFields,
        record::DocumentRecord, record::UploadId,
    };

    use super::{cross_check, face_match_applicable, normalize_name};

    // ── Helpers ───────────────────────────────────────────────────────────────

    fn record(doc_type: DocumentTypeId, name: Option<&str>, dob: Option<&str>) -> DocumentRecord {
        DocumentRecord {
            upload_id: UploadId::new(),
            filename: format!("{}.jpg", doc_type.as_label().to_lowercase()),
            detected_type: doc_type,
            extracted_fields: ExtractedFields {
                name: name.map(str::to_string),
                dob: dob.map(str::to_string),
                ..ExtractedFields::default()
            },
            text_snippet: String::new(),
            confidence: 90,
            tamper_flag: false,
            notes: vec![],
        }
    }

    // ── Normalization ─────────────────────────────────────────────────────────

    #[test]
    fn normalization_folds_case_punctuation_and_whitespace() {
        assert_eq!(normalize_name("A. KUMAR"), "a kumar");
        assert_eq!(normalize_name("A   Kumar "), "a kumar");
        assert_eq!(normalize_name("Asha  Devi Kumar"), "asha devi kumar");
    }

    // ── Vacuous cases ─────────────────────────────────────────────────────────

    #[test]
    fn empty_upload_set_is_vacuously_consistent() {
        let result = cross_check(&[], None);
        assert_eq!(result.name_consistency, ConsistencyStatus::Match);
        assert_eq!(result.dob_consistency, ConsistencyStatus::Match);
        assert_eq!(result.face_match_score, None);
    }

    #[test]
    fn single_upload_is_vacuously_consistent() {
        let uploads = vec![record(DocumentTypeId::Pan, Some("Asha Kumar"), Some("1990-12-31"))];
        let result = cross_check(&uploads, None);
        assert_eq!(result.name_consistency, ConsistencyStatus::Match);
        assert_eq!(result.dob_consistency, ConsistencyStatus::Match);
        assert_eq!(result.face_match_score, None);
    }

    // ── Field statuses ────────────────────────────────────────────────────────

    #[test]
    fn equal_normalized_names_match() {
        let uploads = vec![
            record(DocumentTypeId::Aadhaar, Some("A Kumar"), None),
            record(DocumentTypeId::Utility, Some("A. KUMAR"), None),
        ];
        assert_eq!(
            cross_check(&uploads, None).name_consistency,
            ConsistencyStatus::Match
        );
    }

    #[test]
    fn differing_names_mismatch() {
        let uploads = vec![
            record(DocumentTypeId::Pan, Some("Alice Rao"), None),
            record(DocumentTypeId::Aadhaar, Some("Alicia Rao"), None),
        ];
        assert_eq!(
            cross_check(&uploads, None).name_consistency,
            ConsistencyStatus::Mismatch
        );
    }

    #[test]
    fn subset_presence_is_partial() {
        // The photograph carries no name; the two documents agree.
        let uploads = vec![
            record(DocumentTypeId::Pan, Some("Asha Kumar"), None),
            record(DocumentTypeId::Aadhaar, Some("Asha Kumar"), None),
            record(DocumentTypeId::Photograph, None, None),
        ];
        assert_eq!(
            cross_check(&uploads, None).name_consistency,
            ConsistencyStatus::Partial
        );
    }

    #[test]
    fn dob_checked_independently_of_name() {
        let uploads = vec![
            record(DocumentTypeId::Pan, Some("Asha Kumar"), Some("1990-12-31")),
            record(DocumentTypeId::Aadhaar, Some("Asha Kumar"), Some("1991-01-01")),
        ];
        let result = cross_check(&uploads, None);
        assert_eq!(result.name_consistency, ConsistencyStatus::Match);
        assert_eq!(result.dob_consistency, ConsistencyStatus::Mismatch);
    }

    // ── Symmetry ──────────────────────────────────────────────────────────────

    #[test]
    fn reordering_uploads_yields_identical_result() {
        let a = record(DocumentTypeId::Pan, Some("Asha Kumar"), Some("1990-12-31"));
        let b = record(DocumentTypeId::Aadhaar, Some("A. KUMAR"), None);
        let c = record(DocumentTypeId::Photograph, None, None);

        let forward = cross_check(&[a.clone(), b.clone(), c.clone()], Some(88));
        let reversed = cross_check(&[c, b, a], Some(88));
        assert_eq!(forward, reversed);
    }

    // ── Face match applicability ──────────────────────────────────────────────

    #[test]
    fn face_score_reported_only_with_photo_and_identity() {
        let photo = record(DocumentTypeId::Photograph, None, None);
        let pan = record(DocumentTypeId::Pan, Some("Asha Kumar"), None);
        let utility = record(DocumentTypeId::Utility, Some("Asha Kumar"), None);

        assert!(face_match_applicable(&[photo.clone(), pan.clone()]));
        assert!(!face_match_applicable(&[photo.clone(), utility.clone()]));
        assert!(!face_match_applicable(&[pan.clone(), utility.clone()]));

        let with_pair = cross_check(&[photo.clone(), pan], Some(88));
        assert_eq!(with_pair.face_match_score, Some(88));

        // A passed-in score is dropped when the pair is absent.
        let without_pair = cross_check(&[photo, utility], Some(88));
        assert_eq!(without_pair.face_match_score, None);
    }
}
