//! Simulated banking uploads for the SATYA reference runtime.
//!
//! All data in this module is hardcoded and fictional. No external systems
//! are contacted. `MockVisionClassifier` stands in for the vision model
//! behind the `DocumentClassifier` seam in a production deployment; canned
//! classifications are keyed by filename.

use satya_contracts::{
    document::DocumentTypeId,
    error::{SatyaError, SatyaResult},
    fields::ExtractedFields,
    mask,
    record::{Classification, DocumentRecord, DocumentSource},
};
use satya_core::traits::DocumentClassifier;

/// Face match score the mock reports for every photograph/identity pair.
pub const MOCK_FACE_MATCH_SCORE: u8 = 88;

/// A classifier with canned results keyed by filename.
///
/// Filenames the mock does not know fail classification, exercising the
/// pipeline's degradation path the way an unreadable upload would.
pub struct MockVisionClassifier;

impl DocumentClassifier for MockVisionClassifier {
    fn classify(&self, source: &DocumentSource) -> SatyaResult<Classification> {
        canned_classification(&source.filename).ok_or_else(|| SatyaError::ClassificationFailed {
            reason: format!("unreadable or unsupported file '{}'", source.filename),
        })
    }

    fn face_match_score(
        &self,
        _photograph: &DocumentRecord,
        _identity: &DocumentRecord,
    ) -> SatyaResult<u8> {
        Ok(MOCK_FACE_MATCH_SCORE)
    }
}

/// The canned classification for a known demo filename.
///
/// Document numbers are masked here, at the adapter, exactly as a real
/// classification adapter must mask them before handing records to the core.
pub fn canned_classification(filename: &str) -> Option<Classification> {
    let classification = match filename {
        "pan.jpg" => Classification {
            detected_type: DocumentTypeId::Pan,
            extracted_fields: ExtractedFields {
                name: Some("Asha Kumar".to_string()),
                dob: Some("1990-12-31".to_string()),
                document_number_masked: Some(mask::mask_pan("ABCDE1234F")),
                father_name: Some("Rajan Kumar".to_string()),
                ..ExtractedFields::default()
            },
            text_snippet: "INCOME TAX DEPARTMENT  GOVT. OF INDIA  Permanent Account Number"
                .to_string(),
            confidence: 92,
            tamper_flag: false,
            notes: vec!["PAN layout check passed".to_string()],
        },

        "aadhaar.jpg" => Classification {
            detected_type: DocumentTypeId::Aadhaar,
            extracted_fields: ExtractedFields {
                name: Some("Asha Kumar".to_string()),
                dob: Some("1990-12-31".to_string()),
                document_number_masked: Some(mask::mask_aadhaar("1234 5678 9012")),
                address: Some("14 MG Road, Pune 411001".to_string()),
                ..ExtractedFields::default()
            },
            text_snippet: "GOVERNMENT OF INDIA  Unique Identification Authority".to_string(),
            confidence: 90,
            tamper_flag: false,
            notes: vec!["QR region legible".to_string()],
        },

        // Same card with visual editing artifacts near the date of birth.
        "aadhaar_tampered.jpg" => Classification {
            detected_type: DocumentTypeId::Aadhaar,
            extracted_fields: ExtractedFields {
                name: Some("Asha Kumar".to_string()),
                dob: Some("1990-12-31".to_string()),
                document_number_masked: Some(mask::mask_aadhaar("1234 5678 9012")),
                ..ExtractedFields::default()
            },
            text_snippet: "GOVERNMENT OF INDIA  Unique Identification Authority".to_string(),
            confidence: 78,
            tamper_flag: true,
            notes: vec!["font inconsistency near date of birth".to_string()],
        },

        // An Aadhaar whose printed name does not match the PAN above.
        "aadhaar_other_name.jpg" => Classification {
            detected_type: DocumentTypeId::Aadhaar,
            extracted_fields: ExtractedFields {
                name: Some("Asha Kumari".to_string()),
                dob: Some("1990-12-31".to_string()),
                document_number_masked: Some(mask::mask_aadhaar("9876 5432 1098")),
                address: Some("14 MG Road, Pune 411001".to_string()),
                ..ExtractedFields::default()
            },
            text_snippet: "GOVERNMENT OF INDIA  Unique Identification Authority".to_string(),
            confidence: 90,
            tamper_flag: false,
            notes: vec![],
        },

        "photo.jpg" => Classification {
            detected_type: DocumentTypeId::Photograph,
            extracted_fields: ExtractedFields::default(),
            text_snippet: String::new(),
            confidence: 95,
            tamper_flag: false,
            notes: vec!["single face detected".to_string()],
        },

        "utility_bill.pdf" => Classification {
            detected_type: DocumentTypeId::Utility,
            extracted_fields: ExtractedFields {
                name: Some("ASHA  KUMAR.".to_string()),
                address: Some("14 MG Road, Pune 411001".to_string()),
                document_number_masked: Some(mask::mask_last4("CA00118822334455")),
                bill_date: Some("2026-07-02".to_string()),
                ..ExtractedFields::default()
            },
            text_snippet: "MAHARASHTRA STATE ELECTRICITY  Bill for July 2026".to_string(),
            confidence: 88,
            tamper_flag: false,
            notes: vec!["bill date within last 3 months".to_string()],
        },

        "bank_statement.pdf" => Classification {
            detected_type: DocumentTypeId::BankStatement,
            extracted_fields: ExtractedFields {
                name: Some("Asha Kumar".to_string()),
                address: Some("14 MG Road, Pune 411001".to_string()),
                document_number_masked: Some(mask::mask_last4("004401234567")),
                ..ExtractedFields::default()
            },
            text_snippet: "Statement of account  01-Apr-2026 to 30-Jun-2026".to_string(),
            confidence: 86,
            tamper_flag: false,
            notes: vec![],
        },

        "salary_slip.pdf" => Classification {
            detected_type: DocumentTypeId::SalarySlip,
            extracted_fields: ExtractedFields {
                name: Some("Asha Kumar".to_string()),
                employer_name: Some("Nimbus Software Pvt Ltd".to_string()),
                salary: Some(84000.0),
                ..ExtractedFields::default()
            },
            text_snippet: "Nimbus Software Pvt Ltd  Payslip June 2026".to_string(),
            confidence: 87,
            tamper_flag: false,
            notes: vec![],
        },

        _ => return None,
    };

    Some(classification)
}
