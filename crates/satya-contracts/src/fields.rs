//! Extracted document fields.
//!
//! Every attribute is best-effort: absence is never an error. Malformed
//! values are dropped by [`ExtractedFields::sanitize`] and surfaced as notes
//! on the owning record instead of propagating.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Placeholder written over personally identifiable values when the result
/// is assembled without consent.
pub const REDACTED_PLACEHOLDER: &str = "[redacted]";

/// Date format expected for `dob`, `expiry_date`, and `bill_date`.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Structured fields extracted from one document by the external classifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedFields {
    /// Name as printed on the document.
    pub name: Option<String>,
    /// Date of birth, `YYYY-MM-DD`.
    pub dob: Option<String>,
    /// Document number, already masked per the masking contract.
    pub document_number_masked: Option<String>,
    /// Address block.
    pub address: Option<String>,
    /// Father's name (PAN).
    pub father_name: Option<String>,
    /// Nationality (Passport).
    pub nationality: Option<String>,
    /// Expiry date, `YYYY-MM-DD` (Passport, DrivingLicense).
    pub expiry_date: Option<String>,
    /// Employer name (SalarySlip, Form16).
    pub employer_name: Option<String>,
    /// Salary or income figure.
    pub salary: Option<f64>,
    /// Financial year (Form16, ITR).
    pub financial_year: Option<String>,
    /// Bill date, `YYYY-MM-DD` (Utility).
    pub bill_date: Option<String>,
}

impl ExtractedFields {
    /// Drop malformed date values, returning one note per dropped field.
    ///
    /// A date that does not parse as `YYYY-MM-DD` is treated as absent; the
    /// note carries the original value so the audit trail stays complete.
    pub fn sanitize(&mut self) -> Vec<String> {
        let mut notes = Vec::new();
        for (label, field) in [
            ("date-of-birth", &mut self.dob),
            ("expiry date", &mut self.expiry_date),
            ("bill date", &mut self.bill_date),
        ] {
            if let Some(value) = field.as_deref() {
                if NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).is_err() {
                    notes.push(format!("malformed {label} '{value}' treated as absent"));
                    *field = None;
                }
            }
        }
        notes
    }

    /// True if any field carries a value.
    pub fn has_pii(&self) -> bool {
        self.name.is_some()
            || self.dob.is_some()
            || self.document_number_masked.is_some()
            || self.address.is_some()
            || self.father_name.is_some()
            || self.nationality.is_some()
            || self.expiry_date.is_some()
            || self.employer_name.is_some()
            || self.salary.is_some()
            || self.financial_year.is_some()
            || self.bill_date.is_some()
    }

    /// A copy with every present value replaced by the redaction placeholder.
    ///
    /// Which fields were present remains visible; their values do not.
    /// Numeric fields cannot hold the placeholder and are dropped entirely.
    pub fn redacted(&self) -> Self {
        fn blank(v: &Option<String>) -> Option<String> {
            v.as_ref().map(|_| REDACTED_PLACEHOLDER.to_string())
        }
        Self {
            name: blank(&self.name),
            dob: blank(&self.dob),
            document_number_masked: blank(&self.document_number_masked),
            address: blank(&self.address),
            father_name: blank(&self.father_name),
            nationality: blank(&self.nationality),
            expiry_date: blank(&self.expiry_date),
            employer_name: blank(&self.employer_name),
            salary: None,
            financial_year: blank(&self.financial_year),
            bill_date: blank(&self.bill_date),
        }
    }

    /// True if every present value is the redaction placeholder.
    pub fn is_redacted(&self) -> bool {
        let strings = [
            &self.name,
            &self.dob,
            &self.document_number_masked,
            &self.address,
            &self.father_name,
            &self.nationality,
            &self.expiry_date,
            &self.employer_name,
            &self.financial_year,
            &self.bill_date,
        ];
        self.salary.is_none()
            && strings
                .into_iter()
                .flatten()
                .all(|v| v == REDACTED_PLACEHOLDER)
    }
}
