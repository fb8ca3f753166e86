//! The document catalog: the closed set of document types SATYA recognizes.
//!
//! Classifier labels outside this set map to `Other` — the catalog never
//! rejects an input. Wire representation is the exact label strings used by
//! the verification output contract.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Enumerated identifier for a known document type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentTypeId {
    Aadhaar,
    #[serde(rename = "PAN")]
    Pan,
    Passport,
    #[serde(rename = "VoterID")]
    VoterId,
    DrivingLicense,
    Utility,
    BankStatement,
    SalarySlip,
    Form16,
    #[serde(rename = "ITR")]
    Itr,
    Photograph,
    Signature,
    ChequeLeaf,
    #[serde(rename = "GSTCertificate")]
    GstCertificate,
    IncorporationCertificate,
    Other,
}

impl DocumentTypeId {
    /// Every catalog entry, in declaration order.
    pub const ALL: [DocumentTypeId; 16] = [
        DocumentTypeId::Aadhaar,
        DocumentTypeId::Pan,
        DocumentTypeId::Passport,
        DocumentTypeId::VoterId,
        DocumentTypeId::DrivingLicense,
        DocumentTypeId::Utility,
        DocumentTypeId::BankStatement,
        DocumentTypeId::SalarySlip,
        DocumentTypeId::Form16,
        DocumentTypeId::Itr,
        DocumentTypeId::Photograph,
        DocumentTypeId::Signature,
        DocumentTypeId::ChequeLeaf,
        DocumentTypeId::GstCertificate,
        DocumentTypeId::IncorporationCertificate,
        DocumentTypeId::Other,
    ];

    /// The wire label for this type, identical to the serde representation.
    pub fn as_label(&self) -> &'static str {
        match self {
            DocumentTypeId::Aadhaar => "Aadhaar",
            DocumentTypeId::Pan => "PAN",
            DocumentTypeId::Passport => "Passport",
            DocumentTypeId::VoterId => "VoterID",
            DocumentTypeId::DrivingLicense => "DrivingLicense",
            DocumentTypeId::Utility => "Utility",
            DocumentTypeId::BankStatement => "BankStatement",
            DocumentTypeId::SalarySlip => "SalarySlip",
            DocumentTypeId::Form16 => "Form16",
            DocumentTypeId::Itr => "ITR",
            DocumentTypeId::Photograph => "Photograph",
            DocumentTypeId::Signature => "Signature",
            DocumentTypeId::ChequeLeaf => "ChequeLeaf",
            DocumentTypeId::GstCertificate => "GSTCertificate",
            DocumentTypeId::IncorporationCertificate => "IncorporationCertificate",
            DocumentTypeId::Other => "Other",
        }
    }

    /// Resolve a label string to a catalog entry.
    ///
    /// Unrecognized labels map to `Other` — classifier output never fails
    /// catalog resolution.
    pub fn from_label(label: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|t| t.as_label() == label)
            .unwrap_or(DocumentTypeId::Other)
    }

    /// Strict variant of [`from_label`](Self::from_label) for configuration
    /// input, where a typo should surface instead of degrading to `Other`.
    pub fn try_from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_label() == label)
    }

    /// True for types that identify a person (the identity-document set).
    ///
    /// Used by the consistency checker to decide whether a face match is
    /// applicable and by the decision engine's identity-mismatch gate.
    pub fn is_identity(&self) -> bool {
        matches!(
            self,
            DocumentTypeId::Aadhaar
                | DocumentTypeId::Pan
                | DocumentTypeId::Passport
                | DocumentTypeId::VoterId
                | DocumentTypeId::DrivingLicense
        )
    }
}

impl fmt::Display for DocumentTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_label())
    }
}
