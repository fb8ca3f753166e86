//! Banking reference runtime demo scenarios.
//!
//! Each scenario is a self-contained module that wires up real SATYA
//! components (requirement rules, verification pipeline, mock classifier)
//! with canned banking uploads and demonstrates a distinct decision path.

pub mod account_opening;
pub mod identity_mismatch;
pub mod missing_documents;
pub mod tampered_document;
