//! # satya-contracts
//!
//! Shared types, error taxonomy, and masking contracts for the SATYA
//! document-verification runtime.
//!
//! All crates in the workspace import from here. No business logic lives in
//! this crate — only data definitions, the error type, and the pure masking
//! and sanitation helpers that belong to the data contract itself.

pub mod checks;
pub mod decision;
pub mod document;
pub mod error;
pub mod fields;
pub mod mask;
pub mod record;
pub mod requirement;
pub mod result;
