//! # satya-ref-banking
//!
//! Banking reference runtime for the SATYA document-verification system.
//!
//! Demonstrates four verification scenarios using mock data:
//!
//! 1. **Savings Account Opening** — complete consistent upload set, APPROVED,
//!    plus the consent-withheld redaction path.
//! 2. **Missing Documents** — REJECTED with per-slot next actions, plus the
//!    unknown-purpose baseline KYC fallback.
//! 3. **Tampered Document** — REJECTED on tamper indicators despite every
//!    slot being satisfied.
//! 4. **Identity Mismatch** — REVIEW_REQUIRED with human escalation, plus
//!    classification-failure degradation.
//!
//! All data is hardcoded and fictional. No external API calls are made.

pub mod mock_data;
pub mod scenarios;
