//! Masking rules for sensitive document numbers.
//!
//! These formats are a hard external contract: no representation downstream
//! of the classification boundary may carry an unmasked number.
//!
//!   Aadhaar  → `xxxx-xxxx-<last4>`
//!   PAN      → `<first2>***<digits+check>`   e.g. `AB***1234C`
//!   Passport → `<first1>****<last3>`
//!   others   → `****<last4>`

use crate::document::DocumentTypeId;

/// Mask an Aadhaar number, keeping only the last four digits.
///
/// Separators and spaces in the input are ignored.
pub fn mask_aadhaar(raw: &str) -> String {
    let digits: Vec<char> = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() < 4 {
        return mask_last4(raw);
    }
    let last4: String = digits[digits.len() - 4..].iter().collect();
    format!("xxxx-xxxx-{last4}")
}

/// Mask a PAN, keeping the first two letters, the digit block, and the
/// trailing check letter. Inputs that are not the standard ten-character
/// layout fall back to the generic rule.
pub fn mask_pan(raw: &str) -> String {
    let trimmed = raw.trim();
    let chars: Vec<char> = trimmed.chars().collect();
    let standard = chars.len() == 10
        && chars[..5].iter().all(|c| c.is_ascii_alphabetic())
        && chars[5..9].iter().all(|c| c.is_ascii_digit())
        && chars[9].is_ascii_alphabetic();
    if !standard {
        return mask_last4(trimmed);
    }
    let head: String = chars[..2].iter().collect();
    let tail: String = chars[5..].iter().collect();
    format!("{head}***{tail}")
}

/// Mask a passport number, keeping the first character and the last three.
pub fn mask_passport(raw: &str) -> String {
    let trimmed = raw.trim();
    let chars: Vec<char> = trimmed.chars().collect();
    if chars.len() < 5 {
        return mask_last4(trimmed);
    }
    let last3: String = chars[chars.len() - 3..].iter().collect();
    format!("{}****{last3}", chars[0])
}

/// Generic rule for account and document numbers: only the last four
/// characters survive.
pub fn mask_last4(raw: &str) -> String {
    let chars: Vec<char> = raw.trim().chars().collect();
    if chars.len() <= 4 {
        return "****".to_string();
    }
    let last4: String = chars[chars.len() - 4..].iter().collect();
    format!("****{last4}")
}

/// Apply the masking rule appropriate for `doc_type` to `raw`.
pub fn mask_document_number(doc_type: DocumentTypeId, raw: &str) -> String {
    match doc_type {
        DocumentTypeId::Aadhaar => mask_aadhaar(raw),
        DocumentTypeId::Pan => mask_pan(raw),
        DocumentTypeId::Passport => mask_passport(raw),
        _ => mask_last4(raw),
    }
}

/// Heuristic for values that escaped masking: every masked format above
/// leaves at most four consecutive digits, so a run of five or more means
/// the value is still raw.
pub fn looks_unmasked(value: &str) -> bool {
    let mut run = 0usize;
    for c in value.chars() {
        if c.is_ascii_digit() {
            run += 1;
            if run >= 5 {
                return true;
            }
        } else {
            run = 0;
        }
    }
    false
}
