//! CLABE validation, parsing, generation, and formatting.
//!
//! A CLABE (Clave Bancaria Estandarizada) is an 18-digit interbank
//! account number:
//!
//! | Field | Digits | Length |
//! |---|---|---|
//! | bank code | 0–2 | 3 |
//! | branch code | 3–5 | 3 |
//! | account number | 6–16 | 11 |
//! | check digit | 17 | 1 |
//!
//! The branch code and account number are opaque to validation; only
//! the bank code (checked against the catalog) and the check digit
//! (recomputed from the first 17 digits) carry semantics.
//!
//! Every function here is a pure read over an injected [`BankCatalog`]
//! reference. Malformed input is reported through sentinel returns
//! (`false`, `None`, or the unchanged input), never through panics.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::catalog::BankCatalog;
use crate::checksum;
use crate::types::BankRecord;

/// Total length of a normalized CLABE.
pub const CLABE_LEN: usize = 18;

/// Digits naming the issuing institution.
pub const BANK_CODE_DIGITS: Range<usize> = 0..3;

/// Digits naming the issuing branch (plaza).
pub const BRANCH_DIGITS: Range<usize> = 3..6;

/// Digits of the account identifier.
pub const ACCOUNT_DIGITS: Range<usize> = 6..17;

/// Position of the check digit.
pub const CHECK_DIGIT_INDEX: usize = 17;

/// Width of the branch code field.
pub const BRANCH_LEN: usize = BRANCH_DIGITS.end - BRANCH_DIGITS.start;

/// Width of the account number field.
pub const ACCOUNT_LEN: usize = ACCOUNT_DIGITS.end - ACCOUNT_DIGITS.start;

/// Field breakdown of a validated CLABE.
///
/// Produced by [`parse`]. Every field is a substring of the normalized
/// CLABE, with the matched catalog record attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClabeDetails {
    /// The normalized 18-digit CLABE.
    pub clabe: String,
    /// The issuing institution matched by the bank code prefix.
    pub bank: BankRecord,
    /// 3-digit bank code.
    pub bank_code: String,
    /// 3-digit branch code.
    pub branch_code: String,
    /// 11-digit account number.
    pub account_number: String,
    /// The single check digit.
    pub check_digit: String,
    /// Always true on a returned value; parsing fails otherwise.
    pub is_valid: bool,
}

/// Strips every whitespace character and hyphen from the input,
/// including separators inside the number, and trims nothing else.
#[must_use]
pub fn normalize(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect()
}

/// Validates a CLABE against the catalog.
///
/// Accepts iff the normalized input is exactly 18 decimal digits, the
/// bank code prefix names a catalog institution, and the final digit
/// equals the weighted checksum of the first 17. Every failure path
/// returns false.
#[must_use]
pub fn validate(catalog: &BankCatalog, input: &str) -> bool {
    let clabe = normalize(input);
    if clabe.len() != CLABE_LEN || !clabe.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    if catalog.get(&clabe[BANK_CODE_DIGITS]).is_none() {
        return false;
    }

    checksum::verify(&clabe)
}

/// Extracts the field breakdown of a valid CLABE.
///
/// Returns `None` whenever [`validate`] would return false.
#[must_use]
pub fn parse(catalog: &BankCatalog, input: &str) -> Option<ClabeDetails> {
    if !validate(catalog, input) {
        return None;
    }

    let clabe = normalize(input);
    let bank = catalog.get(&clabe[BANK_CODE_DIGITS])?.clone();

    Some(ClabeDetails {
        bank_code: clabe[BANK_CODE_DIGITS].to_string(),
        branch_code: clabe[BRANCH_DIGITS].to_string(),
        account_number: clabe[ACCOUNT_DIGITS].to_string(),
        check_digit: clabe[CHECK_DIGIT_INDEX..].to_string(),
        bank,
        clabe,
        is_valid: true,
    })
}

/// Builds a CLABE from its parts.
///
/// The bank code resolves through [`BankCatalog::find_by_code`], so
/// short codes are zero-padded (`"2"` → `"002"`) while unknown and
/// overlong codes reject. Branch and account numbers are left-padded
/// with `'0'` to their field widths; inputs already wider than the
/// field reject, since padding cannot shorten them. Non-digit input
/// rejects through the checksum kernel. The returned CLABE always
/// satisfies [`validate`].
#[must_use]
pub fn generate(
    catalog: &BankCatalog,
    bank_code: &str,
    branch_code: &str,
    account_number: &str,
) -> Option<String> {
    let bank = catalog.find_by_code(bank_code)?;

    let branch = pad_left(branch_code, BRANCH_LEN)?;
    let account = pad_left(account_number, ACCOUNT_LEN)?;

    let base = format!("{}{}{}", bank.code, branch, account);
    let digit = checksum::check_digit(&base)?;
    Some(format!("{base}{digit}"))
}

/// Renders a valid CLABE as `BBB-SSS-AAAAAAAAAAA-C`.
///
/// Invalid input is returned unchanged.
#[must_use]
pub fn format(catalog: &BankCatalog, input: &str) -> String {
    if !validate(catalog, input) {
        return input.to_string();
    }

    let clabe = normalize(input);
    format!(
        "{}-{}-{}-{}",
        &clabe[BANK_CODE_DIGITS],
        &clabe[BRANCH_DIGITS],
        &clabe[ACCOUNT_DIGITS],
        &clabe[CHECK_DIGIT_INDEX..],
    )
}

/// Left-pads with `'0'` to `width`; `None` if the input is already
/// wider than the field.
fn pad_left(value: &str, width: usize) -> Option<String> {
    let padded = format!("{value:0>width$}");
    (padded.len() == width).then_some(padded)
}
