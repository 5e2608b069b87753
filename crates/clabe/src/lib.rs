//! # Clabe
//!
//! Mexican CLABE validation, parsing, and bank catalog lookups.
//!
//! This facade crate re-exports the public API of `clabe-core` and
//! `clabe-banxico` and binds the core operations to the built-in Banxico
//! catalog, so common calls need no setup:
//!
//! ```rust
//! assert!(clabe::validate_clabe("002010077777777771"));
//!
//! let details = clabe::parse_clabe("002-010-07777777777-1").unwrap();
//! assert_eq!(details.bank.display_name, "BANAMEX");
//! assert_eq!(details.account_number, "07777777777");
//!
//! let generated = clabe::generate_clabe("072", "010", "12345678901").unwrap();
//! assert!(clabe::validate_clabe(&generated));
//! ```
//!
//! Callers with their own institution set use the injected forms in
//! [`engine`] against a [`BankCatalog`] they construct themselves.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub use clabe_banxico::{catalog, data};
pub use clabe_core::checksum;
pub use clabe_core::clabe as engine;
pub use clabe_core::{
    BankCatalog, BankKind, BankRecord, CatalogMetadata, CatalogStatistics, ClabeDetails,
    ClabeError, ClabeResult,
};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::{
        find_bank_by_code, find_banks_by_name, format_clabe, generate_clabe, list_banks,
        parse_clabe, statistics, validate_clabe,
    };
    pub use clabe_core::prelude::*;
}

/// Returns every institution in the built-in catalog, in catalog order.
#[must_use]
pub fn list_banks() -> Vec<BankRecord> {
    catalog().list_banks()
}

/// Looks up an institution by code.
///
/// The code is trimmed and zero-padded, so `"2"` and `"002"` resolve to
/// the same record. Unknown codes return `None`.
#[must_use]
pub fn find_bank_by_code(code: &str) -> Option<&'static BankRecord> {
    catalog().find_by_code(code)
}

/// Case-insensitive name search across short, full, and display names.
#[must_use]
pub fn find_banks_by_name(name: &str) -> Vec<&'static BankRecord> {
    catalog().find_by_name(name)
}

/// Validates a CLABE against the built-in catalog.
#[must_use]
pub fn validate_clabe(input: &str) -> bool {
    engine::validate(catalog(), input)
}

/// Parses a CLABE into its field breakdown; `None` if invalid.
#[must_use]
pub fn parse_clabe(input: &str) -> Option<ClabeDetails> {
    engine::parse(catalog(), input)
}

/// Builds a CLABE from bank code, branch code, and account number;
/// `None` if the bank is unknown or a part exceeds its field width.
#[must_use]
pub fn generate_clabe(bank_code: &str, branch_code: &str, account_number: &str) -> Option<String> {
    engine::generate(catalog(), bank_code, branch_code, account_number)
}

/// Renders a valid CLABE as `BBB-SSS-AAAAAAAAAAA-C`; invalid input is
/// returned unchanged.
#[must_use]
pub fn format_clabe(input: &str) -> String {
    engine::format(catalog(), input)
}

/// Aggregate statistics over the built-in catalog.
#[must_use]
pub fn statistics() -> CatalogStatistics {
    catalog().statistics()
}

#[cfg(test)]
mod validation_tests;
