//! # Clabe Banxico
//!
//! The embedded Mexican institution catalog for the Clabe library.
//!
//! This crate ships the Banxico/SPEI participant table and exposes it as
//! a process-wide [`BankCatalog`], built once on first use and immutable
//! for the process lifetime. Callers who need a different institution
//! set construct their own catalog through
//! [`BankCatalog::from_records`](clabe_core::catalog::BankCatalog::from_records)
//! and bypass this crate entirely.
//!
//! ## Example
//!
//! ```rust
//! let catalog = clabe_banxico::catalog();
//! let banorte = catalog.find_by_code("72").unwrap();
//! assert_eq!(banorte.display_name, "BANORTE");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

use chrono::NaiveDate;
use once_cell::sync::Lazy;

use clabe_core::catalog::{BankCatalog, CatalogMetadata};

pub mod data;

static CATALOG: Lazy<BankCatalog> = Lazy::new(|| {
    let last_updated =
        NaiveDate::from_ymd_opt(2026, 5, 29).expect("literal revision date is valid");
    let metadata = CatalogMetadata::new(last_updated, "Banco de México (Banxico)");
    BankCatalog::from_records(metadata, data::records())
        .expect("embedded institution table is well-formed")
});

/// Returns the process-wide Banxico catalog, built on first use.
///
/// The reference is `'static` and the catalog never changes, so it can
/// be shared freely across threads.
#[must_use]
pub fn catalog() -> &'static BankCatalog {
    &CATALOG
}
