//! # Clabe Core
//!
//! Core types, checksum kernel, and catalog abstractions for the Clabe
//! library.
//!
//! This crate provides the building blocks for working with Mexican
//! interbank account numbers:
//!
//! - **Types**: [`BankRecord`] and [`BankKind`] describing issuing institutions
//! - **Checksum**: the cyclic 3-7-1 weighted check digit kernel
//! - **Catalog**: the immutable [`BankCatalog`] lookup surface
//! - **Engine**: validate / parse / generate / format over an injected catalog
//!
//! ## Design Philosophy
//!
//! - **Sentinel returns**: the validation surface never panics and never
//!   returns `Err` for malformed input, so callers compose checks in
//!   straight-line code
//! - **Load once, borrow everywhere**: a catalog is constructed once and
//!   passed by shared reference into every operation
//! - **Named field layout**: CLABE offsets and widths are constants, not
//!   bare indices at use sites
//!
//! ## Example
//!
//! ```rust
//! use clabe_core::catalog::{BankCatalog, CatalogMetadata};
//! use clabe_core::clabe;
//! use clabe_core::types::{BankKind, BankRecord};
//!
//! let catalog = BankCatalog::from_records(
//!     CatalogMetadata::new(
//!         chrono::NaiveDate::from_ymd_opt(2026, 5, 29).unwrap(),
//!         "example",
//!     ),
//!     vec![BankRecord::new(
//!         "002",
//!         "Banamex",
//!         "Banco Nacional de México, S.A.",
//!         "BANAMEX",
//!         BankKind::Commercial,
//!     )],
//! )
//! .unwrap();
//!
//! assert!(clabe::validate(&catalog, "002010077777777771"));
//! assert_eq!(
//!     clabe::format(&catalog, "002010077777777771"),
//!     "002-010-07777777777-1"
//! );
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::return_self_not_must_use)]

pub mod catalog;
pub mod checksum;
pub mod clabe;
pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::catalog::{BankCatalog, CatalogMetadata, CatalogStatistics};
    pub use crate::clabe::ClabeDetails;
    pub use crate::error::{ClabeError, ClabeResult};
    pub use crate::types::{BankKind, BankRecord};
}

// Re-export commonly used types at crate root
pub use catalog::{BankCatalog, CatalogMetadata, CatalogStatistics};
pub use clabe::ClabeDetails;
pub use error::{ClabeError, ClabeResult};
pub use types::{BankKind, BankRecord};
