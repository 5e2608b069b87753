//! Domain types for CLABE validation and catalog lookups.
//!
//! This module provides the data-model side of the crate:
//!
//! - [`BankRecord`]: one issuing institution in the catalog
//! - [`BankKind`]: regulatory category of an institution

mod bank;

pub use bank::{BankKind, BankRecord};
