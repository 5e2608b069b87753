//! Error types for the Clabe library.
//!
//! Only fallible construction paths return errors. The query and
//! validation surface reports malformed input through sentinel values
//! (`false`, `None`, empty collections) and never through this type.

use thiserror::Error;

/// A specialized Result type for Clabe operations.
pub type ClabeResult<T> = Result<T, ClabeError>;

/// The main error type for Clabe operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClabeError {
    /// A record's bank code does not satisfy the 3-digit key invariant.
    #[error("Invalid bank code '{code}': {reason}")]
    InvalidBankCode {
        /// The offending code as supplied.
        code: String,
        /// Description of what is wrong with it.
        reason: String,
    },

    /// Two catalog records share the same bank code.
    #[error("Duplicate bank code '{code}' in catalog")]
    DuplicateBankCode {
        /// The code that appears more than once.
        code: String,
    },
}

impl ClabeError {
    /// Creates an invalid bank code error.
    #[must_use]
    pub fn invalid_bank_code(code: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidBankCode {
            code: code.into(),
            reason: reason.into(),
        }
    }

    /// Creates a duplicate bank code error.
    #[must_use]
    pub fn duplicate_bank_code(code: impl Into<String>) -> Self {
        Self::DuplicateBankCode { code: code.into() }
    }
}
