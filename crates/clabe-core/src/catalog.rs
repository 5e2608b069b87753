//! The immutable bank catalog and its query surface.
//!
//! A [`BankCatalog`] is constructed once from a record list, indexed by
//! bank code, and never mutated afterwards. Lookups borrow from the
//! catalog; nothing is copied unless the caller asks for owned data.
//! The type is `Send + Sync` by construction, so a single catalog
//! instance can serve any number of concurrent callers without locking.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{ClabeError, ClabeResult};
use crate::types::{BankKind, BankRecord};

/// Width of a catalog key: bank codes are zero-padded 3-digit strings.
pub const BANK_CODE_LEN: usize = 3;

/// Provenance of the loaded catalog data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogMetadata {
    /// Date the upstream institution list was last revised.
    pub last_updated: NaiveDate,
    /// Label of the data source the catalog was built from.
    pub source: String,
}

impl CatalogMetadata {
    /// Creates catalog metadata.
    #[must_use]
    pub fn new(last_updated: NaiveDate, source: impl Into<String>) -> Self {
        Self {
            last_updated,
            source: source.into(),
        }
    }
}

/// Aggregate counts over the catalog, grouped by institution category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStatistics {
    /// Number of institutions in the catalog.
    pub total_banks: usize,
    /// Institution count per regulatory category.
    pub banks_by_kind: BTreeMap<BankKind, usize>,
    /// Copied from [`CatalogMetadata::last_updated`].
    pub last_updated: NaiveDate,
    /// Copied from [`CatalogMetadata::source`].
    pub source: String,
}

/// Read-only catalog of issuing institutions keyed by bank code.
///
/// Iteration order is the insertion order of the source data, which is
/// not necessarily sorted by code.
#[derive(Debug, Clone)]
pub struct BankCatalog {
    banks: Vec<BankRecord>,
    by_code: HashMap<String, usize>,
    metadata: CatalogMetadata,
}

impl BankCatalog {
    /// Builds a catalog from records, rejecting malformed and duplicate
    /// bank codes.
    ///
    /// An empty record list is allowed and produces an empty catalog.
    pub fn from_records(
        metadata: CatalogMetadata,
        records: Vec<BankRecord>,
    ) -> ClabeResult<Self> {
        let mut by_code = HashMap::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            if record.code.len() != BANK_CODE_LEN
                || !record.code.bytes().all(|b| b.is_ascii_digit())
            {
                return Err(ClabeError::invalid_bank_code(
                    &record.code,
                    "expected exactly 3 decimal digits",
                ));
            }
            if by_code.insert(record.code.clone(), position).is_some() {
                return Err(ClabeError::duplicate_bank_code(&record.code));
            }
        }

        log::debug!(
            "constructed bank catalog: {} institutions from {}",
            records.len(),
            metadata.source
        );

        Ok(Self {
            banks: records,
            by_code,
            metadata,
        })
    }

    /// Returns every institution in insertion order, as owned copies.
    ///
    /// Listings always report `active: true`.
    #[must_use]
    pub fn list_banks(&self) -> Vec<BankRecord> {
        self.banks
            .iter()
            .cloned()
            .map(|mut bank| {
                bank.active = true;
                bank
            })
            .collect()
    }

    /// Exact-match lookup by an already-normalized 3-digit code.
    #[must_use]
    pub fn get(&self, code: &str) -> Option<&BankRecord> {
        self.by_code.get(code).map(|&position| &self.banks[position])
    }

    /// Looks up an institution by code, normalizing the input first.
    ///
    /// The code is trimmed and left-padded with `'0'` to 3 characters,
    /// so `"2"` and `"002"` resolve to the same record. Empty input, and
    /// anything that does not normalize to a known key (including codes
    /// longer than 3 characters, which padding cannot shorten), returns
    /// `None`.
    #[must_use]
    pub fn find_by_code(&self, code: &str) -> Option<&BankRecord> {
        let trimmed = code.trim();
        if trimmed.is_empty() {
            return None;
        }

        let padded = format!("{:0>width$}", trimmed, width = BANK_CODE_LEN);
        self.get(&padded)
    }

    /// Case-insensitive substring search across short, full, and display
    /// names.
    ///
    /// Empty and whitespace-only queries return no matches. Results keep
    /// catalog iteration order; each record is tested once, so no
    /// de-duplication is needed.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Vec<&BankRecord> {
        let needle = name.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        self.banks
            .iter()
            .filter(|bank| bank.name_matches(&needle))
            .collect()
    }

    /// Aggregates institution counts in a single pass over the catalog.
    #[must_use]
    pub fn statistics(&self) -> CatalogStatistics {
        let mut banks_by_kind = BTreeMap::new();
        for bank in &self.banks {
            *banks_by_kind.entry(bank.kind).or_insert(0) += 1;
        }

        CatalogStatistics {
            total_banks: self.banks.len(),
            banks_by_kind,
            last_updated: self.metadata.last_updated,
            source: self.metadata.source.clone(),
        }
    }

    /// Number of institutions in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.banks.len()
    }

    /// Returns true if the catalog holds no institutions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.banks.is_empty()
    }

    /// Iterates over records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &BankRecord> {
        self.banks.iter()
    }

    /// Provenance of the catalog data.
    #[must_use]
    pub fn metadata(&self) -> &CatalogMetadata {
        &self.metadata
    }
}
