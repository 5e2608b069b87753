//! Issuing institution types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Regulatory category of a catalog institution.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
#[non_exhaustive]
pub enum BankKind {
    /// Full-service commercial bank (banca múltiple).
    Commercial,
    /// State-owned development bank (banca de desarrollo).
    Development,
    /// Popular savings and credit society (SOFIPO).
    Sofipo,
    /// Electronic payment funds institution or transfer clearing house.
    PaymentInstitution,
}

impl BankKind {
    /// Returns the lowercase category label.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            BankKind::Commercial => "commercial",
            BankKind::Development => "development",
            BankKind::Sofipo => "sofipo",
            BankKind::PaymentInstitution => "payment-institution",
        }
    }

    /// Parses a category from its label.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "commercial" => Some(BankKind::Commercial),
            "development" => Some(BankKind::Development),
            "sofipo" => Some(BankKind::Sofipo),
            "payment-institution" => Some(BankKind::PaymentInstitution),
            _ => None,
        }
    }
}

impl fmt::Display for BankKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One issuing institution in the bank catalog.
///
/// Records are constructed when the catalog is built and never mutated
/// afterwards. `code` is the zero-padded 3-digit Banxico identifier and
/// uniquely keys the record within a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankRecord {
    /// Zero-padded 3-digit institution code (the catalog key).
    pub code: String,
    /// Short conversational name, e.g. "Banorte".
    pub short_name: String,
    /// Full legal name of the institution.
    pub full_name: String,
    /// Uppercase display name as used on statements and transfer screens.
    pub display_name: String,
    /// Regulatory category.
    #[serde(rename = "type")]
    pub kind: BankKind,
    /// Whether the institution currently participates in interbank
    /// transfers. Every entry in the shipped catalog is active.
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl BankRecord {
    /// Creates an active institution record.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        short_name: impl Into<String>,
        full_name: impl Into<String>,
        display_name: impl Into<String>,
        kind: BankKind,
    ) -> Self {
        Self {
            code: code.into(),
            short_name: short_name.into(),
            full_name: full_name.into(),
            display_name: display_name.into(),
            kind,
            active: true,
        }
    }

    /// Returns true if any of the three names contains `needle` as a
    /// substring. `needle` must already be lowercased.
    pub(crate) fn name_matches(&self, needle: &str) -> bool {
        self.short_name.to_lowercase().contains(needle)
            || self.full_name.to_lowercase().contains(needle)
            || self.display_name.to_lowercase().contains(needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn banamex() -> BankRecord {
        BankRecord::new(
            "002",
            "Banamex",
            "Banco Nacional de México, S.A.",
            "BANAMEX",
            BankKind::Commercial,
        )
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(BankKind::Commercial.as_str(), "commercial");
        assert_eq!(BankKind::Development.as_str(), "development");
        assert_eq!(BankKind::Sofipo.as_str(), "sofipo");
        assert_eq!(BankKind::PaymentInstitution.as_str(), "payment-institution");
    }

    #[test]
    fn test_kind_from_label() {
        assert_eq!(BankKind::from_label("commercial"), Some(BankKind::Commercial));
        assert_eq!(BankKind::from_label("  Development "), Some(BankKind::Development));
        assert_eq!(
            BankKind::from_label("PAYMENT-INSTITUTION"),
            Some(BankKind::PaymentInstitution)
        );
        assert_eq!(BankKind::from_label("brokerage"), None);
        assert_eq!(BankKind::from_label(""), None);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(format!("{}", BankKind::Sofipo), "sofipo");
    }

    #[test]
    fn test_new_record_is_active() {
        assert!(banamex().active);
    }

    #[test]
    fn test_name_matches_is_case_insensitive() {
        let bank = banamex();
        assert!(bank.name_matches("banamex"));
        assert!(bank.name_matches("nacional de méxico"));
        assert!(!bank.name_matches("banorte"));
    }

    #[test]
    fn test_serde_kind_renamed_to_type() {
        let json = serde_json::to_value(banamex()).unwrap();
        assert_eq!(json["type"], "commercial");
        assert_eq!(json["code"], "002");
        assert_eq!(json["active"], true);
    }

    #[test]
    fn test_serde_round_trip() {
        let bank = banamex();
        let json = serde_json::to_string(&bank).unwrap();
        let parsed: BankRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(bank, parsed);
    }

    #[test]
    fn test_serde_active_defaults_to_true() {
        let json = r#"{
            "code": "072",
            "short_name": "Banorte",
            "full_name": "Banco Mercantil del Norte, S.A.",
            "display_name": "BANORTE",
            "type": "commercial"
        }"#;
        let parsed: BankRecord = serde_json::from_str(json).unwrap();
        assert!(parsed.active);
    }
}
