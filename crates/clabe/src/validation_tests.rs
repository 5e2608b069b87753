//! Validation test suite.
//!
//! Known-value cases for the CLABE check digit, the engine operations,
//! and catalog lookups, exercised against the built-in Banxico catalog.

#[cfg(test)]
mod checksum_validation {
    use crate::checksum;

    // =========================================================================
    // Check digit reference values
    // =========================================================================

    #[test]
    fn test_cs_001_banamex_reference() {
        // 002-010-07777777777: weighted sum 289, remainder 9, digit 1
        assert_eq!(checksum::check_digit("00201007777777777"), Some(1));
    }

    #[test]
    fn test_cs_002_bbva_reference() {
        // 012-180-00123456789: weighted sum 251, remainder 1, digit 9
        assert_eq!(checksum::check_digit("01218000123456789"), Some(9));
    }

    #[test]
    fn test_cs_003_banorte_reference() {
        // 072-010-00000012345: weighted sum 125, remainder 5, digit 5
        assert_eq!(checksum::check_digit("07201000000012345"), Some(5));
    }

    #[test]
    fn test_cs_004_stp_reference() {
        // 646-180-12345678901: weighted sum 277, remainder 7, digit 3
        assert_eq!(checksum::check_digit("64618012345678901"), Some(3));
    }

    #[test]
    fn test_cs_005_zero_remainder() {
        assert_eq!(checksum::check_digit("00000000000000000"), Some(0));
    }
}

#[cfg(test)]
mod engine_validation {
    use crate::{format_clabe, generate_clabe, parse_clabe, validate_clabe};

    // =========================================================================
    // validate
    // =========================================================================

    #[test]
    fn test_val_001_accepts_valid_banamex_clabe() {
        assert!(validate_clabe("002010077777777771"));
    }

    #[test]
    fn test_val_002_rejects_seventeen_digits() {
        assert!(!validate_clabe("00201007777777777"));
    }

    #[test]
    fn test_val_003_rejects_nineteen_digits() {
        assert!(!validate_clabe("0020100777777777712"));
    }

    #[test]
    fn test_val_004_rejects_unknown_bank() {
        assert!(!validate_clabe("999010077777777771"));
    }

    #[test]
    fn test_val_005_rejects_bad_check_digit() {
        assert!(!validate_clabe("002010077777777779"));
    }

    #[test]
    fn test_val_006_accepts_spaces_and_hyphens() {
        assert!(validate_clabe("002 010 077777777771"));
        assert!(validate_clabe("002-010-07777777777-1"));
    }

    #[test]
    fn test_val_007_rejects_letters() {
        assert!(!validate_clabe("002010077777777A71"));
    }

    // =========================================================================
    // parse
    // =========================================================================

    #[test]
    fn test_par_001_extracts_all_fields() {
        let details = parse_clabe("002010077777777771").unwrap();
        assert_eq!(details.clabe, "002010077777777771");
        assert_eq!(details.bank_code, "002");
        assert_eq!(details.branch_code, "010");
        assert_eq!(details.account_number, "07777777777");
        assert_eq!(details.check_digit, "1");
        assert_eq!(details.bank.display_name, "BANAMEX");
        assert!(details.is_valid);
    }

    #[test]
    fn test_par_002_returns_none_for_invalid() {
        assert!(parse_clabe("123456789012345678").is_none());
    }

    // =========================================================================
    // generate
    // =========================================================================

    #[test]
    fn test_gen_001_round_trips_through_validate() {
        let clabe = generate_clabe("002", "010", "07777777777").unwrap();
        assert_eq!(clabe.len(), 18);
        assert!(clabe.starts_with("002010"));
        assert!(validate_clabe(&clabe));
        assert_eq!(clabe, "002010077777777771");
    }

    #[test]
    fn test_gen_002_pads_short_bank_code() {
        let clabe = generate_clabe("2", "10", "7777777777").unwrap();
        assert_eq!(clabe, "002010077777777771");
    }

    #[test]
    fn test_gen_003_rejects_unknown_bank() {
        assert!(generate_clabe("999", "010", "07777777777").is_none());
    }

    #[test]
    fn test_gen_004_rejects_overlong_parts() {
        assert!(generate_clabe("0002", "010", "07777777777").is_none());
        assert!(generate_clabe("002", "0100", "07777777777").is_none());
        assert!(generate_clabe("002", "010", "007777777777").is_none());
    }

    // =========================================================================
    // format
    // =========================================================================

    #[test]
    fn test_fmt_001_renders_hyphenated_fields() {
        assert_eq!(
            format_clabe("002010077777777771"),
            "002-010-07777777777-1"
        );
    }

    #[test]
    fn test_fmt_002_passthrough_on_invalid() {
        assert_eq!(format_clabe("123456789"), "123456789");
        assert_eq!(format_clabe(""), "");
    }

    #[test]
    fn test_fmt_003_idempotent_on_own_output() {
        let formatted = format_clabe("002010077777777771");
        assert_eq!(format_clabe(&formatted), formatted);
    }
}

#[cfg(test)]
mod lookup_validation {
    use crate::{find_bank_by_code, find_banks_by_name, list_banks, statistics, BankKind};

    #[test]
    fn test_lku_001_list_banks_is_nonempty_and_active() {
        let banks = list_banks();
        assert!(!banks.is_empty());
        assert!(banks.iter().all(|b| b.active));
    }

    #[test]
    fn test_lku_002_finds_banamex_by_code() {
        let bank = find_bank_by_code("002").unwrap();
        assert_eq!(bank.display_name, "BANAMEX");
        assert_eq!(bank.kind, BankKind::Commercial);
    }

    #[test]
    fn test_lku_003_padding_equivalence() {
        assert_eq!(find_bank_by_code("2"), find_bank_by_code("002"));
        assert!(find_bank_by_code("2").is_some());
    }

    #[test]
    fn test_lku_004_unknown_code_is_none() {
        assert!(find_bank_by_code("999").is_none());
        assert!(find_bank_by_code("").is_none());
    }

    #[test]
    fn test_lku_005_name_search_is_case_insensitive() {
        let hits = find_banks_by_name("banamex");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].display_name, "BANAMEX");

        let hits = find_banks_by_name("BANAMEX");
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn test_lku_006_name_search_covers_full_legal_names() {
        // "Nacional" appears in several full legal names but few display names.
        let hits = find_banks_by_name("Nacional");
        assert!(hits.len() > 1);
        assert!(hits.iter().any(|b| b.code == "002"));
        assert!(hits.iter().any(|b| b.code == "006"));
    }

    #[test]
    fn test_lku_007_name_search_no_hits() {
        assert!(find_banks_by_name("INEXISTENTE").is_empty());
        assert!(find_banks_by_name("").is_empty());
    }

    #[test]
    fn test_lku_008_statistics_are_consistent() {
        let stats = statistics();
        assert_eq!(stats.total_banks, list_banks().len());
        assert_eq!(
            stats.banks_by_kind.values().sum::<usize>(),
            stats.total_banks
        );
        // Commercial banks dominate the Mexican institution list.
        let commercial = stats.banks_by_kind[&BankKind::Commercial];
        assert!(commercial * 2 > stats.total_banks);
        assert!(stats.source.contains("Banxico"));
    }
}
