//! Property tests for heart-rate extraction.

use extractor::{extract_heart_rates, extract_heart_rates_from_bytes, Extractor};
use proptest::prelude::*;

// ── Extraction never fails ───────────────────────────────────────────────

proptest! {
    #[test]
    fn extraction_never_panics_on_arbitrary_text(text in any::<String>()) {
        let _ = extract_heart_rates(&text);
    }

    #[test]
    fn extraction_never_panics_on_field_like_text(
        text in "(HeartRate|heartrate|HEARTRATE|[ =;|0-9a-zA-Z\\-./\u{a0}\u{feff}\u{85}é♥])*"
    ) {
        let _ = extract_heart_rates(&text);
    }

    #[test]
    fn extraction_never_panics_on_arbitrary_bytes(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
        let _ = extract_heart_rates_from_bytes(&bytes);
    }
}

// ── Result shape ─────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn results_are_positive(text in "(HeartRate *= *[0-9a-z ]{0,6}[;|]? ?){0,8}") {
        for value in extract_heart_rates(&text) {
            prop_assert!(value > 0);
        }
    }

    #[test]
    fn results_never_exceed_occurrences(text in ".{0,200}") {
        let extractor = Extractor::default();
        let report = extractor.report(&text);
        prop_assert!(report.values.len() <= report.occurrences);
        prop_assert_eq!(report.values.len() + report.rejected, report.occurrences);
        prop_assert_eq!(report.occurrences, extractor.occurrences(&text).count());
    }

    #[test]
    fn text_without_label_yields_nothing(text in "[^hH]{0,200}") {
        prop_assert!(extract_heart_rates(&text).is_empty());
    }
}

// ── Order and normalization ──────────────────────────────────────────────

proptest! {
    #[test]
    fn order_is_preserved(values in proptest::collection::vec(1u64..100_000, 0..20)) {
        let log = values
            .iter()
            .enumerate()
            .map(|(i, v)| format!("LOG_{i:02}: HeartRate={v}bpm; STATUS=OK"))
            .collect::<Vec<_>>()
            .join(" | ");
        prop_assert_eq!(extract_heart_rates(&log), values);
    }

    #[test]
    fn invalid_entries_are_skipped_in_place(
        entries in proptest::collection::vec(
            prop_oneof![
                (1u64..1000).prop_map(Some),
                Just(None),
            ],
            0..20,
        )
    ) {
        let log = entries
            .iter()
            .map(|e| match e {
                Some(v) => format!("HeartRate={v}"),
                None => "HeartRate=N/A".to_string(),
            })
            .collect::<Vec<_>>()
            .join("; ");
        let expected: Vec<u64> = entries.iter().flatten().copied().collect();
        prop_assert_eq!(extract_heart_rates(&log), expected);
    }

    #[test]
    fn label_case_is_insignificant(value in 1u64..1000, mask in any::<u16>()) {
        let label: String = "HeartRate"
            .chars()
            .enumerate()
            .map(|(i, c)| {
                if mask & (1 << i) == 0 {
                    c.to_ascii_lowercase()
                } else {
                    c.to_ascii_uppercase()
                }
            })
            .collect();
        let log = format!("{label}={value}");
        prop_assert_eq!(extract_heart_rates(&log), vec![value]);
    }

    #[test]
    fn whitespace_around_value_is_insignificant(
        value in 1u64..1000,
        before in "[ \t]{0,4}",
        after_eq in "[ \t]{0,4}",
        trailing in "[ \t]{0,4}",
    ) {
        let log = format!("HeartRate{before}={after_eq}{value}{trailing};");
        prop_assert_eq!(extract_heart_rates(&log), vec![value]);
    }

    #[test]
    fn unit_suffix_is_ignored(value in 1u64..1000, unit in "[a-zA-Z/% ]{0,6}") {
        let log = format!("HeartRate={value}{unit}");
        prop_assert_eq!(extract_heart_rates(&log), vec![value]);
    }
}
