//! Integration tests for heart-rate extraction.
//!
//! These tests exercise the public API end to end on realistic log lines.

use extractor::config::FieldPattern;
use extractor::models::{Outcome, Rejection};
use extractor::{extract_heart_rates, Extractor};

const SAMPLE_LOG: &str = "LOG_01: HeartRate=72bpm; STATUS=OK | LOG_02: HeartRate= 85 ; STATUS=WARN | LOG_03: HeartRate=error; STATUS=FAIL";

#[test]
fn test_sample_log() {
    assert_eq!(extract_heart_rates(SAMPLE_LOG), vec![72, 85]);
}

#[test]
fn test_single_value_with_unit() {
    assert_eq!(extract_heart_rates("HeartRate=100bpm"), vec![100]);
}

#[test]
fn test_all_values_invalid() {
    assert!(extract_heart_rates("HeartRate=error; HeartRate=invalid").is_empty());
}

#[test]
fn test_empty_input() {
    assert!(extract_heart_rates("").is_empty());
}

#[test]
fn test_extra_spaces() {
    assert_eq!(extract_heart_rates("HeartRate =  120  ;"), vec![120]);
}

#[test]
fn test_whitespace_is_insignificant() {
    assert_eq!(
        extract_heart_rates("HeartRate=100"),
        extract_heart_rates("HeartRate =  100  ;")
    );
}

#[test]
fn test_multiple_values() {
    assert_eq!(
        extract_heart_rates("HeartRate=60; HeartRate=75; HeartRate=90"),
        vec![60, 75, 90]
    );
}

#[test]
fn test_mixed_valid_and_invalid() {
    assert_eq!(
        extract_heart_rates("HeartRate=55; HeartRate=N/A; HeartRate=88; HeartRate=--"),
        vec![55, 88]
    );
}

#[test]
fn test_case_insensitive_label() {
    assert_eq!(
        extract_heart_rates("HEARTRATE=65; heartrate=70; HeartRate=80"),
        vec![65, 70, 80]
    );
    for input in ["HEARTRATE=65", "heartrate=65", "HeartRate=65"] {
        assert_eq!(extract_heart_rates(input), vec![65], "Failed for {input}");
    }
}

#[test]
fn test_unit_suffix() {
    assert_eq!(
        extract_heart_rates("HeartRate=95bpm; HeartRate=102 bpm"),
        vec![95, 102]
    );
}

#[test]
fn test_no_heart_rate_fields() {
    assert!(extract_heart_rates("Temperature=98.6; BloodPressure=120/80").is_empty());
}

#[test]
fn test_missing_equals_is_not_a_field() {
    assert_eq!(
        extract_heart_rates("HeartRate 72; HeartRate: 74; HeartRate=76"),
        vec![76]
    );
}

#[test]
fn test_multiline_log() {
    let log = "2024-05-01T10:00:00Z monitor HeartRate=61;\n\
               2024-05-01T10:01:00Z monitor HeartRate=64;\n\
               2024-05-01T10:02:00Z monitor HeartRate=ERR;\n";
    assert_eq!(extract_heart_rates(log), vec![61, 64]);
}

#[test]
fn test_report_on_sample_log() {
    let report = Extractor::default().report(SAMPLE_LOG);
    assert_eq!(report.values, vec![72, 85]);
    assert_eq!(report.occurrences, 3);
    assert_eq!(report.rejected, 1);
}

#[test]
fn test_inspect_sample_log() {
    let inspections = Extractor::default().inspect(SAMPLE_LOG);
    let raws: Vec<&str> = inspections.iter().map(|i| i.raw).collect();
    assert_eq!(raws, vec!["72bpm", "85", "error"]);
    assert_eq!(
        inspections[2].outcome,
        Outcome::Rejected {
            reason: Rejection::NotNumeric
        }
    );
}

#[test]
fn test_report_json_shape() {
    let report = Extractor::default().report(SAMPLE_LOG);
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["values"], serde_json::json!([72, 85]));
    assert_eq!(json["occurrences"], 3);
    assert_eq!(json["rejected"], 1);
}

#[test]
fn test_custom_label_ignores_heart_rate() {
    let extractor = Extractor::new(FieldPattern::new("RespRate", vec![';', '|']).unwrap());
    assert_eq!(
        extractor.extract("HeartRate=72; RespRate=16 | resprate = 18/min"),
        vec![16, 18]
    );
}

#[test]
fn test_extraction_across_threads() {
    let extractor = &Extractor::default();
    let logs = ["HeartRate=61", "HeartRate=62; HeartRate=63", "HeartRate=N/A"];

    let results: Vec<Vec<u64>> = std::thread::scope(|s| {
        let handles: Vec<_> = logs
            .iter()
            .map(|log| s.spawn(move || extractor.extract(log)))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(results, vec![vec![61], vec![62, 63], vec![]]);
}
