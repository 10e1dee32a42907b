//! Tests for the fail-closed duplicate gate over keyword and
//! negative-keyword columns.

use bulkgen_lib::{generate, Market, ERRORS_LOG_FILE};
use chrono::DateTime;
use proptest::prelude::*;

mod common;
use common::{standard_headers, survey_from_rows};

#[test]
fn test_duplicate_keyword_aborts_generation() {
    let headers = standard_headers();
    let survey = survey_from_rows(
        &headers,
        &[
            &["host精准", "0.5", "S1", "0.6", "12", "", "", "host stand"],
            &["", "", "", "", "", "", "", "phone holder"],
            &["", "", "", "", "", "", "", "host stand"], // duplicate in column H
        ],
    );

    let result = generate(Market::CUs, &survey);
    assert!(result.is_err(), "duplicate keywords must abort generation");

    let message = result.unwrap_err().to_string();
    assert!(message.contains("host stand"), "report must name the value");
    assert!(message.contains("2 times"), "report must carry the count");
    assert!(message.contains("column H"), "report must name the column");
    assert!(message.contains("host精准词"), "report must name the header");
}

#[test]
fn test_every_duplicate_is_reported() {
    let headers = standard_headers();
    let survey = survey_from_rows(
        &headers,
        &[
            &["host精准", "0.5", "S1", "0.6", "12", "", "", "a kw", "b kw"],
            &["", "", "", "", "", "", "", "a kw", "b kw"],
            &["", "", "", "", "", "", "", "a kw", "c kw"],
        ],
    );

    let duplicates = survey.find_duplicates(&survey.keyword_columns());
    assert_eq!(duplicates.len(), 2);
    assert_eq!(duplicates[0].value, "a kw");
    assert_eq!(duplicates[0].count, 3);
    assert_eq!(duplicates[0].column_letter, "H");
    assert_eq!(duplicates[1].value, "b kw");
    assert_eq!(duplicates[1].count, 2);
    assert_eq!(duplicates[1].column_letter, "I");
}

#[test]
fn test_duplicate_negative_keyword_is_market_dependent() {
    let headers = standard_headers();
    // "free" twice in the named 否定精准 column (index 5)
    let survey = survey_from_rows(
        &headers,
        &[
            &["tape广泛", "0.5", "S1", "0.6", "12", "free", "", "", "", "", "", "tape kw"],
            &["", "", "", "", "", "free", "", "", "", "", "", ""],
        ],
    );

    // C US sources negatives from the named column, so the gate trips
    let result = generate(Market::CUs, &survey);
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("free"));

    // K EU never reads the named column; the same sheet generates fine
    let result = generate(Market::KEu, &survey);
    assert!(result.is_ok());
}

#[test]
fn test_duplicate_report_is_appended_to_error_log() {
    let headers = standard_headers();
    let survey = survey_from_rows(
        &headers,
        &[
            &["host精准", "0.5", "S1", "0.6", "12", "", "", "duplicated-log-marker"],
            &["", "", "", "", "", "", "", "duplicated-log-marker"],
        ],
    );

    assert!(generate(Market::CUs, &survey).is_err());

    // Tests share the log file and only ever append, so search by the
    // marker value instead of assuming ours is the last entry.
    let log = std::fs::read_to_string(ERRORS_LOG_FILE)
        .expect("errors.log must exist after a duplicate abort");
    let report_line = log
        .lines()
        .rev()
        .find(|line| line.contains("duplicated-log-marker"))
        .expect("log must carry the duplicate report");
    assert!(report_line.contains("• column H (host精准词)"));
    assert!(report_line.contains("appears 2 times"));

    let header_line = log
        .lines()
        .rev()
        .find(|line| line.ends_with("Keyword Duplicate Check Error:"))
        .expect("log entries must carry the error type header");
    let closing = header_line.find(']').expect("header must open with a timestamp");
    let timestamp = &header_line[1..closing];
    assert!(
        DateTime::parse_from_rfc3339(timestamp).is_ok(),
        "timestamp '{timestamp}' must be RFC 3339"
    );
}

#[test]
fn test_clean_survey_passes_the_gate() {
    let survey = common::sample_survey();
    assert!(survey
        .find_duplicates(&survey.keyword_columns())
        .is_empty());
    assert!(generate(Market::CUs, &survey).is_ok());
}

#[test]
fn test_same_value_in_different_columns_is_not_a_duplicate() {
    let headers = standard_headers();
    let survey = survey_from_rows(
        &headers,
        &[
            &["host精准", "0.5", "S1", "0.6", "12", "", "", "host stand", "host stand"],
        ],
    );
    assert!(survey.find_duplicates(&survey.keyword_columns()).is_empty());
}

// Property-based tests using proptest
proptest! {
    /// A column of distinct values never trips the gate
    #[test]
    fn prop_distinct_values_have_no_duplicates(
        values in prop::collection::hash_set("[a-z]{2,8}", 1..20)
    ) {
        let headers = standard_headers();
        let values: Vec<String> = values.into_iter().collect();
        let rows: Vec<Vec<&str>> = values
            .iter()
            .enumerate()
            .map(|(i, v)| {
                let campaign = if i == 0 { "host精准" } else { "" };
                vec![campaign, "", "", "", "", "", "", v.as_str()]
            })
            .collect();
        let rows: Vec<&[&str]> = rows.iter().map(|r| r.as_slice()).collect();
        let survey = survey_from_rows(&headers, &rows);

        prop_assert!(survey.find_duplicates(&survey.keyword_columns()).is_empty());
    }

    /// Repeating any value anywhere in the column trips the gate with the
    /// right count
    #[test]
    fn prop_injected_duplicate_is_found(
        values in prop::collection::hash_set("[a-z]{2,8}", 2..20),
        extra in 1usize..4
    ) {
        let headers = standard_headers();
        let values: Vec<String> = values.into_iter().collect();
        let duplicated = values[0].clone();

        let mut column: Vec<String> = values.clone();
        for _ in 0..extra {
            column.push(duplicated.clone());
        }

        let rows: Vec<Vec<&str>> = column
            .iter()
            .enumerate()
            .map(|(i, v)| {
                let campaign = if i == 0 { "host精准" } else { "" };
                vec![campaign, "", "", "", "", "", "", v.as_str()]
            })
            .collect();
        let rows: Vec<&[&str]> = rows.iter().map(|r| r.as_slice()).collect();
        let survey = survey_from_rows(&headers, &rows);

        let duplicates = survey.find_duplicates(&survey.keyword_columns());
        prop_assert_eq!(duplicates.len(), 1);
        prop_assert_eq!(&duplicates[0].value, &duplicated);
        prop_assert_eq!(duplicates[0].count, extra + 1);
    }
}
