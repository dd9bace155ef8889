//! Property-based tests for csv4180.
//!
//! These tests generate random rows to check the output format against an
//! independent CSV reader and against the structural rules of RFC 4180.

use proptest::prelude::*;

use csv4180::escape::{Escape, classify};
use csv4180::{CsvWriter, to_csv};

/// Field text biased towards the characters that matter for quoting.
fn arb_text() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "[a-z0-9 ]{1,8}",
        "[a-z\",\r\n ]{1,8}",
        "[\"]{1,4}",
        "[a-zA-Zé日🎉\t;' ]{0,8}",
    ]
}

/// Optional field: `None` and `Some("")` must behave the same.
fn arb_field() -> impl Strategy<Value = Option<String>> {
    prop::option::weighted(0.9, arb_text())
}

/// At least two fields per row, so no row renders as a blank line (which a
/// reader cannot tell apart from no row at all).
fn arb_rows() -> impl Strategy<Value = Vec<Vec<Option<String>>>> {
    prop::collection::vec(prop::collection::vec(arb_field(), 2..6), 1..8)
}

fn render_rows(rows: &[Vec<Option<String>>]) -> String {
    let mut writer = CsvWriter::new(Vec::new());
    for row in rows {
        writer.write_row(row).expect("write row");
    }
    String::from_utf8(writer.into_inner().expect("flush")).expect("utf8")
}

fn read_back(text: &str) -> Vec<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());
    reader
        .records()
        .map(|record| {
            record
                .expect("valid record")
                .iter()
                .map(str::to_string)
                .collect()
        })
        .collect()
}

/// Counts commas and CRLF pairs that sit outside quoted spans.
fn count_unquoted(text: &str) -> (usize, usize) {
    let bytes = text.as_bytes();
    let mut in_quotes = false;
    let (mut commas, mut terminators) = (0, 0);
    for (i, &b) in bytes.iter().enumerate() {
        match b {
            b'"' => in_quotes = !in_quotes,
            b',' if !in_quotes => commas += 1,
            b'\r' if !in_quotes && bytes.get(i + 1) == Some(&b'\n') => terminators += 1,
            _ => {}
        }
    }
    (commas, terminators)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // ============================================
    // ROUND TRIP
    // ============================================

    /// A standard reader gets back exactly the rows that were written
    #[test]
    fn output_round_trips(rows in arb_rows()) {
        let text = render_rows(&rows);
        let expected: Vec<Vec<String>> = rows
            .iter()
            .map(|row| row.iter().map(|f| f.clone().unwrap_or_default()).collect())
            .collect();
        prop_assert_eq!(read_back(&text), expected);
    }

    /// The string helper and the writer agree byte for byte
    #[test]
    fn to_csv_matches_writer(rows in arb_rows()) {
        prop_assert_eq!(to_csv(&rows).expect("to_csv"), render_rows(&rows));
    }

    // ============================================
    // MINIMALITY
    // ============================================

    /// Fields without special characters are never quoted
    #[test]
    fn plain_fields_are_verbatim(field in "[a-zA-Z0-9 ;\t'é]{0,12}") {
        prop_assert_eq!(classify(&field), Escape::Plain);
        prop_assert_eq!(to_csv([[field.as_str()]]).expect("to_csv"), field);
    }

    /// Fields with separators but no quotes are wrapped without doubling
    #[test]
    fn special_fields_are_wrapped(head in "[a-z]{0,4}", sep in "[,\r\n]", tail in "[a-z]{0,4}") {
        let field = format!("{head}{sep}{tail}");
        let out = to_csv([[field.as_str()]]).expect("to_csv");
        prop_assert_eq!(out, format!("\"{field}\""));
    }

    // ============================================
    // STRUCTURE
    // ============================================

    /// Each quote is doubled, plus one opening and one closing quote
    #[test]
    fn quotes_are_doubled(head in "[a-z,]{0,4}", quotes in 1usize..5, tail in "[a-z\n]{0,4}") {
        let field = format!("{head}{}{tail}", "\"".repeat(quotes));
        let out = to_csv([[field.as_str()]]).expect("to_csv");
        let count = out.matches('"').count();
        prop_assert_eq!(count, 2 * quotes + 2);
        prop_assert!(out.starts_with('"') && out.ends_with('"'));
    }

    /// N fields give N-1 separators at depth zero
    #[test]
    fn separator_count(row in prop::collection::vec(arb_field(), 1..10)) {
        let text = to_csv([&row]).expect("to_csv");
        let (commas, terminators) = count_unquoted(&text);
        prop_assert_eq!(commas, row.len() - 1);
        prop_assert_eq!(terminators, 0);
    }

    /// K rows give K-1 terminators, none leading or trailing
    #[test]
    fn terminator_count(rows in arb_rows()) {
        let text = render_rows(&rows);
        let (_, terminators) = count_unquoted(&text);
        prop_assert_eq!(terminators, rows.len() - 1);
        prop_assert!(!text.starts_with("\r\n"));
        prop_assert!(!text.ends_with("\r\n"));
    }

    /// `None` and `""` are interchangeable
    #[test]
    fn absent_equals_empty(rows in arb_rows()) {
        let filled: Vec<Vec<String>> = rows
            .iter()
            .map(|row| row.iter().map(|f| f.clone().unwrap_or_default()).collect())
            .collect();
        prop_assert_eq!(to_csv(&filled).expect("to_csv"), render_rows(&rows));
    }

    // ============================================
    // ROBUSTNESS
    // ============================================

    /// Arbitrary unicode never disturbs the following field
    #[test]
    fn arbitrary_text_never_panics(field in any::<String>()) {
        let out = to_csv([[field.as_str(), "end"]]).expect("to_csv");
        prop_assert!(out.ends_with(",end"));
    }
}
