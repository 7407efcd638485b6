//! Integration tests for txtract-core
//!
//! These tests run whole statement exports through the parser.

use txtract_core::{parse_reader, parse_statement, Error, TransactionRecord};

fn statement() -> &'static str {
    include_str!("fixtures/statement.txt")
}

fn parse_fixture() -> Vec<TransactionRecord> {
    parse_statement(statement()).expect("Failed to parse fixture")
}

#[test]
fn test_parse_fixture_statement() {
    let records = parse_fixture();
    assert_eq!(records.len(), 3);

    let json = serde_json::to_value(&records).unwrap();

    assert_eq!(json[0]["timestamp"], "2024-01-05T10:30:00");
    assert_eq!(json[0]["payee"], "John Doe");
    assert_eq!(json[0]["transactionType"], "DEBIT");
    assert_eq!(json[0]["amount"], 123.45);

    // Standalone amount line followed by page furniture
    assert_eq!(json[1]["timestamp"], "2024-01-12T19:15:00");
    assert_eq!(json[1]["payee"], "ACME Stores Pvt Ltd");
    assert_eq!(json[1]["payerAccount"], "XXXXXX1234");
    assert_eq!(json[1]["transactionType"], "CREDIT");
    assert_eq!(json[1]["currency"], "INR");
    assert_eq!(json[1]["amount"], 1500.0);

    assert_eq!(json[2]["transactionId"], "T2401200802555555555");
    assert_eq!(json[2]["utrNumber"], "402000000042");
    assert_eq!(json[2]["amount"], 20.0);
}

#[test]
fn test_parse_is_idempotent() {
    let first = serde_json::to_string(&parse_fixture()).unwrap();
    let second = serde_json::to_string(&parse_fixture()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_parse_reader_matches_parse_statement() {
    let from_reader = parse_reader(statement().as_bytes()).unwrap();
    assert_eq!(from_reader, parse_fixture());
}

#[test]
fn test_one_bad_record_fails_whole_statement() {
    let text = format!(
        "{}\nFeb 01, 2024\nnot a time\nPaid to - X\nTransaction ID T1\nUTR No. 1\nPaid by XX1\nDEBIT INR 1.00\n",
        statement()
    );
    let err = parse_statement(&text).unwrap_err();
    assert!(matches!(err, Error::UnparseableTimestamp { .. }));
    assert!(err.to_string().contains("Feb 01, 2024 not a time"));
}

#[test]
fn test_truncated_record_is_malformed() {
    let text = "Jan 05, 2024\n10:30 AM\nPaid to - John Doe\nTransaction ID T1\nUTR No. 1\nPaid by XX1\n";
    let err = parse_statement(text).unwrap_err();
    assert!(matches!(err, Error::MalformedGroup { lines: 6 }));
}
