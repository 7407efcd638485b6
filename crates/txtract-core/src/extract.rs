//! Field extraction for a single transaction line group
//!
//! A group follows a fixed layout:
//!
//! ```text
//! 0  Jan 05, 2024                      date
//! 1  10:30 AM                          time
//! 2  Paid to - John Doe                payee
//! 3  Transaction ID T2401051030...     transaction id (last token)
//! 4  UTR No. 401234567890              UTR (last token)
//! 5  Paid by XXXXXX1234                payer account (last token)
//! 6  DEBIT INR 123.45                  type, currency, amount
//! ```
//!
//! Some exports put the amount on its own line after line 6, giving an
//! 8-line group. Anything after the amount line is page furniture.

use std::sync::LazyLock;

use chrono::NaiveDateTime;
use regex::Regex;

use crate::error::{Error, Result};
use crate::models::TransactionRecord;

/// Minimum lines a group needs to carry every field
pub const MIN_RECORD_LINES: usize = 7;

/// Index of the first line that may carry the amount
const AMOUNT_SEARCH_START: usize = 6;

static AMOUNT_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+\.[0-9]{2}$").expect("valid regex"));

/// Date/time layouts seen in exports, tried in order
const TIMESTAMP_FORMATS: [&str; 4] = [
    "%b %d, %Y %I:%M %p",    // Jan 05, 2024 10:30 AM
    "%b %d, %Y %I:%M:%S %p", // Jan 05, 2024 10:30:15 AM
    "%b %d, %Y %H:%M",       // Jan 05, 2024 22:30
    "%b %d, %Y %H:%M:%S",    // Jan 05, 2024 22:30:15
];

/// Whether `line` ends with an amount (`digits.dd`)
pub fn is_amount_line(line: &str) -> bool {
    AMOUNT_LINE.is_match(line)
}

/// Cut a group right after its amount line.
///
/// Only lines from index 6 onward are considered; if none ends with an
/// amount the group is returned unchanged.
pub fn trim_trailing_noise<'a, 'l>(lines: &'a [&'l str]) -> &'a [&'l str] {
    lines
        .iter()
        .enumerate()
        .skip(AMOUNT_SEARCH_START)
        .find(|(_, line)| is_amount_line(line))
        .map(|(i, _)| &lines[..=i])
        .unwrap_or(lines)
}

/// Convert one line group into a transaction record
pub fn extract_record(group: &[&str]) -> Result<TransactionRecord> {
    let lines = trim_trailing_noise(group);
    if lines.len() < MIN_RECORD_LINES {
        return Err(Error::MalformedGroup { lines: lines.len() });
    }

    let timestamp = parse_timestamp(lines[0], lines[1])?;

    let mut kind = lines[6].split_whitespace();
    let transaction_type = kind.next().unwrap_or_default().to_string();
    let currency = kind.next().unwrap_or_default().to_string();

    let amount_text = if lines.len() == MIN_RECORD_LINES + 1 {
        lines[7]
    } else {
        last_token(lines[6])
    };

    Ok(TransactionRecord {
        timestamp,
        payee: parse_payee(lines[2]),
        transaction_id: last_token(lines[3]).to_string(),
        utr_number: last_token(lines[4]).to_string(),
        payer_account: last_token(lines[5]).to_string(),
        transaction_type,
        currency,
        amount: parse_amount(amount_text),
    })
}

/// `Paid to - John Doe` -> `John Doe`
fn parse_payee(line: &str) -> String {
    let name = line.split_whitespace().skip(2).collect::<Vec<_>>().join(" ");
    name.replacen("- ", "", 1).trim().to_string()
}

fn last_token(line: &str) -> &str {
    line.split_whitespace().last().unwrap_or_default()
}

fn parse_timestamp(date: &str, time: &str) -> Result<NaiveDateTime> {
    let value = format!("{} {}", date, time);

    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(&value, fmt).ok())
        .ok_or(Error::UnparseableTimestamp { value })
}

/// Parse an amount, ignoring thousands separators and a rupee sign.
///
/// `1,250.50` reads as 1250.5, not as the leading `1` a prefix parse would give.
/// Non-numeric text yields NaN rather than an error.
fn parse_amount(s: &str) -> f64 {
    let cleaned = s.trim().trim_start_matches('₹').replace(',', "");

    cleaned
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite())
        .unwrap_or(f64::NAN)
}
