//! Data models for txtract

use chrono::NaiveDateTime;
use serde::{Serialize, Serializer};

/// Output format for record timestamps (ISO-8601, second precision, no offset)
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// One payment event parsed from a statement export
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    /// Local date-time built from the record's date and time lines
    #[serde(serialize_with = "serialize_timestamp")]
    pub timestamp: NaiveDateTime,
    pub payee: String,
    pub transaction_id: String,
    /// Bank-assigned Unique Transaction Reference
    pub utr_number: String,
    /// Masked payer account, e.g. `XXXXXX1234`
    pub payer_account: String,
    /// Direction keyword from the type line (`DEBIT`, `CREDIT`)
    pub transaction_type: String,
    pub currency: String,
    /// Amount in currency units. NaN when the source text was not numeric,
    /// which serializes as `null`.
    pub amount: f64,
}

fn serialize_timestamp<S: Serializer>(ts: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(&ts.format(TIMESTAMP_FORMAT))
}

/// Metadata about the processed upload
#[derive(Debug, Clone, Serialize)]
pub struct ProcessMeta {
    pub file_type: String,
    pub original_name: String,
    pub processing_time_ms: u64,
}

/// Successful processing envelope returned by the API and the CLI
#[derive(Debug, Clone, Serialize)]
pub struct ProcessResponse {
    pub success: bool,
    pub count: usize,
    pub transactions: Vec<TransactionRecord>,
    pub meta: ProcessMeta,
}

impl ProcessResponse {
    pub fn new(transactions: Vec<TransactionRecord>, meta: ProcessMeta) -> Self {
        Self {
            success: true,
            count: transactions.len(),
            transactions,
            meta,
        }
    }
}
