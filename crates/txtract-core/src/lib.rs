//! txtract Core Library
//!
//! Parser for plain-text UPI transaction history exports:
//! - Line preparation (trim, drop blanks)
//! - Segmenter splitting the line stream into per-transaction groups
//! - Field extractor turning one group into a [`TransactionRecord`]
//! - Statement-level parsing that composes the above

pub mod error;
pub mod extract;
pub mod import;
pub mod models;
pub mod segment;

pub use error::{Error, Result};
pub use extract::{extract_record, is_amount_line, trim_trailing_noise};
pub use import::{parse_reader, parse_statement, prepare_lines};
pub use models::{ProcessMeta, ProcessResponse, TransactionRecord};
pub use segment::{is_record_start, segment, RecordGroups};
