//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `parse` - Parse a local export to JSON
//! - `runtime` - Shared runtime settings (environment, port, access log file)
//! - `serve` - Web server command

pub mod parse;
pub mod runtime;
pub mod serve;

// Re-export command functions for main.rs
pub use parse::*;
pub use runtime::*;
pub use serve::*;
