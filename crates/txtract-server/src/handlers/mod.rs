//! HTTP request handlers

pub mod process;

pub use process::*;
