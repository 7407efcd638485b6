//! Parse command implementation

use std::fs::File;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use txtract_core::{parse_reader, ProcessMeta, ProcessResponse};

/// Parse an export file into the same envelope the server returns
pub fn parse_file(file: &Path) -> Result<ProcessResponse> {
    let started = Instant::now();

    let reader =
        File::open(file).with_context(|| format!("Failed to open file: {}", file.display()))?;
    let transactions = parse_reader(reader)
        .with_context(|| format!("Failed to parse file: {}", file.display()))?;

    let original_name = file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(ProcessResponse::new(
        transactions,
        ProcessMeta {
            file_type: "text/plain".to_string(),
            original_name,
            processing_time_ms: started.elapsed().as_millis() as u64,
        },
    ))
}

pub fn cmd_parse(file: &Path, pretty: bool) -> Result<()> {
    let response = parse_file(file)?;
    tracing::info!(
        "Parsed {} transactions from {}",
        response.count,
        file.display()
    );

    let output = if pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };
    println!("{}", output);

    Ok(())
}
