//! Statement upload handler

use std::io::Write;
use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{multipart::Field, Multipart, State},
    Json,
};
use tempfile::NamedTempFile;
use tracing::{error, info, warn};

use crate::{AppError, AppState};
use txtract_core::{parse_reader, ProcessMeta, ProcessResponse};

/// An upload spooled to disk, deleted when dropped
struct SpooledUpload {
    file: NamedTempFile,
    file_type: String,
    original_name: String,
    size: usize,
}

/// Whether a declared content type is `text/plain`, ignoring parameters
fn is_plain_text(content_type: &str) -> bool {
    content_type
        .split(';')
        .next()
        .map(|essence| essence.trim().eq_ignore_ascii_case("text/plain"))
        .unwrap_or(false)
}

/// Human-readable upload limit
fn format_size(bytes: usize) -> String {
    const KB: usize = 1024;
    const MB: usize = 1024 * KB;
    if bytes >= MB {
        format!("{} MB", bytes / MB)
    } else if bytes >= KB {
        format!("{} KB", bytes / KB)
    } else {
        format!("{} bytes", bytes)
    }
}

/// Stream a multipart field into a temp file under the upload directory
async fn spool_field(
    field: &mut Field<'_>,
    state: &AppState,
) -> Result<(NamedTempFile, usize), AppError> {
    let max = state.config.max_upload_size;

    tokio::fs::create_dir_all(&state.config.upload_dir).await?;
    let mut file = tempfile::Builder::new()
        .prefix("upload-")
        .suffix(".txt")
        .tempfile_in(&state.config.upload_dir)?;

    let mut size = 0;
    while let Some(chunk) = field
        .chunk()
        .await
        .map_err(|_| AppError::bad_request("Failed to read file data"))?
    {
        size += chunk.len();
        if size > max {
            return Err(AppError::bad_request(&format!(
                "File too large. Maximum size is {}",
                format_size(max)
            )));
        }
        file.write_all(&chunk)?;
    }
    file.flush()?;

    Ok((file, size))
}

/// POST /process - Parse an uploaded statement export
///
/// Expects multipart form with:
/// - file: plain-text export (required, `text/plain`)
pub async fn process_file(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<ProcessResponse>, AppError> {
    let started = Instant::now();
    let mut upload: Option<SpooledUpload> = None;

    while let Some(mut field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::bad_request(&format!("Failed to read form field: {}", e)))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let file_type = field.content_type().unwrap_or_default().to_string();
        let original_name = field.file_name().unwrap_or_default().to_string();

        if !is_plain_text(&file_type) {
            warn!("Invalid file type received: {}", file_type);
            return Err(AppError::invalid_file_type());
        }

        let (file, size) = spool_field(&mut field, &state).await?;
        upload = Some(SpooledUpload {
            file,
            file_type,
            original_name,
            size,
        });
    }

    let upload = upload.ok_or_else(|| {
        warn!("Request received without file");
        AppError::bad_request("No file uploaded")
    })?;

    info!(
        "Processing file: {} ({} bytes)",
        upload.original_name, upload.size
    );

    let SpooledUpload {
        file,
        file_type,
        original_name,
        ..
    } = upload;

    // Read and parse off the async runtime; the temp file is removed afterwards
    let parsed = tokio::task::spawn_blocking(move || {
        let parsed = file.reopen().map_err(Into::into).and_then(parse_reader);
        if let Err(e) = file.close() {
            warn!("Failed to remove spooled upload: {}", e);
        }
        parsed
    })
    .await?;

    let processing_time_ms = started.elapsed().as_millis() as u64;

    match parsed {
        Ok(transactions) => {
            info!(
                "Successfully processed {} transactions in {}ms",
                transactions.len(),
                processing_time_ms
            );
            Ok(Json(ProcessResponse::new(
                transactions,
                ProcessMeta {
                    file_type,
                    original_name,
                    processing_time_ms,
                },
            )))
        }
        Err(e) => {
            error!(
                error = %e,
                file = %original_name,
                processing_time_ms,
                "Error processing file"
            );
            Err(AppError::processing(&e.to_string()))
        }
    }
}
