//! Server command implementation

use std::path::Path;

use anyhow::Result;

pub async fn cmd_serve(
    host: &str,
    port: u16,
    upload_dir: &Path,
    max_upload_mb: usize,
    access_log: Option<&Path>,
) -> Result<()> {
    let allowed_origins = txtract_server::parse_allowed_origins(
        &std::env::var("TXTRACT_ALLOWED_ORIGINS").unwrap_or_default(),
    );

    println!("🚀 Starting txtract server...");
    println!("   Listening: http://{}:{}", host, port);
    println!("   Upload dir: {}", upload_dir.display());
    println!("   Max upload: {} MB", max_upload_mb);
    if let Some(path) = access_log {
        println!("   Access log: {}", path.display());
    }
    if !allowed_origins.is_empty() {
        println!(
            "   🌐 Allowed origins: {} (TXTRACT_ALLOWED_ORIGINS)",
            allowed_origins.join(", ")
        );
    }
    println!();
    println!("   Press Ctrl+C to stop");

    let config = txtract_server::ServerConfig {
        allowed_origins,
        max_upload_size: max_upload_mb * 1024 * 1024,
        upload_dir: upload_dir.to_path_buf(),
    };

    txtract_server::serve_with_config(host, port, config).await?;

    Ok(())
}
