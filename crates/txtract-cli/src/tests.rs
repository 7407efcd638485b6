//! CLI command tests

use std::io::{Read, Write};

use clap::Parser;
use tempfile::{NamedTempFile, TempDir};

use crate::cli::{Cli, Commands};
use crate::commands;

const STATEMENT: &str = "Jan 05, 2024
10:30 AM
Paid to - John Doe
Transaction ID T2401051030123456789
UTR No. 401234567890
Paid by XXXXXX1234
DEBIT INR 123.45
";

fn write_export(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

// ========== Parse Command Tests ==========

#[test]
fn test_parse_file() {
    let export = write_export(STATEMENT);
    let response = commands::parse_file(export.path()).unwrap();

    assert!(response.success);
    assert_eq!(response.count, 1);
    assert_eq!(response.transactions[0].payee, "John Doe");
    assert_eq!(response.meta.file_type, "text/plain");
    assert_eq!(
        response.meta.original_name,
        export.path().file_name().unwrap().to_string_lossy()
    );
}

#[test]
fn test_parse_file_missing() {
    let dir = TempDir::new().unwrap();
    let result = commands::parse_file(&dir.path().join("missing.txt"));
    let err = result.unwrap_err();
    assert!(err.to_string().contains("Failed to open file"));
}

#[test]
fn test_parse_file_malformed() {
    let export = write_export("Jan 05, 2024\n10:30 AM\n");
    let err = commands::parse_file(export.path()).unwrap_err();
    assert!(err.to_string().contains("Failed to parse file"));
    assert!(format!("{:#}", err).contains("found 2"));
}

#[test]
fn test_cmd_parse() {
    let export = write_export(STATEMENT);
    assert!(commands::cmd_parse(export.path(), false).is_ok());
    assert!(commands::cmd_parse(export.path(), true).is_ok());
}

// ========== Runtime Settings Tests ==========

#[test]
fn test_resolve_port() {
    assert_eq!(commands::resolve_port(Some(8080), Some("9000")).unwrap(), 8080);
    assert_eq!(commands::resolve_port(None, Some("9000")).unwrap(), 9000);
    assert_eq!(commands::resolve_port(None, Some("  ")).unwrap(), 3000);
    assert_eq!(commands::resolve_port(None, None).unwrap(), 3000);
    assert!(commands::resolve_port(None, Some("http")).is_err());
}

#[test]
fn test_is_production() {
    assert!(commands::is_production(Some("production")));
    assert!(commands::is_production(Some("PRODUCTION")));
    assert!(!commands::is_production(Some("development")));
    assert!(!commands::is_production(None));
}

#[test]
fn test_log_dir() {
    assert_eq!(commands::log_dir(None), std::path::PathBuf::from("logs"));
    assert_eq!(
        commands::log_dir(Some("/var/log/txtract")),
        std::path::PathBuf::from("/var/log/txtract")
    );
}

#[test]
fn test_open_access_log_appends() {
    let dir = TempDir::new().unwrap();
    let log_dir = dir.path().join("nested").join("logs");

    {
        let mut file = commands::open_access_log(&log_dir).unwrap();
        writeln!(file, "first").unwrap();
    }
    {
        let mut file = commands::open_access_log(&log_dir).unwrap();
        writeln!(file, "second").unwrap();
    }

    let mut contents = String::new();
    std::fs::File::open(log_dir.join(commands::ACCESS_LOG_FILE))
        .unwrap()
        .read_to_string(&mut contents)
        .unwrap();
    assert_eq!(contents, "first\nsecond\n");
}

// ========== Argument Parsing Tests ==========

#[test]
fn test_cli_serve_defaults() {
    let cli = Cli::try_parse_from(["txtract", "serve"]).unwrap();
    match cli.command {
        Commands::Serve {
            port,
            host,
            upload_dir,
            max_upload_mb,
        } => {
            assert_eq!(port, None);
            assert_eq!(host, "127.0.0.1");
            assert_eq!(upload_dir, std::path::PathBuf::from("uploads"));
            assert_eq!(max_upload_mb, 10);
        }
        _ => panic!("expected serve command"),
    }
}

#[test]
fn test_cli_parse_args() {
    let cli = Cli::try_parse_from(["txtract", "-v", "parse", "--file", "export.txt", "--pretty"])
        .unwrap();
    assert!(cli.verbose);
    match cli.command {
        Commands::Parse { file, pretty } => {
            assert_eq!(file, std::path::PathBuf::from("export.txt"));
            assert!(pretty);
        }
        _ => panic!("expected parse command"),
    }
}
