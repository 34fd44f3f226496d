// crates/shared-kernel/tests/error_context.rs
use std::{io, path::PathBuf};

use eol_stats_shared_kernel::{EolStatsError, ErrorContext, InfrastructureError};

fn boom() -> std::result::Result<(), io::Error> {
    Err(io::Error::other("root-io"))
}

#[test]
fn context_wraps_and_formats() {
    let err = boom()
        .map_err(EolStatsError::from)
        .context("writing report")
        .unwrap_err();

    let display = err.to_string();
    assert!(display.contains("writing report"));
    assert!(display.contains("Output error:"));
}

#[test]
fn infrastructure_looks_through_context() {
    let open: std::result::Result<(), InfrastructureError> = Err(InfrastructureError::SourceOpen {
        path: PathBuf::from("missing.txt"),
        source: io::Error::from(io::ErrorKind::NotFound),
    });
    let err = open.with_context(|| "analysing".to_string()).unwrap_err();

    match err.infrastructure() {
        InfrastructureError::SourceOpen { path, .. } => assert_eq!(path, &PathBuf::from("missing.txt")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn stdin_read_error_names_standard_input() {
    let err = InfrastructureError::SourceRead { path: None, source: io::Error::other("broken pipe") };
    assert!(err.to_string().starts_with("Failed to read standard input"));
}
