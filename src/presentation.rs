// src/presentation.rs
//! Report rendering: plain text, JSON lines and the live dot line.

pub mod dots;
pub mod json;
pub mod text;

use std::io::Write;

use eol_stats_shared_kernel::{EolStatsError, InfrastructureError, SourceName, TerminatorKind};

pub use dots::AnsiDotRenderer;
pub use json::JsonReportSink;
pub use text::TextReportSink;

pub(crate) const NO_COLOR: &str = "\x1B[0m";

/// ANSI color used for a terminator's dots and legend marker.
pub(crate) const fn color_of(kind: TerminatorKind) -> &'static str {
    match kind {
        TerminatorKind::Cr => "\x1B[31;1m",
        TerminatorKind::Lf => "\x1B[32;1m",
        TerminatorKind::CrLf => "\x1B[34;1m",
    }
}

/// One-line diagnostic for a source that produced no report.
pub(crate) fn write_failure<E: Write>(err: &mut E, source: &SourceName, error: &EolStatsError) {
    let line = match (source, error.infrastructure()) {
        (SourceName::File(path), InfrastructureError::SourceOpen { .. }) => {
            format!("Can't open file {}!", path.display())
        }
        _ => format!("Can't analyze {source}: {error}"),
    };
    // stderr への書き込み失敗は報告しようがない
    let _ = writeln!(err, "{line}");
}
