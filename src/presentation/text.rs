// src/presentation/text.rs
use std::io::Write;

use eol_stats_domain::Report;
use eol_stats_ports::report::ReportSink;
use eol_stats_shared_kernel::{EolStatsError, ErrorContext, Result, SourceName, TerminatorKind};

use super::{NO_COLOR, color_of, write_failure};

/// Human-readable report block per source.
pub struct TextReportSink<W: Write, E: Write> {
    out: W,
    err: E,
}

impl<W: Write, E: Write> TextReportSink<W, E> {
    pub const fn new(out: W, err: E) -> Self {
        Self { out, err }
    }

    pub fn into_inner(self) -> (W, E) {
        (self.out, self.err)
    }

    fn write_report(&mut self, report: &Report, visualized: bool) -> std::io::Result<()> {
        let out = &mut self.out;
        for kind in TerminatorKind::ALL {
            // ドット表示時は各行の先頭に凡例の色付き '*'
            if visualized {
                write!(out, "{}*{NO_COLOR}", color_of(kind))?;
            }
            writeln!(out, "{}: {} occurrences", label(kind), report.count_of(kind))?;
        }
        writeln!(out, "Total terminators: {}", report.total_terminators())?;
        writeln!(out, "Total chars: {}", report.total_bytes())?;
        if report.is_probably_binary() {
            writeln!(
                out,
                "Probably not a text file! ({} binary chars found)",
                report.non_text_count()
            )?;
        }
        if !report.ends_with_terminator() {
            writeln!(out, "Does not end with a line terminator")?;
        }
        writeln!(out)?;
        out.flush()
    }
}

const fn label(kind: TerminatorKind) -> &'static str {
    match kind {
        TerminatorKind::Lf => "LF / '\\n' / 10 / 0x0A (Unix) ",
        TerminatorKind::Cr => "CR / '\\r' / 13 / 0x0D (Apple)",
        TerminatorKind::CrLf => "CR+LF                 (Win)  ",
    }
}

impl<W: Write, E: Write> ReportSink for TextReportSink<W, E> {
    fn on_start(&mut self, source: &SourceName) -> Result<()> {
        writeln!(self.out, "Analyzing {source}")
            .and_then(|()| self.out.flush())
            .context("writing report header")
    }

    fn on_report(&mut self, _source: &SourceName, report: &Report, visualized: bool) -> Result<()> {
        self.write_report(report, visualized).context("writing report")
    }

    fn on_failure(&mut self, source: &SourceName, error: &EolStatsError) {
        write_failure(&mut self.err, source, error);
    }
}
