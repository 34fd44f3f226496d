// src/presentation/json.rs
use std::{borrow::Cow, io::Write};

use eol_stats_domain::Report;
use eol_stats_ports::report::ReportSink;
use eol_stats_shared_kernel::{EolStatsError, ErrorContext, Result, SourceName, TerminatorCount};
use serde::Serialize;

use super::write_failure;

#[derive(Serialize)]
struct JsonRecord<'a> {
    source: &'static str,
    /// Lossy UTF-8 rendering; invalid sequences become U+FFFD, so a non-UTF-8
    /// name does not round-trip to the file on disk.
    path: Option<Cow<'a, str>>,
    #[serde(flatten)]
    report: &'a Report,
    total_terminators: TerminatorCount,
}

impl<'a> JsonRecord<'a> {
    fn new(source: &'a SourceName, report: &'a Report) -> Self {
        Self {
            source: if source.is_stdin() { "stdin" } else { "file" },
            path: source.path().map(|p| {
                let text = p.to_string_lossy();
                if let Cow::Owned(_) = text {
                    log::debug!("{} is not valid UTF-8; JSON path is lossy", p.display());
                }
                text
            }),
            report,
            total_terminators: report.total_terminators(),
        }
    }
}

/// One JSON object per analysed source, one per line.
pub struct JsonReportSink<W: Write, E: Write> {
    out: W,
    err: E,
}

impl<W: Write, E: Write> JsonReportSink<W, E> {
    pub const fn new(out: W, err: E) -> Self {
        Self { out, err }
    }

    pub fn into_inner(self) -> (W, E) {
        (self.out, self.err)
    }
}

impl<W: Write, E: Write> ReportSink for JsonReportSink<W, E> {
    fn on_start(&mut self, _source: &SourceName) -> Result<()> {
        Ok(())
    }

    fn on_report(&mut self, source: &SourceName, report: &Report, _visualized: bool) -> Result<()> {
        let record = JsonRecord::new(source, report);
        serde_json::to_writer(&mut self.out, &record).context("writing JSON report")?;
        writeln!(self.out)
            .and_then(|()| self.out.flush())
            .context("writing JSON report")
    }

    fn on_failure(&mut self, source: &SourceName, error: &EolStatsError) {
        write_failure(&mut self.err, source, error);
    }
}

#[cfg(test)]
mod tests {
    use eol_stats_domain::classify;
    use serde_json::{Value, json};

    use super::*;

    fn lines(sink: JsonReportSink<Vec<u8>, Vec<u8>>) -> Vec<Value> {
        let out = String::from_utf8(sink.into_inner().0).unwrap();
        out.lines().map(|l| serde_json::from_str(l).unwrap()).collect()
    }

    #[test]
    fn one_object_per_source() {
        let mut sink = JsonReportSink::new(Vec::new(), Vec::new());
        let a = SourceName::file("a.txt");
        sink.on_start(&a).unwrap();
        sink.on_report(&a, &classify(b"a\nb\rc\r\nd"), false).unwrap();
        sink.on_report(&SourceName::Stdin, &classify(b""), false).unwrap();

        let records = lines(sink);
        assert_eq!(records.len(), 2);
        assert_eq!(
            records[0],
            json!({
                "source": "file",
                "path": "a.txt",
                "lf": 1,
                "cr": 1,
                "crlf": 1,
                "total_bytes": 8,
                "non_text": 0,
                "ends_with_terminator": false,
                "total_terminators": 3
            })
        );
        assert_eq!(records[1]["source"], "stdin");
        assert_eq!(records[1]["path"], Value::Null);
        assert_eq!(records[1]["total_terminators"], 0);
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_path_is_replaced_lossily() {
        use std::{ffi::OsStr, os::unix::ffi::OsStrExt};

        let source = SourceName::file(OsStr::from_bytes(b"bad\xFFname.txt"));
        let mut sink = JsonReportSink::new(Vec::new(), Vec::new());
        sink.on_report(&source, &classify(b"x\n"), false).unwrap();

        let records = lines(sink);
        assert_eq!(records[0]["path"], "bad\u{FFFD}name.txt");
        assert_eq!(records[0]["lf"], 1);
    }
}
