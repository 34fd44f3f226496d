// crates/ports/src/report.rs
use eol_stats_domain::Report;
use eol_stats_shared_kernel::{EolStatsError, Result, SourceName};

/// Port for presenting analysis results.
pub trait ReportSink {
    /// The source was opened and is about to be classified.
    fn on_start(&mut self, source: &SourceName) -> Result<()>;

    /// `visualized` tells whether marks were drawn for this source.
    fn on_report(&mut self, source: &SourceName, report: &Report, visualized: bool) -> Result<()>;

    /// The source could not be analysed. No report follows.
    fn on_failure(&mut self, source: &SourceName, error: &EolStatsError);
}
