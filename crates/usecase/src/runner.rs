// crates/usecase/src/runner.rs
use eol_stats_domain::{AnalysisOptions, Report, classify_reader};
use eol_stats_ports::{render::MarkRenderer, report::ReportSink, source::SourceOpener};
use eol_stats_shared_kernel::{EolStatsError, InfrastructureError, Result, SourceName};

use crate::actions::{Action, ActionPlan};

/// Outcome counters of one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub analyzed: usize,
    pub failed: usize,
}

impl RunSummary {
    pub const fn is_success(&self) -> bool {
        self.failed == 0
    }
}

/// Executes an [`ActionPlan`] strictly in order.
///
/// A failing source is reported and skipped; it never aborts the remaining
/// actions.
pub struct AnalyzeSources<'a> {
    opener: &'a dyn SourceOpener,
    renderer: &'a mut dyn MarkRenderer,
    sink: &'a mut dyn ReportSink,
}

impl<'a> AnalyzeSources<'a> {
    pub fn new(
        opener: &'a dyn SourceOpener,
        renderer: &'a mut dyn MarkRenderer,
        sink: &'a mut dyn ReportSink,
    ) -> Self {
        Self { opener, renderer, sink }
    }

    pub fn run(&mut self, plan: ActionPlan) -> RunSummary {
        let mut options = AnalysisOptions::default();
        let mut summary = RunSummary::default();
        log::debug!("{} source(s) planned", plan.source_count());

        for action in plan {
            let source = match action {
                Action::SetVisualization(on) => {
                    log::debug!("visualization {}", if on { "on" } else { "off" });
                    options.visualize = on;
                    continue;
                }
                Action::AnalyzeFile(path) => SourceName::File(path),
                Action::AnalyzeStdin => SourceName::Stdin,
            };

            match self.analyze(&source, options) {
                Ok(report) => {
                    log::info!(
                        "{source}: {} terminators in {} bytes",
                        report.total_terminators(),
                        report.total_bytes()
                    );
                    summary.analyzed += 1;
                }
                Err(err) => {
                    log::debug!("{source} skipped: {err:?}");
                    self.sink.on_failure(&source, &err);
                    summary.failed += 1;
                }
            }
        }

        summary
    }

    fn analyze(&mut self, source: &SourceName, options: AnalysisOptions) -> Result<Report> {
        let reader = self.opener.open(source)?;
        self.sink.on_start(source)?;

        let renderer = &mut *self.renderer;
        let mut render_error: Option<EolStatsError> = None;
        let classified = classify_reader(reader, options, |mark| {
            if render_error.is_none()
                && let Err(e) = renderer.mark(mark)
            {
                render_error = Some(e);
            }
        });

        if options.visualize {
            let finished = self.renderer.finish();
            if render_error.is_none() {
                render_error = finished.err();
            }
        }

        let report = classified.map_err(|e| InfrastructureError::SourceRead {
            path: source.path().map(std::path::Path::to_path_buf),
            source: e,
        })?;
        if let Some(err) = render_error {
            return Err(err);
        }

        self.sink.on_report(source, &report, options.visualize)?;
        Ok(report)
    }
}
