use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use eol_stats::{
    cli,
    config::Config,
    logging,
    presentation::{AnsiDotRenderer, JsonReportSink, TextReportSink},
};
use eol_stats_domain::OutputFormat;
use eol_stats_infra::StdSourceOpener;
use eol_stats_ports::report::ReportSink;
use eol_stats_usecase::{AnalyzeSources, RunSummary};

fn main() -> ExitCode {
    let config = match cli::parse_config() {
        Ok(config) => config,
        Err(e) => e.exit(),
    };
    logging::init(config.log_level);
    log::debug!("{config:?}");

    match run(config) {
        Ok(summary) if summary.is_success() => ExitCode::SUCCESS,
        Ok(summary) => {
            log::warn!(
                "{} of {} sources could not be analyzed",
                summary.failed,
                summary.analyzed + summary.failed
            );
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Application Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: Config) -> Result<RunSummary> {
    if config.dots_suppressed {
        log::warn!("--dots is ignored with --format json");
    }

    let opener = StdSourceOpener::new();
    let mut renderer = AnsiDotRenderer::new(io::stdout());
    let mut sink: Box<dyn ReportSink> = match config.format {
        OutputFormat::Text => Box::new(TextReportSink::new(io::stdout(), io::stderr())),
        OutputFormat::Json => Box::new(JsonReportSink::new(io::stdout(), io::stderr())),
    };

    let summary = AnalyzeSources::new(&opener, &mut renderer, sink.as_mut()).run(config.plan);
    io::stdout().flush().context("flushing standard output")?;
    Ok(summary)
}
