// src/config.rs
use eol_stats_domain::OutputFormat;
use eol_stats_usecase::{Action, ActionPlan};
use log::LevelFilter;

use crate::cli::Args;

/// Everything a run needs, resolved from the command line.
#[derive(Debug, Clone)]
pub struct Config {
    pub plan: ActionPlan,
    pub format: OutputFormat,
    pub log_level: LevelFilter,
    /// `--dots` was given but the output format cannot carry the dot line.
    pub dots_suppressed: bool,
}

impl Config {
    /// `actions` must be in command-line order.
    pub fn from_args(args: Args, actions: Vec<Action>) -> Self {
        let format: OutputFormat = args.format.into();

        // JSON の出力に色付きドットを混ぜない
        let (actions, dots_suppressed) = match format {
            OutputFormat::Text => (actions, false),
            OutputFormat::Json => {
                let requested = actions.contains(&Action::SetVisualization(true));
                let kept = actions
                    .into_iter()
                    .filter(|a| !matches!(a, Action::SetVisualization(_)))
                    .collect();
                (kept, requested)
            }
        };

        Self {
            plan: ActionPlan::from_ordered(actions),
            format,
            log_level: log_level(args.verbose, args.quiet),
            dots_suppressed,
        }
    }
}

fn log_level(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}
