// src/cli/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint, value_parser};

use super::value_enum::CliOutputFormat;

/// Top-level CLI arguments parsed via clap.
///
/// `--dots` / `--no-dots` are value-less appendable options rather than plain
/// flags: clap only records the position of every occurrence for arguments
/// that carry values, and their position relative to the files matters.
#[derive(Parser, Debug)]
#[command(
    name = "eol",
    version = crate::VERSION,
    about = "Count LF, CR and CR+LF line terminators in files or standard input",
    after_help = "Flags apply to the files that follow them: `eol a.txt --dots b.txt` draws dots for b.txt only.\n\
                  Without FILE arguments standard input is analysed once."
)]
pub struct Args {
    /// Files to analyse, in order
    #[arg(value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub files: Vec<PathBuf>,

    /// Files whose name starts with `-`, rewritten to `--hyphen-file=NAME`
    /// before parsing so clap does not take them for options
    #[arg(
        long = "hyphen-file",
        value_name = "FILE",
        action = ArgAction::Append,
        require_equals = true,
        hide = true
    )]
    pub hyphen_files: Vec<PathBuf>,

    /// Draw a colored dot per terminator for the following files
    #[arg(
        long,
        action = ArgAction::Append,
        num_args = 0,
        default_missing_value = "true",
        value_parser = value_parser!(bool),
        help_heading = "Visualization"
    )]
    pub dots: Vec<bool>,

    /// Stop drawing dots for the following files
    #[arg(
        long = "no-dots",
        action = ArgAction::Append,
        num_args = 0,
        default_missing_value = "true",
        value_parser = value_parser!(bool),
        help_heading = "Visualization"
    )]
    pub no_dots: Vec<bool>,

    /// Report format
    #[arg(long, value_enum, default_value = "text", help_heading = "Output")]
    pub format: CliOutputFormat,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet", help_heading = "Logging")]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, help_heading = "Logging")]
    pub quiet: bool,
}
