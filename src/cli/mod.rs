mod args;
mod value_enum;

use std::{ffi::OsString, path::PathBuf};

pub use args::Args;
use clap::{ArgMatches, Command, CommandFactory, FromArgMatches};
use eol_stats_usecase::Action;

use crate::config::Config;

/// Parses the process arguments into a [`Config`].
///
/// # Errors
///
/// Returns the clap error for invalid usage as well as for `--help` and
/// `--version`; callers are expected to `exit()` with it.
pub fn parse_config() -> Result<Config, clap::Error> {
    parse_config_from(std::env::args_os())
}

/// Same as [`parse_config`] with explicit arguments (first item is the binary name).
///
/// # Errors
///
/// See [`parse_config`].
pub fn parse_config_from<I, T>(itr: I) -> Result<Config, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let mut cmd = Args::command();
    cmd.build();
    let argv = escape_hyphen_files(&cmd, itr.into_iter().map(Into::into));
    let matches = cmd.try_get_matches_from(argv)?;
    let actions = ordered_actions(&matches);
    let args = Args::from_arg_matches(&matches)?;
    Ok(Config::from_args(args, actions))
}

/// Every argument that is not one of our options names a file, even when it
/// starts with `-`. Such arguments are passed to clap as `--hyphen-file=ARG`.
///
/// Short clusters follow clap's reading: `-vv` is an option as long as every
/// character is a known short flag.
fn escape_hyphen_files(cmd: &Command, argv: impl Iterator<Item = OsString>) -> Vec<OsString> {
    let mut out = Vec::new();
    let mut literal = false;
    let mut value_pending = false;

    for (i, arg) in argv.enumerate() {
        if i == 0 || literal || value_pending {
            value_pending = false;
            out.push(arg);
            continue;
        }
        let Some(text) = arg.to_str() else {
            if arg.as_encoded_bytes().first() == Some(&b'-') {
                out.push(hyphen_file(&arg));
            } else {
                out.push(arg);
            }
            continue;
        };

        match classify_token(cmd, text) {
            Token::EndOfOptions => literal = true,
            Token::Option { takes_value } => value_pending = takes_value,
            Token::Plain => {}
            Token::HyphenFile => {
                out.push(hyphen_file(&arg));
                continue;
            }
        }
        out.push(arg);
    }

    out
}

enum Token {
    EndOfOptions,
    /// `takes_value` is set when the value is the next argument.
    Option { takes_value: bool },
    Plain,
    HyphenFile,
}

fn classify_token(cmd: &Command, text: &str) -> Token {
    let takes_values = |arg: &clap::Arg| arg.get_num_args().is_some_and(|n| n.takes_values());

    if text == "--" {
        Token::EndOfOptions
    } else if let Some(long) = text.strip_prefix("--") {
        let (name, inline) = match long.split_once('=') {
            Some((name, _)) => (name, true),
            None => (long, false),
        };
        match cmd.get_arguments().find(|a| a.get_long() == Some(name)) {
            Some(arg) if inline && !takes_values(arg) => Token::HyphenFile,
            Some(arg) => Token::Option { takes_value: !inline && takes_values(arg) },
            None => Token::HyphenFile,
        }
    } else if let Some(shorts) = text.strip_prefix('-').filter(|s| !s.is_empty()) {
        for (pos, c) in shorts.char_indices() {
            let Some(arg) = cmd.get_arguments().find(|a| a.get_short() == Some(c)) else {
                return Token::HyphenFile;
            };
            if takes_values(arg) {
                return Token::Option { takes_value: pos + c.len_utf8() == shorts.len() };
            }
        }
        Token::Option { takes_value: false }
    } else {
        Token::Plain
    }
}

fn hyphen_file(arg: &OsString) -> OsString {
    let mut escaped = OsString::from("--hyphen-file=");
    escaped.push(arg);
    escaped
}

/// Interleaves files and visualization toggles by their position on the command line.
fn ordered_actions(matches: &ArgMatches) -> Vec<Action> {
    let mut indexed: Vec<(usize, Action)> = Vec::new();

    for id in ["files", "hyphen_files"] {
        if let (Some(indices), Some(files)) = (matches.indices_of(id), matches.get_many::<PathBuf>(id)) {
            indexed.extend(indices.zip(files).map(|(i, path)| (i, Action::AnalyzeFile(path.clone()))));
        }
    }
    for (id, on) in [("dots", true), ("no_dots", false)] {
        if let Some(indices) = matches.indices_of(id) {
            indexed.extend(indices.map(|i| (i, Action::SetVisualization(on))));
        }
    }

    indexed.sort_by_key(|(i, _)| *i);
    indexed.into_iter().map(|(_, action)| action).collect()
}
