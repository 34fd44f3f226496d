// crates/shared-kernel/src/value_objects/source.rs
use std::{
    fmt,
    path::{Path, PathBuf},
};

use serde::Serialize;

/// Where an analysed byte stream comes from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceName {
    File(PathBuf),
    Stdin,
}

impl SourceName {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::File(path.into())
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::File(path) => Some(path),
            Self::Stdin => None,
        }
    }

    pub const fn is_stdin(&self) -> bool {
        matches!(self, Self::Stdin)
    }
}

/// Renders as `file <path>` or `standard input`.
impl fmt::Display for SourceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "file {}", path.display()),
            Self::Stdin => f.write_str("standard input"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_report_header_wording() {
        assert_eq!(SourceName::file("notes.txt").to_string(), "file notes.txt");
        assert_eq!(SourceName::Stdin.to_string(), "standard input");
    }

    #[test]
    fn path_is_absent_for_stdin() {
        assert!(SourceName::Stdin.path().is_none());
        assert_eq!(SourceName::file("a/b.txt").path(), Some(Path::new("a/b.txt")));
    }
}
