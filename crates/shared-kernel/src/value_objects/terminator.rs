// crates/shared-kernel/src/value_objects/terminator.rs
use serde::Serialize;

/// The three recognised line terminators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TerminatorKind {
    /// `\n` on its own (Unix).
    Lf,
    /// `\r` not followed by `\n` (classic Mac OS).
    Cr,
    /// `\r\n` counted as a single terminator (Windows).
    CrLf,
}

impl TerminatorKind {
    pub const ALL: [Self; 3] = [Self::Lf, Self::Cr, Self::CrLf];
}
