// crates/domain/src/report.rs
use eol_stats_shared_kernel::{ByteCount, TerminatorCount, TerminatorKind};
use serde::Serialize;

/// Statistics for one fully consumed stream.
///
/// Produced once by [`StreamClassifier::finish`](crate::StreamClassifier::finish)
/// and never mutated afterwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    #[serde(rename = "lf")]
    pub(crate) lf_count: TerminatorCount,
    #[serde(rename = "cr")]
    pub(crate) cr_count: TerminatorCount,
    #[serde(rename = "crlf")]
    pub(crate) crlf_count: TerminatorCount,
    pub(crate) total_bytes: ByteCount,
    #[serde(rename = "non_text")]
    pub(crate) non_text_count: ByteCount,
    pub(crate) ends_with_terminator: bool,
}

impl Report {
    pub const fn lf_count(&self) -> TerminatorCount {
        self.lf_count
    }

    /// Lone CRs only; a CR that is part of CR+LF is never included.
    pub const fn cr_count(&self) -> TerminatorCount {
        self.cr_count
    }

    pub const fn crlf_count(&self) -> TerminatorCount {
        self.crlf_count
    }

    pub const fn count_of(&self, kind: TerminatorKind) -> TerminatorCount {
        match kind {
            TerminatorKind::Lf => self.lf_count,
            TerminatorKind::Cr => self.cr_count,
            TerminatorKind::CrLf => self.crlf_count,
        }
    }

    pub fn total_terminators(&self) -> TerminatorCount {
        self.lf_count + self.cr_count + self.crlf_count
    }

    pub const fn total_bytes(&self) -> ByteCount {
        self.total_bytes
    }

    pub const fn non_text_count(&self) -> ByteCount {
        self.non_text_count
    }

    /// Heuristic: any byte outside the text-safe set marks the stream as binary.
    pub const fn is_probably_binary(&self) -> bool {
        !self.non_text_count.is_zero()
    }

    /// False for an empty stream.
    pub const fn ends_with_terminator(&self) -> bool {
        self.ends_with_terminator
    }
}
