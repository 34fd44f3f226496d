// crates/ports/src/render.rs
use eol_stats_shared_kernel::{Result, TerminatorKind};

/// Receives terminator marks while a stream is being classified.
///
/// A [`TerminatorKind::CrLf`] mark always follows a [`TerminatorKind::Cr`]
/// mark and replaces it.
pub trait MarkRenderer {
    fn mark(&mut self, kind: TerminatorKind) -> Result<()>;

    /// Called once after the last mark of a stream.
    fn finish(&mut self) -> Result<()>;
}
