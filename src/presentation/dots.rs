// src/presentation/dots.rs
use std::io::Write;

use eol_stats_ports::render::MarkRenderer;
use eol_stats_shared_kernel::{ErrorContext, Result, TerminatorKind};

use super::{NO_COLOR, color_of};

/// Draws one colored `.` per terminator as the stream is read.
///
/// A CR+LF mark backs up over the provisional CR dot and redraws it in the
/// CR+LF color. Every mark is flushed so progress is visible on slow input.
pub struct AnsiDotRenderer<W: Write> {
    out: W,
}

impl<W: Write> AnsiDotRenderer<W> {
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> MarkRenderer for AnsiDotRenderer<W> {
    fn mark(&mut self, kind: TerminatorKind) -> Result<()> {
        if kind == TerminatorKind::CrLf {
            self.out.write_all(b"\x08").context("drawing dots")?;
        }
        write!(self.out, "{}.", color_of(kind)).context("drawing dots")?;
        self.out.flush().context("drawing dots")
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.out, "{NO_COLOR}").context("drawing dots")?;
        self.out.flush().context("drawing dots")
    }
}
