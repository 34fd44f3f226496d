// crates/domain/src/classifier.rs
use std::io::{BufRead, ErrorKind};

use eol_stats_shared_kernel::TerminatorKind;

use crate::{options::AnalysisOptions, report::Report};

const TAB: u8 = 9;
const LF: u8 = 10;
const CR: u8 = 13;
const DEL: u8 = 127;

/// Whether `byte` can plausibly appear in a text file.
///
/// TAB, LF, CR and everything from space upwards except DEL. This is a
/// binary-content heuristic, not an encoding check.
#[inline]
pub const fn is_text_safe(byte: u8) -> bool {
    matches!(byte, TAB | LF | CR) || (byte >= b' ' && byte != DEL)
}

/// Single-pass line terminator classifier.
///
/// Consumes bytes in order with one byte of look-behind. A CR is counted
/// as a lone CR as soon as it is seen; if the very next byte is LF the
/// pair is moved over to CR+LF. No input is buffered.
#[derive(Debug, Clone, Default)]
pub struct StreamClassifier {
    report: Report,
    previous_was_cr: bool,
}

impl StreamClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one byte. Returns the terminator mark to draw, if any.
    ///
    /// [`TerminatorKind::CrLf`] is only ever returned right after a
    /// [`TerminatorKind::Cr`] and supersedes that provisional mark.
    pub fn push(&mut self, byte: u8) -> Option<TerminatorKind> {
        let state = &mut self.report;
        state.total_bytes.increment();
        if !is_text_safe(byte) {
            state.non_text_count.increment();
        }

        let mark = match byte {
            CR => {
                state.cr_count.increment();
                Some(TerminatorKind::Cr)
            }
            LF if self.previous_was_cr => {
                state.cr_count.retract();
                state.crlf_count.increment();
                Some(TerminatorKind::CrLf)
            }
            LF => {
                state.lf_count.increment();
                Some(TerminatorKind::Lf)
            }
            _ => None,
        };

        self.previous_was_cr = byte == CR;
        state.ends_with_terminator = matches!(byte, CR | LF);
        mark
    }

    /// Feeds a chunk, calling `on_mark` for every terminator mark.
    ///
    /// The CR carry survives between chunks, so a CR at the end of one
    /// chunk still pairs with an LF at the start of the next.
    pub fn push_chunk<F>(&mut self, chunk: &[u8], mut on_mark: F)
    where
        F: FnMut(TerminatorKind),
    {
        for &byte in chunk {
            if let Some(mark) = self.push(byte) {
                on_mark(mark);
            }
        }
    }

    /// Statistics for the bytes consumed so far.
    pub fn snapshot(&self) -> Report {
        self.report
    }

    pub fn finish(self) -> Report {
        self.report
    }
}

/// Classifies an in-memory buffer.
pub fn classify(bytes: &[u8]) -> Report {
    let mut classifier = StreamClassifier::new();
    classifier.push_chunk(bytes, |_| {});
    classifier.finish()
}

/// Drives a [`StreamClassifier`] over `reader` until EOF.
///
/// `on_mark` only receives marks when `options.visualize` is set. Counting is
/// the same either way. Read errors other than `Interrupted` end the pass.
pub fn classify_reader<R, F>(mut reader: R, options: AnalysisOptions, mut on_mark: F) -> std::io::Result<Report>
where
    R: BufRead,
    F: FnMut(TerminatorKind),
{
    let mut classifier = StreamClassifier::new();

    loop {
        let buf = match reader.fill_buf() {
            Ok(buf) => buf,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        if buf.is_empty() {
            break;
        }

        if options.visualize {
            classifier.push_chunk(buf, &mut on_mark);
        } else {
            classifier.push_chunk(buf, |_| {});
        }

        let len = buf.len();
        reader.consume(len);
    }

    Ok(classifier.finish())
}
