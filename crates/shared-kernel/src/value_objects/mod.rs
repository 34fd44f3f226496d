// crates/shared-kernel/src/value_objects/mod.rs
pub mod counts;
pub mod source;
pub mod terminator;

pub use counts::{ByteCount, TerminatorCount};
pub use source::SourceName;
pub use terminator::TerminatorKind;
