// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{EolStatsError, ErrorContext, InfraResult, InfrastructureError, Result};

pub mod error;
pub mod value_objects;

pub use value_objects::{ByteCount, SourceName, TerminatorCount, TerminatorKind};
