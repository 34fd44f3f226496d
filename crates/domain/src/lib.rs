//! # Domain
//!
//! The streaming line terminator classifier and the values it produces.
//!
//! - [`classifier`]: single-pass byte state machine (LF / CR / CR+LF)
//! - [`report`]: immutable end-of-stream statistics
//! - [`options`]: per-analysis and output options

#![allow(clippy::multiple_crate_versions)]

pub mod classifier;
pub mod options;
pub mod report;

pub use classifier::{StreamClassifier, classify, classify_reader, is_text_safe};
pub use options::{AnalysisOptions, OutputFormat};
pub use report::Report;
