// crates/domain/src/options.rs

/// Options for a single analysis. Threaded explicitly through every call;
/// nothing here lives in global state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnalysisOptions {
    /// Emit a mark per terminator while the stream is consumed.
    pub visualize: bool,
}

impl AnalysisOptions {
    pub const fn with_visualize(visualize: bool) -> Self {
        Self { visualize }
    }
}

/// How reports are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable block per source.
    #[default]
    Text,
    /// One JSON object per line and source.
    Json,
}
