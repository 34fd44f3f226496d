// crates/ports/src/source.rs
use std::io::BufRead;

use eol_stats_shared_kernel::{InfraResult, SourceName};

/// Port for turning a [`SourceName`] into a readable byte stream.
///
/// The returned reader owns whatever handle backs it; dropping it releases
/// the handle.
pub trait SourceOpener {
    fn open(&self, source: &SourceName) -> InfraResult<Box<dyn BufRead>>;
}
