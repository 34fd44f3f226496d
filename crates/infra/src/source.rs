// crates/infra/src/source.rs
use std::io::{self, BufRead};

use eol_stats_ports::source::SourceOpener;
use eol_stats_shared_kernel::{InfraResult, InfrastructureError, SourceName};

use crate::persistence::FileReader;

/// Opens files from the local filesystem and the process's standard input.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdSourceOpener;

impl StdSourceOpener {
    pub const fn new() -> Self {
        Self
    }
}

impl SourceOpener for StdSourceOpener {
    fn open(&self, source: &SourceName) -> InfraResult<Box<dyn BufRead>> {
        match source {
            SourceName::File(path) => {
                let reader = FileReader::open_buffered(path).map_err(|e| InfrastructureError::SourceOpen {
                    path: path.clone(),
                    source: e,
                })?;
                log::debug!("opened {}", path.display());
                Ok(Box::new(reader))
            }
            SourceName::Stdin => {
                log::debug!("reading standard input");
                Ok(Box::new(io::stdin().lock()))
            }
        }
    }
}
