use std::{
    fs::File,
    io::{self, BufReader, ErrorKind},
    path::Path,
};

/// Convenience helpers for reading files with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Open the file at `path`. Directories are rejected up front instead of
    /// failing on the first read.
    pub fn open(path: &Path) -> io::Result<File> {
        let file = File::open(path)?;
        if file.metadata()?.is_dir() {
            return Err(io::Error::new(ErrorKind::IsADirectory, "is a directory"));
        }
        Ok(file)
    }

    /// Open the file at `path` with buffered reading.
    pub fn open_buffered(path: &Path) -> io::Result<BufReader<File>> {
        Self::open(path).map(BufReader::new)
    }
}
