//! Output tree writer

use crate::error::{MirrorError, Result};
use std::fs;
use std::path::Path;

/// Destination for exported directories and files
pub trait OutputWriter {
    /// Create a directory and its parents; an existing directory is fine
    fn ensure_directory(&self, path: &Path) -> Result<()>;

    /// Write `bytes` to `path`, replacing any existing content
    fn write_file(&self, path: &Path, bytes: &[u8]) -> Result<()>;
}

/// Writes the output tree to the local file system
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSystemOutput;

impl OutputWriter for FileSystemOutput {
    fn ensure_directory(&self, path: &Path) -> Result<()> {
        fs::create_dir_all(path).map_err(MirrorError::Io)
    }

    fn write_file(&self, path: &Path, bytes: &[u8]) -> Result<()> {
        fs::write(path, bytes).map_err(MirrorError::Io)
    }
}
