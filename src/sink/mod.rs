//! Destinations for generated output.
//!
//! The walker only hands a sink paths relative to the destination root, so the
//! same walk can land on disk or in an in-memory archive.

pub mod archive;
pub mod filesystem;

pub use archive::ArchiveSink;
pub use filesystem::FilesystemSink;

use crate::error::Result;
use std::path::Path;

pub trait Sink {
    /// Creates `path`. Creating a directory that already exists is not an error.
    fn create_directory(&mut self, path: &Path) -> Result<()>;

    /// Stores `content` at `path`.
    fn write_file(&mut self, path: &Path, content: &str) -> Result<()>;
}
