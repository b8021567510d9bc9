use super::Sink;
use crate::error::{Error, Result};
use log::debug;
use std::{
    fs::{self, OpenOptions},
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};

/// Writes generated output below a directory on disk.
///
/// Existing files are never replaced. Parent directories are never created
/// implicitly: the walker emits every directory before its contents.
#[derive(Debug)]
pub struct FilesystemSink {
    root: PathBuf,
}

impl FilesystemSink {
    /// Creates `root` (its parent must exist). An existing `root` directory
    /// is reused.
    pub fn create<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref();
        if !root.is_dir() {
            let parent = match root.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent,
                _ => Path::new("."),
            };
            if !parent.is_dir() {
                return Err(Error::RootNotFound { path: parent.display().to_string() });
            }
            fs::create_dir(root)?;
            debug!("Created destination root '{}'", root.display());
        }
        Ok(Self { root: root.to_path_buf() })
    }

    /// Uses an existing `root` directory.
    pub fn open<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref();
        if !root.is_dir() {
            return Err(Error::RootNotFound { path: root.display().to_string() });
        }
        Ok(Self { root: root.to_path_buf() })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

fn missing_parent(target: &Path) -> Error {
    let parent = target.parent().unwrap_or(target);
    Error::RootNotFound { path: parent.display().to_string() }
}

impl Sink for FilesystemSink {
    fn create_directory(&mut self, path: &Path) -> Result<()> {
        let target = self.root.join(path);
        if target.is_dir() {
            debug!("Directory '{}' already exists", target.display());
            return Ok(());
        }
        match fs::create_dir(&target) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(missing_parent(&target)),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                Err(Error::FileAlreadyExists { path: target.display().to_string() })
            }
            Err(e) => Err(e.into()),
        }
    }

    fn write_file(&mut self, path: &Path, content: &str) -> Result<()> {
        let target = self.root.join(path);
        let mut file = match OpenOptions::new().write(true).create_new(true).open(&target) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                return Err(Error::FileAlreadyExists { path: target.display().to_string() })
            }
            Err(e) if e.kind() == ErrorKind::NotFound => return Err(missing_parent(&target)),
            Err(e) => return Err(e.into()),
        };
        file.write_all(content.as_bytes())?;
        Ok(())
    }
}
