use super::Sink;
use crate::{error::Result, ext::PathExt};
use chrono::{Datelike, Local, NaiveDateTime, Timelike};
use indexmap::IndexMap;
use log::debug;
use std::{
    io::{Cursor, Write},
    path::Path,
};
use zip::{write::SimpleFileOptions, CompressionMethod, ZipWriter};

/// Collects generated files in memory and packs them into a zip archive.
///
/// Entries are keyed by their `/`-separated relative path; writing the same
/// path twice keeps the last content. Directories exist implicitly through
/// their files, so empty directories are not recorded.
#[derive(Debug, Default)]
pub struct ArchiveSink {
    entries: IndexMap<String, ArchiveEntry>,
}

#[derive(Debug)]
struct ArchiveEntry {
    content: Vec<u8>,
    modified: NaiveDateTime,
}

impl ArchiveSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn content(&self, name: &str) -> Option<&[u8]> {
        self.entries.get(name).map(|entry| entry.content.as_slice())
    }

    /// Packs every entry, deflate-compressed, into a zip archive.
    pub fn finish(self) -> Result<Vec<u8>> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        for (name, entry) in &self.entries {
            let options = SimpleFileOptions::default()
                .compression_method(CompressionMethod::Deflated)
                .last_modified_time(to_zip_datetime(&entry.modified));
            zip.start_file(name.as_str(), options)?;
            zip.write_all(&entry.content)?;
        }
        let bytes = zip.finish()?.into_inner();
        debug!("Packed {} entries into {} bytes", self.entries.len(), bytes.len());
        Ok(bytes)
    }
}

fn to_zip_datetime(timestamp: &NaiveDateTime) -> zip::DateTime {
    zip::DateTime::from_date_and_time(
        timestamp.year() as u16,
        timestamp.month() as u8,
        timestamp.day() as u8,
        timestamp.hour() as u8,
        timestamp.minute() as u8,
        timestamp.second() as u8,
    )
    .unwrap_or_default()
}

impl Sink for ArchiveSink {
    fn create_directory(&mut self, _path: &Path) -> Result<()> {
        Ok(())
    }

    fn write_file(&mut self, path: &Path, content: &str) -> Result<()> {
        let name = path.to_archive_name()?;
        let entry = ArchiveEntry {
            content: content.as_bytes().to_vec(),
            modified: Local::now().naive_local(),
        };
        if self.entries.insert(name, entry).is_some() {
            debug!("Replaced archive entry '{}'", path.display());
        }
        Ok(())
    }
}
