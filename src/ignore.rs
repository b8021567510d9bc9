use crate::{constants::DEFAULT_FILES_TO_IGNORE, error::Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use log::debug;

/// Names of generated files that must never be written.
///
/// Entries are matched against the rewritten basename of a file, never
/// against a directory or a full path. Plain names match literally; glob
/// metacharacters (`*`, `?`, `[...]`, `{a,b}`) act as patterns.
#[derive(Debug, Clone)]
pub struct IgnoreList {
    globs: GlobSet,
}

impl IgnoreList {
    pub fn new<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let pattern = pattern.as_ref();
            debug!("Adding ignore pattern: {pattern} to globset");
            builder.add(Glob::new(pattern)?);
        }
        Ok(Self { globs: builder.build()? })
    }

    /// The list used when neither the caller nor the config names any files.
    pub fn defaults() -> Result<Self> {
        Self::new(DEFAULT_FILES_TO_IGNORE)
    }

    pub fn is_ignored(&self, file_name: &str) -> bool {
        self.globs.is_match(file_name)
    }
}
