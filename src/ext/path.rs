use std::path::{Component, Path};

use crate::error::{Error, Result};

/// Extension trait for Path to provide convenient string conversion methods
pub trait PathExt {
    /// Converts a path to a string slice, returning an error if the path contains invalid Unicode characters.
    ///
    /// # Examples
    /// ```
    /// use entree::ext::PathExt;
    /// use std::path::Path;
    ///
    /// let path = Path::new("test");
    /// assert_eq!(path.to_str_checked().unwrap(), "test");
    /// ```
    fn to_str_checked(&self) -> Result<&str>;

    /// Joins the normal components of a relative path with `/`, the separator
    /// zip entry names require on every platform.
    ///
    /// # Examples
    /// ```
    /// use entree::ext::PathExt;
    /// use std::path::Path;
    ///
    /// let path = Path::new("./static").join("css").join("style.css");
    /// assert_eq!(path.to_archive_name().unwrap(), "static/css/style.css");
    /// ```
    fn to_archive_name(&self) -> Result<String>;
}

impl PathExt for Path {
    fn to_str_checked(&self) -> Result<&str> {
        self.to_str().ok_or_else(|| {
            Error::Other(anyhow::anyhow!(
                "Path '{}' contains invalid Unicode characters",
                self.display()
            ))
        })
    }

    fn to_archive_name(&self) -> Result<String> {
        let mut parts = Vec::new();
        for component in self.components() {
            match component {
                Component::Normal(part) => parts.push(Path::new(part).to_str_checked()?),
                Component::CurDir => {}
                _ => {
                    return Err(Error::Other(anyhow::anyhow!(
                        "Path '{}' cannot be used as an archive entry name",
                        self.display()
                    )))
                }
            }
        }
        Ok(parts.join("/"))
    }
}
