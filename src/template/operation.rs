use std::path::PathBuf;

/// What the walker decided for one source entry. Paths are relative to the
/// source root and the destination root respectively.
#[derive(Debug, PartialEq)]
pub enum TemplateOperation {
    CreateDirectory { source: PathBuf, target: PathBuf },
    Write { source: PathBuf, target: PathBuf, content: String },
    Ignore { source: PathBuf, target: PathBuf },
    /// Pruned because it is not on the partial-build allow-list.
    Skip { source: PathBuf },
}

impl TemplateOperation {
    /// Gets a message describing the operation.
    pub fn get_message(&self) -> String {
        match self {
            TemplateOperation::CreateDirectory { target, .. } => {
                format!("Creating directory '{}'", target.display())
            }
            TemplateOperation::Write { source, target, .. } => {
                format!("Writing '{}' from '{}'", target.display(), source.display())
            }
            TemplateOperation::Ignore { target, .. } => {
                format!("File ignored: '{}'", target.display())
            }
            TemplateOperation::Skip { source } => {
                format!("Skipping '{}' (not part of the partial build)", source.display())
            }
        }
    }
}
