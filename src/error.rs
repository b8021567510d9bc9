use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    /// The source root, the destination root, or a destination parent is missing.
    #[error("Root directory not found: '{path}'.")]
    RootNotFound { path: String },

    /// Generated files never replace existing ones.
    #[error("File already exists. Will not overwrite: '{path}'.")]
    FileAlreadyExists { path: String },

    /// A template referenced a variable the context does not define.
    #[error("Undefined variable in '{template}': {detail}")]
    UndefinedVariable { template: String, detail: String },

    #[error("Subdirectory already exists: '{path}'.")]
    SubdirectoryAlreadyExists { path: String },

    #[error("Failed to render. Original error: {0}")]
    MinijinjaError(minijinja::Error),

    #[error("Failed to parse config file. Original error: {0}")]
    ConfigParseError(#[from] serde_json::Error),

    #[error("Failed to parse ignore patterns. Original error: {0}")]
    GlobSetParseError(#[from] globset::Error),

    #[error("Failed to build archive. Original error: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("Failed to walk template directory. Original error: {0}")]
    WalkDirError(#[from] walkdir::Error),

    #[error("Unknown project type '{name}'. Available types: {available}.")]
    UnknownProjectType { name: String, available: String },

    #[error("No partial build named '{name}' in the config of project type '{project_type}'.")]
    UnknownPartialBuild { project_type: String, name: String },

    #[error("Project type '{project_type}' does not support single-file mode.")]
    SingleFileUnsupported { project_type: String },

    #[error("Invalid request: {0}.")]
    InvalidRequest(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<minijinja::Error> for Error {
    fn from(err: minijinja::Error) -> Self {
        match err.kind() {
            minijinja::ErrorKind::UndefinedError => Error::UndefinedVariable {
                template: err.name().unwrap_or("<string>").to_string(),
                detail: err.to_string(),
            },
            _ => Error::MinijinjaError(err),
        }
    }
}

/// Convenience type alias for Results with entree's Error as the error type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(crate::constants::exit_codes::FAILURE);
}
