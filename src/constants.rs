//! Constants used throughout the entree application

/// User configuration file name, looked up in the platform config directory
pub const CONFIG_FILE_NAME: &str = "entree_config.json";

/// Sentinel used for author fields that were never configured
pub const UNDEFINED: &str = "<UNDEFINED>";

/// Marker for source files that render to native (Python) source code
pub const CODE_TEMPLATE_SUFFIX: &str = "_py.template";

/// Extension replacing [`CODE_TEMPLATE_SUFFIX`]
pub const CODE_EXTENSION: &str = ".py";

/// Files skipped when neither the caller nor the config names any
pub const DEFAULT_FILES_TO_IGNORE: &[&str] = &[".DS_Store"];

/// Format of the `creation_date` context variable
pub const CREATION_DATE_FORMAT: &str = "%B %Y";

/// Directory holding the bundled template trees
pub const BUNDLED_TEMPLATES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/templates");

/// Project type used when the command line names none
pub const DEFAULT_PROJECT_TYPE: &str = "python";

/// Download packaging
pub mod download {
    pub const CONTENT_TYPE: &str = "application/zip";
    pub const MODNAME_PATTERN: &str = r"^[a-zA-Z][a-zA-Z0-9_]*$";
    pub const WRONG_PROJECT_NAME: &str = "Wrong format for project name";
    pub const UNSUPPORTED_PROJECT_TYPE: &str = "Project type unsupported";
}

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
