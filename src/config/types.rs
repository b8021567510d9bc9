use crate::constants::UNDEFINED;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Author metadata exposed to templates as `config`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorInfo {
    #[serde(default = "get_undefined")]
    pub author: String,
    #[serde(default = "get_undefined")]
    pub author_email_prefix: String,
    #[serde(default = "get_undefined")]
    pub author_email_suffix: String,
    #[serde(default = "get_undefined")]
    pub author_url: String,
}

impl AuthorInfo {
    /// Builds author metadata from a full e-mail address, split at the first `@`.
    /// Without an `@` both halves are empty.
    pub fn from_email(author: &str, email: &str, url: &str) -> Self {
        let (prefix, suffix) = email.split_once('@').unwrap_or(("", ""));
        Self {
            author: author.to_string(),
            author_email_prefix: prefix.to_string(),
            author_email_suffix: suffix.to_string(),
            author_url: url.to_string(),
        }
    }
}

impl Default for AuthorInfo {
    fn default() -> Self {
        Self {
            author: get_undefined(),
            author_email_prefix: get_undefined(),
            author_email_suffix: get_undefined(),
            author_url: get_undefined(),
        }
    }
}

/// Settings that apply to a single project type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Named allow-lists of source paths, relative to the project template root.
    #[serde(default)]
    pub partial_builds: IndexMap<String, Vec<String>>,
    /// Replaces the global `files_to_ignore` for this project type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files_to_ignore: Option<Vec<String>>,
}

fn get_undefined() -> String {
    UNDEFINED.to_string()
}
