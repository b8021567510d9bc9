//! Packaging a generated project as a downloadable zip archive.

use crate::{
    config::AuthorInfo,
    constants::download::{
        CONTENT_TYPE, MODNAME_PATTERN, UNSUPPORTED_PROJECT_TYPE, WRONG_PROJECT_NAME,
    },
    context::VariableContext,
    error::{Error, Result},
    project::{self, generate_project, GenerateOptions, ProjectDescriptor},
    renderer::MiniJinjaRenderer,
    sink::ArchiveSink,
};
use chrono::{DateTime, Local};
use log::info;
use regex::Regex;
use serde::Deserialize;
use std::path::Path;

/// Form fields submitted to request a project archive.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DownloadRequest {
    pub project_name: String,
    /// Long name of the project type, e.g. `"Flask (large)"`.
    pub project_type: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub url: String,
}

/// A finished archive, ready to be sent as a response body.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectArchive {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl ProjectArchive {
    pub fn content_type(&self) -> &'static str {
        CONTENT_TYPE
    }

    pub fn content_disposition(&self) -> String {
        format!("attachment; filename={}", self.filename)
    }
}

impl DownloadRequest {
    /// Checks the module name and resolves the project type.
    pub fn validate(&self) -> Result<&'static ProjectDescriptor> {
        let pattern = Regex::new(MODNAME_PATTERN)
            .map_err(|e| Error::Other(anyhow::anyhow!("Invalid module name pattern: {e}")))?;
        if !pattern.is_match(&self.project_name) {
            return Err(Error::InvalidRequest(WRONG_PROJECT_NAME.to_string()));
        }
        project::find_by_long_name(&self.project_type)
            .ok_or_else(|| Error::InvalidRequest(UNSUPPORTED_PROJECT_TYPE.to_string()))
    }

    pub fn author_info(&self) -> AuthorInfo {
        AuthorInfo::from_email(&self.author, &self.email, &self.url)
    }

    /// Generates the project in memory and packs it as `<project_name>.zip`.
    pub fn build(&self, templates_root: &Path, now: DateTime<Local>) -> Result<ProjectArchive> {
        let descriptor = self.validate()?;
        let context = VariableContext::for_project(&self.project_name, &self.author_info(), now);
        let engine = MiniJinjaRenderer::new();
        let mut sink = ArchiveSink::new();

        generate_project(
            descriptor,
            templates_root,
            &context,
            &engine,
            &mut sink,
            &GenerateOptions::default(),
        )?;
        let bytes = sink.finish()?;
        info!("Packed {} project '{}' ({} bytes)", descriptor.name, self.project_name, bytes.len());

        Ok(ProjectArchive { filename: format!("{}.zip", self.project_name), bytes })
    }
}
