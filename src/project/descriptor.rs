use crate::{
    context::VariableContext,
    error::Result,
    renderer::TemplateRenderer,
    template::{rewrite_path, RewriteRules},
};
use indexmap::IndexMap;
use std::path::{Path, PathBuf};

/// Static description of one project type.
///
/// Template locations are relative to the templates root; `directories` and
/// `files` list the project tree relative to `template_dir`, `/`-separated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectDescriptor {
    pub name: &'static str,
    pub long_name: &'static str,
    pub version: &'static str,
    pub template_dir: &'static str,
    pub common_dir: Option<&'static str>,
    pub single_file: Option<&'static str>,
    pub rules: &'static [(&'static str, &'static str)],
    pub directories: &'static [&'static str],
    pub files: &'static [&'static str],
}

impl ProjectDescriptor {
    pub fn template_path(&self, templates_root: &Path) -> PathBuf {
        templates_root.join(self.template_dir)
    }

    pub fn common_path(&self, templates_root: &Path) -> Option<PathBuf> {
        self.common_dir.map(|dir| templates_root.join(dir))
    }

    pub fn single_file_path(&self, templates_root: &Path) -> Option<PathBuf> {
        self.single_file.map(|file| templates_root.join(file))
    }

    pub fn rewrite_rules(&self) -> RewriteRules {
        self.rules.iter().copied().collect()
    }

    /// Source directory → generated directory, both relative.
    pub fn dirmap(
        &self,
        context: &VariableContext,
        engine: &dyn TemplateRenderer,
    ) -> Result<IndexMap<&'static str, PathBuf>> {
        self.map_paths(self.directories, context, engine)
    }

    /// Source file → generated file, both relative.
    pub fn filemap(
        &self,
        context: &VariableContext,
        engine: &dyn TemplateRenderer,
    ) -> Result<IndexMap<&'static str, PathBuf>> {
        self.map_paths(self.files, context, engine)
    }

    fn map_paths(
        &self,
        paths: &'static [&'static str],
        context: &VariableContext,
        engine: &dyn TemplateRenderer,
    ) -> Result<IndexMap<&'static str, PathBuf>> {
        let rules = self.rewrite_rules();
        paths
            .iter()
            .map(|path| Ok((*path, rewrite_path(Path::new(path), &rules, context, engine)?)))
            .collect()
    }
}
