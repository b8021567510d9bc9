//! Name rewriting for template paths.
//!
//! A basename is rewritten by the first matching step:
//! 1. an exact rule key renders the rule's template against the context;
//! 2. a `_py.template` suffix becomes `.py`;
//! 3. anything else is kept as is.

use crate::{
    constants::{CODE_EXTENSION, CODE_TEMPLATE_SUFFIX},
    context::VariableContext,
    error::Result,
    ext::PathExt,
    renderer::TemplateRenderer,
};
use indexmap::IndexMap;
use std::path::{Component, Path, PathBuf};

/// Maps a source basename to a name template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RewriteRules(IndexMap<String, String>);

impl RewriteRules {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, template: impl Into<String>) {
        self.0.insert(name.into(), template.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RewriteRules {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Rewrites one basename.
pub fn rewrite(
    basename: &str,
    rules: &RewriteRules,
    context: &VariableContext,
    engine: &dyn TemplateRenderer,
) -> Result<String> {
    if let Some(template) = rules.get(basename) {
        return engine.render(template, context.as_value(), Some(basename));
    }
    if let Some(stem) = basename.strip_suffix(CODE_TEMPLATE_SUFFIX) {
        return Ok(format!("{stem}{CODE_EXTENSION}"));
    }
    Ok(basename.to_string())
}

/// Rewrites every segment of a relative path independently.
pub fn rewrite_path(
    path: &Path,
    rules: &RewriteRules,
    context: &VariableContext,
    engine: &dyn TemplateRenderer,
) -> Result<PathBuf> {
    let mut rewritten = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Normal(segment) => {
                let segment = Path::new(segment).to_str_checked()?;
                rewritten.push(rewrite(segment, rules, context, engine)?);
            }
            Component::CurDir => {}
            other => rewritten.push(other.as_os_str()),
        }
    }
    Ok(rewritten)
}
