use super::ProjectDescriptor;
use crate::{
    constants::DEFAULT_FILES_TO_IGNORE,
    context::VariableContext,
    error::{Error, Result},
    ignore::IgnoreList,
    renderer::TemplateRenderer,
    sink::{FilesystemSink, Sink},
    template::{MaterializationReport, TemplateProcessor},
};
use log::{debug, info};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Per-run knobs for [`generate_project`].
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateOptions {
    pub files_to_ignore: Vec<String>,
    /// Allow-list of source paths. Paths are relative to the root of the pass
    /// they belong to, so common files are only generated when listed too.
    pub partial: Option<Vec<String>>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            files_to_ignore: DEFAULT_FILES_TO_IGNORE.iter().map(|name| name.to_string()).collect(),
            partial: None,
        }
    }
}

/// Generates a whole project: the project's own templates first, then the
/// common files, both into `sink` with the same context.
pub fn generate_project(
    descriptor: &ProjectDescriptor,
    templates_root: &Path,
    context: &VariableContext,
    engine: &dyn TemplateRenderer,
    sink: &mut dyn Sink,
    options: &GenerateOptions,
) -> Result<MaterializationReport> {
    let rules = descriptor.rewrite_rules();
    let ignore = IgnoreList::new(&options.files_to_ignore)?;

    let mut roots = vec![descriptor.template_path(templates_root)];
    roots.extend(descriptor.common_path(templates_root));

    let mut report = MaterializationReport::default();
    for root in roots {
        debug!("Materializing '{}' for project type '{}'", root.display(), descriptor.name);
        let mut processor =
            TemplateProcessor::new(engine, root, &rules, context)?.with_ignore(ignore.clone());
        if let Some(partial) = &options.partial {
            processor = processor.with_partial(partial);
        }
        report.merge(processor.materialize(sink)?);
    }
    Ok(report)
}

/// Renders one template into a file named `file_name` at the sink root.
pub fn create_single_file(
    template_path: &Path,
    file_name: &str,
    context: &VariableContext,
    engine: &dyn TemplateRenderer,
    sink: &mut dyn Sink,
) -> Result<PathBuf> {
    if !template_path.is_file() {
        return Err(Error::RootNotFound { path: template_path.display().to_string() });
    }
    let content = engine.render_file(template_path, context.as_value())?;
    let target = PathBuf::from(file_name);
    sink.write_file(&target, &content)?;
    info!("Created '{}' from '{}'", target.display(), template_path.display());
    Ok(target)
}

/// Adds `package_dir/submodule/__init__.py`, rendered from `template_path`.
///
/// The submodule directory must not exist yet.
pub fn add_submodule(
    package_dir: &Path,
    submodule: &str,
    template_path: &Path,
    context: &VariableContext,
    engine: &dyn TemplateRenderer,
) -> Result<PathBuf> {
    if !package_dir.is_dir() {
        return Err(Error::RootNotFound { path: package_dir.display().to_string() });
    }
    let subdir = package_dir.join(submodule);
    if fs::symlink_metadata(&subdir).is_ok() {
        return Err(Error::SubdirectoryAlreadyExists { path: subdir.display().to_string() });
    }
    let mut sink = FilesystemSink::create(&subdir)?;
    let target = create_single_file(template_path, "__init__.py", context, engine, &mut sink)?;
    Ok(subdir.join(target))
}
