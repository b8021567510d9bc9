use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use walkdir::{DirEntry, WalkDir};

use crate::context::VariableContext;
use crate::error::{Error, Result};
use crate::ext::PathExt;
use crate::ignore::IgnoreList;
use crate::renderer::TemplateRenderer;
use crate::sink::Sink;

use super::operation::TemplateOperation;
use super::rewrite::{rewrite_path, RewriteRules};

/// What one walk produced, as destination-relative paths in walk order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MaterializationReport {
    pub created_directories: Vec<PathBuf>,
    pub written_files: Vec<PathBuf>,
    pub ignored_files: Vec<PathBuf>,
    /// Source-relative paths pruned by a partial build.
    pub skipped: Vec<PathBuf>,
}

impl MaterializationReport {
    /// Appends the results of a later walk.
    pub fn merge(&mut self, other: MaterializationReport) {
        self.created_directories.extend(other.created_directories);
        self.written_files.extend(other.written_files);
        self.ignored_files.extend(other.ignored_files);
        self.skipped.extend(other.skipped);
    }

    fn record(&mut self, operation: TemplateOperation) {
        match operation {
            TemplateOperation::CreateDirectory { target, .. } => {
                self.created_directories.push(target)
            }
            TemplateOperation::Write { target, .. } => self.written_files.push(target),
            TemplateOperation::Ignore { target, .. } => self.ignored_files.push(target),
            TemplateOperation::Skip { source } => self.skipped.push(source),
        }
    }
}

/// Mirrors one source tree into a [`Sink`], rewriting names and rendering
/// file contents.
pub struct TemplateProcessor<'a> {
    /// Dependencies
    engine: &'a dyn TemplateRenderer,
    rules: &'a RewriteRules,
    context: &'a VariableContext,

    /// Other
    template_root: PathBuf,
    ignore: IgnoreList,
    partial: Option<HashSet<PathBuf>>,
}

impl<'a> TemplateProcessor<'a> {
    /// Starts with the default ignore list; see [`Self::with_ignore`].
    pub fn new<P: Into<PathBuf>>(
        engine: &'a dyn TemplateRenderer,
        template_root: P,
        rules: &'a RewriteRules,
        context: &'a VariableContext,
    ) -> Result<Self> {
        Ok(Self {
            engine,
            rules,
            context,
            template_root: template_root.into(),
            ignore: IgnoreList::defaults()?,
            partial: None,
        })
    }

    /// Files whose rewritten basename matches `ignore` are not written.
    pub fn with_ignore(mut self, ignore: IgnoreList) -> Self {
        self.ignore = ignore;
        self
    }

    /// Restricts the walk to the given source-relative paths. A directory is
    /// only descended into when it is itself listed.
    pub fn with_partial<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<Path>,
    {
        self.partial = Some(paths.into_iter().map(|p| p.as_ref().to_path_buf()).collect());
        self
    }

    fn is_selected(&self, relative: &Path) -> bool {
        match &self.partial {
            Some(allowed) => allowed.contains(relative),
            None => true,
        }
    }

    fn relative_path<'p>(&self, path: &'p Path) -> Result<&'p Path> {
        path.strip_prefix(&self.template_root).map_err(|e| {
            Error::Other(anyhow::anyhow!(
                "'{}' is not below '{}': {e}",
                path.display(),
                self.template_root.display()
            ))
        })
    }

    /// Decides what to do with one entry of the walk.
    pub fn process(&self, entry: &DirEntry) -> Result<TemplateOperation> {
        let source = self.relative_path(entry.path())?.to_path_buf();
        if !self.is_selected(&source) {
            return Ok(TemplateOperation::Skip { source });
        }

        let target = rewrite_path(&source, self.rules, self.context, self.engine)?;
        if entry.file_type().is_dir() {
            return Ok(TemplateOperation::CreateDirectory { source, target });
        }

        let file_name = target.file_name().map(Path::new).unwrap_or(target.as_path());
        if self.ignore.is_ignored(file_name.to_str_checked()?) {
            return Ok(TemplateOperation::Ignore { source, target });
        }

        let template = fs::read_to_string(entry.path())?;
        let content =
            self.engine.render(&template, self.context.as_value(), Some(source.to_str_checked()?))?;
        Ok(TemplateOperation::Write { source, target, content })
    }

    /// Walks the whole source tree, parents before children, and applies each
    /// operation to `sink`. Stops at the first error; nothing already written
    /// is rolled back.
    pub fn materialize(&self, sink: &mut dyn Sink) -> Result<MaterializationReport> {
        if !self.template_root.is_dir() {
            return Err(Error::RootNotFound { path: self.template_root.display().to_string() });
        }

        let mut report = MaterializationReport::default();
        let mut walker =
            WalkDir::new(&self.template_root).min_depth(1).sort_by_file_name().into_iter();
        while let Some(dir_entry) = walker.next() {
            let dir_entry = dir_entry?;
            if !dir_entry.file_type().is_dir() && !dir_entry.path().is_file() {
                debug!("Skipping '{}' (neither file nor directory)", dir_entry.path().display());
                continue;
            }

            let operation = self.process(&dir_entry)?;
            match &operation {
                TemplateOperation::CreateDirectory { target, .. } => {
                    sink.create_directory(target)?;
                }
                TemplateOperation::Write { target, content, .. } => {
                    sink.write_file(target, content)?;
                }
                TemplateOperation::Ignore { .. } => {}
                TemplateOperation::Skip { .. } => {
                    if dir_entry.file_type().is_dir() {
                        walker.skip_current_dir();
                    }
                }
            }
            match operation {
                TemplateOperation::Skip { .. } => debug!("{}", operation.get_message()),
                _ => info!("{}", operation.get_message()),
            }
            report.record(operation);
        }
        Ok(report)
    }
}

/// Mirrors `template_root` into `sink` in one call.
pub fn materialize(
    engine: &dyn TemplateRenderer,
    template_root: &Path,
    rules: &RewriteRules,
    context: &VariableContext,
    ignore: IgnoreList,
    sink: &mut dyn Sink,
) -> Result<MaterializationReport> {
    TemplateProcessor::new(engine, template_root, rules, context)?
        .with_ignore(ignore)
        .materialize(sink)
}

#[cfg(test)]
mod tests {
    use std::fs::File;
    use std::io::Write;

    use serde_json::json;
    use tempfile::TempDir;

    use crate::renderer::MiniJinjaRenderer;
    use crate::sink::{ArchiveSink, FilesystemSink};

    use super::*;

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        File::create(path).unwrap().write_all(content.as_bytes()).unwrap();
    }

    fn first_entry(root: &Path, name: &str) -> DirEntry {
        WalkDir::new(root)
            .into_iter()
            .map(|e| e.unwrap())
            .find(|e| e.file_name() == name)
            .unwrap()
    }

    /// The template structure
    /// template_root/
    ///   models_py.template
    ///
    /// Expected operation
    ///   Write models.py with rendered content
    ///
    #[test]
    fn code_template_is_written_with_native_extension() {
        let context = VariableContext::new().with("modname", json!("blah"));
        let rules = RewriteRules::new();
        let template_root = TempDir::new().unwrap();
        write(template_root.path(), "models_py.template", "import {{ modname }}\n");

        let engine = MiniJinjaRenderer::new();
        let processor =
            TemplateProcessor::new(&engine, template_root.path(), &rules, &context).unwrap();
        let result = processor.process(&first_entry(template_root.path(), "models_py.template"));

        match result.unwrap() {
            TemplateOperation::Write { source, target, content } => {
                assert_eq!(source, PathBuf::from("models_py.template"));
                assert_eq!(target, PathBuf::from("models.py"));
                assert_eq!(content, "import blah\n");
            }
            other => panic!("Expected Write operation, got {other:?}"),
        }
    }

    /// The template structure
    /// template_root/
    ///   src/
    ///
    /// Expected operation
    ///   CreateDirectory blah
    ///
    /// Because rules are
    /// {"src": "{{ modname }}"}
    ///
    #[test]
    fn directory_is_renamed_by_rule() {
        let context = VariableContext::new().with("modname", json!("blah"));
        let rules: RewriteRules = [("src", "{{ modname }}")].into_iter().collect();
        let template_root = TempDir::new().unwrap();
        fs::create_dir(template_root.path().join("src")).unwrap();

        let engine = MiniJinjaRenderer::new();
        let processor =
            TemplateProcessor::new(&engine, template_root.path(), &rules, &context).unwrap();
        let result = processor.process(&first_entry(template_root.path(), "src")).unwrap();

        assert_eq!(
            result,
            TemplateOperation::CreateDirectory {
                source: PathBuf::from("src"),
                target: PathBuf::from("blah"),
            }
        );
    }

    #[test]
    fn ignore_matches_rewritten_name() {
        let context = VariableContext::new();
        let rules = RewriteRules::new();
        let template_root = TempDir::new().unwrap();
        write(template_root.path(), "unittest_py.template", "{{ undefined }}");

        let engine = MiniJinjaRenderer::new();
        let processor = TemplateProcessor::new(&engine, template_root.path(), &rules, &context)
            .unwrap()
            .with_ignore(IgnoreList::new(["unittest.py"]).unwrap());
        let result = processor.process(&first_entry(template_root.path(), "unittest_py.template"));

        assert!(matches!(result.unwrap(), TemplateOperation::Ignore { .. }));
    }

    #[test]
    fn default_ignore_list_applies_without_with_ignore() {
        let context = VariableContext::new();
        let rules = RewriteRules::new();
        let template_root = TempDir::new().unwrap();
        write(template_root.path(), ".DS_Store", "");
        write(template_root.path(), "a.txt", "a");

        let engine = MiniJinjaRenderer::new();
        let processor =
            TemplateProcessor::new(&engine, template_root.path(), &rules, &context).unwrap();
        let mut sink = ArchiveSink::new();
        let report = processor.materialize(&mut sink).unwrap();

        assert_eq!(sink.names().collect::<Vec<_>>(), vec!["a.txt"]);
        assert_eq!(report.ignored_files, vec![PathBuf::from(".DS_Store")]);
    }

    #[test]
    fn ignore_does_not_apply_to_directories() {
        let context = VariableContext::new();
        let rules = RewriteRules::new();
        let template_root = TempDir::new().unwrap();
        write(template_root.path(), "static/app.js", "");

        let engine = MiniJinjaRenderer::new();
        let processor = TemplateProcessor::new(&engine, template_root.path(), &rules, &context)
            .unwrap()
            .with_ignore(IgnoreList::new(["static"]).unwrap());
        let mut sink = ArchiveSink::new();
        let report = processor.materialize(&mut sink).unwrap();

        assert_eq!(report.created_directories, vec![PathBuf::from("static")]);
        assert_eq!(report.written_files, vec![PathBuf::from("static").join("app.js")]);
    }

    #[test]
    fn materialize_mirrors_the_tree() {
        let context = VariableContext::new().with("modname", json!("blah"));
        let rules: RewriteRules = [
            ("unittest_py.template", "test_{{ modname }}.py"),
            ("src", "{{ modname }}"),
        ]
        .into_iter()
        .collect();
        let template_root = TempDir::new().unwrap();
        write(template_root.path(), "src/__init___py.template", "\"\"\"{{ modname }}\"\"\"\n");
        write(template_root.path(), "tests/unittest_py.template", "import {{ modname }}\n");
        write(template_root.path(), ".DS_Store", "");
        let output = TempDir::new().unwrap();

        let engine = MiniJinjaRenderer::new();
        let mut sink = FilesystemSink::open(output.path()).unwrap();
        let report = materialize(
            &engine,
            template_root.path(),
            &rules,
            &context,
            IgnoreList::defaults().unwrap(),
            &mut sink,
        )
        .unwrap();

        assert_eq!(
            fs::read_to_string(output.path().join("blah").join("__init__.py")).unwrap(),
            "\"\"\"blah\"\"\"\n"
        );
        assert_eq!(
            fs::read_to_string(output.path().join("tests").join("test_blah.py")).unwrap(),
            "import blah\n"
        );
        assert!(!output.path().join(".DS_Store").exists());
        assert_eq!(report.ignored_files, vec![PathBuf::from(".DS_Store")]);
        assert_eq!(report.written_files.len(), 2);
    }

    #[test]
    fn partial_build_prunes_unlisted_entries() {
        let context = VariableContext::new();
        let rules = RewriteRules::new();
        let template_root = TempDir::new().unwrap();
        write(template_root.path(), "docs/index.md", "");
        write(template_root.path(), "tests/a.txt", "a");
        write(template_root.path(), "tests/b.txt", "b");

        let engine = MiniJinjaRenderer::new();
        let processor = TemplateProcessor::new(&engine, template_root.path(), &rules, &context)
            .unwrap()
            .with_partial(["tests", "tests/a.txt"]);
        let mut sink = ArchiveSink::new();
        let report = processor.materialize(&mut sink).unwrap();

        assert_eq!(sink.names().collect::<Vec<_>>(), vec!["tests/a.txt"]);
        assert_eq!(
            report.skipped,
            vec![PathBuf::from("docs"), PathBuf::from("tests").join("b.txt")]
        );
    }

    #[test]
    fn missing_source_root_is_reported() {
        let context = VariableContext::new();
        let rules = RewriteRules::new();
        let template_root = TempDir::new().unwrap();

        let engine = MiniJinjaRenderer::new();
        let missing = template_root.path().join("missing");
        let processor = TemplateProcessor::new(&engine, missing, &rules, &context).unwrap();
        let result = processor.materialize(&mut ArchiveSink::new());
        assert!(matches!(result, Err(Error::RootNotFound { .. })));
    }

    #[test]
    fn undefined_variable_stops_the_walk() {
        let context = VariableContext::new();
        let rules = RewriteRules::new();
        let template_root = TempDir::new().unwrap();
        write(template_root.path(), "README.md", "# {{ modname }}\n");

        let engine = MiniJinjaRenderer::new();
        let processor =
            TemplateProcessor::new(&engine, template_root.path(), &rules, &context).unwrap();
        let result = processor.materialize(&mut ArchiveSink::new());
        match result {
            Err(Error::UndefinedVariable { template, .. }) => assert_eq!(template, "README.md"),
            other => panic!("Expected UndefinedVariable, got {other:?}"),
        }
    }
}
