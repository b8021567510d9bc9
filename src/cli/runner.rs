use crate::{
    cli::Args,
    config::Config,
    context::VariableContext,
    error::{Error, Result},
    project::{
        self, add_submodule, create_single_file, generate_project, GenerateOptions,
        ProjectDescriptor,
    },
    renderer::MiniJinjaRenderer,
    sink::FilesystemSink,
};
use chrono::Local;
use log::debug;
use std::path::PathBuf;

/// Main CLI runner that turns parsed arguments into one generation.
pub struct Runner {
    args: Args,
}

impl Runner {
    pub fn new(args: Args) -> Self {
        Self { args }
    }

    pub fn run(self) -> Result<()> {
        if self.args.modules {
            self.list_modules();
            return Ok(());
        }

        let config = self.load_config()?;
        let (descriptor, modname) = self.args.project()?;
        let templates_root = self.args.templates.clone().unwrap_or_else(|| config.templates_root());
        let engine = MiniJinjaRenderer::new();
        debug!("Using templates from '{}'", templates_root.display());

        if let Some(submodule) = &self.args.submodule {
            let template = self.single_file_template(descriptor, &templates_root)?;
            let package_dir = self.project_dir(&modname).join(&modname);
            let context = VariableContext::for_project(submodule, &config.author, Local::now());
            let created = add_submodule(&package_dir, submodule, &template, &context, &engine)?;
            println!("Submodule created: {}.", created.display());
            return Ok(());
        }

        let context = VariableContext::for_project(&modname, &config.author, Local::now());

        if self.args.single_file {
            let template = self.single_file_template(descriptor, &templates_root)?;
            let mut sink = FilesystemSink::open(&self.args.dir)?;
            let created = create_single_file(&template, &modname, &context, &engine, &mut sink)?;
            println!("File created: {}.", self.args.dir.join(created).display());
            return Ok(());
        }

        let options = GenerateOptions {
            files_to_ignore: config.files_to_ignore_for(descriptor.name).to_vec(),
            partial: match &self.args.partial {
                Some(name) => Some(config.partial_build(descriptor.name, name)?.to_vec()),
                None => None,
            },
        };
        let project_dir = self.project_dir(&modname);
        let mut sink = if self.args.add {
            FilesystemSink::open(&project_dir)?
        } else {
            FilesystemSink::create(&project_dir)?
        };
        let report =
            generate_project(descriptor, &templates_root, &context, &engine, &mut sink, &options)?;

        println!(
            "{} project created in {} ({} files).",
            descriptor.long_name,
            project_dir.display(),
            report.written_files.len()
        );
        Ok(())
    }

    fn list_modules(&self) {
        println!("\nList of available modules:\n");
        for descriptor in project::PROJECTS {
            println!("- {}: {}", descriptor.name, descriptor.long_name);
        }
        println!();
    }

    fn load_config(&self) -> Result<Config> {
        let path = match &self.args.config {
            Some(path) => path.clone(),
            None => Config::default_path()?,
        };
        debug!("Loading config from '{}'", path.display());
        Config::load_or_init(path)
    }

    /// The directory receiving the project files.
    fn project_dir(&self, modname: &str) -> PathBuf {
        if self.args.add {
            self.args.dir.clone()
        } else {
            self.args.dir.join(modname)
        }
    }

    fn single_file_template(
        &self,
        descriptor: &ProjectDescriptor,
        templates_root: &std::path::Path,
    ) -> Result<PathBuf> {
        descriptor.single_file_path(templates_root).ok_or_else(|| Error::SingleFileUnsupported {
            project_type: descriptor.name.to_string(),
        })
    }
}

/// Runs one CLI invocation.
pub fn run(args: Args) -> Result<()> {
    Runner::new(args).run()
}
