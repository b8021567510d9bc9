use crate::constants::{exit_codes, verbosity, DEFAULT_PROJECT_TYPE};
use crate::error::{Error, Result};
use crate::project::{self, ProjectDescriptor};
use clap::{error::ErrorKind, CommandFactory, Parser};
use log::LevelFilter;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#;

const AFTER_HELP: &str = "Run `entree --modules` to list the available project types.";

/// CLI arguments for entree.
#[derive(Parser, Debug, Clone, Default, PartialEq)]
#[command(author, version, about, long_about = None, after_help = AFTER_HELP)]
pub struct Args {
    /// Project type. When it is the only positional argument and not a known
    /// type, it is taken as the module name of a `python` project.
    #[arg(value_name = "PROJECT_TYPE", required_unless_present = "modules")]
    pub project_type: Option<String>,

    /// Name of the module to create.
    #[arg(value_name = "MODNAME")]
    pub modname: Option<String>,

    /// Directory in which the project is created.
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Add the files to DIR instead of creating DIR/MODNAME.
    #[arg(short, long)]
    pub add: bool,

    /// Create only the project type's single file, named MODNAME.
    #[arg(short = 's', long = "single-file")]
    pub single_file: bool,

    /// Only generate the files of the named partial build from the config.
    #[arg(short, long, value_name = "NAME")]
    pub partial: Option<String>,

    /// Add a submodule directory with an `__init__.py` to an existing package.
    #[arg(long, value_name = "NAME")]
    pub submodule: Option<String>,

    /// List the available project types.
    #[arg(short, long)]
    pub modules: bool,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Config file to use instead of the one in the user config directory.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory holding the project templates.
    #[arg(long, value_name = "DIR")]
    pub templates: Option<PathBuf>,
}

impl Args {
    /// Resolves the positional arguments to a project type and a module name.
    ///
    /// In add mode the module name may be omitted and is then empty.
    pub fn project(&self) -> Result<(&'static ProjectDescriptor, String)> {
        match (self.project_type.as_deref(), self.modname.as_deref()) {
            (Some(project_type), Some(modname)) => {
                Ok((project::find(project_type)?, modname.to_string()))
            }
            (Some(first), None) => match project::find(first) {
                Ok(descriptor) if self.add => Ok((descriptor, String::new())),
                Ok(descriptor) => Err(Error::InvalidRequest(format!(
                    "MODNAME is required for project type '{}'",
                    descriptor.name
                ))),
                Err(_) => Ok((project::find(DEFAULT_PROJECT_TYPE)?, first.to_string())),
            },
            (None, _) => Err(Error::InvalidRequest("PROJECT_TYPE or MODNAME is required".into())),
        }
    }
}

/// Parse command line arguments with custom handling for missing required inputs.
pub fn get_args() -> Args {
    Args::try_parse().unwrap_or_else(|e| {
        if e.kind() == ErrorKind::MissingRequiredArgument {
            let mut command = Args::command().help_template(HELP_TEMPLATE);
            if let Err(print_err) = command.print_help() {
                eprintln!("Failed to display help information: {print_err}");
            } else {
                println!();
            }
            std::process::exit(exit_codes::FAILURE);
        } else {
            e.exit();
        }
    })
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
