//! Supported project types and the operations that generate them.

mod descriptor;
mod generate;

pub use descriptor::ProjectDescriptor;
pub use generate::{add_submodule, create_single_file, generate_project, GenerateOptions};

use crate::error::{Error, Result};

/// Shared files (README, license, requirements) added to every project.
const COMMON_DIR: &str = "common";

const PYTHON_RULES: &[(&str, &str)] =
    &[("unittest_py.template", "test_{{ modname }}.py"), ("src", "{{ modname }}")];

/// Every project type entree can generate.
pub static PROJECTS: &[ProjectDescriptor] = &[
    ProjectDescriptor {
        name: "python",
        long_name: "Python",
        version: "0.1",
        template_dir: "python",
        common_dir: Some(COMMON_DIR),
        single_file: Some("python/src/__init___py.template"),
        rules: PYTHON_RULES,
        directories: &["docs", "src", "tests"],
        files: &[
            "docs/index.md",
            "setup_py.template",
            "src/__init___py.template",
            "tests/unittest_py.template",
        ],
    },
    ProjectDescriptor {
        name: "flask",
        long_name: "Flask",
        version: "0.1",
        template_dir: "python-flask",
        common_dir: Some(COMMON_DIR),
        single_file: None,
        rules: &[],
        directories: &["static", "static/css", "static/js", "templates"],
        files: &[
            "app_py.template",
            "static/css/style.css",
            "static/js/app.js",
            "templates/index.html",
        ],
    },
    ProjectDescriptor {
        name: "flasklarge",
        long_name: "Flask (large)",
        version: "0.1",
        template_dir: "python-flask-large",
        common_dir: Some(COMMON_DIR),
        single_file: None,
        rules: PYTHON_RULES,
        directories: &[
            "src",
            "src/static",
            "src/static/css",
            "src/static/js",
            "src/templates",
            "tests",
        ],
        files: &[
            "setup_py.template",
            "src/__init___py.template",
            "src/models_py.template",
            "src/static/css/style.css",
            "src/static/js/app.js",
            "src/templates/index.html",
            "src/views_py.template",
            "tests/unittest_py.template",
        ],
    },
    ProjectDescriptor {
        name: "sqlalchemy",
        long_name: "SQLAlchemy",
        version: "0.1",
        template_dir: "python-sqlalchemy",
        common_dir: Some(COMMON_DIR),
        single_file: None,
        rules: &[("unittest_py.template", "test_{{ modname }}.py")],
        directories: &["models", "tests"],
        files: &[
            "__init___py.template",
            "models/__init___py.template",
            "models/statuses_py.template",
            "models/users_py.template",
            "tests/unittest_py.template",
        ],
    },
];

/// Looks up a project type by its short name.
pub fn find(name: &str) -> Result<&'static ProjectDescriptor> {
    PROJECTS.iter().find(|project| project.name == name).ok_or_else(|| {
        Error::UnknownProjectType { name: name.to_string(), available: names().join(", ") }
    })
}

/// Looks up a project type by the human readable name shown in forms.
pub fn find_by_long_name(long_name: &str) -> Option<&'static ProjectDescriptor> {
    PROJECTS.iter().find(|project| project.long_name == long_name)
}

pub fn names() -> Vec<&'static str> {
    PROJECTS.iter().map(|project| project.name).collect()
}
