#![allow(dead_code)]

use chrono::{DateTime, Local, TimeZone};
use entree::config::{AuthorInfo, Config};
use entree::context::VariableContext;
use entree::renderer::{MiniJinjaRenderer, TemplateRenderer};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Relative paths of every file below `root`, sorted.
pub fn list_files(root: &Path) -> BTreeSet<PathBuf> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.path().is_file())
        .map(|e| e.path().strip_prefix(root).unwrap().to_path_buf())
        .collect()
}

/// Prints the files only present on one side and the files whose content differs.
pub fn print_dir_diff(actual: &Path, expected: &Path) {
    let actual_files = list_files(actual);
    let expected_files = list_files(expected);

    println!("\n=== Directory Comparison ===");
    println!("Actual output:   {actual:?}");
    println!("Expected output: {expected:?}");

    for file in actual_files.difference(&expected_files) {
        println!("  + {file:?}");
    }
    for file in expected_files.difference(&actual_files) {
        println!("  - {file:?}");
    }
    for file in actual_files.intersection(&expected_files) {
        let left = fs::read(actual.join(file)).unwrap();
        let right = fs::read(expected.join(file)).unwrap();
        if left != right {
            println!("\n  File: {file:?}");
            println!("  --- Actual content:\n{}", String::from_utf8_lossy(&left));
            println!("  --- Expected content:\n{}", String::from_utf8_lossy(&right));
        }
    }
    println!("=== End of Comparison ===\n");
}

/// Asserts that two directory trees hold the same files with the same bytes.
pub fn assert_same_tree(actual: &Path, expected: &Path) {
    if dir_diff::is_different(actual, expected).unwrap() {
        print_dir_diff(actual, expected);
        panic!("Directories differ. See above for details.");
    }
}

pub fn author() -> AuthorInfo {
    AuthorInfo::from_email("Julien Spronck", "github@frenetic.be", "http://frenetic.be")
}

pub fn fixed_now() -> DateTime<Local> {
    Local.with_ymd_and_hms(2018, 2, 14, 9, 30, 0).unwrap()
}

pub fn project_context(modname: &str) -> VariableContext {
    VariableContext::for_project(modname, &author(), fixed_now())
}

/// Writes a config with known author metadata and returns its path.
pub fn write_config(dir: &Path) -> PathBuf {
    let path = dir.join("entree_config.json");
    let config = Config { author: author(), ..Config::default() };
    config.save(&path, true).unwrap();
    path
}

/// Renders a bundled template file the way generation does.
pub fn render_template_file(path: &Path, context: &VariableContext) -> String {
    MiniJinjaRenderer::new().render_file(path, context.as_value()).unwrap()
}
