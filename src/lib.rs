/// Handles argument parsing.
pub mod cli;

/// User configuration (author metadata, ignore lists, partial builds).
pub mod config;

/// Constants shared across the crate.
pub mod constants;

/// Variables handed to every template.
pub mod context;

/// Packaging generated projects as zip archives.
pub mod download;

/// Defines custom error types.
pub mod error;

/// Extension traits.
pub mod ext;

/// Names of generated files that are never written.
pub mod ignore;

/// Supported project types.
pub mod project;

/// Template parsing and rendering functionality.
pub mod renderer;

/// Destinations for generated files.
pub mod sink;

/// Core template processing orchestration.
pub mod template;
