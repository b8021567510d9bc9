//! Template processing engine for entree
//!
//! This module contains the core template processing components:
//! - `rewrite`: Maps source names to destination names
//! - `operation`: Defines operations to be performed on templates
//! - `processor`: Walks a source tree and applies operations to a sink

pub mod operation;
pub mod processor;
pub mod rewrite;

pub use processor::{materialize, MaterializationReport, TemplateProcessor};
pub use rewrite::{rewrite, rewrite_path, RewriteRules};
