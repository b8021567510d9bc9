//! User configuration for entree
//!
//! - `types`: author metadata and per-project settings
//! - `loader`: reading and writing `entree_config.json`

pub mod loader;
pub mod types;


pub use loader::Config;
pub use types::{AuthorInfo, ProjectConfig};
