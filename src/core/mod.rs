// Public modules
pub mod defaults;
pub mod error;
pub mod git;
pub mod project;
pub mod scaffold;
pub mod templates;
pub mod update;

// Re-export common types for convenience
pub use error::{Error, ErrorCode, Result};
pub use scaffold::{create_new_project, NewProjectOptions, NewProjectReport};
pub use update::{update_engine_for_project, UpdateReport};
