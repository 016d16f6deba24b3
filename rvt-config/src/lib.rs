//! rvt configuration.
//!
//! `rvt.yaml` tunes the scaffolder without code changes: which template set
//! to use, which package manager to drive, which packages to install, and the
//! default answers for the interactive questions. Every field is optional.

pub mod config;
pub mod loader;

pub use config::ScaffoldConfig;
pub use loader::ConfigLoader;

/// Name of the project-local configuration file.
pub const CONFIG_FILE_NAME: &str = "rvt.yaml";
