//! Core utilities for the rvt scaffolder.
//!
//! Shared by every other crate in the workspace: the error type, the
//! external-command runner, filesystem helpers, output macros and tracing
//! initialization.

pub mod command;
pub mod error;
pub mod file_system;
pub mod output_macros;
pub mod tracing_init;

pub use command::{CommandRunner, CommandSpec, SystemRunner};
pub use error::{Result, ScaffoldError};
