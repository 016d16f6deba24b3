//! rvt: scaffold a React + Vite + Tailwind CSS project.
//!
//! Prompt collection ([`prompt`]) produces a [`ScaffoldOptions`] record; the
//! [`Scaffolder`] turns that record into a project by driving the package
//! manager through a [`rvt_core::CommandRunner`] and writing template files.

pub mod cli;
pub mod options;
pub mod prompt;
pub mod scaffolder;

pub use options::{OptionRequest, ProjectLayout, ScaffoldOptions};
pub use scaffolder::{ScaffoldReport, Scaffolder};
