//! Template assets for rvt.
//!
//! Template content is embedded at compile time and grouped into named
//! template sets. The lint and format configuration files are generated from
//! typed structs rather than stored as literals.

pub mod sets;
pub mod tooling;

pub use sets::{TemplateAsset, TemplateId, TemplateSet, ViteTemplate};
pub use tooling::{EslintConfig, LintStyle, PrettierConfig};
