//! The options record and the directory layout derived from it.

use std::path::{Path, PathBuf};

use rvt_core::error::{Result, ScaffoldError};
use rvt_templates::LintStyle;

/// Everything the scaffolder needs to know about one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldOptions {
    pub project_name: String,
    pub project_dir: PathBuf,
    pub setup_lint: bool,
    pub setup_format: bool,
    /// Airbnb style guide instead of the recommended rules. Ignored without `setup_lint`.
    pub use_alternate_lint_style: bool,
}

impl ScaffoldOptions {
    pub fn lint_style(&self) -> Option<LintStyle> {
        if !self.setup_lint {
            return None;
        }
        Some(if self.use_alternate_lint_style {
            LintStyle::Airbnb
        } else {
            LintStyle::Recommended
        })
    }
}

/// Answers already known before prompting; `None` means "ask".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionRequest {
    pub name: Option<String>,
    pub dir: Option<String>,
    pub lint: Option<bool>,
    pub airbnb: Option<bool>,
    pub format: Option<bool>,
}

/// Where the generator runs and where the project ends up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    pub root: PathBuf,
    /// Positional argument for the generator: `.` or the project name
    pub generator_target: String,
    pub generator_cwd: PathBuf,
}

impl ProjectLayout {
    /// True when the generator writes into `root` itself.
    pub fn is_in_place(&self) -> bool {
        self.generator_target == "."
    }

    /// Generates in place when the directory already carries the project's
    /// name, otherwise in a new `<dir>/<name>` subdirectory.
    pub fn resolve(options: &ScaffoldOptions) -> Self {
        let in_place = options
            .project_dir
            .file_name()
            .is_some_and(|base| base == options.project_name.as_str());

        if in_place {
            Self {
                root: options.project_dir.clone(),
                generator_target: ".".to_string(),
                generator_cwd: options.project_dir.clone(),
            }
        } else {
            Self {
                root: options.project_dir.join(&options.project_name),
                generator_target: options.project_name.clone(),
                generator_cwd: options.project_dir.clone(),
            }
        }
    }
}

/// Blank input falls back to the base name of `cwd`.
///
/// An explicit name must pass [`validate_project_name`]. A name taken from
/// `cwd` only has to be usable as a directory name, since a run that keeps
/// it generates in place.
pub fn resolve_project_name(input: Option<&str>, cwd: &Path) -> Result<String> {
    match input.map(str::trim).filter(|s| !s.is_empty()) {
        Some(name) => {
            validate_project_name(name)?;
            Ok(name.to_string())
        }
        None => {
            let name = cwd
                .file_name()
                .map(|base| base.to_string_lossy().into_owned())
                .ok_or(ScaffoldError::MissingProjectName)?;
            validate_directory_name(&name)?;
            Ok(name)
        }
    }
}

/// Blank input falls back to `cwd`; relative paths are anchored at `cwd`.
pub fn resolve_project_dir(input: Option<&str>, cwd: &Path) -> PathBuf {
    match input.map(str::trim).filter(|s| !s.is_empty()) {
        Some(dir) => {
            let dir = Path::new(dir);
            if dir.is_absolute() {
                dir.to_path_buf()
            } else {
                cwd.join(dir)
            }
        }
        None => cwd.to_path_buf(),
    }
}

/// Minimal check for a name that is only ever an existing directory's base
/// name: non-empty, a single path component, and not `.` or `..`.
#[must_use = "validation results should be checked"]
pub fn validate_directory_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(ScaffoldError::MissingProjectName);
    }

    if name.contains('/') || name.contains('\\') {
        return Err(ScaffoldError::InvalidProjectName(format!(
            "'{}' cannot contain path separators",
            name
        )));
    }

    if name.contains("..") || name == "." {
        return Err(ScaffoldError::InvalidProjectName(format!(
            "'{}' cannot be '.' or contain '..'",
            name
        )));
    }

    Ok(())
}

/// Validate a project name for use as a new directory and generator argument
#[must_use = "validation results should be checked"]
pub fn validate_project_name(name: &str) -> Result<()> {
    validate_directory_name(name)?;

    if name.starts_with('.') {
        return Err(ScaffoldError::InvalidProjectName(format!(
            "'{}' cannot start with '.' or contain '..'",
            name
        )));
    }

    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.')
    {
        return Err(ScaffoldError::InvalidProjectName(format!(
            "'{}' can only contain alphanumeric, dash, underscore, and dot characters",
            name
        )));
    }

    Ok(())
}
