use std::fmt::{self, Display, Formatter};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScaffoldError {
    MissingProjectName,
    InvalidProjectName(String),
    Dependency(String),
    Command { command: String, code: Option<i32> },
    Spawn { command: String, source: std::io::Error },
    Logging(String),
    Template(String),
    Prompt(String),
    Serialization(String),
    Filesystem { path: PathBuf, source: std::io::Error },
    Io(#[from] std::io::Error),
}

impl Display for ScaffoldError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            ScaffoldError::MissingProjectName => {
                write!(f, "No project name given and none could be derived\n\n")?;
                write!(f, "Fix:\n")?;
                write!(f, "  • Pass a name: rvt my-app, or\n")?;
                write!(f, "  • Run rvt from inside a named directory")
            }
            ScaffoldError::InvalidProjectName(s) => write!(f, "Invalid project name: {}", s),
            ScaffoldError::Dependency(s) => {
                write!(f, "Dependency not found: {}\n\n", s)?;
                write!(f, "Fix:\n")?;
                write!(f, "  • Install Node.js (which ships npm and npx), or\n")?;
                write!(f, "  • Point package_manager.program in rvt.yaml at your installer")
            }
            ScaffoldError::Command { command, code } => match code {
                Some(code) => write!(f, "Command failed with exit code {}: {}", code, command),
                None => write!(f, "Command terminated by signal: {}", command),
            },
            // io causes are reached through `source()`, not repeated here
            ScaffoldError::Spawn { command, .. } => {
                write!(f, "Failed to start command '{}'", command)
            }
            ScaffoldError::Logging(s) => write!(f, "Logging setup failed: {}", s),
            ScaffoldError::Template(s) => write!(f, "Template error: {}", s),
            ScaffoldError::Prompt(s) => write!(f, "Prompt error: {}", s),
            ScaffoldError::Serialization(s) => write!(f, "Serialization error: {}", s),
            ScaffoldError::Filesystem { path, .. } => {
                write!(f, "Filesystem error at {}", path.display())
            }
            ScaffoldError::Io(_) => write!(f, "I/O error"),
        }
    }
}

impl ScaffoldError {
    /// Wrap an I/O error with the path it happened on.
    pub fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ScaffoldError::Filesystem {
            path: path.into(),
            source,
        }
    }
}

impl From<serde_json::Error> for ScaffoldError {
    fn from(err: serde_json::Error) -> Self {
        ScaffoldError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;
