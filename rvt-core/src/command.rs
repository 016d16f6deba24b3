// Standard library
use std::fmt::{self, Display, Formatter};
use std::path::PathBuf;

// External crates
use duct::cmd;
use tracing::{debug, info};
use which::which;

use crate::error::{Result, ScaffoldError};

/// A single external command: program, arguments and the directory it runs in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

impl CommandSpec {
    pub fn new<I, S>(program: impl Into<String>, args: I, cwd: impl Into<PathBuf>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            cwd: cwd.into(),
        }
    }

    /// The command line as a user would type it.
    pub fn command_line(&self) -> String {
        if self.args.is_empty() {
            self.program.clone()
        } else {
            format!("{} {}", self.program, self.args.join(" "))
        }
    }
}

impl Display for CommandSpec {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.command_line())
    }
}

/// Seam between the scaffold procedure and the external tools it drives.
pub trait CommandRunner {
    /// Runs the command to completion. A non-zero exit is an error.
    fn run(&self, spec: &CommandSpec) -> Result<()>;

    /// Fails with a dependency error when `program` cannot be executed.
    fn ensure_available(&self, program: &str) -> Result<()>;
}

/// Runs commands for real, attached to the current terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, spec: &CommandSpec) -> Result<()> {
        let command_line = spec.command_line();
        info!(command = %command_line, cwd = %spec.cwd.display(), "running external command");

        // stdin/stdout/stderr stay inherited so generator prompts reach the user
        let output = cmd(&spec.program, &spec.args)
            .dir(&spec.cwd)
            .unchecked()
            .run()
            .map_err(|source| ScaffoldError::Spawn {
                command: command_line.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(ScaffoldError::Command {
                command: command_line,
                code: output.status.code(),
            });
        }

        debug!(command = %command_line, "external command finished");
        Ok(())
    }

    fn ensure_available(&self, program: &str) -> Result<()> {
        if is_tool_installed(program) {
            Ok(())
        } else {
            Err(ScaffoldError::Dependency(format!(
                "'{}' is not installed or not in your PATH",
                program
            )))
        }
    }
}

/// Checks if a command-line tool is available in the system's PATH.
pub fn is_tool_installed(tool_name: &str) -> bool {
    which(tool_name).is_ok()
}

#[cfg(any(test, feature = "test-helpers"))]
pub use recording::RecordingRunner;

#[cfg(any(test, feature = "test-helpers"))]
mod recording {
    use std::cell::RefCell;

    use super::{CommandRunner, CommandSpec};
    use crate::error::{Result, ScaffoldError};

    type Hook = Box<dyn Fn(&CommandSpec) -> std::io::Result<()>>;

    /// Test double that records commands instead of running them.
    ///
    /// A hook can stand in for the command's side effects (for example
    /// creating the generator's skeleton), and any command whose line
    /// contains the configured needle fails with exit code 1.
    #[derive(Default)]
    pub struct RecordingRunner {
        calls: RefCell<Vec<CommandSpec>>,
        fail_matching: Option<String>,
        missing_programs: Vec<String>,
        hook: Option<Hook>,
    }

    impl RecordingRunner {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn fail_when(mut self, needle: impl Into<String>) -> Self {
            self.fail_matching = Some(needle.into());
            self
        }

        pub fn missing_program(mut self, program: impl Into<String>) -> Self {
            self.missing_programs.push(program.into());
            self
        }

        pub fn with_hook<F>(mut self, hook: F) -> Self
        where
            F: Fn(&CommandSpec) -> std::io::Result<()> + 'static,
        {
            self.hook = Some(Box::new(hook));
            self
        }

        pub fn calls(&self) -> Vec<CommandSpec> {
            self.calls.borrow().clone()
        }

        pub fn command_lines(&self) -> Vec<String> {
            self.calls.borrow().iter().map(CommandSpec::command_line).collect()
        }
    }

    impl CommandRunner for RecordingRunner {
        fn run(&self, spec: &CommandSpec) -> Result<()> {
            self.calls.borrow_mut().push(spec.clone());
            let line = spec.command_line();
            if let Some(needle) = &self.fail_matching {
                if line.contains(needle.as_str()) {
                    return Err(ScaffoldError::Command {
                        command: line,
                        code: Some(1),
                    });
                }
            }
            if let Some(hook) = &self.hook {
                hook(spec)?;
            }
            Ok(())
        }

        fn ensure_available(&self, program: &str) -> Result<()> {
            if self.missing_programs.iter().any(|p| p == program) {
                return Err(ScaffoldError::Dependency(format!(
                    "'{}' is not installed or not in your PATH",
                    program
                )));
            }
            Ok(())
        }
    }
}
