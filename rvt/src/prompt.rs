// Standard library
use std::path::Path;

// External crates
use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use tracing::debug;

// Internal imports
use rvt_config::config::PromptDefaults;
use rvt_core::error::{Result, ScaffoldError};
use rvt_messages::MESSAGES;

use crate::options::{resolve_project_dir, resolve_project_name, OptionRequest, ScaffoldOptions};

/// Source of answers for the questions the CLI didn't settle.
pub trait Prompter {
    /// Free-text question; an empty answer means "use the default".
    fn input(&self, prompt: &str) -> Result<String>;

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool>;
}

/// Asks on the terminal.
pub struct DialoguerPrompter {
    theme: ColorfulTheme,
}

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn input(&self, prompt: &str) -> Result<String> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| ScaffoldError::Prompt(e.to_string()))
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact()
            .map_err(|e| ScaffoldError::Prompt(e.to_string()))
    }
}

/// Never asks: blank text answers and default confirmations.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultsPrompter;

impl Prompter for DefaultsPrompter {
    fn input(&self, _prompt: &str) -> Result<String> {
        Ok(String::new())
    }

    fn confirm(&self, _prompt: &str, default: bool) -> Result<bool> {
        Ok(default)
    }
}

/// Turn the CLI request plus prompt answers into a complete options record.
///
/// Questions are asked in a fixed order: name, directory, ESLint, Airbnb
/// style (only after ESLint is accepted), Prettier. Anything already in
/// `request` is not asked.
pub fn collect_options(
    request: &OptionRequest,
    defaults: &PromptDefaults,
    cwd: &Path,
    prompter: &dyn Prompter,
) -> Result<ScaffoldOptions> {
    let name_answer = match &request.name {
        Some(name) => name.clone(),
        None => prompter.input(MESSAGES.prompt.project_name)?,
    };
    let dir_answer = match &request.dir {
        Some(dir) => dir.clone(),
        None => prompter.input(MESSAGES.prompt.project_dir)?,
    };

    let project_name = resolve_project_name(Some(&name_answer), cwd)?;
    let project_dir = resolve_project_dir(Some(&dir_answer), cwd);

    let setup_lint = match request.lint {
        Some(answer) => answer,
        None => prompter.confirm(MESSAGES.prompt.setup_lint, defaults.lint)?,
    };
    let use_alternate_lint_style = if setup_lint {
        match request.airbnb {
            Some(answer) => answer,
            None => prompter.confirm(MESSAGES.prompt.use_airbnb, defaults.airbnb)?,
        }
    } else {
        false
    };
    let setup_format = match request.format {
        Some(answer) => answer,
        None => prompter.confirm(MESSAGES.prompt.setup_format, defaults.format)?,
    };

    let options = ScaffoldOptions {
        project_name,
        project_dir,
        setup_lint,
        setup_format,
        use_alternate_lint_style,
    };
    debug!(?options, "collected scaffold options");
    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::path::PathBuf;

    /// Replays canned answers and records which questions were asked.
    #[derive(Default)]
    struct ScriptedPrompter {
        inputs: RefCell<VecDeque<String>>,
        confirms: RefCell<VecDeque<bool>>,
        asked: RefCell<Vec<String>>,
    }

    impl ScriptedPrompter {
        fn new(inputs: &[&str], confirms: &[bool]) -> Self {
            Self {
                inputs: RefCell::new(inputs.iter().map(|s| s.to_string()).collect()),
                confirms: RefCell::new(confirms.iter().copied().collect()),
                asked: RefCell::new(Vec::new()),
            }
        }

        fn asked(&self) -> Vec<String> {
            self.asked.borrow().clone()
        }
    }

    impl Prompter for ScriptedPrompter {
        fn input(&self, prompt: &str) -> Result<String> {
            self.asked.borrow_mut().push(prompt.to_string());
            self.inputs
                .borrow_mut()
                .pop_front()
                .ok_or_else(|| ScaffoldError::Prompt(format!("unexpected question: {}", prompt)))
        }

        fn confirm(&self, prompt: &str, _default: bool) -> Result<bool> {
            self.asked.borrow_mut().push(prompt.to_string());
            self.confirms
                .borrow_mut()
                .pop_front()
                .ok_or_else(|| ScaffoldError::Prompt(format!("unexpected question: {}", prompt)))
        }
    }

    #[test]
    fn test_blank_answers_fall_back_to_cwd() {
        let prompter = ScriptedPrompter::new(&["", ""], &[false, false]);
        let cwd = Path::new("/work/landing-page");

        let options =
            collect_options(&OptionRequest::default(), &PromptDefaults::default(), cwd, &prompter)
                .unwrap();

        assert_eq!(options.project_name, "landing-page");
        assert_eq!(options.project_dir, PathBuf::from("/work/landing-page"));
        assert!(!options.setup_lint);
        assert!(!options.setup_format);
    }

    #[test]
    fn test_airbnb_is_only_asked_after_lint() {
        let prompter = ScriptedPrompter::new(&["demo", "apps"], &[false, true]);
        let options = collect_options(
            &OptionRequest::default(),
            &PromptDefaults::default(),
            Path::new("/work"),
            &prompter,
        )
        .unwrap();

        assert!(!options.use_alternate_lint_style);
        assert!(options.setup_format);
        assert_eq!(options.project_dir, PathBuf::from("/work/apps"));
        assert!(!prompter
            .asked()
            .iter()
            .any(|q| q == MESSAGES.prompt.use_airbnb));
    }

    #[test]
    fn test_full_interactive_order() {
        let prompter = ScriptedPrompter::new(&["demo", ""], &[true, true, false]);
        let options = collect_options(
            &OptionRequest::default(),
            &PromptDefaults::default(),
            Path::new("/work"),
            &prompter,
        )
        .unwrap();

        assert!(options.setup_lint);
        assert!(options.use_alternate_lint_style);
        assert!(!options.setup_format);
        assert_eq!(
            prompter.asked(),
            vec![
                MESSAGES.prompt.project_name,
                MESSAGES.prompt.project_dir,
                MESSAGES.prompt.setup_lint,
                MESSAGES.prompt.use_airbnb,
                MESSAGES.prompt.setup_format,
            ]
        );
    }

    #[test]
    fn test_request_values_skip_questions() {
        let prompter = ScriptedPrompter::new(&[], &[]);
        let request = OptionRequest {
            name: Some("demo".to_string()),
            dir: Some("/srv".to_string()),
            lint: Some(true),
            airbnb: Some(false),
            format: Some(true),
        };

        let options =
            collect_options(&request, &PromptDefaults::default(), Path::new("/work"), &prompter)
                .unwrap();

        assert!(prompter.asked().is_empty());
        assert_eq!(options.project_dir, PathBuf::from("/srv"));
        assert_eq!(options.lint_style(), Some(rvt_templates::LintStyle::Recommended));
    }

    #[test]
    fn test_defaults_prompter_uses_configured_defaults() {
        let defaults = PromptDefaults {
            lint: true,
            airbnb: false,
            format: false,
        };
        let options = collect_options(
            &OptionRequest::default(),
            &defaults,
            Path::new("/work/site"),
            &DefaultsPrompter,
        )
        .unwrap();

        assert_eq!(options.project_name, "site");
        assert!(options.setup_lint);
        assert!(!options.use_alternate_lint_style);
        assert!(!options.setup_format);
    }

    #[test]
    fn test_directory_with_space_in_name_generates_in_place() {
        let cwd = Path::new("/home/u/My Site");
        let options = collect_options(
            &OptionRequest::default(),
            &PromptDefaults::default(),
            cwd,
            &DefaultsPrompter,
        )
        .unwrap();

        assert_eq!(options.project_name, "My Site");
        assert_eq!(options.project_dir, PathBuf::from("/home/u/My Site"));
        assert!(crate::ProjectLayout::resolve(&options).is_in_place());
    }

    #[test]
    fn test_invalid_name_is_rejected_before_anything_else() {
        let prompter = ScriptedPrompter::new(&["../escape", ""], &[]);
        let err = collect_options(
            &OptionRequest::default(),
            &PromptDefaults::default(),
            Path::new("/work"),
            &prompter,
        )
        .unwrap_err();
        assert!(matches!(err, ScaffoldError::InvalidProjectName(_)));
    }
}
