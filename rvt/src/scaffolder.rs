//! The scaffold procedure.
//!
//! Strictly sequential: every step runs only after the previous one
//! succeeded, and the project root is passed to each step explicitly. The
//! process working directory is never changed.

// Standard library
use std::cell::Cell;
use std::fs;
use std::path::{Path, PathBuf};

// External crates
use tracing::{info, info_span};

// Internal imports
use rvt_config::ScaffoldConfig;
use rvt_core::error::{Result, ScaffoldError};
use rvt_core::file_system::{self, RemoveOutcome};
use rvt_core::{rvt_println, rvt_progress, rvt_success};
use rvt_core::{CommandRunner, CommandSpec};
use rvt_messages::{msg, MESSAGES};
use rvt_templates::tooling::{
    ESLINT_CONFIG_FILE, FLAT_ESLINT_CONFIG_FILE, PRETTIER_CONFIG_FILE,
};
use rvt_templates::{EslintConfig, PrettierConfig, TemplateSet};

use crate::options::{
    validate_directory_name, validate_project_name, ProjectLayout, ScaffoldOptions,
};

/// What a completed run did to the filesystem.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub root: PathBuf,
    pub written: Vec<PathBuf>,
    /// Files copied from the configured templates directory
    pub copied: Vec<PathBuf>,
    pub removed: Vec<PathBuf>,
    /// Removal or clearing targets that did not exist
    pub skipped: Vec<PathBuf>,
}

impl ScaffoldReport {
    fn record_removal(&mut self, path: PathBuf, outcome: RemoveOutcome) {
        match outcome {
            RemoveOutcome::Removed => {
                rvt_println!(
                    "{}",
                    msg!(MESSAGES.scaffold.removed_file, path = path.display().to_string())
                );
                self.removed.push(path);
            }
            RemoveOutcome::Skipped => {
                rvt_println!(
                    "{}",
                    msg!(MESSAGES.scaffold.skipped_missing, path = path.display().to_string())
                );
                self.skipped.push(path);
            }
        }
    }
}

pub struct Scaffolder<'a> {
    runner: &'a dyn CommandRunner,
    config: &'a ScaffoldConfig,
    templates: TemplateSet,
    /// Set once the run gets past the pre-flight checks and starts touching disk
    started: Cell<bool>,
}

impl<'a> Scaffolder<'a> {
    pub fn new(runner: &'a dyn CommandRunner, config: &'a ScaffoldConfig) -> Self {
        Self {
            runner,
            config,
            templates: TemplateSet::get(config.template),
            started: Cell::new(false),
        }
    }

    /// Whether the last `run` reached project creation, so a failure may
    /// have left files behind.
    pub fn project_started(&self) -> bool {
        self.started.get()
    }

    pub fn run(&self, options: &ScaffoldOptions) -> Result<ScaffoldReport> {
        self.started.set(false);
        let layout = ProjectLayout::resolve(options);
        // In place the name is only the existing directory's own name
        if layout.is_in_place() {
            validate_directory_name(&options.project_name)?;
        } else {
            validate_project_name(&options.project_name)?;
        }

        let span = info_span!(
            "scaffold",
            project = %options.project_name,
            root = %layout.root.display(),
            template = %self.templates.id
        );
        let _guard = span.enter();

        self.check_tools()?;
        self.create_project(options, &layout)?;

        let root = layout.root.as_path();
        let mut report = ScaffoldReport {
            root: root.to_path_buf(),
            ..ScaffoldReport::default()
        };

        self.install_css_framework(root)?;
        self.configure_css_framework(root, &mut report)?;

        if self.config.placeholders.remove {
            self.remove_placeholders(root, &mut report)?;
        }

        if options.setup_lint {
            self.setup_lint(root, options, &mut report)?;
        }

        if options.setup_format {
            self.setup_format(root, &mut report)?;
        }

        rvt_success!(
            "{}",
            msg!(MESSAGES.scaffold.complete, name = options.project_name.as_str())
        );
        Ok(report)
    }

    fn check_tools(&self) -> Result<()> {
        let pm = &self.config.package_manager;
        rvt_progress!(
            "{}",
            msg!(
                MESSAGES.scaffold.checking_tools,
                tools = format!("{} and {}", pm.program, pm.exec)
            )
        );
        self.runner.ensure_available(&pm.program)?;
        self.runner.ensure_available(&pm.exec)
    }

    fn create_project(&self, options: &ScaffoldOptions, layout: &ProjectLayout) -> Result<()> {
        rvt_println!(
            "{}",
            msg!(
                MESSAGES.scaffold.creating_project,
                name = options.project_name.as_str(),
                path = layout.root.display().to_string()
            )
        );

        self.started.set(true);
        if !layout.generator_cwd.is_dir() {
            info!(dir = %layout.generator_cwd.display(), "creating project directory");
            fs::create_dir_all(&layout.generator_cwd)
                .map_err(|e| ScaffoldError::filesystem(&layout.generator_cwd, e))?;
        }

        let vite = &self.config.vite;
        let spec = CommandSpec::new(
            &self.config.package_manager.program,
            [
                "create".to_string(),
                format!("vite@{}", vite.version),
                layout.generator_target.clone(),
                "--".to_string(),
                "--template".to_string(),
                vite.template.as_str().to_string(),
            ],
            &layout.generator_cwd,
        );
        self.runner.run(&spec)
    }

    fn install_css_framework(&self, root: &Path) -> Result<()> {
        rvt_progress!("{}", MESSAGES.scaffold.installing_css);
        self.install_dev(root, &self.config.css.packages)?;

        rvt_progress!("{}", MESSAGES.scaffold.initializing_css);
        let init = CommandSpec::new(
            &self.config.package_manager.exec,
            ["tailwindcss", "init", "-p"],
            root,
        );
        self.runner.run(&init)
    }

    fn configure_css_framework(&self, root: &Path, report: &mut ScaffoldReport) -> Result<()> {
        rvt_progress!("{}", MESSAGES.scaffold.configuring_css);

        for asset in self.templates.files(self.config.vite.template) {
            self.place(root, &asset.path, asset.file_name(), asset.contents, report)?;
        }

        if self.templates.clear_app_stylesheet {
            let stylesheet = root.join("src").join("App.css");
            match file_system::clear_file(&stylesheet)? {
                RemoveOutcome::Removed => {
                    rvt_println!(
                        "{}",
                        msg!(
                            MESSAGES.scaffold.cleared_file,
                            path = stylesheet.display().to_string()
                        )
                    );
                    report.written.push(stylesheet);
                }
                outcome => report.record_removal(stylesheet, outcome),
            }
        }

        for stale in self.templates.stale_files {
            let path = root.join(stale);
            let outcome = file_system::remove_if_exists(&path)?;
            report.record_removal(path, outcome);
        }
        Ok(())
    }

    fn remove_placeholders(&self, root: &Path, report: &mut ScaffoldReport) -> Result<()> {
        rvt_progress!("{}", MESSAGES.scaffold.removing_placeholders);
        for file in &self.config.placeholders.files {
            let path = root.join(file);
            let outcome = file_system::remove_if_exists(&path)?;
            report.record_removal(path, outcome);
        }
        Ok(())
    }

    fn setup_lint(
        &self,
        root: &Path,
        options: &ScaffoldOptions,
        report: &mut ScaffoldReport,
    ) -> Result<()> {
        let Some(style) = options.lint_style() else {
            return Ok(());
        };
        rvt_progress!("{}", MESSAGES.scaffold.installing_lint);

        let lint = &self.config.lint;
        let mut packages = lint.packages.clone();
        if style == rvt_templates::LintStyle::Airbnb {
            packages.extend(lint.airbnb_packages.iter().cloned());
        }
        if options.setup_format {
            packages.extend(lint.prettier_packages.iter().cloned());
        }
        self.install_dev(root, &packages)?;

        // The starter's flat config would shadow .eslintrc.json
        let flat = root.join(FLAT_ESLINT_CONFIG_FILE);
        let outcome = file_system::remove_if_exists(&flat)?;
        report.record_removal(flat, outcome);

        let contents = EslintConfig::new(style, options.setup_format).to_json()?;
        self.place_generated(root, ESLINT_CONFIG_FILE, &contents, report)
    }

    fn setup_format(&self, root: &Path, report: &mut ScaffoldReport) -> Result<()> {
        rvt_progress!("{}", MESSAGES.scaffold.installing_format);
        self.install_dev(root, &self.config.format.packages)?;

        let contents = PrettierConfig::new(&self.templates.tailwind_config.path).to_json()?;
        self.place_generated(root, PRETTIER_CONFIG_FILE, &contents, report)
    }

    fn install_dev(&self, root: &Path, packages: &[String]) -> Result<()> {
        let mut args = vec!["install".to_string(), "-D".to_string()];
        args.extend(packages.iter().cloned());
        let spec = CommandSpec::new(&self.config.package_manager.program, args, root);
        self.runner.run(&spec)
    }

    fn place_generated(
        &self,
        root: &Path,
        file_name: &str,
        contents: &str,
        report: &mut ScaffoldReport,
    ) -> Result<()> {
        self.place(root, file_name, file_name, contents, report)
    }

    /// Copy `file_name` from the templates directory when it provides one,
    /// otherwise write the built-in `contents`.
    fn place(
        &self,
        root: &Path,
        relative: &str,
        file_name: &str,
        contents: &str,
        report: &mut ScaffoldReport,
    ) -> Result<()> {
        let destination = root.join(relative);

        if let Some(source) = self.override_for(file_name) {
            file_system::copy_file(&source, &destination)?;
            rvt_println!(
                "{}",
                msg!(
                    MESSAGES.scaffold.copied_template,
                    path = relative,
                    source = source.display().to_string()
                )
            );
            report.copied.push(destination);
            return Ok(());
        }

        file_system::write_file(&destination, contents)?;
        rvt_println!("{}", msg!(MESSAGES.scaffold.wrote_file, path = relative));
        report.written.push(destination);
        Ok(())
    }

    fn override_for(&self, file_name: &str) -> Option<PathBuf> {
        let dir = self.config.templates_dir.as_ref()?;
        let candidate = dir.join(file_name);
        candidate.is_file().then_some(candidate)
    }
}
