use std::path::PathBuf;

use clap::Parser;

use rvt_config::ScaffoldConfig;
use rvt_templates::{TemplateId, ViteTemplate};

use crate::options::OptionRequest;

/// Scaffold a React + Vite + Tailwind CSS project.
///
/// Anything not given on the command line is asked interactively, unless
/// `--yes` is set or stdin is not a terminal, in which case the defaults from
/// rvt.yaml apply.
#[derive(Parser, Debug)]
#[command(name = "rvt")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Project name (defaults to the current directory's name)
    pub name: Option<String>,

    /// Directory to create the project in (defaults to the current directory)
    #[arg(short, long, value_name = "DIR")]
    pub dir: Option<String>,

    /// Template set to apply (react-tailwind, react-tailwind-container, react-tailwind-cjs)
    #[arg(short, long, value_name = "ID")]
    pub template: Option<TemplateId>,

    /// Use the TypeScript Vite starter (react-ts)
    #[arg(long)]
    pub typescript: bool,

    /// Set up ESLint without asking
    #[arg(long, overrides_with = "no_lint")]
    pub lint: bool,

    /// Skip ESLint without asking
    #[arg(long, overrides_with = "lint")]
    pub no_lint: bool,

    /// Use the Airbnb ESLint style guide
    #[arg(long, overrides_with = "no_airbnb")]
    pub airbnb: bool,

    /// Use the recommended ESLint rules only
    #[arg(long, overrides_with = "airbnb")]
    pub no_airbnb: bool,

    /// Set up Prettier without asking
    #[arg(long, overrides_with = "no_format")]
    pub format: bool,

    /// Skip Prettier without asking
    #[arg(long, overrides_with = "format")]
    pub no_format: bool,

    /// Accept defaults for every question
    #[arg(short, long)]
    pub yes: bool,

    /// Path to an rvt.yaml to use instead of the discovered one
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Apply flags that override configuration values.
    pub fn apply_overrides(&self, config: &mut ScaffoldConfig) {
        if let Some(template) = self.template {
            config.template = template;
        }
        if self.typescript {
            config.vite.template = ViteTemplate::ReactTs;
        }
    }

    pub fn option_request(&self) -> OptionRequest {
        OptionRequest {
            name: self.name.clone(),
            dir: self.dir.clone(),
            lint: flag_pair(self.lint, self.no_lint),
            airbnb: flag_pair(self.airbnb, self.no_airbnb),
            format: flag_pair(self.format, self.no_format),
        }
    }
}

fn flag_pair(yes: bool, no: bool) -> Option<bool> {
    match (yes, no) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_leave_everything_open() {
        let args = Args::try_parse_from(["rvt"]).unwrap();
        let request = args.option_request();
        assert_eq!(request, OptionRequest::default());
    }

    #[test]
    fn test_flag_pairs() {
        let args = Args::try_parse_from(["rvt", "demo", "--no-lint", "--format", "--airbnb"])
            .unwrap();
        let request = args.option_request();
        assert_eq!(request.name.as_deref(), Some("demo"));
        assert_eq!(request.lint, Some(false));
        assert_eq!(request.format, Some(true));
        assert_eq!(request.airbnb, Some(true));
    }

    #[test]
    fn test_last_flag_of_a_pair_wins() {
        let args = Args::try_parse_from(["rvt", "--lint", "--no-lint"]).unwrap();
        assert_eq!(args.option_request().lint, Some(false));
    }

    #[test]
    fn test_template_and_typescript_override_config() {
        let args = Args::try_parse_from([
            "rvt",
            "--template",
            "react-tailwind-container",
            "--typescript",
        ])
        .unwrap();
        let mut config = ScaffoldConfig::default();
        args.apply_overrides(&mut config);
        assert_eq!(config.template, TemplateId::ReactTailwindContainer);
        assert_eq!(config.vite.template, ViteTemplate::ReactTs);
    }

    #[test]
    fn test_unknown_template_is_rejected() {
        assert!(Args::try_parse_from(["rvt", "--template", "svelte"]).is_err());
    }
}
