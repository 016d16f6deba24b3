// Standard library
use std::io::IsTerminal;

// External crates
use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing::debug;

// Internal imports
use rvt::cli::Args;
use rvt::prompt::{collect_options, DefaultsPrompter, DialoguerPrompter, Prompter};
use rvt::{ProjectLayout, Scaffolder};
use rvt_config::ConfigLoader;
use rvt_core::{rvt_error, rvt_error_hint, rvt_info, rvt_println, rvt_warning, SystemRunner};
use rvt_messages::{msg, MESSAGES};

fn main() {
    if let Err(e) = run() {
        rvt_error!(
            "{}",
            msg!(MESSAGES.common.error_generic, error = format!("{:#}", e))
        );
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    let logging = if args.debug {
        rvt_core::tracing_init::init_with_defaults("debug")
    } else {
        rvt_core::tracing_init::init()
    };
    if logging.is_err() {
        rvt_warning!("Failed to initialize logging, continuing without it");
    }

    let cwd = std::env::current_dir().context("Could not determine the current directory")?;

    let mut config = ConfigLoader::new(&cwd)
        .with_explicit(args.config.clone())
        .load()?;
    args.apply_overrides(&mut config);
    match &config.source_path {
        Some(path) => rvt_info!(
            "{}",
            msg!(MESSAGES.common.config_loaded, path = path.display().to_string())
        ),
        None => debug!("{}", MESSAGES.common.config_defaults),
    }

    let interactive = !args.yes && std::io::stdin().is_terminal();
    let prompter: Box<dyn Prompter> = if interactive {
        Box::new(DialoguerPrompter::new())
    } else {
        Box::new(DefaultsPrompter)
    };
    let options = collect_options(
        &args.option_request(),
        &config.defaults,
        &cwd,
        prompter.as_ref(),
    )?;

    let layout = ProjectLayout::resolve(&options);
    let scaffolder = Scaffolder::new(&SystemRunner, &config);
    let report = match scaffolder.run(&options) {
        Ok(report) => report,
        Err(e) => {
            if scaffolder.project_started() && layout.root.exists() {
                rvt_error_hint!(
                    "{}",
                    msg!(
                        MESSAGES.common.error_no_cleanup,
                        path = layout.root.display().to_string()
                    )
                );
            }
            return Err(e.into());
        }
    };

    debug!(?report, "scaffold finished");
    let next = msg!(
        MESSAGES.scaffold.next_steps,
        path = report.root.display().to_string(),
        program = config.package_manager.program.as_str()
    );
    rvt_println!("{}", next.cyan());
    Ok(())
}
