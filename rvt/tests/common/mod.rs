// Shared fixtures for scaffold integration tests.
#![allow(dead_code)]

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use rvt::ScaffoldOptions;
use rvt_core::command::RecordingRunner;
use rvt_core::CommandSpec;

pub const VITE_APP_CSS: &str = "#root {\n  max-width: 1280px;\n}\n";

/// Directory the generator writes into for a recorded `create vite` call.
fn generator_root(spec: &CommandSpec) -> PathBuf {
    let target = spec.args.get(2).map(String::as_str).unwrap_or(".");
    spec.cwd.join(target)
}

/// Lay down the files `npm create vite` produces for the react starter.
pub fn write_vite_skeleton(root: &Path, with_placeholders: bool) -> io::Result<()> {
    fs::create_dir_all(root.join("src").join("assets"))?;
    fs::create_dir_all(root.join("public"))?;
    fs::write(root.join("package.json"), "{\"type\": \"module\"}\n")?;
    fs::write(root.join("index.html"), "<div id=\"root\"></div>\n")?;
    fs::write(root.join("eslint.config.js"), "export default []\n")?;
    fs::write(root.join("src").join("App.jsx"), "import reactLogo from './assets/react.svg'\n")?;
    fs::write(root.join("src").join("App.css"), VITE_APP_CSS)?;
    fs::write(root.join("src").join("index.css"), ":root { color: black; }\n")?;
    if with_placeholders {
        fs::write(root.join("src").join("assets").join("react.svg"), "<svg/>")?;
        fs::write(root.join("public").join("vite.svg"), "<svg/>")?;
    }
    Ok(())
}

/// Simulates the external tools' side effects on disk.
pub fn simulate_tools(spec: &CommandSpec, with_placeholders: bool) -> io::Result<()> {
    let line = spec.command_line();
    if line.contains("create vite@") {
        write_vite_skeleton(&generator_root(spec), with_placeholders)?;
    } else if line.contains("tailwindcss init -p") {
        fs::write(spec.cwd.join("tailwind.config.js"), "module.exports = {}\n")?;
        fs::write(spec.cwd.join("postcss.config.js"), "module.exports = {}\n")?;
    }
    Ok(())
}

pub fn simulating_runner() -> RecordingRunner {
    RecordingRunner::new().with_hook(|spec| simulate_tools(spec, true))
}

pub fn options(dir: &Path, lint: bool, airbnb: bool, format: bool) -> ScaffoldOptions {
    ScaffoldOptions {
        project_name: "demo".to_string(),
        project_dir: dir.to_path_buf(),
        setup_lint: lint,
        setup_format: format,
        use_alternate_lint_style: airbnb,
    }
}

pub fn read(path: impl AsRef<Path>) -> String {
    fs::read_to_string(path.as_ref())
        .unwrap_or_else(|e| panic!("failed to read {}: {}", path.as_ref().display(), e))
}
