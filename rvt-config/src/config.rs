use std::path::PathBuf;

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use rvt_templates::{TemplateId, ViteTemplate};

/// Root of `rvt.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScaffoldConfig {
    /// Template set to apply after generation
    pub template: TemplateId,

    pub vite: ViteSettings,

    pub package_manager: PackageManagerSettings,

    pub css: CssSettings,

    pub lint: LintSettings,

    pub format: FormatSettings,

    pub placeholders: PlaceholderSettings,

    /// Directory whose files replace the built-in templates of the same name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub templates_dir: Option<PathBuf>,

    /// Answers used when a question is skipped or `--yes` is given
    pub defaults: PromptDefaults,

    /// Where this configuration was loaded from, if anywhere
    #[serde(skip)]
    pub source_path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViteSettings {
    /// Version tag for `create-vite`
    pub version: String,
    pub template: ViteTemplate,
}

impl Default for ViteSettings {
    fn default() -> Self {
        Self {
            version: "latest".to_string(),
            template: ViteTemplate::React,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PackageManagerSettings {
    /// Runs `create` and `install -D`
    pub program: String,
    /// Runs package binaries such as the Tailwind initializer
    pub exec: String,
}

impl Default for PackageManagerSettings {
    fn default() -> Self {
        Self {
            program: "npm".to_string(),
            exec: "npx".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CssSettings {
    pub packages: Vec<String>,
}

impl Default for CssSettings {
    fn default() -> Self {
        Self {
            // `tailwindcss init` was removed in v4
            packages: strings(&["tailwindcss@3", "postcss", "autoprefixer"]),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LintSettings {
    pub packages: Vec<String>,
    /// Added when the Airbnb style is chosen
    pub airbnb_packages: Vec<String>,
    /// Added when Prettier is also set up
    pub prettier_packages: Vec<String>,
}

impl Default for LintSettings {
    fn default() -> Self {
        Self {
            // .eslintrc.json is only read by ESLint 8
            packages: strings(&[
                "eslint@8",
                "eslint-plugin-react",
                "eslint-plugin-jsx-a11y",
                "eslint-plugin-react-hooks",
                "eslint-plugin-react-refresh",
            ]),
            airbnb_packages: strings(&["eslint-config-airbnb"]),
            prettier_packages: strings(&["eslint-plugin-prettier", "eslint-config-prettier"]),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatSettings {
    pub packages: Vec<String>,
}

impl Default for FormatSettings {
    fn default() -> Self {
        Self {
            packages: strings(&[
                "prettier",
                "prettier-plugin-tailwindcss",
                "@ianvs/prettier-plugin-sort-imports",
            ]),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlaceholderSettings {
    pub remove: bool,
    /// Paths relative to the project root
    pub files: Vec<String>,
}

impl Default for PlaceholderSettings {
    fn default() -> Self {
        Self {
            remove: true,
            files: strings(&["src/assets/react.svg", "public/vite.svg"]),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PromptDefaults {
    pub lint: bool,
    pub airbnb: bool,
    pub format: bool,
}

impl Default for PromptDefaults {
    fn default() -> Self {
        Self {
            lint: true,
            airbnb: true,
            format: true,
        }
    }
}

impl ScaffoldConfig {
    /// Reject settings that would make every run fail.
    pub fn validate(&self) -> Result<()> {
        if self.package_manager.program.trim().is_empty() {
            bail!("package_manager.program must not be empty");
        }
        if self.package_manager.exec.trim().is_empty() {
            bail!("package_manager.exec must not be empty");
        }
        if self.vite.version.trim().is_empty() {
            bail!("vite.version must not be empty");
        }
        if self.css.packages.is_empty() {
            bail!("css.packages must list at least the CSS framework");
        }
        for file in &self.placeholders.files {
            if file.starts_with('/') || file.split('/').any(|part| part == "..") {
                bail!(
                    "placeholders.files entry '{}' must stay inside the project",
                    file
                );
            }
        }
        Ok(())
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
