// Standard library
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

// External crates
use serde::{Deserialize, Serialize};

// Internal imports
use rvt_core::error::{Result, ScaffoldError};

const INDEX_CSS: &str = include_str!("../assets/index.css");
const TAILWIND_ESM: &str = include_str!("../assets/tailwind.config.esm.js");
const TAILWIND_CJS: &str = include_str!("../assets/tailwind.config.cjs");
const POSTCSS_ESM: &str = include_str!("../assets/postcss.config.esm.js");
const POSTCSS_CJS: &str = include_str!("../assets/postcss.config.cjs");
const APP_HEADING: &str = include_str!("../assets/App.jsx");
const APP_CONTAINER: &str = include_str!("../assets/App.container.jsx");

/// Identifier of a template set, as written in `rvt.yaml` or `--template`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateId {
    #[default]
    ReactTailwind,
    ReactTailwindContainer,
    ReactTailwindCjs,
}

impl TemplateId {
    pub const ALL: [TemplateId; 3] = [
        TemplateId::ReactTailwind,
        TemplateId::ReactTailwindContainer,
        TemplateId::ReactTailwindCjs,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateId::ReactTailwind => "react-tailwind",
            TemplateId::ReactTailwindContainer => "react-tailwind-container",
            TemplateId::ReactTailwindCjs => "react-tailwind-cjs",
        }
    }
}

impl Display for TemplateId {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateId {
    type Err = ScaffoldError;

    fn from_str(s: &str) -> Result<Self> {
        TemplateId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| {
                let known: Vec<&str> = TemplateId::ALL.iter().map(TemplateId::as_str).collect();
                ScaffoldError::Template(format!(
                    "unknown template '{}' (available: {})",
                    s,
                    known.join(", ")
                ))
            })
    }
}

/// The Vite starter handed to `npm create vite`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViteTemplate {
    #[default]
    React,
    ReactTs,
}

impl ViteTemplate {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViteTemplate::React => "react",
            ViteTemplate::ReactTs => "react-ts",
        }
    }

    /// Extension of the root component the starter generates.
    pub fn component_extension(&self) -> &'static str {
        match self {
            ViteTemplate::React => "jsx",
            ViteTemplate::ReactTs => "tsx",
        }
    }
}

impl Display for ViteTemplate {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One file to place in the generated project, relative to its root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateAsset {
    pub path: String,
    pub contents: &'static str,
}

impl TemplateAsset {
    fn new(path: impl Into<String>, contents: &'static str) -> Self {
        Self {
            path: path.into(),
            contents,
        }
    }

    /// Final path component, used to look the asset up in a template override directory.
    pub fn file_name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }
}

/// A named bundle of the files that wire Tailwind into a Vite project.
#[derive(Debug, Clone)]
pub struct TemplateSet {
    pub id: TemplateId,
    pub tailwind_config: TemplateAsset,
    pub postcss_config: TemplateAsset,
    pub index_css: TemplateAsset,
    app_component: &'static str,
    /// Truncate `src/App.css` so the generator's demo styles don't fight Tailwind.
    pub clear_app_stylesheet: bool,
    /// Files left behind by the Tailwind initializer that this set replaces.
    pub stale_files: &'static [&'static str],
}

impl TemplateSet {
    pub fn get(id: TemplateId) -> Self {
        let esm = (
            TemplateAsset::new("tailwind.config.js", TAILWIND_ESM),
            TemplateAsset::new("postcss.config.js", POSTCSS_ESM),
        );
        let index_css = TemplateAsset::new("src/index.css", INDEX_CSS);

        match id {
            TemplateId::ReactTailwind => Self {
                id,
                tailwind_config: esm.0,
                postcss_config: esm.1,
                index_css,
                app_component: APP_HEADING,
                clear_app_stylesheet: false,
                stale_files: &[],
            },
            TemplateId::ReactTailwindContainer => Self {
                id,
                tailwind_config: esm.0,
                postcss_config: esm.1,
                index_css,
                app_component: APP_CONTAINER,
                clear_app_stylesheet: true,
                stale_files: &[],
            },
            TemplateId::ReactTailwindCjs => Self {
                id,
                tailwind_config: TemplateAsset::new("tailwind.config.cjs", TAILWIND_CJS),
                postcss_config: TemplateAsset::new("postcss.config.cjs", POSTCSS_CJS),
                index_css,
                app_component: APP_HEADING,
                clear_app_stylesheet: false,
                stale_files: &["tailwind.config.js", "postcss.config.js"],
            },
        }
    }

    /// Root component for the given Vite starter (`src/App.jsx` or `src/App.tsx`).
    pub fn app_component(&self, vite: ViteTemplate) -> TemplateAsset {
        TemplateAsset::new(
            format!("src/App.{}", vite.component_extension()),
            self.app_component,
        )
    }

    /// Every file the set overwrites, in write order.
    pub fn files(&self, vite: ViteTemplate) -> Vec<TemplateAsset> {
        vec![
            self.postcss_config.clone(),
            self.tailwind_config.clone(),
            self.index_css.clone(),
            self.app_component(vite),
        ]
    }
}
