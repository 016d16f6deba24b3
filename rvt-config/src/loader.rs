// Standard library imports
use std::fs;
use std::path::{Path, PathBuf};

// External crate imports
use anyhow::{bail, Context, Result};
use tracing::debug;

// Internal imports
use crate::config::ScaffoldConfig;
use crate::CONFIG_FILE_NAME;

/// Finds and loads `rvt.yaml`.
///
/// Priority chain:
/// 1. **Explicit path:** `--config FILE`, which must exist.
/// 2. **Invocation directory:** `rvt.yaml` in the directory rvt was started from.
/// 3. **User configuration:** `<config dir>/rvt/config.yaml`.
/// 4. **Built-in defaults.**
pub struct ConfigLoader {
    cwd: PathBuf,
    explicit: Option<PathBuf>,
    user_config_dir: Option<PathBuf>,
}

impl ConfigLoader {
    /// Creates a loader rooted at `cwd`, using the platform config directory.
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self {
            cwd: cwd.into(),
            explicit: None,
            user_config_dir: dirs::config_dir(),
        }
    }

    pub fn with_explicit(mut self, path: Option<PathBuf>) -> Self {
        self.explicit = path;
        self
    }

    pub fn with_user_config_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.user_config_dir = dir;
        self
    }

    pub fn load(&self) -> Result<ScaffoldConfig> {
        // Priority 1: explicit --config
        if let Some(path) = &self.explicit {
            let path = if path.is_absolute() {
                path.clone()
            } else {
                self.cwd.join(path)
            };
            if !path.is_file() {
                bail!("Config file {} does not exist", path.display());
            }
            return self.load_file(&path);
        }

        // Priority 2: ./rvt.yaml
        let local = self.cwd.join(CONFIG_FILE_NAME);
        if local.is_file() {
            return self.load_file(&local);
        }

        // Priority 3: user config
        if let Some(dir) = &self.user_config_dir {
            let user = dir.join("rvt").join("config.yaml");
            if user.is_file() {
                return self.load_file(&user);
            }
        }

        debug!("No configuration file found, using defaults");
        Ok(ScaffoldConfig::default())
    }

    fn load_file(&self, path: &Path) -> Result<ScaffoldConfig> {
        debug!("Loading config from: {}", path.display());
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file at {}", path.display()))?;

        // An empty file is a valid "all defaults" config
        let mut config: ScaffoldConfig = if contents.trim().is_empty() {
            ScaffoldConfig::default()
        } else {
            serde_yaml_ng::from_str(&contents)
                .with_context(|| format!("Failed to parse {}", path.display()))?
        };

        if let Some(dir) = config.templates_dir.take() {
            let base = path.parent().unwrap_or(self.cwd.as_path());
            config.templates_dir = Some(resolve_dir(&dir, base)?);
        }

        config
            .validate()
            .with_context(|| format!("Invalid configuration in {}", path.display()))?;

        config.source_path = Some(path.to_path_buf());
        Ok(config)
    }
}

/// Expand `~` and environment variables, then anchor relative paths at `base`.
fn resolve_dir(dir: &Path, base: &Path) -> Result<PathBuf> {
    let raw = dir.to_string_lossy();
    let expanded = shellexpand::full(&raw)
        .with_context(|| format!("Failed to expand templates_dir '{}'", raw))?;
    let expanded = PathBuf::from(expanded.as_ref());
    Ok(if expanded.is_absolute() {
        expanded
    } else {
        base.join(expanded)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rvt_templates::TemplateId;
    use tempfile::tempdir;

    fn loader(cwd: &Path) -> ConfigLoader {
        ConfigLoader::new(cwd).with_user_config_dir(None)
    }

    #[test]
    fn test_defaults_when_nothing_found() {
        let dir = tempdir().unwrap();
        let config = loader(dir.path()).load().unwrap();
        assert_eq!(config.source_path, None);
        assert_eq!(config.template, TemplateId::ReactTailwind);
    }

    #[test]
    fn test_local_file_is_used() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("rvt.yaml"),
            "template: react-tailwind-cjs\n",
        )
        .unwrap();

        let config = loader(dir.path()).load().unwrap();

        assert_eq!(config.template, TemplateId::ReactTailwindCjs);
        assert_eq!(config.source_path, Some(dir.path().join("rvt.yaml")));
    }

    #[test]
    fn test_explicit_path_wins_over_local() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("rvt.yaml"), "template: react-tailwind-cjs\n").unwrap();
        fs::write(
            dir.path().join("custom.yaml"),
            "template: react-tailwind-container\n",
        )
        .unwrap();

        let config = loader(dir.path())
            .with_explicit(Some(PathBuf::from("custom.yaml")))
            .load()
            .unwrap();

        assert_eq!(config.template, TemplateId::ReactTailwindContainer);
    }

    #[test]
    fn test_missing_explicit_path_is_an_error() {
        let dir = tempdir().unwrap();
        let err = loader(dir.path())
            .with_explicit(Some(dir.path().join("nope.yaml")))
            .load()
            .unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_user_config_dir_fallback() {
        let cwd = tempdir().unwrap();
        let home = tempdir().unwrap();
        fs::create_dir_all(home.path().join("rvt")).unwrap();
        fs::write(
            home.path().join("rvt").join("config.yaml"),
            "defaults:\n  format: false\n",
        )
        .unwrap();

        let config = ConfigLoader::new(cwd.path())
            .with_user_config_dir(Some(home.path().to_path_buf()))
            .load()
            .unwrap();

        assert!(!config.defaults.format);
    }

    #[test]
    fn test_relative_templates_dir_anchors_at_config_file() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("rvt.yaml"), "templates_dir: my-templates\n").unwrap();

        let config = loader(dir.path()).load().unwrap();

        assert_eq!(
            config.templates_dir,
            Some(dir.path().join("my-templates"))
        );
    }

    #[test]
    fn test_empty_file_is_defaults() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("rvt.yaml"), "\n").unwrap();
        let config = loader(dir.path()).load().unwrap();
        assert_eq!(config.css.packages[0], "tailwindcss@3");
    }

    #[test]
    fn test_invalid_yaml_reports_path() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("rvt.yaml"), "template: [unclosed\n").unwrap();
        let err = loader(dir.path()).load().unwrap_err();
        assert!(format!("{:#}", err).contains("rvt.yaml"));
    }
}
