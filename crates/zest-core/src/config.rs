use crate::error::{Result, ZestError};
use crate::paths;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

/// Project settings from `.zest-dev/config.yaml`. Every key is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Store directory, relative to the project root.
    #[serde(default = "default_specs_dir")]
    pub specs_dir: PathBuf,

    /// Spec template override, relative to the project root. When unset the
    /// conventional `.zest-dev/template/spec.md` is used if it exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<PathBuf>,
}

fn default_specs_dir() -> PathBuf {
    PathBuf::from(paths::SPECS_DIR)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            specs_dir: default_specs_dir(),
            template: None,
        }
    }
}

impl Config {
    /// Load the project config, falling back to defaults when the file is absent.
    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::config_path(root);
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(&path).map_err(ZestError::fs(&path))?;
        if data.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Config = serde_yaml::from_str(&data)?;
        Ok(config)
    }

    /// Template file to read for new specs, if any. A configured path must
    /// exist; the conventional path is only used when present.
    pub fn template_path(&self, root: &Path) -> Result<Option<PathBuf>> {
        match &self.template {
            Some(p) => {
                let path = root.join(p);
                if path.is_file() {
                    Ok(Some(path))
                } else {
                    Err(ZestError::TemplateNotFound(path))
                }
            }
            None => {
                let path = paths::default_template_path(root);
                Ok(path.is_file().then_some(path))
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_config_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let cfg = Config::load(dir.path()).unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.specs_dir, PathBuf::from("specs"));
    }

    #[test]
    fn full_config_loads() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join(".zest-dev")).unwrap();
        std::fs::write(
            dir.path().join(".zest-dev/config.yaml"),
            "specs_dir: docs/specs\ntemplate: templates/spec.md\n",
        )
        .unwrap();
        let cfg = Config::load(dir.path()).unwrap();
        assert_eq!(cfg.specs_dir, PathBuf::from("docs/specs"));
        assert_eq!(cfg.template, Some(PathBuf::from("templates/spec.md")));
    }

    #[test]
    fn partial_config_fills_defaults() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join(".zest-dev")).unwrap();
        std::fs::write(
            dir.path().join(".zest-dev/config.yaml"),
            "template: t.md\n",
        )
        .unwrap();
        let cfg = Config::load(dir.path()).unwrap();
        assert_eq!(cfg.specs_dir, PathBuf::from("specs"));
        assert_eq!(cfg.template, Some(PathBuf::from("t.md")));
    }

    #[test]
    fn malformed_config_is_an_error() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join(".zest-dev")).unwrap();
        std::fs::write(dir.path().join(".zest-dev/config.yaml"), "specs_dir: [").unwrap();
        assert!(Config::load(dir.path()).is_err());
    }

    #[test]
    fn template_path_resolution() {
        let dir = TempDir::new().unwrap();
        let cfg = Config::default();
        assert_eq!(cfg.template_path(dir.path()).unwrap(), None);

        std::fs::create_dir_all(dir.path().join(".zest-dev/template")).unwrap();
        std::fs::write(dir.path().join(".zest-dev/template/spec.md"), "x").unwrap();
        assert_eq!(
            cfg.template_path(dir.path()).unwrap(),
            Some(dir.path().join(".zest-dev/template/spec.md"))
        );

        let explicit = Config {
            template: Some(PathBuf::from("missing.md")),
            ..Config::default()
        };
        assert!(matches!(
            explicit.template_path(dir.path()),
            Err(ZestError::TemplateNotFound(_))
        ));
    }
}
