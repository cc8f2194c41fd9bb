use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ZestError {
    #[error("spec {0} not found")]
    SpecNotFound(String),

    #[error("no current spec set")]
    NoCurrentSpec,

    #[error("no specs available")]
    NoSpecs,

    #[error("spec directory {0} already exists")]
    SpecExists(String),

    #[error("invalid status \"{value}\". Valid: {valid}")]
    InvalidStatus { value: String, valid: String },

    #[error("invalid current status \"{value}\" for spec {id}. Valid: {valid}")]
    InvalidCurrentStatus {
        id: String,
        value: String,
        valid: String,
    },

    #[error("status is already \"{status}\" for spec {id}")]
    AlreadyInStatus { id: String, status: String },

    #[error("invalid transition {from} -> {to}")]
    InvalidTransition { from: String, to: String },

    #[error("failed to parse frontmatter in {}: {message}", path.display())]
    MalformedFrontmatter { path: PathBuf, message: String },

    #[error("spec file {} has no valid frontmatter", .0.display())]
    NoFrontmatter(PathBuf),

    #[error("template file not found: {}", .0.display())]
    TemplateNotFound(PathBuf),

    #[error("invalid command: {name}. Must be one of: {valid}")]
    UnknownCommand { name: String, valid: String },

    #[error("command file not found: {0}")]
    CommandNotFound(String),

    #[error("bundled plugin file missing or not UTF-8: {0}")]
    AssetNotFound(String),

    #[error("{}: {source}", path.display())]
    Fs {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

impl ZestError {
    /// Wrap an I/O error with the path it occurred on.
    pub fn fs(path: &Path) -> impl FnOnce(std::io::Error) -> ZestError + '_ {
        move |source| ZestError::Fs {
            path: path.to_path_buf(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ZestError>;
