//! The spec store: `specs/<YYYYMMDD-slug>/spec.md` directories plus a
//! `specs/current` symlink naming at most one of them.
//!
//! Nothing is cached. Every operation lists the directory afresh, so the
//! current pointer is a lookup by id and may legally dangle.

use crate::config::Config;
use crate::error::{Result, ZestError};
use crate::frontmatter;
use crate::io;
use crate::naming;
use crate::paths;
use crate::types::SpecStatus;
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Identifier accepted by `get` and `update_status` for the current spec.
pub const CURRENT: &str = "current";

/// Packaged spec template. `{id}`, `{name}` and `{date}` are replaced
/// everywhere in the text.
pub const DEFAULT_TEMPLATE: &str = r#"---
id: {id}
name: {name}
status: new
created: {date}
---

# {name}

## Overview

<!-- What is being built and why. -->

## Research

<!-- Findings about the existing code, constraints, prior art. -->

## Design

<!-- Chosen approach, interfaces, data flow, trade-offs. -->

## Implementation

<!-- Task list and progress notes. -->

## Notes
"#;

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// A spec as seen on disk. `path` is relative to the project root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spec {
    pub id: String,
    pub name: String,
    pub path: PathBuf,
    pub current: bool,
    pub status: String,
}

/// The target of the current pointer. Only `id` is set when the pointer dangles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentSpec {
    pub id: String,
    pub name: Option<String>,
    pub path: Option<PathBuf>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreStatus {
    #[serde(rename = "specs_count")]
    pub count: usize,
    pub current: Option<CurrentSpec>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentChange {
    pub current: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusChange {
    #[serde(skip)]
    pub id: String,
    pub from: SpecStatus,
    pub to: SpecStatus,
    pub changed: bool,
}

// ---------------------------------------------------------------------------
// SpecStore
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct SpecStore {
    root: PathBuf,
    specs_dir: PathBuf,
    config: Config,
}

impl SpecStore {
    /// Open the store under `root`, reading `.zest-dev/config.yaml` if present.
    pub fn open(root: &Path) -> Result<Self> {
        let config = Config::load(root)?;
        Ok(Self::with_config(root, config))
    }

    pub fn with_config(root: impl Into<PathBuf>, config: Config) -> Self {
        let root = root.into();
        let specs_dir = root.join(&config.specs_dir);
        Self {
            root,
            specs_dir,
            config,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn specs_dir(&self) -> &Path {
        &self.specs_dir
    }

    fn relative(&self, path: &Path) -> PathBuf {
        path.strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.to_path_buf())
    }

    // ---------------------------------------------------------------------------
    // Reads
    // ---------------------------------------------------------------------------

    /// Ids of every date-prefixed subdirectory, ascending. Empty if the store is missing.
    pub fn list_ids(&self) -> Result<Vec<String>> {
        if !self.specs_dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut ids = Vec::new();
        let entries = std::fs::read_dir(&self.specs_dir).map_err(ZestError::fs(&self.specs_dir))?;
        for entry in entries {
            let entry = entry.map_err(ZestError::fs(&self.specs_dir))?;
            let file_type = entry.file_type().map_err(ZestError::fs(&entry.path()))?;
            if !file_type.is_dir() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            if naming::is_spec_id(&name) {
                ids.push(name);
            }
        }
        ids.sort();
        Ok(ids)
    }

    /// Final path segment of the current symlink's target, whether or not
    /// that spec still exists. `None` if the link is absent or unreadable.
    pub fn current_id(&self) -> Option<String> {
        let target = std::fs::read_link(paths::current_link(&self.specs_dir)).ok()?;
        target
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
    }

    /// Status recorded in a content file, `new` when the file or field is absent.
    fn status_at(&self, file: &Path) -> Result<String> {
        if !file.exists() {
            return Ok(SpecStatus::New.to_string());
        }
        let content = io::read_text(file)?;
        let doc = frontmatter::parse(&content, &self.relative(file))?;
        Ok(doc
            .get_str("status")
            .unwrap_or_else(|| SpecStatus::New.to_string()))
    }

    fn record(&self, id: &str, current: Option<&str>) -> Result<Spec> {
        let file = paths::spec_file(&paths::spec_dir(&self.specs_dir, id));
        Ok(Spec {
            id: id.to_string(),
            name: naming::display_name(id),
            path: self.relative(&file),
            current: current == Some(id),
            status: self.status_at(&file)?,
        })
    }

    /// Spec count plus the current pointer, resolved against the live listing.
    pub fn status(&self) -> Result<StoreStatus> {
        let ids = self.list_ids()?;
        let current = match self.current_id() {
            None => None,
            Some(id) if ids.contains(&id) => {
                let spec = self.record(&id, Some(&id))?;
                Some(CurrentSpec {
                    id,
                    name: Some(spec.name),
                    path: Some(spec.path),
                    status: Some(spec.status),
                })
            }
            Some(id) => Some(CurrentSpec {
                id,
                name: None,
                path: None,
                status: None,
            }),
        };

        Ok(StoreStatus {
            count: ids.len(),
            current,
        })
    }

    /// Resolve `current` or a literal id to an existing spec id.
    fn resolve(&self, identifier: &str) -> Result<String> {
        let id = if identifier == CURRENT {
            self.current_id().ok_or(ZestError::NoCurrentSpec)?
        } else {
            identifier.to_string()
        };
        if !self.list_ids()?.contains(&id) {
            return Err(ZestError::SpecNotFound(id));
        }
        Ok(id)
    }

    pub fn get(&self, identifier: &str) -> Result<Spec> {
        let id = self.resolve(identifier)?;
        let current = self.current_id();
        self.record(&id, current.as_deref())
    }

    pub fn list(&self) -> Result<Vec<Spec>> {
        let current = self.current_id();
        self.list_ids()?
            .iter()
            .map(|id| self.record(id, current.as_deref()))
            .collect()
    }

    // ---------------------------------------------------------------------------
    // Creation
    // ---------------------------------------------------------------------------

    fn load_template(&self) -> Result<String> {
        match self.config.template_path(&self.root)? {
            Some(path) => io::read_text(&path),
            None => Ok(DEFAULT_TEMPLATE.to_string()),
        }
    }

    /// Create a spec dated today (UTC).
    pub fn create(&self, slug: &str) -> Result<Spec> {
        self.create_on(slug, Utc::now().date_naive())
    }

    pub fn create_on(&self, slug: &str, date: NaiveDate) -> Result<Spec> {
        let id = naming::make_id(date, slug);
        let dir = paths::spec_dir(&self.specs_dir, &id);
        if dir.exists() {
            return Err(ZestError::SpecExists(id));
        }

        // Read the template first so a bad override leaves no empty directory.
        let template = self.load_template()?;

        io::ensure_dir(&self.specs_dir)?;
        std::fs::create_dir(&dir).map_err(|e| match e.kind() {
            std::io::ErrorKind::AlreadyExists => ZestError::SpecExists(id.clone()),
            _ => ZestError::Fs {
                path: dir.clone(),
                source: e,
            },
        })?;

        let name = naming::display_name(&id);
        let content = template
            .replace("{id}", &id)
            .replace("{name}", &name)
            .replace("{date}", &naming::iso_date(date));

        let file = dir.join(paths::SPEC_FILE);
        io::atomic_write(&file, content.as_bytes())?;
        tracing::info!(spec = %id, "created spec");

        Ok(Spec {
            id,
            name,
            path: self.relative(&file),
            current: false,
            status: SpecStatus::New.to_string(),
        })
    }

    // ---------------------------------------------------------------------------
    // Current pointer
    // ---------------------------------------------------------------------------

    /// Point `current` at a spec. Accepts a bare id or a path ending in one,
    /// e.g. `specs/20260224-foo/`.
    pub fn set_current(&self, identifier: &str) -> Result<CurrentChange> {
        let trimmed = identifier.trim_end_matches(['/', '\\']);
        let id = trimmed.rsplit(['/', '\\']).next().unwrap_or(trimmed);

        if !self.list_ids()?.iter().any(|s| s == id) {
            return Err(ZestError::SpecNotFound(id.to_string()));
        }

        let link = paths::current_link(&self.specs_dir);
        remove_link(&link)?;
        make_link(Path::new(id), &link).map_err(ZestError::fs(&link))?;
        tracing::info!(spec = %id, "set current spec");

        Ok(CurrentChange {
            current: Some(id.to_string()),
        })
    }

    pub fn unset_current(&self) -> Result<CurrentChange> {
        remove_link(&paths::current_link(&self.specs_dir))?;
        tracing::debug!("unset current spec");
        Ok(CurrentChange { current: None })
    }

    /// Slug of the current spec, used as a git branch name.
    pub fn branch_for_current(&self) -> Result<String> {
        let id = self.resolve(CURRENT)?;
        Ok(naming::slug_of(&id).to_string())
    }

    // ---------------------------------------------------------------------------
    // Status transitions
    // ---------------------------------------------------------------------------

    /// Move a spec forward in its lifecycle. Skipping statuses is allowed;
    /// staying put or moving backward is not. Only the `status` key of the
    /// metadata block is rewritten, and only after every check passes.
    pub fn update_status(&self, identifier: &str, next: &str) -> Result<StatusChange> {
        let next = SpecStatus::from_str(next)?;
        let spec = self.get(identifier)?;
        let file = self.root.join(&spec.path);

        let content = io::read_text(&file)?;
        let block =
            frontmatter::split(&content).ok_or_else(|| ZestError::NoFrontmatter(spec.path.clone()))?;
        let mut metadata = frontmatter::parse_mapping(block.yaml, &spec.path)?;

        let stored = metadata.get("status").and_then(frontmatter::scalar_to_string);
        let from = stored
            .as_deref()
            .and_then(SpecStatus::parse)
            .ok_or_else(|| ZestError::InvalidCurrentStatus {
                id: spec.id.clone(),
                value: stored.clone().unwrap_or_else(|| "undefined".to_string()),
                valid: SpecStatus::valid_list(),
            })?;

        if from == next {
            return Err(ZestError::AlreadyInStatus {
                id: spec.id,
                status: next.to_string(),
            });
        }
        if next < from {
            return Err(ZestError::InvalidTransition {
                from: from.to_string(),
                to: next.to_string(),
            });
        }

        metadata.insert(
            Value::String("status".to_string()),
            Value::String(next.to_string()),
        );
        let updated = frontmatter::render_with_tail(&metadata, block.tail)?;
        io::atomic_write(&file, updated.as_bytes())?;
        tracing::info!(spec = %spec.id, %from, to = %next, "updated spec status");

        Ok(StatusChange {
            id: spec.id,
            from,
            to: next,
            changed: true,
        })
    }
}

// ---------------------------------------------------------------------------
// Symlink helpers
// ---------------------------------------------------------------------------

#[cfg(unix)]
fn make_link(target: &Path, link: &Path) -> std::io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn make_link(target: &Path, link: &Path) -> std::io::Result<()> {
    std::os::windows::fs::symlink_dir(target, link)
}

/// Remove the pointer if present, including a dangling one.
fn remove_link(link: &Path) -> Result<()> {
    match std::fs::symlink_metadata(link) {
        Ok(_) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(ZestError::fs(link)(e)),
    }
    let removed = std::fs::remove_file(link);
    #[cfg(windows)]
    let removed = removed.or_else(|_| std::fs::remove_dir(link));
    removed.map_err(ZestError::fs(link))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
