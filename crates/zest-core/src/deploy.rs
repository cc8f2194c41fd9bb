//! Deploy the bundled plugin into editor plugin directories.
//!
//! Every target gets the same content: command files reduced to their
//! `description`, agent files reduced to `name`/`description`/`model`, and
//! skill directories copied verbatim. Re-running with unchanged sources
//! rewrites nothing.

use crate::error::{Result, ZestError};
use crate::frontmatter;
use crate::io;
use crate::paths;
use crate::plugin;
use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};
use std::path::{Path, PathBuf};

/// Prefix of deployed command files, e.g. `zest-dev-new.md`.
pub const COMMAND_PREFIX: &str = "zest-dev-";

const COMMAND_KEYS: &[&str] = &["description"];
const AGENT_KEYS: &[&str] = &["name", "description", "model"];

// ---------------------------------------------------------------------------
// Target
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    Cursor,
    Opencode,
}

impl Target {
    pub fn all() -> &'static [Target] {
        &[Target::Cursor, Target::Opencode]
    }

    pub fn dir_name(self) -> &'static str {
        match self {
            Target::Cursor => paths::CURSOR_DIR,
            Target::Opencode => paths::OPENCODE_DIR,
        }
    }

    pub fn dir(self, root: &Path) -> PathBuf {
        root.join(self.dir_name())
    }
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TargetReport {
    pub commands: Vec<String>,
    pub skills: Vec<String>,
    pub agents: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeployReport {
    pub cursor: TargetReport,
    pub opencode: TargetReport,
}

impl DeployReport {
    fn target_mut(&mut self, target: Target) -> &mut TargetReport {
        match target {
            Target::Cursor => &mut self.cursor,
            Target::Opencode => &mut self.opencode,
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Keep only `keys`, in that order, dropping null and empty values.
fn filter_metadata(metadata: &Mapping, keys: &[&str]) -> Mapping {
    let mut kept = Mapping::new();
    for &key in keys {
        match metadata.get(key) {
            None | Some(Value::Null) => {}
            Some(Value::String(s)) if s.is_empty() => {}
            Some(v) => {
                kept.insert(Value::String(key.to_string()), v.clone());
            }
        }
    }
    kept
}

/// Load a bundled markdown file and rebuild it with filtered metadata and a trimmed body.
fn transform(asset_path: &str, keys: &[&str]) -> Result<String> {
    let content =
        plugin::read(asset_path).ok_or_else(|| ZestError::AssetNotFound(asset_path.to_string()))?;
    let doc = frontmatter::parse(&content, Path::new(asset_path))?;
    frontmatter::serialize(&filter_metadata(&doc.metadata, keys), doc.body.trim())
}

fn write_all_targets(root: &Path, subdir: &str, filename: &str, data: &[u8]) -> Result<()> {
    for &target in Target::all() {
        let path = target.dir(root).join(subdir).join(filename);
        if io::write_if_changed(&path, data)? {
            tracing::debug!(path = %path.display(), "deployed");
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Deploy
// ---------------------------------------------------------------------------

fn deploy_commands(root: &Path) -> Result<Vec<String>> {
    let mut deployed = Vec::new();
    for name in plugin::markdown_files(paths::COMMANDS_DIR) {
        let rendered = transform(&format!("{}/{name}", paths::COMMANDS_DIR), COMMAND_KEYS)?;
        let filename = format!("{COMMAND_PREFIX}{name}");
        write_all_targets(root, paths::COMMANDS_DIR, &filename, rendered.as_bytes())?;
        deployed.push(filename);
    }
    Ok(deployed)
}

fn deploy_skills(root: &Path) -> Result<Vec<String>> {
    let mut deployed = Vec::new();
    for skill in plugin::skill_names() {
        for file in plugin::skill_files(&skill) {
            let asset = format!("{}/{skill}/{file}", paths::SKILLS_DIR);
            let data = plugin::read_bytes(&asset)
                .ok_or_else(|| ZestError::AssetNotFound(asset.clone()))?;
            let relative = Path::new(&skill).join(&file);
            write_all_targets(
                root,
                paths::SKILLS_DIR,
                &relative.to_string_lossy(),
                &data,
            )?;
        }
        deployed.push(format!("{skill}/"));
    }
    Ok(deployed)
}

fn deploy_agents(root: &Path) -> Result<Vec<String>> {
    let mut deployed = Vec::new();
    for name in plugin::markdown_files(paths::AGENTS_DIR) {
        let rendered = transform(&format!("{}/{name}", paths::AGENTS_DIR), AGENT_KEYS)?;
        write_all_targets(root, paths::AGENTS_DIR, &name, rendered.as_bytes())?;
        deployed.push(name);
    }
    Ok(deployed)
}

/// Deploy commands, skills and agents into `.cursor/` and `.opencode/` under `root`.
pub fn deploy(root: &Path) -> Result<DeployReport> {
    for &target in Target::all() {
        for sub in [paths::COMMANDS_DIR, paths::SKILLS_DIR, paths::AGENTS_DIR] {
            io::ensure_dir(&target.dir(root).join(sub))?;
        }
    }

    let commands = deploy_commands(root)?;
    let skills = deploy_skills(root)?;
    let agents = deploy_agents(root)?;

    let mut report = DeployReport::default();
    for &target in Target::all() {
        *report.target_mut(target) = TargetReport {
            commands: commands.clone(),
            skills: skills.clone(),
            agents: agents.clone(),
        };
    }
    tracing::info!(
        commands = commands.len(),
        skills = skills.len(),
        agents = agents.len(),
        "deployed plugin"
    );
    Ok(report)
}

/// True if either target already holds deployed `zest-dev-*.md` command files.
pub fn has_deployed_commands(root: &Path) -> bool {
    Target::all().iter().any(|target| {
        let dir = target.dir(root).join(paths::COMMANDS_DIR);
        let Ok(entries) = std::fs::read_dir(&dir) else {
            return false;
        };
        entries.flatten().any(|entry| {
            let name = entry.file_name().to_string_lossy().into_owned();
            name.starts_with(COMMAND_PREFIX) && name.ends_with(".md")
        })
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
