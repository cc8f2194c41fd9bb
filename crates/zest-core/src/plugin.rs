//! Command, skill and agent templates compiled into the binary.
//!
//! Layout under `plugin/`:
//!
//! ```text
//! commands/<name>.md
//! skills/<skill>/**
//! agents/<name>.md
//! ```

use rust_embed::Embed;

#[derive(Embed)]
#[folder = "$CARGO_MANIFEST_DIR/plugin/"]
struct PluginAssets;

/// Raw bytes of a bundled file, by `/`-separated path.
pub fn read_bytes(path: &str) -> Option<Vec<u8>> {
    <PluginAssets as Embed>::get(path).map(|f| f.data.into_owned())
}

/// UTF-8 text of a bundled file.
pub fn read(path: &str) -> Option<String> {
    read_bytes(path).and_then(|b| String::from_utf8(b).ok())
}

fn all_paths() -> Vec<String> {
    let mut paths: Vec<String> = <PluginAssets as Embed>::iter()
        .map(|p| p.into_owned())
        .collect();
    paths.sort();
    paths
}

/// Markdown files directly inside `dir`, by file name, sorted.
pub fn markdown_files(dir: &str) -> Vec<String> {
    let prefix = format!("{dir}/");
    all_paths()
        .into_iter()
        .filter_map(|p| p.strip_prefix(&prefix).map(str::to_string))
        .filter(|name| !name.contains('/') && name.ends_with(".md"))
        .collect()
}

/// Names of the skill directories, sorted.
pub fn skill_names() -> Vec<String> {
    let mut names: Vec<String> = all_paths()
        .iter()
        .filter_map(|p| p.strip_prefix("skills/"))
        .filter_map(|rest| rest.split_once('/').map(|(skill, _)| skill.to_string()))
        .collect();
    names.sort();
    names.dedup();
    names
}

/// Every file of a skill, as paths relative to the skill directory, sorted.
pub fn skill_files(skill: &str) -> Vec<String> {
    let prefix = format!("skills/{skill}/");
    all_paths()
        .into_iter()
        .filter_map(|p| p.strip_prefix(&prefix).map(str::to_string))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
