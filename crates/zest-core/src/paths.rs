use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Directory constants
// ---------------------------------------------------------------------------

pub const ZEST_DIR: &str = ".zest-dev";
pub const CONFIG_FILE: &str = ".zest-dev/config.yaml";
pub const TEMPLATE_FILE: &str = ".zest-dev/template/spec.md";

pub const SPECS_DIR: &str = "specs";
pub const CURRENT_LINK: &str = "current";

pub const SPEC_FILE: &str = "spec.md";
pub const LEGACY_SPEC_FILE: &str = "README.md";

pub const CURSOR_DIR: &str = ".cursor";
pub const OPENCODE_DIR: &str = ".opencode";

pub const COMMANDS_DIR: &str = "commands";
pub const SKILLS_DIR: &str = "skills";
pub const AGENTS_DIR: &str = "agents";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

pub fn default_template_path(root: &Path) -> PathBuf {
    root.join(TEMPLATE_FILE)
}

/// Store-relative spec directory, e.g. `specs/20260224-init-project`.
pub fn spec_dir(specs_dir: &Path, id: &str) -> PathBuf {
    specs_dir.join(id)
}

pub fn current_link(specs_dir: &Path) -> PathBuf {
    specs_dir.join(CURRENT_LINK)
}

/// Resolve the content file of a spec directory.
///
/// `spec.md` wins, `README.md` is accepted for older specs, and `spec.md`
/// is the target when neither exists yet.
pub fn spec_file(spec_dir: &Path) -> PathBuf {
    let primary = spec_dir.join(SPEC_FILE);
    if primary.exists() {
        return primary;
    }
    let legacy = spec_dir.join(LEGACY_SPEC_FILE);
    if legacy.exists() {
        return legacy;
    }
    primary
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
