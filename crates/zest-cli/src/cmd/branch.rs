use crate::output::emit;
use anyhow::Context;
use serde::Serialize;
use std::path::Path;
use std::process::Command;
use zest_core::spec::SpecStore;

#[derive(Serialize)]
struct BranchOutput {
    ok: bool,
    branch: String,
}

/// `git checkout -b <slug>` for the current spec. git's own output goes
/// straight to the terminal; a failing git exits with git's status.
pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    let store = SpecStore::open(root).context("failed to open spec store")?;
    let branch = store.branch_for_current()?;

    let status = Command::new("git")
        .args(["checkout", "-b", &branch])
        .current_dir(root)
        .status()
        .context("failed to execute 'git'")?;

    if !status.success() {
        std::process::exit(status.code().unwrap_or(1));
    }

    emit(&BranchOutput { ok: true, branch }, json)
}
