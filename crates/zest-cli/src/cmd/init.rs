use crate::output::emit;
use anyhow::Context;
use serde::Serialize;
use std::path::Path;
use zest_core::deploy::{self, DeployReport};

#[derive(Serialize)]
struct InitOutput {
    ok: bool,
    #[serde(flatten)]
    report: DeployReport,
}

pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    let report = deploy::deploy(root)
        .with_context(|| format!("failed to deploy plugin into {}", root.display()))?;
    emit(&InitOutput { ok: true, report }, json)
}
