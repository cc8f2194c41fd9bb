use crate::output::emit;
use anyhow::Context;
use serde::Serialize;
use std::path::Path;
use zest_core::{deploy, spec::SpecStore, spec::StoreStatus};

const REDEPLOY_HINT: &str = "Run `zest-dev init` to update deployed command markdown files.";

#[derive(Serialize)]
struct StatusOutput {
    #[serde(flatten)]
    status: StoreStatus,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    agent_hints: Vec<&'static str>,
}

pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    let store = SpecStore::open(root).context("failed to open spec store")?;
    let status = store.status()?;

    let mut agent_hints = Vec::new();
    if deploy::has_deployed_commands(root) {
        agent_hints.push(REDEPLOY_HINT);
    }

    emit(
        &StatusOutput {
            status,
            agent_hints,
        },
        json,
    )
}
