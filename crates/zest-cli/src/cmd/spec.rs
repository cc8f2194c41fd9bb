use crate::output::emit;
use anyhow::Context;
use serde::Serialize;
use std::path::Path;
use zest_core::spec::{Spec, SpecStore, StatusChange};
use zest_core::types::SpecStatus;

#[derive(Serialize)]
struct CreateOutput {
    ok: bool,
    spec: Spec,
}

#[derive(Serialize)]
struct UpdatedSpec {
    id: String,
    status: SpecStatus,
}

#[derive(Serialize)]
struct UpdateOutput {
    ok: bool,
    spec: UpdatedSpec,
    status: StatusChange,
}

fn open(root: &Path) -> anyhow::Result<SpecStore> {
    SpecStore::open(root).context("failed to open spec store")
}

pub fn show(root: &Path, identifier: &str, json: bool) -> anyhow::Result<()> {
    let spec = open(root)?.get(identifier)?;
    emit(&spec, json)
}

pub fn list(root: &Path, json: bool) -> anyhow::Result<()> {
    let specs = open(root)?.list()?;
    emit(&specs, json)
}

pub fn create(root: &Path, slug: &str, json: bool) -> anyhow::Result<()> {
    let spec = open(root)?.create(slug)?;
    emit(&CreateOutput { ok: true, spec }, json)
}

pub fn update(root: &Path, identifier: &str, status: &str, json: bool) -> anyhow::Result<()> {
    let change = open(root)?.update_status(identifier, status)?;
    let output = UpdateOutput {
        ok: true,
        spec: UpdatedSpec {
            id: change.id.clone(),
            status: change.to,
        },
        status: change,
    };
    emit(&output, json)
}
