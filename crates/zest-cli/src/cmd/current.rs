use crate::output::emit;
use crate::picker;
use anyhow::{bail, Context};
use serde::Serialize;
use std::path::Path;
use zest_core::{spec::SpecStore, ZestError};

#[derive(Serialize)]
struct CurrentOutput {
    ok: bool,
    current: Option<String>,
}

pub fn set(root: &Path, identifier: Option<&str>, json: bool) -> anyhow::Result<()> {
    let store = SpecStore::open(root).context("failed to open spec store")?;

    let change = match identifier {
        Some(id) => store.set_current(id)?,
        None => {
            let specs = store.list()?;
            if specs.is_empty() {
                return Err(ZestError::NoSpecs.into());
            }
            let Some(choice) = picker::select(&specs)? else {
                bail!("no spec selected");
            };
            store.set_current(&choice.id)?
        }
    };

    emit(
        &CurrentOutput {
            ok: true,
            current: change.current,
        },
        json,
    )
}

pub fn unset(root: &Path, json: bool) -> anyhow::Result<()> {
    let store = SpecStore::open(root).context("failed to open spec store")?;
    let change = store.unset_current()?;
    emit(
        &CurrentOutput {
            ok: true,
            current: change.current,
        },
        json,
    )
}
