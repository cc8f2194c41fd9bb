//! Interactive spec selection for `set-current` without an argument.
//!
//! Every entry carries its position in the list; the choice is recovered
//! from that index, never by re-parsing the displayed columns.

use anyhow::Context;
use std::io::{BufRead, Write};
use std::process::{Command, Stdio};
use zest_core::spec::Spec;

fn label(spec: &Spec) -> String {
    let mark = if spec.current { '*' } else { ' ' };
    format!("{mark} {}  [{}]  {}", spec.id, spec.status, spec.name)
}

/// fzf input: a hidden index column, a tab, then the visible label.
fn fzf_lines(specs: &[Spec]) -> String {
    specs
        .iter()
        .enumerate()
        .map(|(i, spec)| format!("{i}\t{}\n", label(spec)))
        .collect()
}

/// Index from an fzf output line, if it names an entry.
fn parse_fzf_choice(output: &str, len: usize) -> Option<usize> {
    let (index, _) = output.trim_end_matches(['\r', '\n']).split_once('\t')?;
    let index: usize = index.parse().ok()?;
    (index < len).then_some(index)
}

/// Zero-based index from a 1-based number typed by the user.
fn parse_number(answer: &str, len: usize) -> Option<usize> {
    let n: usize = answer.trim().parse().ok()?;
    (1..=len).contains(&n).then(|| n - 1)
}

fn pick_with_fzf(fzf: &std::path::Path, specs: &[Spec]) -> anyhow::Result<Option<usize>> {
    let mut child = Command::new(fzf)
        .args([
            "--delimiter=\t",
            "--with-nth=2..",
            "--height=40%",
            "--reverse",
            "--prompt=Select spec: ",
        ])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit())
        .spawn()
        .context("failed to start fzf")?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(fzf_lines(specs).as_bytes())
            .context("failed to write to fzf")?;
    }

    let output = child.wait_with_output().context("failed to wait for fzf")?;
    if !output.status.success() {
        return Ok(None);
    }
    Ok(parse_fzf_choice(&String::from_utf8_lossy(&output.stdout), specs.len()))
}

fn pick_with_prompt(specs: &[Spec]) -> anyhow::Result<Option<usize>> {
    let mut stderr = std::io::stderr().lock();
    writeln!(stderr, "Select a spec:")?;
    for (i, spec) in specs.iter().enumerate() {
        writeln!(stderr, "  {}. {}", i + 1, label(spec))?;
    }
    write!(stderr, "Enter number: ")?;
    stderr.flush()?;

    let mut answer = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut answer)
        .context("failed to read selection")?;
    Ok(parse_number(&answer, specs.len()))
}

/// Ask the user to choose a spec. `None` means the selection was cancelled.
pub fn select(specs: &[Spec]) -> anyhow::Result<Option<&Spec>> {
    let index = match which::which("fzf") {
        Ok(fzf) => {
            tracing::debug!(fzf = %fzf.display(), "picking with fzf");
            pick_with_fzf(&fzf, specs)?
        }
        Err(_) => pick_with_prompt(specs)?,
    };
    Ok(index.and_then(|i| specs.get(i)))
}
