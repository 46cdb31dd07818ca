//! filepick - Random file retrieval from a flat directory
//!
//! A small library that indexes the regular files of a single directory at
//! construction and serves random or extension-filtered reads from that
//! snapshot, with a thin CLI binary as glue.

pub mod cli;
pub mod index;
pub mod logging;

use std::io::Write;

use anyhow::Context;

use cli::Cli;
use index::{FileIndex, IndexError};

/// Run one CLI operation against a freshly built index.
///
/// Prints to stdout: the indexed names in `--list` mode, otherwise the
/// raw content of the chosen file (its name and path go to the info log).
///
/// # Errors
///
/// Propagates [`IndexError`] from construction and reads; map the result
/// through [`exit_code_for`] at the process boundary.
pub fn run_app(cli: &Cli) -> anyhow::Result<()> {
    let index = FileIndex::new(&cli.dir)
        .with_context(|| format!("failed to index {}", cli.dir.display()))?;

    if cli.list {
        let mut stdout = std::io::stdout().lock();
        for name in index.files() {
            writeln!(stdout, "{name}")?;
        }
        return Ok(());
    }

    let record = match (&cli.name, &cli.ext) {
        (Some(name), _) => index.read(name)?,
        (None, Some(ext)) => index.read_random_with_ext(ext)?,
        (None, None) => index.read_random()?,
    };

    log::info!(
        "{} ({}, {} bytes)",
        record.name,
        record.path.display(),
        record.content.len()
    );
    std::io::stdout().lock().write_all(&record.content)?;
    Ok(())
}

/// Exit code for a failed run.
///
/// An extension with no matching files is an expected outcome and gets
/// its own code (2) so scripts can tell it from real errors (1).
#[must_use]
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    if err
        .downcast_ref::<IndexError>()
        .is_some_and(|e| matches!(e, IndexError::NoFilesWithExtension(_)))
    {
        2
    } else {
        1
    }
}
