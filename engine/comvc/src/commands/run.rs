//! The `run` command: the full pipeline.
//!
//! ```text
//! script ─► tokenize ─► parse ─┐
//! data files ─► parse_table ───┴─► classify_all ─► evaluate ─► open
//! ```
//!
//! The script is checked before any data file is read, so a bad script
//! never seals anything.

use std::fmt::Write;
use std::path::{Path, PathBuf};

use comv_eval::{classify_all, evaluate, EvalError, RecordError};
use comv_seal::{SealError, SealScheme};

use super::parse_file;
use crate::input::read_table;
use crate::{Problem, RunConfig};

/// Run `script` over `data` and return the opened results, one group per
/// statement.
#[tracing::instrument(level = "debug", skip_all, fields(files = data.len()))]
pub fn run_files(
    data: &[PathBuf],
    script: &Path,
    config: &RunConfig,
) -> Result<Vec<Vec<u64>>, Problem> {
    let parsed = parse_file(script)?;
    if data.is_empty() {
        return Err(EvalError::NoRecords.into());
    }

    let tables = data
        .iter()
        .map(|path| read_table(path))
        .collect::<Result<Vec<_>, _>>()?;

    let scheme = config.scheme()?;
    let records = classify_all(parsed.layout(), &tables, &scheme, config.parallel).map_err(
        |RecordError { file, error }| Problem::Classify {
            path: data[file].clone(),
            error,
        },
    )?;

    let groups = evaluate(&scheme, &parsed, &records).map_err(|error| {
        match error.file().and_then(|file| data.get(file)) {
            Some(path) => Problem::Data {
                path: path.clone(),
                error,
            },
            None => Problem::Eval(error),
        }
    })?;
    let opened = groups
        .iter()
        .map(|group| {
            group
                .iter()
                .map(|sealed| scheme.open(sealed))
                .collect::<Result<Vec<u64>, SealError>>()
        })
        .collect::<Result<Vec<_>, _>>()?;
    tracing::debug!(statements = opened.len(), "opened results");
    Ok(opened)
}

/// Format results the way `comv run` prints them.
///
/// ```text
/// Current operation results:
///     Result = 40
/// ```
pub fn render_results(groups: &[Vec<u64>]) -> String {
    let mut out = String::new();
    for group in groups {
        out.push_str("Current operation results:\n");
        for value in group {
            let _ = writeln!(out, "\tResult = {value}");
        }
    }
    out
}
