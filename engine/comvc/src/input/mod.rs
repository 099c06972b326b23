//! Data file and script ingestion.
//!
//! Data files are comma-separated text. The first line is a header and is
//! discarded; the shape of the table is inferred from the rows.
//!
//! ```text
//! name,amount      <- header, dropped
//! A,10             <- row 0
//! B,20             <- row 1
//! ```

use std::fs;
use std::path::Path;

use comv_table::Table;

use crate::Problem;

/// A data row whose cell count differs from the first row's.
///
/// Short rows are not padded: an empty cell would be sealed as a hash and
/// counted by every aggregate over its column.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("line {line} has {found} cells, the first row has {expected}")]
pub struct RaggedRow {
    /// 1-based line in the file, header included.
    pub line: usize,
    pub found: usize,
    pub expected: usize,
}

/// Parse comma-separated text into a raw table.
///
/// Trailing `\r` is removed and blank lines are skipped. Every row must
/// have as many cells as the first one.
pub fn parse_table(text: &str) -> Result<Table<String>, RaggedRow> {
    let mut table = Table::new();
    let mut width = None;
    let rows = text
        .lines()
        .enumerate()
        .skip(1)
        .map(|(index, line)| (index + 1, line.strip_suffix('\r').unwrap_or(line)))
        .filter(|(_, line)| !line.trim().is_empty());
    for (row, (line, text)) in rows.enumerate() {
        let cells: Vec<&str> = text.split(',').collect();
        let expected = *width.get_or_insert(cells.len());
        if cells.len() != expected {
            return Err(RaggedRow {
                line,
                found: cells.len(),
                expected,
            });
        }
        for (col, cell) in cells.into_iter().enumerate() {
            table.push(row, col, cell.to_owned());
        }
    }
    Ok(table)
}

/// Read and parse one data file.
pub fn read_table(path: &Path) -> Result<Table<String>, Problem> {
    let text = fs::read_to_string(path).map_err(|error| Problem::Read {
        path: path.to_path_buf(),
        error,
    })?;
    let table = parse_table(&text).map_err(|error| Problem::Ragged {
        path: path.to_path_buf(),
        error,
    })?;
    tracing::debug!(
        path = %path.display(),
        rows = table.rows(),
        cols = table.cols(),
        "read data file"
    );
    Ok(table)
}

/// Read a script's raw bytes. The header check happens in the tokenizer.
pub fn read_script(path: &Path) -> Result<Vec<u8>, Problem> {
    fs::read(path).map_err(|error| Problem::Read {
        path: path.to_path_buf(),
        error,
    })
}
