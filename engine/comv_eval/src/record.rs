//! Column classification: one raw table in, one [`Record`] out.
//!
//! ```text
//! raw row     A   10   x   B        layout: public = {0, 3}
//!             │    │   │   │
//! public      A ───┼───┼── B        slots 0, 1 (clear)
//! protected       10   x            slots 0, 1 (sealed)
//! ```
//!
//! Every record of a run is built against the same [`ColumnLayout`], so the
//! k-th public or protected slot means the same original column in all of
//! them.

use std::hash::{Hash, Hasher};

use comv_ir::{ColumnLayout, PublicValue};
use comv_seal::{SealError, SealScheme};
use comv_table::Table;
use rayon::prelude::*;
use rustc_hash::FxHasher;

use crate::{ClassifyError, RecordError};

/// One party's table split into its public and protected halves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record<C> {
    pub public: Table<PublicValue>,
    pub protected: Table<C>,
}

impl<C> Record<C> {
    /// Number of rows (both halves agree).
    pub fn rows(&self) -> usize {
        self.public.rows()
    }

    /// Number of columns of the data file the record was built from.
    pub fn width(&self) -> usize {
        self.public.cols() + self.protected.cols()
    }
}

/// Split `raw` per `layout`, sealing every protected cell.
#[tracing::instrument(level = "debug", skip_all, fields(rows = raw.rows(), cols = raw.cols()))]
pub fn classify<S: SealScheme>(
    layout: &ColumnLayout,
    raw: &Table<String>,
    scheme: &S,
) -> Result<Record<S::Ciphertext>, ClassifyError> {
    if raw.rows() > 0 {
        if let Some(column) = layout.max_public() {
            if column >= raw.cols() {
                return Err(ClassifyError::MissingColumn {
                    column: column + 1,
                    width: raw.cols(),
                });
            }
        }
    }

    let public_columns = layout.public_columns();
    // Shape both halves up front so a record with no protected (or no
    // public) columns still reports the right row count.
    let mut public = Table::with_shape(raw.rows(), public_columns.len());
    let mut protected =
        Table::with_shape(raw.rows(), raw.cols().saturating_sub(public_columns.len()));

    for (row, cells) in raw.iter_rows().enumerate() {
        // Cursor into `public_columns`, reset per row.
        let mut next_public = 0;
        let mut protected_slot = 0;
        for (col, text) in cells.iter().enumerate() {
            if public_columns.get(next_public) == Some(&col) {
                public.push(row, next_public, PublicValue::new(text.as_str()));
                next_public += 1;
            } else {
                let value = encode_cell(text, row, col, scheme.plain_modulus())?;
                protected.push(row, protected_slot, scheme.seal(value)?);
                protected_slot += 1;
            }
        }
    }

    tracing::debug!(
        public = public.cols(),
        protected = protected.cols(),
        "classified table"
    );
    Ok(Record { public, protected })
}

/// Classify every data file, in parallel when `parallel` is set.
///
/// Records come back in input order. When several files fail, the error
/// reported is the lowest-numbered one.
pub fn classify_all<S: SealScheme>(
    layout: &ColumnLayout,
    raws: &[Table<String>],
    scheme: &S,
    parallel: bool,
) -> Result<Vec<Record<S::Ciphertext>>, RecordError> {
    let results: Vec<Result<Record<S::Ciphertext>, ClassifyError>> = if parallel && raws.len() > 1
    {
        raws.par_iter()
            .map(|raw| classify(layout, raw, scheme))
            .collect()
    } else {
        raws.iter().map(|raw| classify(layout, raw, scheme)).collect()
    };

    results
        .into_iter()
        .enumerate()
        .map(|(file, result)| result.map_err(|error| RecordError { file, error }))
        .collect()
}

/// Numeric value a protected cell is sealed as.
///
/// Decimal digit strings encode as their value. Anything else encodes as a
/// deterministic hash reduced into `0..modulus`.
pub fn encode_cell(text: &str, row: usize, col: usize, modulus: u64) -> Result<u64, ClassifyError> {
    if is_numeric(text) {
        return text
            .parse::<u64>()
            .map_err(|_| ClassifyError::NumericOverflow {
                row,
                col,
                text: text.to_owned(),
            });
    }
    hash_cell(text)
        .checked_rem(modulus)
        .ok_or_else(|| SealError::InvalidParameters("plain modulus is zero".to_owned()).into())
}

fn is_numeric(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

/// `FxHasher` is unseeded, so the same text hashes the same in every run.
fn hash_cell(text: &str) -> u64 {
    let mut hasher = FxHasher::default();
    text.hash(&mut hasher);
    hasher.finish()
}
