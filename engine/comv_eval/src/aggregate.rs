//! Unconditional column aggregate.
//!
//! The capability offers no sealed zero to start from, so the first
//! record's first cell seeds the accumulator, every cell (the seed
//! included) is folded in, and the seed's second contribution is undone at
//! the end:
//!
//! ```text
//! sum:  s + (s + c1 + ... + cn) - s  =  s + c1 + ... + cn
//! sub:  s - (s + c1 + ... + cn) + s  =  s - c1 - ... - cn
//! ```

use comv_ir::{AggregateOp, ProtectedColumn};
use comv_seal::SealScheme;

use crate::operators::{apply, undo};
use crate::{EvalError, Record};

/// Fold `column` over every row of every record.
#[tracing::instrument(level = "debug", skip_all, fields(%op, column = %column.column))]
pub fn aggregate<S: SealScheme>(
    scheme: &S,
    records: &[Record<S::Ciphertext>],
    op: AggregateOp,
    column: ProtectedColumn,
) -> Result<S::Ciphertext, EvalError> {
    let first = records.first().ok_or(EvalError::NoRecords)?;
    if first.rows() == 0 {
        return Err(EvalError::EmptyRecord);
    }
    let seed = first.protected.get(0, column.slot)?;

    let mut acc = seed.clone();
    let mut cells = 0usize;
    for record in records {
        for row in 0..record.rows() {
            acc = apply(scheme, op, &acc, record.protected.get(row, column.slot)?)?;
            cells += 1;
        }
    }
    let acc = undo(scheme, op, &acc, seed)?;

    tracing::debug!(cells, "aggregated column");
    Ok(acc)
}
