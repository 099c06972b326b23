//! Conditional cross-record join.
//!
//! For each row of the first record (the candidate side), search every
//! record, the first one included, for a row whose key cell satisfies the
//! predicate against the candidate's key. A candidate produces one result
//! only when every record has such a row; the first satisfying row in scan
//! order wins. Matched target cells are chained in record order starting
//! from the first record's cell.
//!
//! ```text
//! record 0   A 10 ◄─ candidate "A"          result: 10 + 30
//!            B 20
//! record 1   A 30 ◄─ first row with key "A"
//!            C 40
//! ```

use comv_ir::{AggregateOp, Predicate, PublicColumn, PublicValue, ProtectedColumn};
use comv_seal::SealScheme;

use crate::operators::apply;
use crate::predicate::holds;
use crate::{EvalError, Record};

/// The columns and operation of one conditional statement.
#[derive(Copy, Clone, Debug)]
pub struct Join {
    pub key: PublicColumn,
    pub predicate: Predicate,
    pub op: AggregateOp,
    pub target: ProtectedColumn,
}

/// Run `join` and return one sealed value per fully matched candidate, in
/// candidate row order.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(key = %join.key.column, predicate = %join.predicate, target = %join.target.column)
)]
pub fn conditional_join<S: SealScheme>(
    scheme: &S,
    records: &[Record<S::Ciphertext>],
    join: Join,
) -> Result<Vec<S::Ciphertext>, EvalError> {
    let first = records.first().ok_or(EvalError::NoRecords)?;

    let mut results = Vec::new();
    let mut matched = Vec::with_capacity(records.len());
    for row in 0..first.rows() {
        let candidate = first.public.get(row, join.key.slot)?;
        if !match_rows(records, join, candidate, &mut matched)? {
            tracing::trace!(row, %candidate, "no match in every record");
            continue;
        }
        tracing::trace!(row, %candidate, rows = ?matched, "matched");
        results.push(combine(scheme, records, join, &matched)?);
    }

    tracing::debug!(results = results.len(), "joined records");
    Ok(results)
}

/// Fill `matched` with the first satisfying row of each record. Returns
/// `false` as soon as one record has none.
fn match_rows<C>(
    records: &[Record<C>],
    join: Join,
    candidate: &PublicValue,
    matched: &mut Vec<usize>,
) -> Result<bool, EvalError> {
    matched.clear();
    for record in records {
        match first_match(record, join, candidate)? {
            Some(row) => matched.push(row),
            None => return Ok(false),
        }
    }
    Ok(true)
}

fn first_match<C>(
    record: &Record<C>,
    join: Join,
    candidate: &PublicValue,
) -> Result<Option<usize>, EvalError> {
    for row in 0..record.rows() {
        let other = record.public.get(row, join.key.slot)?;
        if holds(join.predicate, candidate, other)? {
            return Ok(Some(row));
        }
    }
    Ok(None)
}

fn combine<S: SealScheme>(
    scheme: &S,
    records: &[Record<S::Ciphertext>],
    join: Join,
    matched: &[usize],
) -> Result<S::Ciphertext, EvalError> {
    let mut pairs = records.iter().zip(matched);
    let Some((first, &row)) = pairs.next() else {
        return Err(EvalError::NoRecords);
    };
    let mut acc = first.protected.get(row, join.target.slot)?.clone();
    for (record, &row) in pairs {
        acc = apply(scheme, join.op, &acc, record.protected.get(row, join.target.slot)?)?;
    }
    Ok(acc)
}
