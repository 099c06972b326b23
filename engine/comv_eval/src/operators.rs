//! Homomorphic operation dispatch.
//!
//! [`AggregateOp`] is a closed set, so dispatch is a direct match onto the
//! capability's `add`/`sub`.

use comv_ir::AggregateOp;
use comv_seal::{SealError, SealScheme};

/// `acc op cell`, on sealed values.
#[inline]
pub fn apply<S: SealScheme>(
    scheme: &S,
    op: AggregateOp,
    acc: &S::Ciphertext,
    cell: &S::Ciphertext,
) -> Result<S::Ciphertext, SealError> {
    match op {
        AggregateOp::Add => scheme.add(acc, cell),
        AggregateOp::Sub => scheme.sub(acc, cell),
    }
}

/// Undo one `apply(op, _, cell)`: subtract what `Add` added, add back
/// what `Sub` subtracted.
#[inline]
pub fn undo<S: SealScheme>(
    scheme: &S,
    op: AggregateOp,
    acc: &S::Ciphertext,
    cell: &S::Ciphertext,
) -> Result<S::Ciphertext, SealError> {
    match op {
        AggregateOp::Add => scheme.sub(acc, cell),
        AggregateOp::Sub => scheme.add(acc, cell),
    }
}
