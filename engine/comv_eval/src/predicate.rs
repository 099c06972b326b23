//! Join predicate semantics.
//!
//! Literal forms order the two public cells bytewise. Numeric forms parse
//! both cells as `i64` first; a cell that does not parse is an error, not a
//! silent mismatch.

use std::cmp::Ordering;

use comv_ir::{Predicate, PublicValue};

use crate::EvalError;

/// Does `predicate(candidate, other)` hold?
///
/// `candidate` comes from the first record, `other` from the record being
/// searched: `less` asks whether the candidate sorts before `other`.
pub fn holds(
    predicate: Predicate,
    candidate: &PublicValue,
    other: &PublicValue,
) -> Result<bool, EvalError> {
    let ordering = if predicate.is_numeric() {
        integer(candidate)?.cmp(&integer(other)?)
    } else {
        candidate.as_str().as_bytes().cmp(other.as_str().as_bytes())
    };
    Ok(accepts(predicate, ordering))
}

fn accepts(predicate: Predicate, ordering: Ordering) -> bool {
    match predicate {
        Predicate::Equal | Predicate::EqualNumeric => ordering.is_eq(),
        Predicate::Less | Predicate::LessNumeric => ordering.is_lt(),
        Predicate::LessEq | Predicate::LessEqNumeric => ordering.is_le(),
        Predicate::Greater | Predicate::GreaterNumeric => ordering.is_gt(),
        Predicate::GreaterEq | Predicate::GreaterEqNumeric => ordering.is_ge(),
    }
}

fn integer(value: &PublicValue) -> Result<i64, EvalError> {
    value
        .as_str()
        .parse::<i64>()
        .map_err(|_| EvalError::NonNumericOperand {
            value: value.as_str().to_owned(),
        })
}
