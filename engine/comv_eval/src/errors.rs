//! Error types for classification and evaluation.

use comv_seal::SealError;
use comv_table::TableError;

/// Failure while splitting one raw table into a record.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ClassifyError {
    /// A numeric protected cell does not fit in `u64`.
    #[error("cell ({row}, {col}) `{text}` overflows a 64-bit integer")]
    NumericOverflow { row: usize, col: usize, text: String },

    /// The script declares a public column the data file does not have.
    #[error("public column {column} is missing from a table {width} columns wide")]
    MissingColumn { column: usize, width: usize },

    /// The sealing capability refused a cell.
    #[error(transparent)]
    Seal(#[from] SealError),
}

/// A [`ClassifyError`] tagged with the 0-based data file it came from.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("data file {file}: {error}")]
pub struct RecordError {
    pub file: usize,
    #[source]
    pub error: ClassifyError,
}

/// Failure while evaluating a statement.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    /// Index arithmetic disagreed with a table's shape.
    #[error("internal table access failed: {0}")]
    Table(#[from] TableError),

    #[error(transparent)]
    Seal(#[from] SealError),

    #[error("no data files to evaluate")]
    NoRecords,

    /// The seed record of an aggregate has no rows to start from.
    #[error("the first data file has no rows to seed an aggregate")]
    EmptyRecord,

    /// A numeric predicate met a cell that is not an integer.
    #[error("`{value}` is not an integer operand for a numeric predicate")]
    NonNumericOperand { value: String },

    /// A data file is narrower than a column the statement names.
    #[error("column {column} is past the last column of a data file {width} columns wide")]
    MissingColumn {
        file: usize,
        column: u32,
        width: usize,
    },

    /// A data file's width differs from the first data file's.
    #[error("data file has {found} columns, the first data file has {expected}")]
    LayoutMismatch {
        file: usize,
        expected: usize,
        found: usize,
    },
}

impl EvalError {
    /// 0-based data file the error is about, when it is about one.
    pub fn file(&self) -> Option<usize> {
        match self {
            EvalError::MissingColumn { file, .. } | EvalError::LayoutMismatch { file, .. } => {
                Some(*file)
            }
            EvalError::Table(_)
            | EvalError::Seal(_)
            | EvalError::NoRecords
            | EvalError::EmptyRecord
            | EvalError::NonNumericOperand { .. } => None,
        }
    }
}
