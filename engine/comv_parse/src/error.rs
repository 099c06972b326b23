use std::fmt;

use comv_ir::AggregateOp;

/// Which half of a record a column literal had to name.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ColumnKind {
    Public,
    Protected,
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnKind::Public => f.write_str("public"),
            ColumnKind::Protected => f.write_str("protected"),
        }
    }
}

/// Script statement error. Every variant is fatal for the run.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("`{keyword}` on line {line} needs {expected} more words, found {found}")]
    TruncatedStatement {
        keyword: String,
        line: u32,
        expected: usize,
        found: usize,
    },

    #[error("`{literal}` on line {line} is not a 1-based column number")]
    InvalidColumn { literal: String, line: u32 },

    #[error("unknown predicate `{keyword}` on line {line}")]
    UnknownPredicate { keyword: String, line: u32 },

    #[error("unknown operation `{keyword}` on line {line}")]
    UnknownOperation { keyword: String, line: u32 },

    #[error("operation `{keyword}` on line {line} is reserved but not supported")]
    UnsupportedOperation { keyword: String, line: u32 },

    #[error("operation `{op}` on line {line} cannot be used in a conditional statement")]
    UnsupportedJoinOperation { op: AggregateOp, line: u32 },

    #[error("column {column} on line {line} must be a {expected} column")]
    WrongColumnKind {
        column: u32,
        line: u32,
        expected: ColumnKind,
    },
}

impl ParseError {
    /// Script line the error points at.
    pub fn line(&self) -> u32 {
        match self {
            ParseError::TruncatedStatement { line, .. }
            | ParseError::InvalidColumn { line, .. }
            | ParseError::UnknownPredicate { line, .. }
            | ParseError::UnknownOperation { line, .. }
            | ParseError::UnsupportedOperation { line, .. }
            | ParseError::UnsupportedJoinOperation { line, .. }
            | ParseError::WrongColumnKind { line, .. } => *line,
        }
    }
}
