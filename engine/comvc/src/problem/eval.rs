//! Data and evaluation problems.

use comv_diagnostic::{Diagnostic, ErrorCode};
use comv_eval::{ClassifyError, EvalError};

pub(super) fn classify_code(error: &ClassifyError) -> ErrorCode {
    match error {
        ClassifyError::NumericOverflow { .. } => ErrorCode::E1002,
        ClassifyError::MissingColumn { .. } => ErrorCode::E1003,
        ClassifyError::Seal(_) => ErrorCode::E3001,
    }
}

pub(super) fn eval_code(error: &EvalError) -> ErrorCode {
    match error {
        EvalError::Table(_) => ErrorCode::E2001,
        EvalError::NoRecords => ErrorCode::E2002,
        EvalError::EmptyRecord => ErrorCode::E2003,
        EvalError::NonNumericOperand { .. } => ErrorCode::E2004,
        EvalError::MissingColumn { .. } => ErrorCode::E1003,
        EvalError::LayoutMismatch { .. } => ErrorCode::E1006,
        EvalError::Seal(_) => ErrorCode::E3001,
    }
}

pub(super) fn render_classify(diag: Diagnostic, error: &ClassifyError) -> Diagnostic {
    let diag = diag.with_message(error.to_string());
    match error {
        ClassifyError::Seal(_) => {
            diag.with_suggestion("protected numbers must be below `--plain-modulus`")
        }
        ClassifyError::MissingColumn { .. } => {
            diag.with_suggestion("every data file must have the same columns")
        }
        ClassifyError::NumericOverflow { .. } => diag,
    }
}

pub(super) fn render_eval(diag: Diagnostic, error: &EvalError) -> Diagnostic {
    let diag = diag.with_message(error.to_string());
    match error {
        EvalError::NoRecords => diag.with_suggestion("list data files before the script"),
        EvalError::NonNumericOperand { .. } => {
            diag.with_suggestion("use the bytewise predicate, without the `N` suffix")
        }
        EvalError::MissingColumn { .. } => {
            diag.with_suggestion("name a column that exists in every data file")
        }
        EvalError::LayoutMismatch { .. } => {
            diag.with_suggestion("every data file must have the same columns")
        }
        EvalError::Table(_) | EvalError::EmptyRecord | EvalError::Seal(_) => diag,
    }
}
