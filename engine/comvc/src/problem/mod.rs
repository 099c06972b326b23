//! Structured problem types.
//!
//! A [`Problem`] records what failed and where (which script, which data
//! file). Rendering to a [`Diagnostic`] is a separate step, so commands
//! return problems and only `main` decides how to print them.
//!
//! ```text
//! LexError / ParseError ──► Problem::Lex / Parse ──────┐
//! RaggedRow ──────────────► Problem::Ragged ───────────┤
//! ClassifyError ──────────► Problem::Classify ─────────┼──► into_diagnostic ──► ErrorCode
//! EvalError (one file) ───► Problem::Data ─────────────┤
//! EvalError / SealError ──► Problem::Eval / Seal ──────┘
//! ```

mod eval;
mod script;

use std::io;
use std::path::PathBuf;

use comv_diagnostic::{Diagnostic, ErrorCode};
use comv_eval::{ClassifyError, EvalError};
use comv_lexer::LexError;
use comv_parse::ParseError;
use comv_seal::SealError;

use crate::input::RaggedRow;

/// Any failure a command can end with.
#[derive(Debug, thiserror::Error)]
pub enum Problem {
    #[error("cannot read `{}`: {error}", path.display())]
    Read { path: PathBuf, error: io::Error },

    #[error("script `{}`: {error}", path.display())]
    Lex { path: PathBuf, error: LexError },

    #[error("script `{}`: {error}", path.display())]
    Parse { path: PathBuf, error: ParseError },

    #[error("data file `{}`: {error}", path.display())]
    Ragged { path: PathBuf, error: RaggedRow },

    #[error("data file `{}`: {error}", path.display())]
    Classify { path: PathBuf, error: ClassifyError },

    /// An evaluation error caused by one data file.
    #[error("data file `{}`: {error}", path.display())]
    Data { path: PathBuf, error: EvalError },

    #[error(transparent)]
    Eval(#[from] EvalError),

    #[error(transparent)]
    Seal(#[from] SealError),

    #[error("{0}")]
    Usage(String),
}

impl Problem {
    /// Error code this problem is reported under.
    pub fn code(&self) -> ErrorCode {
        match self {
            Problem::Read { .. } => ErrorCode::E1001,
            Problem::Lex { error, .. } => script::lex_code(error),
            Problem::Parse { error, .. } => script::parse_code(error),
            Problem::Ragged { .. } => ErrorCode::E1005,
            Problem::Classify { error, .. } => eval::classify_code(error),
            Problem::Data { error, .. } => eval::eval_code(error),
            Problem::Eval(error) => eval::eval_code(error),
            Problem::Seal(_) => ErrorCode::E3001,
            Problem::Usage(_) => ErrorCode::E1004,
        }
    }

    /// Convert this problem into a diagnostic.
    #[cold]
    pub fn into_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code());
        match self {
            Problem::Read { path, error } => diag
                .with_message(format!("cannot read `{}`", path.display()))
                .with_note(error.to_string()),
            Problem::Lex { path, error } => script::render_lex(diag, error)
                .with_note(format!("script `{}`", path.display())),
            Problem::Parse { path, error } => script::render_parse(diag, error)
                .with_note(format!("script `{}`", path.display())),
            Problem::Ragged { path, error } => diag
                .with_message(error.to_string())
                .with_note(format!("data file `{}`", path.display()))
                .with_suggestion("give every row as many cells as the first row"),
            Problem::Classify { path, error } => eval::render_classify(diag, error)
                .with_note(format!("data file `{}`", path.display())),
            Problem::Data { path, error } => eval::render_eval(diag, error)
                .with_note(format!("data file `{}`", path.display())),
            Problem::Eval(error) => eval::render_eval(diag, error),
            Problem::Seal(error) => diag.with_message(error.to_string()),
            Problem::Usage(message) => diag
                .with_message(message.clone())
                .with_suggestion("run `comv help` for usage"),
        }
    }
}
