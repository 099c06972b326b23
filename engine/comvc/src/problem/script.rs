//! Script problems: header, tokens, statements.

use comv_diagnostic::{Diagnostic, ErrorCode};
use comv_ir::Predicate;
use comv_lexer::LexError;
use comv_parse::ParseError;

pub(super) fn lex_code(error: &LexError) -> ErrorCode {
    match error {
        LexError::TruncatedHeader { .. } | LexError::BadMagic { .. } => ErrorCode::E0001,
        LexError::InvalidUtf8 { .. } => ErrorCode::E0002,
    }
}

pub(super) fn parse_code(error: &ParseError) -> ErrorCode {
    match error {
        ParseError::TruncatedStatement { .. } => ErrorCode::E0003,
        ParseError::InvalidColumn { .. } => ErrorCode::E0004,
        ParseError::UnknownPredicate { .. } => ErrorCode::E0005,
        ParseError::UnknownOperation { .. } => ErrorCode::E0006,
        ParseError::UnsupportedOperation { .. } => ErrorCode::E0007,
        ParseError::WrongColumnKind { .. } => ErrorCode::E0008,
        ParseError::UnsupportedJoinOperation { .. } => ErrorCode::E0009,
    }
}

pub(super) fn render_lex(diag: Diagnostic, error: &LexError) -> Diagnostic {
    let diag = diag.with_message(error.to_string());
    match error {
        LexError::TruncatedHeader { .. } | LexError::BadMagic { .. } => {
            diag.with_suggestion("scripts must start with the four bytes `comv`")
        }
        LexError::InvalidUtf8 { .. } => diag,
    }
}

pub(super) fn render_parse(diag: Diagnostic, error: &ParseError) -> Diagnostic {
    let diag = diag.with_message(error.to_string());
    match error {
        ParseError::TruncatedStatement { .. } => diag.with_suggestion(
            "statements are `OP COLUMN` or `if KEY PREDICATE OP TARGET`",
        ),
        ParseError::UnknownPredicate { .. } => {
            let keywords: Vec<&str> = Predicate::ALL.iter().map(|p| p.keyword()).collect();
            diag.with_suggestion(format!("predicates are {}", keywords.join(", ")))
        }
        ParseError::UnknownOperation { .. } => diag.with_suggestion("use `sum` or `sub`"),
        ParseError::UnsupportedJoinOperation { .. } => {
            diag.with_suggestion("conditional statements combine matched rows with `sum`")
        }
        ParseError::WrongColumnKind { .. } => diag.with_note(
            "every column named after `if` is public for the whole script",
        ),
        ParseError::InvalidColumn { .. } | ParseError::UnsupportedOperation { .. } => diag,
    }
}
