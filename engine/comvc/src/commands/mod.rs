//! Command handlers.
//!
//! Each handler returns its output as a value (or a [`Problem`]); printing
//! and exit codes belong to `main`.

mod check;
mod explain;
mod lex;
mod run;

pub use check::check_script;
pub use explain::explain_error;
pub use lex::lex_script;
pub use run::{render_results, run_files};

use std::path::Path;

use comv_ir::TokenList;
use comv_parse::Script;

use crate::input::read_script;
use crate::Problem;

/// Read and tokenize a script.
pub(crate) fn tokenize_file(path: &Path) -> Result<TokenList, Problem> {
    let source = read_script(path)?;
    comv_lexer::tokenize(&source).map_err(|error| Problem::Lex {
        path: path.to_path_buf(),
        error,
    })
}

/// Read, tokenize and parse a script.
pub(crate) fn parse_file(path: &Path) -> Result<Script, Problem> {
    let tokens = tokenize_file(path)?;
    comv_parse::parse(&tokens).map_err(|error| Problem::Parse {
        path: path.to_path_buf(),
        error,
    })
}
