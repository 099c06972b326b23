//! The `lex` command: show a script's token sequence.

use std::fmt::Write;
use std::path::Path;

use super::tokenize_file;
use crate::Problem;

/// One line per token: script line, then the token text after escape
/// stripping.
pub fn lex_script(path: &Path) -> Result<String, Problem> {
    let tokens = tokenize_file(path)?;

    let mut out = String::new();
    let _ = writeln!(
        out,
        "Tokens for '{}' ({} tokens):",
        path.display(),
        tokens.len()
    );
    for token in &tokens {
        let _ = writeln!(out, "  {:>4}  {token}", token.line());
    }
    Ok(out)
}
