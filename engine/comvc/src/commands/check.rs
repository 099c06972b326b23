//! The `check` command: parse a script without reading any data.

use std::fmt::Write;
use std::path::Path;

use comv_ir::Statement;

use super::parse_file;
use crate::Problem;

/// Describe the statements and the public/protected split of a script.
pub fn check_script(path: &Path) -> Result<String, Problem> {
    let script = parse_file(path)?;
    let layout = script.layout();

    let mut out = String::new();
    let _ = writeln!(
        out,
        "Script '{}': {} statement(s)",
        path.display(),
        script.statements().len()
    );
    let public: Vec<String> = layout
        .public_columns()
        .iter()
        .map(|original| (original + 1).to_string())
        .collect();
    if public.is_empty() {
        let _ = writeln!(out, "Public columns: none");
    } else {
        let _ = writeln!(out, "Public columns: {}", public.join(", "));
    }

    for (index, statement) in script.statements().iter().enumerate() {
        let kind = match statement {
            Statement::Aggregate { .. } => "aggregate",
            Statement::ConditionalJoin { .. } => "join",
        };
        let text = statement.to_string();
        let _ = writeln!(out, "  {:>3}. {text:<24} {kind}", index + 1);
    }
    Ok(out)
}
