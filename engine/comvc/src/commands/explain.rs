//! The `explain` command: display documentation for error codes.

use comv_diagnostic::{ErrorCode, ErrorDocs};

use crate::Problem;

/// Documentation for `code_str`, e.g. `E0005`.
pub fn explain_error(code_str: &str) -> Result<&'static str, Problem> {
    let Ok(code) = code_str.parse::<ErrorCode>() else {
        return Err(Problem::Usage(format!(
            "unknown error code `{code_str}`; codes look like E0001"
        )));
    };
    ErrorDocs::get(code)
        .ok_or_else(|| Problem::Usage(format!("no documentation available for {code}")))
}
