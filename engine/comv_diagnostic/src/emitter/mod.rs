//! Diagnostic emitters.
//!
//! Only human-readable terminal output is provided; each emitter implements
//! [`DiagnosticEmitter`] so the CLI does not care where output goes.

mod terminal;

pub use terminal::{ColorMode, TerminalEmitter};

use crate::Diagnostic;

/// Trait for emitting diagnostics.
pub trait DiagnosticEmitter {
    /// Emit a single diagnostic.
    fn emit(&mut self, diagnostic: &Diagnostic);

    /// Flush any buffered output.
    fn flush(&mut self);

    /// Emit a summary line for a failed run.
    fn emit_summary(&mut self, error_count: usize);
}
