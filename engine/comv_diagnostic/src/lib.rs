//! Diagnostics for comv.
//!
//! Every failure that reaches the process boundary is reported as a
//! [`Diagnostic`] carrying a stable [`ErrorCode`]:
//!
//! ```text
//! error[E0005]: unknown predicate `same` on line 2
//!   = note: script `join.comv`
//!   = help: predicates are equal, less, lesse, greater, greatere and their N forms
//! ```
//!
//! `comv explain E0005` prints the code's embedded documentation
//! ([`ErrorDocs`]).

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod errors;

pub use diagnostic::Diagnostic;
pub use emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
pub use error_code::ErrorCode;
pub use errors::ErrorDocs;
