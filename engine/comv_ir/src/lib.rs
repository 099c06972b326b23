//! Shared vocabulary for the comv engine.
//!
//! # Pipeline
//!
//! ```text
//! script bytes ──► comv_lexer::tokenize ──► TokenList
//!                                              │
//!                        comv_parse::parse ◄───┘
//!                              │
//!                              ▼
//!            Script { statements: Vec<Statement>, layout: ColumnLayout }
//!                              │
//!        raw tables ──► comv_eval (classify, evaluate) ──► sealed results
//! ```
//!
//! Types here carry no behaviour that needs the sealing capability: the
//! predicate and operation registries are closed enums, and all 1-based /
//! 0-based / compacted column conversions go through [`ColumnLayout`].

mod column;
mod statement;
mod token;
mod value;

pub use column::{ColumnLayout, ColumnRef, PublicColumn, ProtectedColumn, Slot};
pub use statement::{AggregateOp, Predicate, Statement, RESERVED_OPERATIONS};
pub use token::{Token, TokenList};
pub use value::PublicValue;
