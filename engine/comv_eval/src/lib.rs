//! Classification and statement evaluation for comv.
//!
//! # Run
//!
//! ```text
//! Script ─► layout ─┐
//!                   ├─► classify_all ─► [Record] ─┐
//! raw tables ───────┘                             ├─► Evaluator::run ─► [[Ciphertext]]
//! Script ─► statements ───────────────────────────┘
//! ```
//!
//! Nothing here opens a sealed value. Results come back as one group per
//! statement, in script order, for the caller to open.

mod aggregate;
mod errors;
mod join;
mod operators;
mod predicate;
mod record;

pub use aggregate::aggregate;
pub use errors::{ClassifyError, EvalError, RecordError};
pub use join::{conditional_join, Join};
pub use predicate::holds;
pub use record::{classify, classify_all, encode_cell, Record};

use comv_ir::{ColumnRef, Statement};
use comv_parse::Script;
use comv_seal::SealScheme;

/// Sealed results of one statement.
pub type Group<C> = Vec<C>;

/// Evaluates statements over a fixed set of records.
pub struct Evaluator<'a, S: SealScheme> {
    scheme: &'a S,
    records: &'a [Record<S::Ciphertext>],
}

impl<'a, S: SealScheme> Evaluator<'a, S> {
    /// Check that the records line up before evaluating anything.
    ///
    /// Records without rows are exempt from the width check; they
    /// contribute nothing to any statement.
    pub fn new(scheme: &'a S, records: &'a [Record<S::Ciphertext>]) -> Result<Self, EvalError> {
        let first = records.first().ok_or(EvalError::NoRecords)?;
        let expected = first.width();
        for (file, record) in records.iter().enumerate().skip(1) {
            let found = record.width();
            if record.rows() > 0 && first.rows() > 0 && found != expected {
                return Err(EvalError::LayoutMismatch {
                    file,
                    expected,
                    found,
                });
            }
        }
        Ok(Evaluator { scheme, records })
    }

    /// Check that every record with rows has the columns `statement` names.
    ///
    /// Runs before any cell is read, so a column past the data is reported
    /// against the file instead of as a table bounds failure.
    pub fn check_columns(&self, statement: &Statement) -> Result<(), EvalError> {
        let (public, protected) = match *statement {
            Statement::Aggregate { column, .. } => (None, column),
            Statement::ConditionalJoin { key, target, .. } => (Some(key), target),
        };
        for (file, record) in self.records.iter().enumerate() {
            if record.rows() == 0 {
                continue;
            }
            let missing = |column: ColumnRef| EvalError::MissingColumn {
                file,
                column: column.number(),
                width: record.width(),
            };
            if let Some(key) = public {
                if key.slot >= record.public.cols() {
                    return Err(missing(key.column));
                }
            }
            if protected.slot >= record.protected.cols() {
                return Err(missing(protected.column));
            }
        }
        Ok(())
    }

    /// Evaluate one statement.
    pub fn statement(&self, statement: &Statement) -> Result<Group<S::Ciphertext>, EvalError> {
        tracing::debug!(%statement, "evaluating statement");
        self.check_columns(statement)?;
        match *statement {
            Statement::Aggregate { op, column } => {
                Ok(vec![aggregate(self.scheme, self.records, op, column)?])
            }
            Statement::ConditionalJoin {
                key,
                predicate,
                op,
                target,
            } => conditional_join(
                self.scheme,
                self.records,
                Join {
                    key,
                    predicate,
                    op,
                    target,
                },
            ),
        }
    }

    /// Evaluate every statement of `script`, in order. The first failure
    /// aborts the run.
    ///
    /// Every statement's columns are checked before the first one runs.
    #[tracing::instrument(level = "debug", skip_all, fields(statements = script.statements().len()))]
    pub fn run(&self, script: &Script) -> Result<Vec<Group<S::Ciphertext>>, EvalError> {
        for statement in script.statements() {
            self.check_columns(statement)?;
        }
        script
            .statements()
            .iter()
            .map(|statement| self.statement(statement))
            .collect()
    }
}

/// Evaluate `script` over records already classified with its layout.
pub fn evaluate<S: SealScheme>(
    scheme: &S,
    script: &Script,
    records: &[Record<S::Ciphertext>],
) -> Result<Vec<Group<S::Ciphertext>>, EvalError> {
    Evaluator::new(scheme, records)?.run(script)
}

#[cfg(test)]
mod tests;
