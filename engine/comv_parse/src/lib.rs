//! Statement recognition for comv scripts.
//!
//! # Grammar
//!
//! ```text
//! script := stmt*
//! stmt   := "if" PUBLIC_COL PREDICATE OP TARGET_COL
//!         | OP COLUMN
//! ```
//!
//! Parsing does only what dispatch needs: find statement boundaries, look
//! up keywords in the closed registries, and resolve column literals through
//! the script's [`ColumnLayout`]. Column literals are checked here, before
//! any data is sealed, so a bad script fails without touching the
//! capability.

mod error;

pub use error::{ColumnKind, ParseError};

use comv_ir::{
    AggregateOp, ColumnLayout, ColumnRef, Predicate, ProtectedColumn, PublicColumn, Statement,
    Token, TokenList,
};

/// Words after `if` in a conditional statement.
const JOIN_ARITY: usize = 4;
/// Words after the operation keyword in an aggregate statement.
const AGGREGATE_ARITY: usize = 1;

/// A parsed script: statements in script order plus the shared layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Script {
    statements: Vec<Statement>,
    layout: ColumnLayout,
}

impl Script {
    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    /// Public/protected split every record must be built with.
    pub fn layout(&self) -> &ColumnLayout {
        &self.layout
    }
}

/// Parse a token sequence into statements.
pub fn parse(tokens: &TokenList) -> Result<Script, ParseError> {
    let layout = ColumnLayout::from_tokens(tokens);
    let mut parser = Parser {
        tokens: tokens.as_slice(),
        layout: &layout,
        pos: 0,
    };

    let mut statements = Vec::new();
    while let Some(statement) = parser.next_statement()? {
        tracing::trace!(%statement, "parsed statement");
        statements.push(statement);
    }

    tracing::debug!(
        statements = statements.len(),
        public_columns = layout.public_count(),
        "parsed script"
    );
    Ok(Script { statements, layout })
}

struct Parser<'a> {
    tokens: &'a [Token],
    layout: &'a ColumnLayout,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn next_statement(&mut self) -> Result<Option<Statement>, ParseError> {
        let tokens = self.tokens;
        let Some(head) = tokens.get(self.pos) else {
            return Ok(None);
        };
        let statement = if head.is("if") {
            let [key, predicate, op, target] = self.operands::<JOIN_ARITY>(head)?;
            Statement::ConditionalJoin {
                key: self.public_column(key)?,
                predicate: predicate_keyword(predicate)?,
                op: join_operation(op)?,
                target: self.protected_column(target)?,
            }
        } else {
            let op = operation_keyword(head)?;
            let [column] = self.operands::<AGGREGATE_ARITY>(head)?;
            Statement::Aggregate {
                op,
                column: self.protected_column(column)?,
            }
        };
        Ok(Some(statement))
    }

    /// Take the `N` words after `head` and advance past the statement.
    fn operands<const N: usize>(&mut self, head: &Token) -> Result<[&'a Token; N], ParseError> {
        let tokens = self.tokens;
        let start = self.pos + 1;
        let available = tokens.len() - start;
        let Some(words) = tokens.get(start..start + N) else {
            return Err(ParseError::TruncatedStatement {
                keyword: head.text().to_owned(),
                line: head.line(),
                expected: N,
                found: available,
            });
        };
        self.pos = start + N;
        Ok(std::array::from_fn(|i| &words[i]))
    }

    fn public_column(&self, token: &Token) -> Result<PublicColumn, ParseError> {
        let column = column_literal(token)?;
        self.layout
            .public(column)
            .ok_or(ParseError::WrongColumnKind {
                column: column.number(),
                line: token.line(),
                expected: ColumnKind::Public,
            })
    }

    fn protected_column(&self, token: &Token) -> Result<ProtectedColumn, ParseError> {
        let column = column_literal(token)?;
        self.layout
            .protected(column)
            .ok_or(ParseError::WrongColumnKind {
                column: column.number(),
                line: token.line(),
                expected: ColumnKind::Protected,
            })
    }
}

fn column_literal(token: &Token) -> Result<ColumnRef, ParseError> {
    ColumnRef::parse(token.text()).ok_or_else(|| ParseError::InvalidColumn {
        literal: token.text().to_owned(),
        line: token.line(),
    })
}

fn predicate_keyword(token: &Token) -> Result<Predicate, ParseError> {
    Predicate::from_keyword(token.text()).ok_or_else(|| ParseError::UnknownPredicate {
        keyword: token.text().to_owned(),
        line: token.line(),
    })
}

fn operation_keyword(token: &Token) -> Result<AggregateOp, ParseError> {
    if let Some(op) = AggregateOp::from_keyword(token.text()) {
        return Ok(op);
    }
    if AggregateOp::is_reserved(token.text()) {
        return Err(ParseError::UnsupportedOperation {
            keyword: token.text().to_owned(),
            line: token.line(),
        });
    }
    Err(ParseError::UnknownOperation {
        keyword: token.text().to_owned(),
        line: token.line(),
    })
}

/// Only `sum` chains across matched rows; `sub` has no defined join order.
fn join_operation(token: &Token) -> Result<AggregateOp, ParseError> {
    match operation_keyword(token)? {
        AggregateOp::Add => Ok(AggregateOp::Add),
        op @ AggregateOp::Sub => Err(ParseError::UnsupportedJoinOperation {
            op,
            line: token.line(),
        }),
    }
}
