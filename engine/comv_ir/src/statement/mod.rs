//! Statements and the keyword registries.
//!
//! Both registries are closed enums with an exhaustive keyword match. The
//! set of predicates and operations is fixed by the script format, so there
//! is no runtime table to initialize or extend.

use std::fmt;

use crate::{ProtectedColumn, PublicColumn};

/// Comparison used by a conditional join.
///
/// Literal forms compare the public cells bytewise. Numeric forms (keyword
/// suffix `N`) parse both sides as integers first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Predicate {
    Equal,
    Less,
    LessEq,
    Greater,
    GreaterEq,
    EqualNumeric,
    LessNumeric,
    LessEqNumeric,
    GreaterNumeric,
    GreaterEqNumeric,
}

impl Predicate {
    pub const ALL: [Predicate; 10] = [
        Predicate::Equal,
        Predicate::Less,
        Predicate::LessEq,
        Predicate::Greater,
        Predicate::GreaterEq,
        Predicate::EqualNumeric,
        Predicate::LessNumeric,
        Predicate::LessEqNumeric,
        Predicate::GreaterNumeric,
        Predicate::GreaterEqNumeric,
    ];

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        let predicate = match keyword {
            "equal" => Predicate::Equal,
            "less" => Predicate::Less,
            "lesse" => Predicate::LessEq,
            "greater" => Predicate::Greater,
            "greatere" => Predicate::GreaterEq,
            "equalN" => Predicate::EqualNumeric,
            "lessN" => Predicate::LessNumeric,
            "lesseN" => Predicate::LessEqNumeric,
            "greaterN" => Predicate::GreaterNumeric,
            "greatereN" => Predicate::GreaterEqNumeric,
            _ => return None,
        };
        Some(predicate)
    }

    pub fn keyword(self) -> &'static str {
        match self {
            Predicate::Equal => "equal",
            Predicate::Less => "less",
            Predicate::LessEq => "lesse",
            Predicate::Greater => "greater",
            Predicate::GreaterEq => "greatere",
            Predicate::EqualNumeric => "equalN",
            Predicate::LessNumeric => "lessN",
            Predicate::LessEqNumeric => "lesseN",
            Predicate::GreaterNumeric => "greaterN",
            Predicate::GreaterEqNumeric => "greatereN",
        }
    }

    /// Whether both sides must parse as integers.
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            Predicate::EqualNumeric
                | Predicate::LessNumeric
                | Predicate::LessEqNumeric
                | Predicate::GreaterNumeric
                | Predicate::GreaterEqNumeric
        )
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Homomorphic combination applied across sealed cells.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AggregateOp {
    Add,
    Sub,
}

/// Operation keywords the format reserves but the engine does not run.
pub const RESERVED_OPERATIONS: &[&str] = &["avg"];

impl AggregateOp {
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "sum" => Some(AggregateOp::Add),
            "sub" => Some(AggregateOp::Sub),
            _ => None,
        }
    }

    pub fn keyword(self) -> &'static str {
        match self {
            AggregateOp::Add => "sum",
            AggregateOp::Sub => "sub",
        }
    }

    /// `true` for keywords in [`RESERVED_OPERATIONS`].
    pub fn is_reserved(keyword: &str) -> bool {
        RESERVED_OPERATIONS.contains(&keyword)
    }
}

impl fmt::Display for AggregateOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// One script instruction, with columns already resolved against the
/// script's [`ColumnLayout`](crate::ColumnLayout).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Statement {
    /// `OP COLUMN`: combine one protected column over every row of every record.
    Aggregate {
        op: AggregateOp,
        column: ProtectedColumn,
    },
    /// `if KEY PREDICATE OP TARGET`: join records on a public key, then
    /// combine the matched rows' target cells.
    ConditionalJoin {
        key: PublicColumn,
        predicate: Predicate,
        op: AggregateOp,
        target: ProtectedColumn,
    },
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Aggregate { op, column } => write!(f, "{op} {}", column.column),
            Statement::ConditionalJoin {
                key,
                predicate,
                op,
                target,
            } => write!(f, "if {} {predicate} {op} {}", key.column, target.column),
        }
    }
}
