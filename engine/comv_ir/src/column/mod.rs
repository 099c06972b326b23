//! Column addressing.
//!
//! Three index spaces meet here:
//!
//! ```text
//! script literal   1-based, against the original schema      "3"
//! original column  0-based, against the original schema       2
//! slot             0-based, inside the public or protected
//!                  half of a record after compaction          1
//! ```
//!
//! [`ColumnLayout`] is the only place that converts between them. It is
//! built once per script and shared by every record, so all records compact
//! their columns identically.

use std::fmt;

use crate::TokenList;

/// A 1-based column literal from a script.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ColumnRef(u32);

impl ColumnRef {
    /// Parse a script literal. Rejects `0`, signs, and anything non-decimal.
    pub fn parse(literal: &str) -> Option<Self> {
        if literal.is_empty() || !literal.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        match literal.parse::<u32>() {
            Ok(0) | Err(_) => None,
            Ok(n) => Some(ColumnRef(n)),
        }
    }

    /// Build from a 1-based number. Returns `None` for `0`.
    pub fn new(one_based: u32) -> Option<Self> {
        (one_based != 0).then_some(ColumnRef(one_based))
    }

    /// The 1-based number as written in the script.
    #[inline]
    pub fn number(self) -> u32 {
        self.0
    }

    /// 0-based position in the original schema.
    #[inline]
    pub fn original(self) -> usize {
        (self.0 - 1) as usize
    }
}

impl fmt::Display for ColumnRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where an original column lives after compaction.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Slot {
    Public(usize),
    Protected(usize),
}

/// A public key column, resolved.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PublicColumn {
    pub column: ColumnRef,
    pub slot: usize,
}

/// A protected target column, resolved.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ProtectedColumn {
    pub column: ColumnRef,
    pub slot: usize,
}

/// Schema-wide split of original columns into public and protected.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ColumnLayout {
    /// Sorted, deduplicated 0-based original positions of public columns.
    public: Vec<usize>,
}

impl ColumnLayout {
    /// Layout from explicit 0-based public positions.
    pub fn new(public: impl IntoIterator<Item = usize>) -> Self {
        let mut public: Vec<usize> = public.into_iter().collect();
        public.sort_unstable();
        public.dedup();
        ColumnLayout { public }
    }

    /// Scan a token sequence for `if <n>` with at least three tokens after
    /// the `if`; each `n` names a public column.
    ///
    /// Literals that are not valid column numbers are skipped here; the
    /// parser reports them against the statement they belong to.
    pub fn from_tokens(tokens: &TokenList) -> Self {
        let tokens = tokens.as_slice();
        let public = tokens
            .iter()
            .enumerate()
            .filter(|&(i, token)| token.is("if") && tokens.len() - i > 3)
            .filter_map(|(i, _)| ColumnRef::parse(tokens[i + 1].text()))
            .map(ColumnRef::original);
        Self::new(public)
    }

    /// 0-based original positions of the public columns, ascending.
    pub fn public_columns(&self) -> &[usize] {
        &self.public
    }

    /// Number of public columns.
    pub fn public_count(&self) -> usize {
        self.public.len()
    }

    /// Compacted position of an original column.
    pub fn resolve(&self, original: usize) -> Slot {
        match self.public.binary_search(&original) {
            Ok(slot) => Slot::Public(slot),
            // `before` public columns precede `original`, so it moves left by that many.
            Err(before) => Slot::Protected(original - before),
        }
    }

    /// Resolve a script literal expected to name a public column.
    pub fn public(&self, column: ColumnRef) -> Option<PublicColumn> {
        match self.resolve(column.original()) {
            Slot::Public(slot) => Some(PublicColumn { column, slot }),
            Slot::Protected(_) => None,
        }
    }

    /// Resolve a script literal expected to name a protected column.
    pub fn protected(&self, column: ColumnRef) -> Option<ProtectedColumn> {
        match self.resolve(column.original()) {
            Slot::Protected(slot) => Some(ProtectedColumn { column, slot }),
            Slot::Public(_) => None,
        }
    }

    /// Highest original position the layout requires a data file to have.
    pub fn max_public(&self) -> Option<usize> {
        self.public.last().copied()
    }
}
