//! Error codes for comv diagnostics.
//!
//! Each code is a unique identifier (e.g., `E0005`) whose first digit names
//! the stage that failed. Used for `comv explain` lookups.

use std::fmt;

/// Error codes for all comv diagnostics.
///
/// Format: E#### where the first digit indicates the stage:
/// - E0xxx: Script format errors
/// - E1xxx: Input and usage errors
/// - E2xxx: Evaluation errors (E2001 is internal: index arithmetic went wrong)
/// - E3xxx: Sealing capability errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Script Errors (E0xxx)
    /// Missing or wrong `comv` header
    E0001,
    /// Script is not valid UTF-8 text
    E0002,
    /// Statement ends before all its words
    E0003,
    /// Invalid column literal
    E0004,
    /// Unknown predicate keyword
    E0005,
    /// Unknown operation keyword
    E0006,
    /// Reserved operation that is not supported (`avg`)
    E0007,
    /// Column names the wrong half of a record
    E0008,
    /// Operation not allowed in a conditional statement
    E0009,

    // Input Errors (E1xxx)
    /// File cannot be read
    E1001,
    /// Numeric cell overflows a 64-bit integer
    E1002,
    /// Script column missing from a data file
    E1003,
    /// Invalid command line
    E1004,
    /// Data row with a different number of cells than the first row
    E1005,
    /// Data files disagree on column count
    E1006,

    // Evaluation Errors (E2xxx)
    /// Table access out of bounds
    E2001,
    /// No data files
    E2002,
    /// First data file has no rows
    E2003,
    /// Non-numeric operand for a numeric predicate
    E2004,

    // Capability Errors (E3xxx)
    /// Sealing capability failure
    E3001,
}

impl ErrorCode {
    /// All error code variants, for exhaustive testing.
    ///
    /// Kept in sync with `as_str()`, which is exhaustive.
    pub const ALL: &[ErrorCode] = &[
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E0003,
        ErrorCode::E0004,
        ErrorCode::E0005,
        ErrorCode::E0006,
        ErrorCode::E0007,
        ErrorCode::E0008,
        ErrorCode::E0009,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E1005,
        ErrorCode::E1006,
        ErrorCode::E2001,
        ErrorCode::E2002,
        ErrorCode::E2003,
        ErrorCode::E2004,
        ErrorCode::E3001,
    ];

    /// Get the string representation of this error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E0004 => "E0004",
            ErrorCode::E0005 => "E0005",
            ErrorCode::E0006 => "E0006",
            ErrorCode::E0007 => "E0007",
            ErrorCode::E0008 => "E0008",
            ErrorCode::E0009 => "E0009",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E1006 => "E1006",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            ErrorCode::E2004 => "E2004",
            ErrorCode::E3001 => "E3001",
        }
    }

    /// Internal errors signal a bug in comv rather than bad input.
    pub fn is_internal_error(&self) -> bool {
        matches!(self, ErrorCode::E2001)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse an error code string like `"E0005"`.
///
/// Case-insensitive. Derived from [`ErrorCode::ALL`] and [`ErrorCode::as_str()`].
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}
