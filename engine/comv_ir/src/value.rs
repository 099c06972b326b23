use std::fmt;

/// A public (clear) cell, copied verbatim from the data file.
///
/// Public cells never reach the sealing capability; they only feed join
/// predicates.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PublicValue(String);

impl PublicValue {
    pub fn new(text: impl Into<String>) -> Self {
        PublicValue(text.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for PublicValue {
    fn from(text: String) -> Self {
        PublicValue(text)
    }
}

impl From<&str> for PublicValue {
    fn from(text: &str) -> Self {
        PublicValue(text.to_owned())
    }
}

impl fmt::Display for PublicValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
