use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid element symbol: '{0}' (expected a single character)")]
pub struct ParseElementError(String);

/// Single-character chemical type key taken from the front of an atom label.
///
/// Labels such as `"N1"` or `"C12"` carry their element in the first
/// character; everything after it is a free-form site index. Symbols are
/// compared exactly, so `'c'` and `'C'` are distinct types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementSymbol(char);

impl ElementSymbol {
    pub const CARBON: Self = Self('C');
    pub const NITROGEN: Self = Self('N');
    pub const OXYGEN: Self = Self('O');

    pub const fn new(symbol: char) -> Self {
        Self(symbol)
    }

    /// Derives the symbol from an atom label, or `None` for an empty label.
    pub fn from_label(label: &str) -> Option<Self> {
        label.chars().next().map(Self)
    }

    #[inline]
    pub fn as_char(&self) -> char {
        self.0
    }
}

impl From<char> for ElementSymbol {
    fn from(c: char) -> Self {
        Self(c)
    }
}

impl fmt::Display for ElementSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ElementSymbol {
    type Err = ParseElementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(Self(c)),
            _ => Err(ParseElementError(s.to_string())),
        }
    }
}
