use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// Number of decimal digits in an id.
pub const ID_DIGITS: usize = 8;

/// An 8-digit numeric identifier, the key of the roster tree.
///
/// Ids are displayed zero-padded, so `Id::new(42)` prints as `00000042`.
///
/// ```
/// use avl_roster::Id;
/// let id: Id = "00000042".parse().unwrap();
/// assert_eq!(id.get(), 42);
/// assert_eq!(id.to_string(), "00000042");
/// assert!("4242".parse::<Id>().is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Id(u32);

impl Id {
    /// Largest representable id.
    pub const MAX: Id = Id(99_999_999);

    /// Creates an id from its numeric value.
    /// Returns `None` if the value does not fit in 8 digits.
    pub const fn new(value: u32) -> Option<Self> {
        if value <= Self::MAX.0 {
            Some(Id(value))
        } else {
            None
        }
    }

    /// Returns the numeric value of the id.
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl FromStr for Id {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != ID_DIGITS || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::InvalidId(s.to_owned()));
        }
        let value = s
            .bytes()
            .fold(0u32, |acc, b| acc * 10 + u32::from(b - b'0'));
        Ok(Id(value))
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$}", self.0, width = ID_DIGITS)
    }
}

impl fmt::Debug for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl From<Id> for u32 {
    fn from(id: Id) -> u32 {
        id.0
    }
}
