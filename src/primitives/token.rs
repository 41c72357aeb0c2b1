//! Token - the character a cell would show once revealed

use std::fmt;

/// Display token for one embedded clue character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// An ASCII letter, always stored uppercase
    Letter(char),
    Hyphen,
    /// Anything else (digits, punctuation); shown as `.`
    Blank,
}

impl Token {
    pub fn from_char(c: char) -> Self {
        match c {
            '-' => Self::Hyphen,
            c if c.is_ascii_alphabetic() => Self::Letter(c.to_ascii_uppercase()),
            _ => Self::Blank,
        }
    }

    pub const fn as_char(&self) -> char {
        match self {
            Self::Letter(c) => *c,
            Self::Hyphen => '-',
            Self::Blank => '.',
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
