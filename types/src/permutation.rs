//! Bijective wiring tables over the alphabet.
//!
//! A [`PermutationTable`] stores both directions of the wiring so that the
//! reverse lookup is a single index rather than a search.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::{ALPHABET_LEN, Letter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PermutationError {
    #[error("wiring must list exactly 26 letters (got {0})")]
    WrongLength(usize),
    #[error("wiring contains non-letter symbol {0:?}")]
    InvalidSymbol(char),
    #[error("wiring lists {0} more than once")]
    DuplicateSymbol(char),
}

/// An immutable bijection A-Z <-> A-Z.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PermutationTable {
    forward: [u8; ALPHABET_LEN],
    inverse: [u8; ALPHABET_LEN],
}

impl PermutationTable {
    /// Compile-time checked wiring for static registry data.
    ///
    /// Panics (at compile time when used in a `const`/`static`) if `wiring`
    /// is not a permutation of the alphabet.
    #[must_use]
    pub const fn from_static(wiring: &'static str) -> Self {
        match Self::build(wiring.as_bytes()) {
            Ok(table) => table,
            Err(PermutationError::WrongLength(_)) => panic!("wiring must list exactly 26 letters"),
            Err(PermutationError::InvalidSymbol(_)) => panic!("wiring contains a non-letter"),
            Err(PermutationError::DuplicateSymbol(_)) => panic!("wiring repeats a letter"),
        }
    }

    /// Parse a 26-letter wiring string. Case-insensitive.
    pub fn parse(wiring: &str) -> Result<Self, PermutationError> {
        let chars = wiring.chars().count();
        if chars != ALPHABET_LEN {
            return Err(PermutationError::WrongLength(chars));
        }
        if let Some(bad) = wiring.chars().find(|c| Letter::from_char(*c).is_none()) {
            return Err(PermutationError::InvalidSymbol(bad));
        }
        Self::build(wiring.as_bytes())
    }

    const fn build(bytes: &[u8]) -> Result<Self, PermutationError> {
        if bytes.len() != ALPHABET_LEN {
            return Err(PermutationError::WrongLength(bytes.len()));
        }

        let mut forward = [0u8; ALPHABET_LEN];
        let mut inverse = [0u8; ALPHABET_LEN];
        let mut seen = [false; ALPHABET_LEN];

        let mut i = 0;
        while i < ALPHABET_LEN {
            let letter = match Letter::from_ascii(bytes[i]) {
                Some(letter) => letter,
                None => return Err(PermutationError::InvalidSymbol(bytes[i] as char)),
            };
            let target = letter.index();
            if seen[target] {
                return Err(PermutationError::DuplicateSymbol(letter.to_char()));
            }
            seen[target] = true;
            forward[i] = target as u8;
            inverse[target] = i as u8;
            i += 1;
        }

        Ok(Self { forward, inverse })
    }

    /// The letter wired to `input`.
    #[must_use]
    pub const fn map(&self, input: Letter) -> Letter {
        Letter::from_index(self.forward[input.index()])
    }

    /// The letter whose wiring leads to `output`.
    #[must_use]
    pub const fn invert(&self, output: Letter) -> Letter {
        Letter::from_index(self.inverse[output.index()])
    }

    #[must_use]
    pub fn has_fixed_point(&self) -> bool {
        Letter::all().any(|l| self.map(l) == l)
    }

    #[must_use]
    pub fn is_involution(&self) -> bool {
        self.forward == self.inverse
    }

    /// The wiring as the 26-letter string it was built from (uppercased).
    #[must_use]
    pub fn wiring(&self) -> String {
        Letter::all().map(|l| self.map(l).to_char()).collect()
    }
}

impl FromStr for PermutationTable {
    type Err = PermutationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for PermutationTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.wiring())
    }
}
