//! Core value types for the Enigma engine.
//!
//! This crate contains pure value types with no IO and no mutable state.
//! Everything here is `Copy` and can be shared freely between machine instances.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory

mod ids;
mod permutation;

pub use ids::{ReflectorId, ReflectorIdParseError, RotorId, RotorIdParseError};
pub use permutation::{PermutationError, PermutationTable};

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Number of symbols in the machine alphabet.
pub const ALPHABET_LEN: usize = 26;

const ALPHABET_LEN_U8: u8 = ALPHABET_LEN as u8;

// ============================================================================
// Letter
// ============================================================================

/// One of the 26 uppercase Latin letters, stored as its alphabet index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Letter(u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{0:?} is not a letter A-Z")]
pub struct InvalidLetter(pub char);

impl Letter {
    /// Wraps any index onto the alphabet.
    #[must_use]
    pub const fn from_index(index: u8) -> Self {
        Self(index % ALPHABET_LEN_U8)
    }

    /// ASCII letters of either case; `None` for everything else.
    #[must_use]
    pub const fn from_ascii(byte: u8) -> Option<Self> {
        if byte.is_ascii_alphabetic() {
            Some(Self(byte.to_ascii_uppercase() - b'A'))
        } else {
            None
        }
    }

    /// Case-folds ASCII letters. Non-ASCII letters are not part of the alphabet.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        if c.is_ascii() {
            Self::from_ascii(c as u8)
        } else {
            None
        }
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[must_use]
    pub const fn to_char(self) -> char {
        (b'A' + self.0) as char
    }

    /// Moves `by` places forward around the alphabet.
    #[must_use]
    pub const fn shift(self, by: u8) -> Self {
        Self((self.0 + by % ALPHABET_LEN_U8) % ALPHABET_LEN_U8)
    }

    /// Moves `by` places backward around the alphabet.
    #[must_use]
    pub const fn unshift(self, by: u8) -> Self {
        Self((self.0 + ALPHABET_LEN_U8 - by % ALPHABET_LEN_U8) % ALPHABET_LEN_U8)
    }

    /// A through Z in order.
    pub fn all() -> impl Iterator<Item = Letter> {
        (0..ALPHABET_LEN_U8).map(Self)
    }
}

impl TryFrom<char> for Letter {
    type Error = InvalidLetter;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        Self::from_char(value).ok_or(InvalidLetter(value))
    }
}

impl From<Letter> for char {
    fn from(value: Letter) -> Self {
        value.to_char()
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

// ============================================================================
// Rotor Settings
// ============================================================================

/// A rotor position or ring setting, always within 0-25.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct RotorSetting(u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("setting {0} is outside 0-25")]
pub struct SettingOutOfRange(pub u8);

impl RotorSetting {
    pub const MAX: u8 = ALPHABET_LEN_U8 - 1;

    pub const fn new(value: u8) -> Result<Self, SettingOutOfRange> {
        if value > Self::MAX {
            return Err(SettingOutOfRange(value));
        }
        Ok(Self(value))
    }

    /// The setting whose alphabet index is `letter` (A=0 ... Z=25).
    #[must_use]
    pub const fn from_letter(letter: Letter) -> Self {
        Self(letter.0)
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn as_letter(self) -> Letter {
        Letter(self.0)
    }

    /// One step forward, wrapping Z back to A.
    #[must_use]
    pub const fn advanced(self) -> Self {
        Self((self.0 + 1) % ALPHABET_LEN_U8)
    }

    /// Offset between this setting and `other`, taken modulo 26.
    #[must_use]
    pub const fn offset_from(self, other: RotorSetting) -> u8 {
        (self.0 + ALPHABET_LEN_U8 - other.0) % ALPHABET_LEN_U8
    }
}

impl TryFrom<u8> for RotorSetting {
    type Error = SettingOutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RotorSetting> for u8 {
    fn from(value: RotorSetting) -> Self {
        value.0
    }
}

impl fmt::Display for RotorSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
