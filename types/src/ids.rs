use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

const ROMAN: [&str; 8] = ["I", "II", "III", "IV", "V", "VI", "VII", "VIII"];

/// Selects a rotor type from the registry by position (0 = I).
///
/// Whether the id names a rotor that actually exists is decided by the
/// registry at machine construction, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RotorIdRepr", into = "u8")]
pub struct RotorId(u8);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized rotor {0:?} (expected an index or a Roman numeral)")]
pub struct RotorIdParseError(pub String);

#[doc(hidden)]
#[derive(Deserialize)]
#[serde(untagged)]
pub enum RotorIdRepr {
    Index(u8),
    Name(String),
}

impl RotorId {
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Parse `"2"`, `"III"` or `"iii"`.
    pub fn parse(raw: &str) -> Result<Self, RotorIdParseError> {
        let trimmed = raw.trim();
        if let Ok(index) = trimmed.parse::<u8>() {
            return Ok(Self(index));
        }
        ROMAN
            .iter()
            .position(|name| name.eq_ignore_ascii_case(trimmed))
            .map(|index| Self(index as u8))
            .ok_or_else(|| RotorIdParseError(trimmed.to_string()))
    }
}

impl TryFrom<RotorIdRepr> for RotorId {
    type Error = RotorIdParseError;

    fn try_from(value: RotorIdRepr) -> Result<Self, Self::Error> {
        match value {
            RotorIdRepr::Index(index) => Ok(Self(index)),
            RotorIdRepr::Name(name) => Self::parse(&name),
        }
    }
}

impl From<RotorId> for u8 {
    fn from(value: RotorId) -> Self {
        value.0
    }
}

impl FromStr for RotorId {
    type Err = RotorIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for RotorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match ROMAN.get(self.index()) {
            Some(name) => f.write_str(name),
            None => write!(f, "#{}", self.0),
        }
    }
}

/// Reflector (Umkehrwalze) variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ReflectorId {
    #[default]
    #[serde(alias = "b")]
    B,
    #[serde(alias = "c")]
    C,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown reflector {0:?} (expected B or C)")]
pub struct ReflectorIdParseError(pub String);

impl ReflectorId {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ReflectorId::B => "B",
            ReflectorId::C => "C",
        }
    }

    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "B" | "UKW-B" => Some(ReflectorId::B),
            "C" | "UKW-C" => Some(ReflectorId::C),
            _ => None,
        }
    }

    #[must_use]
    pub fn all() -> &'static [ReflectorId] {
        &[ReflectorId::B, ReflectorId::C]
    }
}

impl FromStr for ReflectorId {
    type Err = ReflectorIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ReflectorIdParseError(s.to_string()))
    }
}

impl fmt::Display for ReflectorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
