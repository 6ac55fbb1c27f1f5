//! Construction-time errors.
//!
//! Every way a machine can be misconfigured is caught when it is built;
//! a constructed [`CipherMachine`](crate::CipherMachine) never fails.

use std::fmt;

use enigma_types::{Letter, RotorId};
use thiserror::Error;

/// Position of a rotor in the three-rotor stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotorSlot {
    Left,
    Middle,
    Right,
}

impl RotorSlot {
    /// Index into `[left, middle, right]` arrays.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            RotorSlot::Left => 0,
            RotorSlot::Middle => 1,
            RotorSlot::Right => 2,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            RotorSlot::Left => "left",
            RotorSlot::Middle => "middle",
            RotorSlot::Right => "right",
        }
    }
}

impl fmt::Display for RotorSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which per-rotor setting was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingKind {
    Position,
    RingSetting,
}

impl fmt::Display for SettingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingKind::Position => f.write_str("position"),
            SettingKind::RingSetting => f.write_str("ring setting"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlugboardDefect {
    #[error("{0} appears in more than one pair")]
    ReusedLetter(Letter),
    #[error("{0} is paired with itself")]
    SelfPair(Letter),
    #[error("{0:?} is not a letter A-Z")]
    InvalidSymbol(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReflectorDefect {
    #[error("{0} maps to itself")]
    FixedPoint(Letter),
    #[error("reflecting {0} twice does not return {0}")]
    NotInvolutive(Letter),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("unknown rotor {id} (registry has {available} rotors)")]
    UnknownRotorId { id: RotorId, available: usize },

    #[error("{kind} {value} for {slot} rotor is outside 0-25")]
    OutOfRangeSetting {
        kind: SettingKind,
        slot: RotorSlot,
        value: u32,
    },

    #[error("invalid plugboard pairing: {0}")]
    InvalidPlugboardPairing(#[from] PlugboardDefect),

    #[error("invalid reflector: {0}")]
    InvalidReflector(#[from] ReflectorDefect),
}
