//! Command-line override values and their parsers.

use enigma_core::MachineSettings;
use enigma_types::{Letter, ReflectorId, RotorId, RotorIdParseError, RotorSetting};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OverrideError {
    #[error("expected three comma-separated numbers or three letters (got {0:?})")]
    Triple(String),
    #[error("plugboard pair {0:?} must be exactly two letters")]
    PlugPair(String),
    #[error("expected three rotors separated by commas or dashes (got {0:?})")]
    RotorCount(String),
    #[error(transparent)]
    Rotor(#[from] RotorIdParseError),
}

/// Values given on the command line. `None` leaves the lower layer alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    pub rotors: Option<[RotorId; 3]>,
    pub positions: Option<[u32; 3]>,
    pub rings: Option<[u32; 3]>,
    pub plugboard: Option<Vec<[char; 2]>>,
    pub reflector: Option<ReflectorId>,
}

impl CliOverrides {
    pub fn apply(&self, settings: &mut MachineSettings) {
        if let Some(rotors) = self.rotors {
            settings.rotors = rotors;
        }
        if let Some(positions) = self.positions {
            settings.positions = positions;
        }
        if let Some(rings) = self.rings {
            settings.rings = rings;
        }
        if let Some(plugboard) = &self.plugboard {
            settings.plugboard.clone_from(plugboard);
        }
        if let Some(reflector) = self.reflector {
            settings.reflector = reflector;
        }
    }
}

/// Parse `"I,II,III"`, `"I-II-III"` or `"0,1,2"`.
pub fn parse_rotors(raw: &str) -> Result<[RotorId; 3], OverrideError> {
    let ids = raw
        .split([',', '-'])
        .map(RotorId::parse)
        .collect::<Result<Vec<_>, _>>()?;
    ids.try_into()
        .map_err(|_| OverrideError::RotorCount(raw.to_string()))
}

/// Parse positions or ring settings: `"0,0,21"` or `"AAV"`.
///
/// Numbers are not range-checked; the machine does that.
pub fn parse_triple(raw: &str) -> Result<[u32; 3], OverrideError> {
    let trimmed = raw.trim();
    let err = || OverrideError::Triple(raw.to_string());

    let values: Vec<u32> = if trimmed.contains(',') {
        trimmed
            .split(',')
            .map(|part| part.trim().parse::<u32>().map_err(|_| err()))
            .collect::<Result<_, _>>()?
    } else {
        trimmed
            .chars()
            .map(|c| {
                Letter::from_char(c)
                    .map(|l| u32::from(RotorSetting::from_letter(l).value()))
                    .ok_or_else(err)
            })
            .collect::<Result<_, _>>()?
    };

    values.try_into().map_err(|_| err())
}

/// Parse a whitespace-separated list of pairs: `"AB CD EF"`.
///
/// Only the shape is checked here; reuse of a letter is rejected when the
/// machine is built.
pub fn parse_plugboard(raw: &str) -> Result<Vec<[char; 2]>, OverrideError> {
    raw.split_whitespace().map(parse_pair).collect()
}

pub(crate) fn parse_pair(raw: &str) -> Result<[char; 2], OverrideError> {
    let mut chars = raw.trim().chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(a), Some(b), None) if a.is_ascii_alphabetic() && b.is_ascii_alphabetic() => {
            Ok([a.to_ascii_uppercase(), b.to_ascii_uppercase()])
        }
        _ => Err(OverrideError::PlugPair(raw.to_string())),
    }
}
