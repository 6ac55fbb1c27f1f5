//! Built-in rotor and reflector wirings.
//!
//! Wirings are checked at compile time by [`PermutationTable::from_static`].
//! Reflector tables are additionally checked for the reflector properties
//! every time a [`Reflector`] is handed out.

use enigma_types::{PermutationTable, ReflectorId, RotorId};

use crate::errors::ConfigurationError;
use crate::reflector::Reflector;
use crate::rotor::RotorDefinition;

/// Rotors I-V, indexed by [`RotorId`].
pub static ROTORS: [RotorDefinition; 5] = [
    RotorDefinition::from_static("I", "EKMFLGDQVZNTOWYHXUSPAIBRCJ", 'Q'),
    RotorDefinition::from_static("II", "AJDKSIRUXBLHWTMCQGZNPYFVOE", 'E'),
    RotorDefinition::from_static("III", "BDFHJLCPRTXVZNYEIWGAKMOUSQ", 'V'),
    RotorDefinition::from_static("IV", "ESOVPZJAYQUIRHXLNFTGKDCMWB", 'J'),
    RotorDefinition::from_static("V", "VZBRGITYUPSDNHLMFCOAQJXKWE", 'Z'),
];

const REFLECTOR_B: PermutationTable = PermutationTable::from_static("YRUHQSLDPXNGOKMIEBFZCWVJAT");
const REFLECTOR_C: PermutationTable = PermutationTable::from_static("FVPJIAOYEDRZXWGCTKUQSBNMHL");

pub fn rotor_definition(id: RotorId) -> Result<&'static RotorDefinition, ConfigurationError> {
    ROTORS
        .get(id.index())
        .ok_or(ConfigurationError::UnknownRotorId {
            id,
            available: ROTORS.len(),
        })
}

pub fn reflector(id: ReflectorId) -> Result<Reflector, ConfigurationError> {
    let table = match id {
        ReflectorId::B => REFLECTOR_B,
        ReflectorId::C => REFLECTOR_C,
    };
    Reflector::new(table)
}
