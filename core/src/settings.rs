use enigma_types::{ReflectorId, RotorId};
use serde::{Deserialize, Serialize};

/// Unvalidated machine configuration.
///
/// Positions and rings are raw `u32` values; out-of-range ones are rejected
/// at construction.
///
/// Arrays are ordered `[left, middle, right]`. Validation happens in
/// [`CipherMachine::from_settings`](crate::CipherMachine::from_settings).
///
/// ```toml
/// rotors = ["I", "II", "III"]
/// positions = [0, 0, 21]
/// rings = [0, 0, 0]
/// plugboard = [["A", "B"], ["C", "D"]]
/// reflector = "B"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineSettings {
    pub rotors: [RotorId; 3],
    pub positions: [u32; 3],
    pub rings: [u32; 3],
    pub plugboard: Vec<[char; 2]>,
    pub reflector: ReflectorId,
}

impl Default for MachineSettings {
    fn default() -> Self {
        Self {
            rotors: [RotorId::new(0), RotorId::new(1), RotorId::new(2)],
            positions: [0; 3],
            rings: [0; 3],
            plugboard: Vec::new(),
            reflector: ReflectorId::B,
        }
    }
}

impl MachineSettings {
    /// Settings from the positional construction arguments, with reflector B.
    #[must_use]
    pub fn new(
        rotor_ids: [u8; 3],
        positions: [u8; 3],
        ring_settings: [u8; 3],
        plugboard_pairs: &[[char; 2]],
    ) -> Self {
        Self {
            rotors: rotor_ids.map(RotorId::new),
            positions: positions.map(u32::from),
            rings: ring_settings.map(u32::from),
            plugboard: plugboard_pairs.to_vec(),
            reflector: ReflectorId::B,
        }
    }

    #[must_use]
    pub fn with_reflector(mut self, reflector: ReflectorId) -> Self {
        self.reflector = reflector;
        self
    }
}
