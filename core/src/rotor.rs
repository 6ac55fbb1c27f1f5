use enigma_types::{Letter, PermutationTable, RotorSetting};

/// Wiring and turnover notch of a rotor type.
///
/// Definitions are immutable and shared by reference between every rotor
/// (and every machine) that uses the same type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotorDefinition {
    name: &'static str,
    wiring: PermutationTable,
    notch: Letter,
}

impl RotorDefinition {
    #[must_use]
    pub const fn new(name: &'static str, wiring: PermutationTable, notch: Letter) -> Self {
        Self {
            name,
            wiring,
            notch,
        }
    }

    /// Compile-time checked definition for registry data.
    #[must_use]
    pub const fn from_static(name: &'static str, wiring: &'static str, notch: char) -> Self {
        let notch = match Letter::from_ascii(notch as u8) {
            Some(letter) => letter,
            None => panic!("rotor notch must be a letter"),
        };
        Self::new(name, PermutationTable::from_static(wiring), notch)
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub const fn wiring(&self) -> &PermutationTable {
        &self.wiring
    }

    #[must_use]
    pub const fn notch(&self) -> Letter {
        self.notch
    }
}

/// A rotor instance: a shared definition plus its ring setting and
/// current rotation.
///
/// `position` is the only mutable state and changes only through [`Rotor::step`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotor<'d> {
    definition: &'d RotorDefinition,
    position: RotorSetting,
    ring_setting: RotorSetting,
}

impl<'d> Rotor<'d> {
    #[must_use]
    pub const fn new(
        definition: &'d RotorDefinition,
        position: RotorSetting,
        ring_setting: RotorSetting,
    ) -> Self {
        Self {
            definition,
            position,
            ring_setting,
        }
    }

    #[must_use]
    pub const fn definition(&self) -> &'d RotorDefinition {
        self.definition
    }

    #[must_use]
    pub const fn position(&self) -> RotorSetting {
        self.position
    }

    #[must_use]
    pub const fn ring_setting(&self) -> RotorSetting {
        self.ring_setting
    }

    /// Right-to-left pass: enter shifted by `position - ring`, exit de-shifted.
    #[must_use]
    pub fn forward(&self, input: Letter) -> Letter {
        let offset = self.offset();
        self.definition
            .wiring
            .map(input.shift(offset))
            .unshift(offset)
    }

    /// Left-to-right pass through the inverse wiring.
    #[must_use]
    pub fn backward(&self, input: Letter) -> Letter {
        let offset = self.offset();
        self.definition
            .wiring
            .invert(input.shift(offset))
            .unshift(offset)
    }

    pub fn step(&mut self) {
        self.position = self.position.advanced();
    }

    /// Compares the raw position with the notch letter; the ring setting
    /// does not move the notch.
    #[must_use]
    pub fn at_notch(&self) -> bool {
        self.position.as_letter() == self.definition.notch
    }

    fn offset(&self) -> u8 {
        self.position.offset_from(self.ring_setting)
    }
}
