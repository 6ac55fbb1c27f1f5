//! The three-rotor cipher machine.
//!
//! # Stepping
//!
//! Before every letter the rotors advance. Notch states are sampled before
//! anything moves, then three independent guarded steps run:
//!
//! 1. the right rotor always steps;
//! 2. the middle rotor steps if either the right or the middle rotor was on
//!    its notch;
//! 3. the left rotor steps if the middle rotor was on its notch.
//!
//! Rule 2 firing on the middle rotor's own notch is the double step: the
//! middle rotor carries the left rotor and advances again itself on the same
//! key press.

use enigma_types::{Letter, ReflectorId, RotorSetting};

use crate::errors::{ConfigurationError, RotorSlot, SettingKind};
use crate::plugboard::Plugboard;
use crate::reflector::Reflector;
use crate::registry;
use crate::rotor::Rotor;
use crate::settings::MachineSettings;

/// A configured machine for one message session.
///
/// Processing mutates rotor positions, so decoding needs a fresh machine
/// built from the same settings as the one that encoded.
#[derive(Debug, Clone)]
pub struct CipherMachine {
    left: Rotor<'static>,
    middle: Rotor<'static>,
    right: Rotor<'static>,
    reflector: Reflector,
    reflector_id: ReflectorId,
    plugboard: Plugboard,
}

impl CipherMachine {
    /// Build from positional arguments: rotor ids, positions and ring
    /// settings as `[left, middle, right]`, plus plugboard pairs.
    /// Uses reflector B.
    pub fn new(
        rotor_ids: [u8; 3],
        positions: [u8; 3],
        ring_settings: [u8; 3],
        plugboard_pairs: &[[char; 2]],
    ) -> Result<Self, ConfigurationError> {
        Self::from_settings(&MachineSettings::new(
            rotor_ids,
            positions,
            ring_settings,
            plugboard_pairs,
        ))
    }

    pub fn from_settings(settings: &MachineSettings) -> Result<Self, ConfigurationError> {
        let left = build_rotor(settings, RotorSlot::Left)?;
        let middle = build_rotor(settings, RotorSlot::Middle)?;
        let right = build_rotor(settings, RotorSlot::Right)?;
        let plugboard = Plugboard::new(&settings.plugboard)?;
        let reflector = registry::reflector(settings.reflector)?;

        let rotor_names = settings.rotors.map(|id| id.to_string()).join("-");
        tracing::debug!(
            rotors = %rotor_names,
            positions = ?settings.positions,
            rings = ?settings.rings,
            plugs = plugboard.pairs().len(),
            reflector = %settings.reflector,
            "Cipher machine configured"
        );

        Ok(Self {
            left,
            middle,
            right,
            reflector,
            reflector_id: settings.reflector,
            plugboard,
        })
    }

    /// Current positions as `[left, middle, right]`.
    #[must_use]
    pub fn positions(&self) -> [RotorSetting; 3] {
        [
            self.left.position(),
            self.middle.position(),
            self.right.position(),
        ]
    }

    /// The rotor stack as `[left, middle, right]`.
    #[must_use]
    pub fn rotors(&self) -> [&Rotor<'static>; 3] {
        [&self.left, &self.middle, &self.right]
    }

    #[must_use]
    pub fn rotor(&self, slot: RotorSlot) -> &Rotor<'static> {
        match slot {
            RotorSlot::Left => &self.left,
            RotorSlot::Middle => &self.middle,
            RotorSlot::Right => &self.right,
        }
    }

    #[must_use]
    pub fn plugboard(&self) -> &Plugboard {
        &self.plugboard
    }

    #[must_use]
    pub fn reflector_id(&self) -> ReflectorId {
        self.reflector_id
    }

    /// Advance the rotors once, as happens before every letter.
    pub fn step_rotors(&mut self) {
        let right_at_notch = self.right.at_notch();
        let middle_at_notch = self.middle.at_notch();

        self.right.step();

        if middle_at_notch || right_at_notch {
            self.middle.step();
        }

        if middle_at_notch {
            self.left.step();
        }

        tracing::trace!(
            positions = ?self.positions().map(RotorSetting::value),
            double_step = middle_at_notch,
            "Rotors stepped"
        );
    }

    /// Step, then send one letter through the full signal path.
    pub fn encode_letter(&mut self, letter: Letter) -> Letter {
        self.step_rotors();
        self.substitute(letter)
    }

    /// Encode (or decode) a message.
    ///
    /// Letters are case-folded to uppercase and each one steps the rotors.
    /// Every other character is copied through unchanged and does not step.
    pub fn process(&mut self, text: &str) -> String {
        text.chars()
            .map(|c| match Letter::from_char(c) {
                Some(letter) => self.encode_letter(letter).to_char(),
                None => c,
            })
            .collect()
    }

    fn substitute(&self, letter: Letter) -> Letter {
        let mut c = self.plugboard.swap(letter);
        c = self.right.forward(c);
        c = self.middle.forward(c);
        c = self.left.forward(c);
        c = self.reflector.reflect(c);
        c = self.left.backward(c);
        c = self.middle.backward(c);
        c = self.right.backward(c);
        self.plugboard.swap(c)
    }
}

fn build_rotor(
    settings: &MachineSettings,
    slot: RotorSlot,
) -> Result<Rotor<'static>, ConfigurationError> {
    let i = slot.index();
    let definition = registry::rotor_definition(settings.rotors[i])?;
    let position = checked_setting(settings.positions[i], SettingKind::Position, slot)?;
    let ring_setting = checked_setting(settings.rings[i], SettingKind::RingSetting, slot)?;
    Ok(Rotor::new(definition, position, ring_setting))
}

fn checked_setting(
    value: u32,
    kind: SettingKind,
    slot: RotorSlot,
) -> Result<RotorSetting, ConfigurationError> {
    u8::try_from(value)
        .ok()
        .and_then(|narrow| RotorSetting::new(narrow).ok())
        .ok_or(ConfigurationError::OutOfRangeSetting { kind, slot, value })
}
