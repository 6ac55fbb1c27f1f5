//! Rotor cipher engine.
//!
//! A [`CipherMachine`] composes three [`Rotor`]s, a [`Plugboard`] and a
//! [`Reflector`] into a reciprocal substitution cipher: processing the output
//! of a machine with a freshly built machine of the same configuration yields
//! the original text.
//!
//! Per letter the signal path is:
//!
//! ```text
//! step -> plugboard -> right -> middle -> left -> reflector
//!                   <- right <- middle <- left <-
//!      -> plugboard -> output
//! ```
//!
//! Rotor wirings and reflector tables are `'static` registry data shared by
//! every machine; the only per-machine state is the three rotor positions.

mod errors;
mod machine;
mod plugboard;
mod reflector;
pub mod registry;
mod rotor;
mod settings;

pub use errors::{ConfigurationError, PlugboardDefect, ReflectorDefect, RotorSlot, SettingKind};
pub use machine::CipherMachine;
pub use plugboard::{Plugboard, plugboard_swap};
pub use reflector::Reflector;
pub use rotor::{Rotor, RotorDefinition};
pub use settings::MachineSettings;

pub use enigma_types::{Letter, ReflectorId, RotorId, RotorSetting};
