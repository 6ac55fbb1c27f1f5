//! Configuration for the Enigma CLI.
//!
//! Settings are resolved in three layers, later layers winning:
//!
//! 1. [`MachineSettings::default`] (rotors I-II-III, all zero, reflector B)
//! 2. the `[machine]` table of `~/.enigma/config.toml` (or `--config PATH`)
//! 3. command-line overrides ([`CliOverrides`])
//!
//! The config file is only ever read.

mod overrides;

pub use overrides::{CliOverrides, OverrideError, parse_plugboard, parse_rotors, parse_triple};

use std::path::{Path, PathBuf};

use enigma_core::{MachineSettings, ReflectorId, RotorId};
use enigma_types::{Letter, RotorSetting};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Default, Deserialize)]
pub struct EnigmaConfig {
    pub machine: Option<MachineConfig>,
}

/// The `[machine]` table. Every field is optional.
///
/// ```toml
/// [machine]
/// rotors = ["I", "II", "III"]
/// positions = [0, 0, "V"]
/// rings = [0, 0, 0]
/// plugboard = ["AB", ["C", "D"]]
/// reflector = "B"
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct MachineConfig {
    pub rotors: Option<[RotorId; 3]>,
    pub positions: Option<[SettingValue; 3]>,
    pub rings: Option<[SettingValue; 3]>,
    pub plugboard: Option<Vec<PlugPair>>,
    pub reflector: Option<ReflectorId>,
}

/// A position or ring setting written as a number or as a letter.
///
/// Numbers are not range-checked here; the machine reports out-of-range values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Index(u32),
    Letter(Letter),
}

impl SettingValue {
    #[must_use]
    pub fn value(self) -> u32 {
        match self {
            SettingValue::Index(index) => index,
            SettingValue::Letter(letter) => RotorSetting::from_letter(letter).value().into(),
        }
    }
}

/// A plugboard cable written as `"AB"` or `["A", "B"]`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum PlugPair {
    Pair([char; 2]),
    Text(String),
}

impl PlugPair {
    pub fn to_pair(&self) -> Result<[char; 2], OverrideError> {
        match self {
            PlugPair::Pair(pair) => Ok(*pair),
            PlugPair::Text(text) => overrides::parse_pair(text),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid value in config at {}: {source}", path.display())]
    Value {
        path: PathBuf,
        source: OverrideError,
    },
}

impl ConfigError {
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. }
            | ConfigError::Parse { path, .. }
            | ConfigError::Value { path, .. } => path,
        }
    }
}

impl EnigmaConfig {
    /// Load the default config file. A missing file is not an error.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let path = match config_path() {
            Some(path) => path,
            None => return Ok(None),
        };
        if !path.exists() {
            return Ok(None);
        }
        Self::load_from(&path).map(Some)
    }

    /// Load a specific config file, which must exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        let config: Self = match toml::from_str(&content) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                return Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        // Surface malformed plug pairs now rather than when the machine is built.
        if let Some(plugboard) = config.machine.as_ref().and_then(|m| m.plugboard.as_ref()) {
            for pair in plugboard {
                pair.to_pair().map_err(|source| ConfigError::Value {
                    path: path.to_path_buf(),
                    source,
                })?;
            }
        }

        tracing::debug!(path = %path.display(), "Config loaded");
        Ok(config)
    }

    /// Merge defaults, this file's `[machine]` table, and `overrides`.
    pub fn machine_settings(
        &self,
        overrides: &CliOverrides,
    ) -> Result<MachineSettings, OverrideError> {
        resolve_settings(self.machine.as_ref(), overrides)
    }
}

/// Merge defaults, an optional `[machine]` table, and `overrides`.
pub fn resolve_settings(
    machine: Option<&MachineConfig>,
    overrides: &CliOverrides,
) -> Result<MachineSettings, OverrideError> {
    let mut settings = MachineSettings::default();

    if let Some(machine) = machine {
        if let Some(rotors) = machine.rotors {
            settings.rotors = rotors;
        }
        if let Some(positions) = machine.positions {
            settings.positions = positions.map(SettingValue::value);
        }
        if let Some(rings) = machine.rings {
            settings.rings = rings.map(SettingValue::value);
        }
        if let Some(plugboard) = &machine.plugboard {
            settings.plugboard = plugboard
                .iter()
                .map(PlugPair::to_pair)
                .collect::<Result<_, _>>()?;
        }
        if let Some(reflector) = machine.reflector {
            settings.reflector = reflector;
        }
    }

    overrides.apply(&mut settings);
    Ok(settings)
}

#[must_use]
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".enigma").join("config.toml"))
}
