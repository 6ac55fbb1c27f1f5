//! Config file and override resolution feeding a working machine.

use std::fs;

use enigma_config::{CliOverrides, EnigmaConfig, resolve_settings};
use enigma_core::{CipherMachine, ConfigurationError, ReflectorId};
use tempfile::tempdir;

use crate::common::encode;

#[test]
fn config_file_builds_expected_machine() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[machine]
rotors = ["I", "II", "III"]
positions = ["H", "O", "V"]
rings = [3, 7, 11]
plugboard = ["AM", "FI", "NV", "PS", "TU", "WZ"]
"#,
    )
    .unwrap();

    let config = EnigmaConfig::load_from(&path).unwrap();
    let settings = config.machine_settings(&CliOverrides::default()).unwrap();
    assert_eq!(settings.positions, [7, 14, 21]);
    assert_eq!(settings.reflector, ReflectorId::B);
    assert_eq!(encode(&settings, "THE QUICK"), "BJW WTOKJ");
}

#[test]
fn overrides_apply_without_a_config_file() {
    let overrides = CliOverrides {
        positions: Some([0, 0, 21]),
        ..CliOverrides::default()
    };
    let settings = resolve_settings(None, &overrides).unwrap();
    let mut machine = CipherMachine::from_settings(&settings).unwrap();
    machine.step_rotors();
    assert_eq!(machine.positions().map(u8::from), [0, 1, 22]);
}

#[test]
fn reused_plug_in_config_fails_at_construction() {
    let config: EnigmaConfig = toml::from_str("[machine]\nplugboard = [\"AB\", \"BC\"]\n").unwrap();
    let settings = config.machine_settings(&CliOverrides::default()).unwrap();
    assert!(matches!(
        CipherMachine::from_settings(&settings),
        Err(ConfigurationError::InvalidPlugboardPairing(_))
    ));
}

#[test]
fn unknown_rotor_in_config_fails_at_construction() {
    let config: EnigmaConfig = toml::from_str("[machine]\nrotors = [\"I\", \"II\", \"VIII\"]\n").unwrap();
    let settings = config.machine_settings(&CliOverrides::default()).unwrap();
    assert!(matches!(
        CipherMachine::from_settings(&settings),
        Err(ConfigurationError::UnknownRotorId { .. })
    ));
}
