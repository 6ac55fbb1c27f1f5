//! Shared test utilities and fixtures
//!
//! Common infrastructure for integration tests.

#![allow(dead_code)]

use std::path::Path;
use std::process::{Command, Output, Stdio};
use std::io::Write;

use enigma_core::{CipherMachine, MachineSettings};

/// Rotors I-II-III, reflector B, no plugboard.
pub fn machine(positions: [u8; 3], rings: [u8; 3]) -> CipherMachine {
    CipherMachine::new([0, 1, 2], positions, rings, &[]).expect("valid settings")
}

pub fn encode(settings: &MachineSettings, message: &str) -> String {
    CipherMachine::from_settings(settings)
        .expect("valid settings")
        .process(message)
}

/// Encode with one machine, decode with a fresh one built from the same settings.
pub fn round_trip(settings: &MachineSettings, message: &str) -> (String, String) {
    let cipher = encode(settings, message);
    let plain = encode(settings, &cipher);
    (cipher, plain)
}

pub fn positions(machine: &CipherMachine) -> [u8; 3] {
    machine.positions().map(u8::from)
}

/// Run the `enigma` binary with `home` as its home directory so no real
/// user config is picked up.
pub fn run_enigma(home: &Path, args: &[&str], stdin: Option<&str>) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_enigma"))
        .args(args)
        .env("HOME", home)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn enigma");

    {
        let mut pipe = child.stdin.take().expect("stdin piped");
        if let Some(input) = stdin {
            pipe.write_all(input.as_bytes()).expect("write stdin");
        }
    }

    child.wait_with_output().expect("wait for enigma")
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("utf-8 stdout")
}
