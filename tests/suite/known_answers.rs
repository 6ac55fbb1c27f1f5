//! Fixed plaintext/ciphertext vectors.

use enigma_core::{CipherMachine, MachineSettings, ReflectorId};

use crate::common::{machine, round_trip};

#[test]
fn aaaaa_with_rotors_i_ii_iii_at_origin() {
    assert_eq!(machine([0, 0, 0], [0, 0, 0]).process("AAAAA"), "BDZGO");
}

#[test]
fn hello_encodes_and_decodes() {
    let mut encoder = CipherMachine::new([0, 1, 2], [0, 0, 0], [0, 0, 0], &[]).unwrap();
    let cipher = encoder.process("HELLO");
    assert_eq!(cipher, "ILBDA");

    let mut decoder = CipherMachine::new([0, 1, 2], [0, 0, 0], [0, 0, 0], &[]).unwrap();
    assert_eq!(decoder.process(&cipher), "HELLO");
}

#[test]
fn reusing_the_stepped_machine_does_not_decode() {
    let mut m = machine([0, 0, 0], [0, 0, 0]);
    let cipher = m.process("HELLO");
    assert_ne!(m.process(&cipher), "HELLO");
}

#[test]
fn punctuation_digits_and_spaces_pass_through() {
    let out = machine([0, 0, 0], [0, 0, 0]).process("HELLO, WORLD! 123");
    assert_eq!(out, "ILBDA, AMPAZ! 123");
}

#[test]
fn lowercase_gives_uppercase_of_same_length() {
    let out = machine([0, 0, 0], [0, 0, 0]).process("hello");
    assert_eq!(out.len(), 5);
    assert!(out.chars().all(|c| c.is_ascii_uppercase()));
    assert_eq!(out, "ILBDA");
}

#[test]
fn ring_settings_change_the_cipher() {
    assert_eq!(machine([0, 0, 0], [1, 1, 1]).process("AAAAA"), "EXTYX");
    assert_eq!(machine([0, 0, 0], [1, 2, 3]).process("TESTING"), "RYOHSDF");
}

#[test]
fn plugboard_and_ring_settings_together() {
    let settings = MachineSettings::new([0, 1, 2], [5, 10, 15], [1, 2, 3], &[['A', 'B'], ['C', 'D']]);
    let (cipher, plain) = round_trip(&settings, "SYMMETRYTEST");
    assert_eq!(cipher, "QMSCIWUMBPPA");
    assert_eq!(plain, "SYMMETRYTEST");
}

#[test]
fn full_sentence_with_six_plugs() {
    let settings = MachineSettings::new(
        [0, 1, 2],
        [7, 14, 21],
        [3, 7, 11],
        &[
            ['A', 'M'],
            ['F', 'I'],
            ['N', 'V'],
            ['P', 'S'],
            ['T', 'U'],
            ['W', 'Z'],
        ],
    );
    let message = "THE QUICK BROWN FOX JUMPS OVER THE LAZY DOG";
    let (cipher, plain) = round_trip(&settings, message);
    assert_eq!(cipher, "BJW WTOKJ MAAMH NVO ZGWIB KGWD PSI FSGQ YEU");
    assert_eq!(plain, message);
}

#[test]
fn other_rotors_and_reflector_c() {
    let settings = MachineSettings::new([3, 4, 0], [11, 4, 16], [5, 5, 5], &[['Q', 'W']])
        .with_reflector(ReflectorId::C);
    let (cipher, plain) = round_trip(&settings, "Rust");
    assert_eq!(cipher, "ZPHJ");
    assert_eq!(plain, "RUST");
}

#[test]
fn no_letter_maps_to_itself_from_origin() {
    for c in 'A'..='Z' {
        let out = machine([0, 0, 0], [0, 0, 0]).process(&c.to_string());
        assert_ne!(out, c.to_string());
    }
}

#[test]
fn changing_one_start_position_changes_output() {
    let a = machine([0, 0, 0], [0, 0, 0]).process("TEST");
    let b = machine([1, 0, 0], [0, 0, 0]).process("TEST");
    assert_eq!(a, "OLPN");
    assert_eq!(b, "LJXE");
}
