//! End-to-end runs of the `enigma` binary.

use std::fs;

use tempfile::tempdir;

use crate::common::{run_enigma, stdout_of};

#[test]
fn encodes_arguments_with_defaults() {
    let home = tempdir().unwrap();
    let output = run_enigma(home.path(), &["HELLO"], None);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "ILBDA\n");
}

#[test]
fn joins_words_and_keeps_punctuation() {
    let home = tempdir().unwrap();
    let output = run_enigma(home.path(), &["hello,", "world!", "123"], None);
    assert_eq!(stdout_of(&output), "ILBDA, AMPAZ! 123\n");
}

#[test]
fn stdin_round_trip_keeps_newlines() {
    let home = tempdir().unwrap();
    let args = ["--positions", "5,10,15", "--rings", "BCD", "--plugboard", "AB CD"];

    let encoded = run_enigma(home.path(), &args, Some("SYMMETRY\nTEST\n"));
    assert!(encoded.status.success());
    let cipher = stdout_of(&encoded);
    assert_eq!(cipher, "QMSCIWUM\nBPPA\n");

    let decoded = run_enigma(home.path(), &args, Some(&cipher));
    assert_eq!(stdout_of(&decoded), "SYMMETRY\nTEST\n");
}

#[test]
fn default_config_file_is_picked_up_from_home() {
    let home = tempdir().unwrap();
    let dir = home.path().join(".enigma");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("config.toml"), "[machine]\nreflector = \"C\"\n").unwrap();

    let output = run_enigma(home.path(), &["AAAAA"], None);
    assert_eq!(stdout_of(&output), "PJBVZ\n");
}

#[test]
fn flags_override_config_file() {
    let home = tempdir().unwrap();
    let config = home.path().join("machine.toml");
    fs::write(&config, "[machine]\nreflector = \"C\"\n").unwrap();

    let output = run_enigma(
        home.path(),
        &["--config", config.to_str().unwrap(), "--reflector", "B", "AAAAA"],
        None,
    );
    assert_eq!(stdout_of(&output), "BDZGO\n");
}

#[test]
fn show_positions_reports_final_state() {
    let home = tempdir().unwrap();
    let output = run_enigma(
        home.path(),
        &["--positions", "AAU", "--show-positions", "AAA"],
        None,
    );
    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    // U -> V -> W (carry) -> X
    assert!(stderr.contains("positions: ABX (0,1,23)"), "{stderr}");
}

#[test]
fn invalid_configuration_fails() {
    let home = tempdir().unwrap();
    for args in [
        &["--positions", "0,0,26", "X"][..],
        &["--rotors", "I,II,VI", "X"][..],
        &["--plugboard", "AB BC", "X"][..],
        &["--config", "/nonexistent/enigma.toml", "X"][..],
    ] {
        let output = run_enigma(home.path(), args, None);
        assert!(!output.status.success(), "{args:?} should fail");
        assert!(output.stdout.is_empty());
    }
}

#[test]
fn large_position_is_reported_as_out_of_range() {
    let home = tempdir().unwrap();
    let output = run_enigma(home.path(), &["--positions", "0,0,300", "X"], None);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("position 300 for right rotor is outside 0-25"), "{stderr}");
}
