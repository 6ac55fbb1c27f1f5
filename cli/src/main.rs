//! Enigma CLI - encode or decode a message with a configured rotor machine.
//!
//! ```text
//! main() -> resolve settings (defaults < config file < flags)
//!        -> CipherMachine::from_settings -> process(text) -> stdout
//! ```
//!
//! One machine is built per run, so a whole message (all TEXT words, or all
//! of stdin) is a single session. Decoding is running the same command on the
//! ciphertext. Logs go to stderr so stdout carries only the result.

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use enigma_config::{CliOverrides, EnigmaConfig, parse_plugboard, parse_rotors, parse_triple};
use enigma_core::{CipherMachine, ReflectorId, RotorSetting};

#[derive(Parser)]
#[command(name = "enigma")]
#[command(about = "Encode or decode text with a three-rotor Enigma machine")]
struct Cli {
    /// Config file (default: ~/.enigma/config.toml when it exists)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Rotor order, left to right (e.g. I,II,III or 0,1,2)
    #[arg(long)]
    rotors: Option<String>,
    /// Start positions, left to right (e.g. 0,0,21 or AAV)
    #[arg(long)]
    positions: Option<String>,
    /// Ring settings, left to right (e.g. 0,0,0 or AAA)
    #[arg(long)]
    rings: Option<String>,
    /// Plugboard pairs separated by spaces (e.g. "AB CD EF")
    #[arg(long)]
    plugboard: Option<String>,
    /// Reflector: B or C
    #[arg(long)]
    reflector: Option<String>,
    /// Print the final rotor positions to stderr
    #[arg(long)]
    show_positions: bool,
    /// Message to process (read from stdin when omitted)
    text: Vec<String>,
}

impl Cli {
    fn overrides(&self) -> Result<CliOverrides> {
        let reflector = self
            .reflector
            .as_deref()
            .map(str::parse::<ReflectorId>)
            .transpose()
            .context("invalid --reflector")?;

        Ok(CliOverrides {
            rotors: self
                .rotors
                .as_deref()
                .map(parse_rotors)
                .transpose()
                .context("invalid --rotors")?,
            positions: self
                .positions
                .as_deref()
                .map(parse_triple)
                .transpose()
                .context("invalid --positions")?,
            rings: self
                .rings
                .as_deref()
                .map(parse_triple)
                .transpose()
                .context("invalid --rings")?,
            plugboard: self
                .plugboard
                .as_deref()
                .map(parse_plugboard)
                .transpose()
                .context("invalid --plugboard")?,
            reflector,
        })
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .unwrap_or_else(|_| EnvFilter::new("off"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(env_filter)
        .init();
}

fn load_config(explicit: Option<&Path>) -> Result<Option<EnigmaConfig>> {
    match explicit {
        Some(path) => EnigmaConfig::load_from(path)
            .map(Some)
            .context("could not load --config file"),
        None => EnigmaConfig::load().context("could not load default config file"),
    }
}

fn read_stdin() -> Result<String> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read message from stdin")?;
    Ok(input)
}

fn format_positions(positions: [RotorSetting; 3]) -> String {
    let letters: String = positions.iter().map(|p| p.as_letter().to_char()).collect();
    let numbers: Vec<String> = positions.iter().map(ToString::to_string).collect();
    format!("{letters} ({})", numbers.join(","))
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let overrides = cli.overrides()?;
    let config = load_config(cli.config.as_deref())?;

    let settings = enigma_config::resolve_settings(
        config.as_ref().and_then(|c| c.machine.as_ref()),
        &overrides,
    )
    .context("invalid machine settings in config")?;
    let mut machine =
        CipherMachine::from_settings(&settings).context("invalid machine configuration")?;

    let from_args = !cli.text.is_empty();
    let input = if from_args {
        cli.text.join(" ")
    } else {
        read_stdin()?
    };

    let letters = input.chars().filter(char::is_ascii_alphabetic).count();
    tracing::info!(letters, from_args, "Processing message");
    let output = machine.process(&input);

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    if from_args {
        writeln!(stdout)?;
    }
    stdout.flush()?;

    if cli.show_positions {
        eprintln!("positions: {}", format_positions(machine.positions()));
    }

    Ok(())
}
