//! `aes-cli`: AES-256 file encryption in a chosen block-cipher mode.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use crate::cipher::{Mode, SymmetricCipher};
use crate::key::{Iv, SymmetricKey, raw};
use crate::processor;
use crate::types::Operation;
use crate::ui;

#[derive(Args, Debug)]
pub struct CipherArgs {
    /// Key file: 32 raw bytes or 64 hex characters.
    #[arg(value_name = "KEY_FILE")]
    key_file: PathBuf,

    /// IV file: 16 raw bytes or 32 hex characters.
    #[arg(value_name = "IV_FILE")]
    iv_file: PathBuf,

    #[arg(value_name = "INPUT_FILE")]
    input: PathBuf,

    #[arg(value_name = "OUTPUT_FILE")]
    output: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a random 256-bit key and 128-bit IV.
    Genkey {
        /// Also write the raw key to this file.
        #[arg(value_name = "KEY_FILE", requires = "iv_file")]
        key_file: Option<PathBuf>,

        /// Also write the raw IV to this file.
        #[arg(value_name = "IV_FILE")]
        iv_file: Option<PathBuf>,
    },

    /// Encrypt INPUT_FILE into OUTPUT_FILE.
    Encrypt(CipherArgs),

    /// Decrypt INPUT_FILE into OUTPUT_FILE.
    Decrypt(CipherArgs),
}

#[derive(Parser, Debug)]
#[command(name = "aes-cli", version, about = "Encrypt and decrypt files with AES-256.", after_help = format!("Supported modes: {}", Mode::names()))]
pub struct App {
    /// Block-cipher mode.
    #[arg(value_name = "MODE", value_parser = Mode::parse)]
    mode: Mode,

    #[command(subcommand)]
    command: Commands,
}

impl App {
    pub fn init() -> Result<Self, ExitCode> {
        crate::app::init_tracing();
        crate::app::parse()
    }

    pub fn execute(self) -> Result<()> {
        let cipher = SymmetricCipher::new(self.mode);
        match self.command {
            Commands::Genkey { key_file, iv_file } => Self::genkey(key_file.as_deref(), iv_file.as_deref()),
            Commands::Encrypt(args) => Self::run(&cipher, Operation::Encrypt, &args),
            Commands::Decrypt(args) => Self::run(&cipher, Operation::Decrypt, &args),
        }
    }

    fn genkey(key_file: Option<&Path>, iv_file: Option<&Path>) -> Result<()> {
        let key = SymmetricKey::generate().context("failed to generate key")?;
        let iv = Iv::generate().context("failed to generate iv")?;

        ui::show_key_material(key.expose_secret(), iv.as_bytes());

        if let (Some(key_file), Some(iv_file)) = (key_file, iv_file) {
            raw::write_key(key_file, &key)?;
            raw::write_iv(iv_file, &iv)?;
            ui::show_saved("Key", key_file);
            ui::show_saved("IV", iv_file);
        }

        Ok(())
    }

    fn run(cipher: &SymmetricCipher, operation: Operation, args: &CipherArgs) -> Result<()> {
        let key = raw::read_key(&args.key_file).with_context(|| format!("cannot load key from {}", args.key_file.display()))?;
        let iv = raw::read_iv(&args.iv_file).with_context(|| format!("cannot load iv from {}", args.iv_file.display()))?;

        let outcome = processor::process_symmetric(cipher, operation, &key, &iv, &args.input, &args.output)
            .with_context(|| format!("{} {} failed: {}", cipher.mode(), operation, args.input.display()))?;

        ui::show_success(operation, &args.input, &args.output, outcome.input_len, outcome.output_len);
        Ok(())
    }
}
