//! `rsa-cli`: RSA key generation and OAEP file encryption.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::key::pem;
use crate::processor;
use crate::types::Operation;
use crate::ui;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate an RSA key pair with public exponent 65537.
    Genkey {
        /// Modulus size in bits.
        bits: usize,

        #[arg(value_name = "PUBLIC_KEY_PEM")]
        public_key: PathBuf,

        #[arg(value_name = "PRIVATE_KEY_PEM")]
        private_key: PathBuf,
    },

    /// Encrypt a file with a public key.
    Encrypt {
        #[arg(value_name = "PUBLIC_KEY_PEM")]
        public_key: PathBuf,

        input: PathBuf,

        output: PathBuf,
    },

    /// Decrypt a file with a private key.
    Decrypt {
        #[arg(value_name = "PRIVATE_KEY_PEM")]
        private_key: PathBuf,

        input: PathBuf,

        output: PathBuf,
    },
}

#[derive(Parser, Debug)]
#[command(name = "rsa-cli", version, about = "Encrypt and decrypt small files with RSA-OAEP.")]
pub struct App {
    #[command(subcommand)]
    command: Commands,
}

impl App {
    pub fn init() -> Result<Self, ExitCode> {
        crate::app::init_tracing();
        crate::app::parse()
    }

    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Genkey { bits, public_key, private_key } => {
                processor::generate_rsa_files(bits, &public_key, &private_key).with_context(|| format!("failed to generate {bits}-bit rsa key pair"))?;
                ui::show_saved("Public key", &public_key);
                ui::show_saved("Private key", &private_key);
                Ok(())
            }
            Commands::Encrypt { public_key, input, output } => {
                let key = pem::read_public(&public_key).with_context(|| format!("cannot load public key from {}", public_key.display()))?;
                let outcome = processor::encrypt_rsa(&key, &input, &output).with_context(|| format!("encrypt failed: {}", input.display()))?;
                ui::show_success(Operation::Encrypt, &input, &output, outcome.input_len, outcome.output_len);
                Ok(())
            }
            Commands::Decrypt { private_key, input, output } => {
                let key = pem::read_private(&private_key).with_context(|| format!("cannot load private key from {}", private_key.display()))?;
                let outcome = processor::decrypt_rsa(&key, &input, &output).with_context(|| format!("decrypt failed: {}", input.display()))?;
                ui::show_success(Operation::Decrypt, &input, &output, outcome.input_len, outcome.output_len);
                Ok(())
            }
        }
    }
}
