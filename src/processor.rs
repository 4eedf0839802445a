//! High-level file encryption and decryption operations.
//!
//! Each function reads the whole input, runs the cipher in memory and only
//! then writes the output, so a failure never leaves an output file behind.

use std::path::Path;

use rsa::{RsaPrivateKey, RsaPublicKey};
use tracing::info;

use crate::asymmetric;
use crate::cipher::SymmetricCipher;
use crate::error::Result;
use crate::file;
use crate::key::{Iv, RsaKeyPair, SymmetricKey, pem};
use crate::types::Operation;

/// Sizes of one completed run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub input_len: usize,
    pub output_len: usize,
}

/// Runs `cipher` over the file at `src_path` and writes the result to `dest_path`.
pub fn process_symmetric(cipher: &SymmetricCipher, operation: Operation, key: &SymmetricKey, iv: &Iv, src_path: &Path, dest_path: &Path) -> Result<Outcome> {
    let input = file::read(src_path)?;
    let output = match operation {
        Operation::Encrypt => cipher.encrypt(&input, key, iv)?,
        Operation::Decrypt => cipher.decrypt(&input, key, iv)?,
    };
    file::write(dest_path, &output)?;

    info!(mode = %cipher.mode(), %operation, src = %src_path.display(), dest = %dest_path.display(), "aes {operation} complete");
    Ok(Outcome { input_len: input.len(), output_len: output.len() })
}

/// Encrypts the file at `src_path` with an RSA public key.
pub fn encrypt_rsa(public_key: &RsaPublicKey, src_path: &Path, dest_path: &Path) -> Result<Outcome> {
    let input = file::read(src_path)?;
    let output = asymmetric::encrypt(public_key, &input)?;
    file::write(dest_path, &output)?;

    info!(src = %src_path.display(), dest = %dest_path.display(), "rsa encrypt complete");
    Ok(Outcome { input_len: input.len(), output_len: output.len() })
}

/// Decrypts the file at `src_path` with an RSA private key.
pub fn decrypt_rsa(private_key: &RsaPrivateKey, src_path: &Path, dest_path: &Path) -> Result<Outcome> {
    let input = file::read(src_path)?;
    let output = asymmetric::decrypt(private_key, &input)?;
    file::write(dest_path, &output)?;

    info!(src = %src_path.display(), dest = %dest_path.display(), "rsa decrypt complete");
    Ok(Outcome { input_len: input.len(), output_len: output.len() })
}

/// Generates an RSA key pair and writes both halves as PEM.
pub fn generate_rsa_files(bits: usize, public_path: &Path, private_path: &Path) -> Result<RsaKeyPair> {
    let pair = asymmetric::generate_keypair(bits)?;
    pem::write_public(public_path, pair.public_key())?;
    pem::write_private(private_path, pair.private_key())?;

    info!(bits, public = %public_path.display(), private = %private_path.display(), "rsa key pair written");
    Ok(pair)
}
